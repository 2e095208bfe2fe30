//! API client for the YouTube Data API v3.
//!
//! [`YouTubeApi`] covers the two endpoints needed to time a playlist:
//! `playlistItems` for the ordered list of videos and `videos` for each
//! video's duration.

pub mod youtube;

pub use youtube::YouTubeApi;
