//! # Playlist Watchtime
//!
//! A Rust library for computing how long it takes to watch a YouTube playlist.
//!
//! ## Quick Start
//!
//! The easiest way to use this library is through the [`WatchTime`] struct:
//!
//! ```rust,no_run
//! use playlist_watchtime::{extract_playlist_id, format_duration, Config, WatchTime};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new("your_api_key");
//!     let wt = WatchTime::new(&config)?;
//!
//!     let url = "https://www.youtube.com/playlist?list=PL1234";
//!     let playlist_id = extract_playlist_id(url).ok_or("invalid playlist URL")?;
//!
//!     let tally = wt.tally_playlist(&playlist_id).await?;
//!     println!("total duration: {}", format_duration(tally.total));
//!     for line in wt.speed_lines(tally.total) {
//!         println!("{}", line);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Low-Level APIs
//!
//! - [`YouTubeApi`] - `playlistItems` and `videos` endpoints
//! - [`duration`] - ISO-8601 parsing and `1h 2m 3s` formatting
//! - [`link`] - playlist id extraction

pub mod api;
pub mod config;
pub mod duration;
pub mod error;
pub mod link;
pub mod models;
mod watchtime;

#[cfg(test)]
mod testing;

// Main interface (recommended)
pub use watchtime::{run, ItemFailure, Tally, WatchTime, USAGE};

// Low-level APIs
pub use api::YouTubeApi;
pub use config::Config;
pub use duration::{format_at_speed, format_duration, parse_iso8601_duration, PlaybackSpeed};
pub use error::WatchTimeError;
pub use link::extract_playlist_id;
pub use models::{PlaylistId, VideoId};
