//! Data models for YouTube Data API responses.
//!
//! This module contains the identifier types passed between components
//! and the response pages deserialized from the API.

pub mod ids;
pub mod page;

// Re-exports for convenience
pub use ids::{PlaylistId, VideoId};
pub use page::{PlaylistItemsPage, VideoListResponse};
