//! Error types for playlist watch-time operations.

use thiserror::Error;

/// Main error type for all watch-time operations.
#[derive(Debug, Error)]
pub enum WatchTimeError {
    /// The API answered with a non-success status.
    #[error("failed to fetch {resource}: HTTP {status} ({reason})")]
    FetchFailed {
        /// What was being fetched, e.g. "playlist items".
        resource: &'static str,
        /// HTTP status code.
        status: u16,
        /// API error message, or the canonical status phrase.
        reason: String,
    },

    /// The details endpoint returned no item for this video.
    #[error("no video details found for ID {0}")]
    VideoNotFound(String),

    /// Playback speed is not a finite positive number.
    #[error("invalid playback speed: {0}")]
    InvalidSpeed(String),

    /// No API key was configured.
    #[error("missing API key: pass --api-key or set YOUTUBE_API_KEY")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Result type alias for watch-time operations.
pub type Result<T> = std::result::Result<T, WatchTimeError>;
