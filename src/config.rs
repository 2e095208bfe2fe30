//! Runtime configuration.
//!
//! Everything the API client and the report need is carried explicitly in a
//! [`Config`] value; nothing is read from process-wide state.

use crate::duration::PlaybackSpeed;

/// Base URL of the YouTube Data API v3.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Largest page size accepted by the `playlistItems` endpoint.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Settings for one watch-time run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// API credential sent as the `key` query parameter.
    pub api_key: Option<String>,
    /// API base URL, without trailing slash.
    pub base_url: String,
    /// Items requested per `playlistItems` page (1..=50).
    pub page_size: u32,
    /// Speeds reported after the total, in order.
    pub speeds: Vec<PlaybackSpeed>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: MAX_PAGE_SIZE,
            speeds: PlaybackSpeed::defaults(),
        }
    }
}

impl Config {
    /// Create a config with the given API key and default settings.
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Set the API key. Blank keys are treated as missing.
    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        let key = api_key.into();
        self.api_key = (!key.trim().is_empty()).then_some(key);
        self
    }

    /// Point the client at another API host.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the page size, clamped to 1..=50.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Replace the reported speeds. An empty list keeps the defaults.
    pub fn with_speeds(mut self, speeds: Vec<PlaybackSpeed>) -> Self {
        if !speeds.is_empty() {
            self.speeds = speeds;
        }
        self
    }

    /// Get the API key, if one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}
