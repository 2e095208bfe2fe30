//! YouTube Data API client.
//!
//! Requests are issued one at a time; pagination awaits each page before
//! asking for the next.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::Config;
use crate::duration::parse_iso8601_duration;
use crate::error::{Result, WatchTimeError};
use crate::models::{PlaylistId, PlaylistItemsPage, VideoId, VideoListResponse};

/// YouTube Data API client.
///
/// # Example
///
/// ```rust,no_run
/// use playlist_watchtime::{Config, PlaylistId, YouTubeApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = YouTubeApi::new(&Config::new("your_api_key"))?;
///     let ids = api.list_playlist_items(&PlaylistId::new("PL1234")).await?;
///     println!("{} videos", ids.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct YouTubeApi {
    client: Client,
    api_key: String,
    base_url: String,
    page_size: u32,
}

impl YouTubeApi {
    /// Create a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` if the config has no API key.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key()
            .ok_or(WatchTimeError::MissingApiKey)?
            .to_string();

        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
            page_size: config.page_size,
        })
    }

    /// Make a GET request with query parameters and decode the JSON body.
    ///
    /// `resource` names what is being fetched in the error message.
    async fn get_api_with_params<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        resource: &'static str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} with params: {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let reason = api_error_message(&text).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string()
            });
            debug!("{} request failed with {}: {}", resource, status, reason);
            return Err(WatchTimeError::FetchFailed {
                resource,
                status: status.as_u16(),
                reason,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// List every video id in a playlist, in playlist order.
    ///
    /// Follows `nextPageToken` until a page carries none. Any failed page
    /// fails the whole listing.
    pub async fn list_playlist_items(&self, playlist_id: &PlaylistId) -> Result<Vec<VideoId>> {
        let page_size = self.page_size.to_string();
        let mut video_ids = Vec::new();
        let mut page_token = String::new();
        let mut pages = 0usize;

        loop {
            let page: PlaylistItemsPage = self
                .get_api_with_params(
                    "playlistItems",
                    "playlist items",
                    &[
                        ("part", "contentDetails"),
                        ("playlistId", playlist_id.as_str()),
                        ("maxResults", &page_size),
                        ("pageToken", &page_token),
                    ],
                )
                .await?;
            pages += 1;

            video_ids.extend(page.video_ids().cloned());

            match page.next_token() {
                Some(token) => page_token = token.to_string(),
                None => break,
            }
        }

        info!(
            "Listed {} videos in playlist {} ({} pages)",
            video_ids.len(),
            playlist_id,
            pages
        );
        Ok(video_ids)
    }

    /// Get the encoded ISO-8601 duration of a video.
    ///
    /// # Errors
    ///
    /// Returns `FetchFailed` on a non-success status and `VideoNotFound`
    /// when the API knows no such video.
    pub async fn get_video_duration_raw(&self, video_id: &VideoId) -> Result<String> {
        let response: VideoListResponse = self
            .get_api_with_params(
                "videos",
                "video details",
                &[("part", "contentDetails"), ("id", video_id.as_str())],
            )
            .await?;

        response
            .first_duration()
            .map(str::to_string)
            .ok_or_else(|| WatchTimeError::VideoNotFound(video_id.to_string()))
    }

    /// Get the duration of a video.
    pub async fn get_video_duration(&self, video_id: &VideoId) -> Result<Duration> {
        let encoded = self.get_video_duration_raw(video_id).await?;
        Ok(parse_iso8601_duration(&encoded))
    }
}

/// Extract `error.message` from an API error body.
fn api_error_message(body: &str) -> Option<String> {
    let data: Value = serde_json::from_str(body).ok()?;
    data.get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}
