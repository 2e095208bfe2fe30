//! Response pages returned by the YouTube Data API.
//!
//! Only the fields this crate reads are modelled; everything else in the
//! response is ignored during deserialization.

use serde::Deserialize;

use super::ids::VideoId;

/// One page of `playlistItems` results.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemsPage {
    /// Items on this page, in playlist order.
    #[serde(default)]
    pub items: Vec<PlaylistItem>,

    /// Continuation token for the next page.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl PlaylistItemsPage {
    /// Continuation token, treating an empty string as absent.
    pub fn next_token(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Video ids on this page, in order.
    pub fn video_ids(&self) -> impl Iterator<Item = &VideoId> {
        self.items.iter().map(|item| &item.content_details.video_id)
    }
}

/// A single playlist entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    /// Details naming the referenced video.
    pub content_details: PlaylistItemDetails,
}

/// Content details of a playlist entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemDetails {
    /// Id of the video at this position.
    pub video_id: VideoId,
}

/// Response of the `videos` endpoint.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct VideoListResponse {
    /// Matching videos; empty when the id is unknown.
    #[serde(default)]
    pub items: Vec<Video>,
}

impl VideoListResponse {
    /// Encoded duration of the first returned video.
    pub fn first_duration(&self) -> Option<&str> {
        self.items
            .first()
            .map(|video| video.content_details.duration.as_str())
    }
}

/// A video record with its content details.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Content details carrying the duration.
    pub content_details: VideoContentDetails,
}

/// Content details of a video.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VideoContentDetails {
    /// ISO-8601 duration, e.g. "PT1H2M3S".
    pub duration: String,
}
