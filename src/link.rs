//! Playlist link parsing.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::PlaylistId;

static LIST_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]list=([a-zA-Z0-9_-]+)").expect("valid list regex"));

/// Extract the playlist id from the `list` query parameter of a URL.
///
/// Returns `None` when the input carries no usable `list` parameter.
/// Malformed input is not an error.
pub fn extract_playlist_id(url: &str) -> Option<PlaylistId> {
    LIST_PARAM
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| PlaylistId::new(m.as_str()))
}
