//! Playlist watch-time driver.
//!
//! Ties the pieces together: link parsing, listing, per-video duration
//! lookups and the final report. Listing failures end the run; failures on
//! individual videos are reported and skipped.

use std::io::{self, Write};
use std::time::Duration;

use tracing::{info, warn};

use crate::api::YouTubeApi;
use crate::config::Config;
use crate::duration::{format_at_speed, format_duration, PlaybackSpeed};
use crate::error::{Result, WatchTimeError};
use crate::link::extract_playlist_id;
use crate::models::{PlaylistId, VideoId};

/// Usage line printed when no playlist URL is given.
pub const USAGE: &str = "usage: watchtime <playlist_url>";

/// A video whose duration could not be retrieved.
#[derive(Debug)]
pub struct ItemFailure {
    /// The skipped video.
    pub video_id: VideoId,
    /// Why its duration could not be retrieved.
    pub error: WatchTimeError,
}

/// Accumulated durations for one playlist.
#[derive(Debug, Default)]
pub struct Tally {
    /// Sum of all retrieved durations.
    pub total: Duration,
    /// Number of videos that contributed to the total.
    pub counted: usize,
    /// Videos that were skipped, in playlist order.
    pub failed: Vec<ItemFailure>,
}

impl Tally {
    /// Add a retrieved duration.
    pub fn add(&mut self, duration: Duration) {
        self.total = self.total.saturating_add(duration);
        self.counted += 1;
    }

    /// Record a skipped video.
    pub fn skip(&mut self, video_id: VideoId, error: WatchTimeError) -> &ItemFailure {
        self.failed.push(ItemFailure { video_id, error });
        &self.failed[self.failed.len() - 1]
    }

    /// Total number of videos attempted.
    pub fn attempted(&self) -> usize {
        self.counted + self.failed.len()
    }

    /// Check if every video was counted.
    pub fn all_counted(&self) -> bool {
        self.failed.is_empty()
    }
}

/// High-level watch-time interface.
///
/// # Example
///
/// ```rust,no_run
/// use playlist_watchtime::{Config, PlaylistId, WatchTime};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let wt = WatchTime::new(&Config::new("your_api_key"))?;
///     let tally = wt.tally_playlist(&PlaylistId::new("PL1234")).await?;
///     println!("{} videos, {:?}", tally.counted, tally.total);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct WatchTime {
    api: YouTubeApi,
    speeds: Vec<PlaybackSpeed>,
}

impl WatchTime {
    /// Create a new instance from a config.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` if no API key is configured.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            api: YouTubeApi::new(config)?,
            speeds: config.speeds.clone(),
        })
    }

    /// Get the underlying API client.
    pub fn api(&self) -> &YouTubeApi {
        &self.api
    }

    /// Speeds used by [`WatchTime::speed_lines`].
    pub fn speeds(&self) -> &[PlaybackSpeed] {
        &self.speeds
    }

    /// List every video in the playlist.
    pub async fn playlist_video_ids(&self, playlist_id: &PlaylistId) -> Result<Vec<VideoId>> {
        self.api.list_playlist_items(playlist_id).await
    }

    /// Sum the durations of the given videos, one request at a time.
    ///
    /// `on_skip` is called for each video that had to be skipped, as soon
    /// as it fails.
    pub async fn tally<F>(&self, video_ids: &[VideoId], mut on_skip: F) -> Tally
    where
        F: FnMut(&ItemFailure),
    {
        let mut tally = Tally::default();

        for video_id in video_ids {
            match self.api.get_video_duration(video_id).await {
                Ok(duration) => tally.add(duration),
                Err(e) => {
                    warn!("Skipping video {}: {}", video_id, e);
                    on_skip(tally.skip(video_id.clone(), e));
                }
            }
        }

        info!(
            "Counted {}/{} videos, total {}s",
            tally.counted,
            tally.attempted(),
            tally.total.as_secs()
        );
        tally
    }

    /// List a playlist and tally it.
    ///
    /// Fails only if the listing fails; skipped videos are in the result.
    pub async fn tally_playlist(&self, playlist_id: &PlaylistId) -> Result<Tally> {
        let video_ids = self.playlist_video_ids(playlist_id).await?;
        Ok(self.tally(&video_ids, |_| {}).await)
    }

    /// One `At <speed>x: ...` line per configured speed.
    pub fn speed_lines(&self, total: Duration) -> Vec<String> {
        self.speeds
            .iter()
            .map(|&speed| format_at_speed(total, speed))
            .collect()
    }
}

/// Run the whole program against the given output streams.
///
/// Report lines go to `out`, error lines to `err`. Every handled failure
/// ends in a printed message and `Ok(())`; only I/O errors on the streams
/// are returned.
pub async fn run<O, E>(
    config: &Config,
    playlist_url: Option<&str>,
    out: &mut O,
    err: &mut E,
) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    let Some(playlist_url) = playlist_url else {
        writeln!(out, "{}", USAGE)?;
        return Ok(());
    };

    let Some(playlist_id) = extract_playlist_id(playlist_url) else {
        writeln!(err, "invalid playlist URL.")?;
        return Ok(());
    };

    let watchtime = match WatchTime::new(config) {
        Ok(wt) => wt,
        Err(e) => {
            writeln!(err, "Error: {}", e)?;
            return Ok(());
        }
    };

    writeln!(out, "\nfetching playlist: {}...\n", playlist_id)?;

    let video_ids = match watchtime.playlist_video_ids(&playlist_id).await {
        Ok(ids) => ids,
        Err(e) => {
            writeln!(err, "Error: {}", e)?;
            return Ok(());
        }
    };

    let mut write_result = Ok(());
    let tally = watchtime
        .tally(&video_ids, |failure| {
            if write_result.is_ok() {
                write_result = writeln!(
                    err,
                    "error fetching duration for {}: {}",
                    failure.video_id, failure.error
                );
            }
        })
        .await;
    write_result?;

    writeln!(out)?;
    writeln!(out, "total duration: {}", format_duration(tally.total))?;
    if !tally.all_counted() {
        writeln!(
            out,
            "skipped {} of {} videos",
            tally.failed.len(),
            tally.attempted()
        )?;
    }
    writeln!(out)?;

    for line in watchtime.speed_lines(tally.total) {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}
