//! Duration parsing and formatting.
//!
//! The API encodes video lengths as ISO-8601 durations (`PT1H2M3S`).
//! This module turns them into [`Duration`] values and renders totals
//! as compact `3d 2h 5m 9s` strings, optionally scaled by a playback speed.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::error::{Result, WatchTimeError};

static ISO8601_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("valid duration regex")
});

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Speeds reported when none are configured.
pub const DEFAULT_SPEEDS: [f64; 4] = [1.25, 1.5, 1.75, 2.0];

/// Parse an ISO-8601 `PT#H#M#S` duration.
///
/// Never fails: input that does not start with the expected pattern
/// yields [`Duration::ZERO`], and absent components count as zero.
pub fn parse_iso8601_duration(encoded: &str) -> Duration {
    let Some(caps) = ISO8601_DURATION.captures(encoded) else {
        return Duration::ZERO;
    };

    let component = |idx: usize| -> u64 {
        caps.get(idx)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    let secs = component(1)
        .saturating_mul(SECS_PER_HOUR)
        .saturating_add(component(2).saturating_mul(SECS_PER_MINUTE))
        .saturating_add(component(3));

    Duration::from_secs(secs)
}

/// Format a duration as `Nd Nh Nm Ns`.
///
/// Seconds are always present. A unit is shown when it or any larger
/// unit is nonzero, so `45s`, `1m 0s` and `1d 0h 0m 0s` are all valid.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let days = total / SECS_PER_DAY;
    let hours = (total % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (total % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total % SECS_PER_MINUTE;

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 || days > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 || hours > 0 || days > 0 {
        parts.push(format!("{}m", minutes));
    }
    parts.push(format!("{}s", seconds));

    parts.join(" ")
}

/// A playback speed multiplier.
///
/// Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSpeed(f64);

impl PlaybackSpeed {
    /// Create a playback speed, rejecting zero, negative and non-finite values.
    pub fn new(multiplier: f64) -> Result<Self> {
        if multiplier.is_finite() && multiplier > 0.0 {
            Ok(Self(multiplier))
        } else {
            Err(WatchTimeError::InvalidSpeed(multiplier.to_string()))
        }
    }

    /// Get the raw multiplier.
    pub fn multiplier(&self) -> f64 {
        self.0
    }

    /// The speeds reported by default: 1.25x, 1.5x, 1.75x and 2x.
    pub fn defaults() -> Vec<Self> {
        DEFAULT_SPEEDS.iter().map(|&s| Self(s)).collect()
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}x", self.0)
    }
}

impl FromStr for PlaybackSpeed {
    type Err = WatchTimeError;

    fn from_str(s: &str) -> Result<Self> {
        let multiplier = s
            .trim()
            .trim_end_matches(['x', 'X'])
            .parse::<f64>()
            .map_err(|_| WatchTimeError::InvalidSpeed(s.to_string()))?;
        Self::new(multiplier)
    }
}

/// Wall-clock time needed to watch `duration` of content at `speed`.
///
/// Truncated to whole seconds.
pub fn adjusted_duration(duration: Duration, speed: PlaybackSpeed) -> Duration {
    let secs = duration.as_secs() as f64 / speed.multiplier();
    Duration::from_secs(secs as u64)
}

/// Render the adjusted duration as `At 1.25x: 48m 0s`.
pub fn format_at_speed(duration: Duration, speed: PlaybackSpeed) -> String {
    format!(
        "At {}: {}",
        speed,
        format_duration(adjusted_duration(duration, speed))
    )
}
