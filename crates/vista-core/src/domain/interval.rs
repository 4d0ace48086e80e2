//! Watched time ranges.

use serde::{Deserialize, Serialize};

/// A span of video-relative playback time, in seconds.
///
/// `TimeRange` is a plain value: merging and clamping always build new
/// ranges rather than mutating stored ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start_time: f64,
    pub end_time: f64,
}

impl TimeRange {
    pub const fn new(start_time: f64, end_time: f64) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Width of the range, never negative.
    pub fn duration(&self) -> f64 {
        (self.end_time - self.start_time).max(0.0)
    }

    /// A range is valid when it has positive width. NaN bounds are invalid.
    pub fn is_valid(&self) -> bool {
        self.start_time < self.end_time
    }

    /// Both bounds are finite numbers.
    pub const fn is_finite(&self) -> bool {
        self.start_time.is_finite() && self.end_time.is_finite()
    }
}

/// A stored watched interval for a (user, video) pair.
///
/// Created on ingestion and only ever mutated by extending `end_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchedInterval {
    pub id: i64,
    pub user_id: i64,
    pub video_id: i64,
    pub start_time: f64,
    pub end_time: f64,
}

impl WatchedInterval {
    pub const fn range(&self) -> TimeRange {
        TimeRange::new(self.start_time, self.end_time)
    }
}
