//! Progress records and reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::interval::TimeRange;

/// Persisted progress summary for a (user, video) pair.
///
/// `unique_seconds_watched` is recomputable from the stored intervals;
/// `last_position` carries resume-point state that is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProgress {
    pub user_id: i64,
    pub video_id: i64,
    pub unique_seconds_watched: f64,
    pub last_position: f64,
    pub updated_at: DateTime<Utc>,
}

/// Progress values returned to callers after an ingestion or lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub unique_seconds_watched: f64,
    pub progress_percentage: u32,
    pub last_position: f64,
}

impl ProgressReport {
    /// Report for a user who has never watched the video.
    pub const fn empty() -> Self {
        Self {
            unique_seconds_watched: 0.0,
            progress_percentage: 0,
            last_position: 0.0,
        }
    }
}

/// A playback interval reported by a client.
///
/// Pause, seek, periodic tick and end-of-video events all arrive as one of
/// these. `is_completion` marks a caller-synthesized completion signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchReport {
    pub user_id: i64,
    pub video_id: i64,
    pub start_time: f64,
    pub end_time: f64,
    #[serde(default)]
    pub is_completion: bool,
}

impl WatchReport {
    pub const fn new(user_id: i64, video_id: i64, start_time: f64, end_time: f64) -> Self {
        Self {
            user_id,
            video_id,
            start_time,
            end_time,
            is_completion: false,
        }
    }

    /// Completion marker covering the whole video, as players send on "ended".
    pub const fn completion_marker(user_id: i64, video_id: i64, duration_seconds: f64) -> Self {
        Self {
            user_id,
            video_id,
            start_time: 0.0,
            end_time: duration_seconds,
            is_completion: true,
        }
    }

    #[must_use]
    pub const fn as_completion(mut self) -> Self {
        self.is_completion = true;
        self
    }

    pub const fn range(&self) -> TimeRange {
        TimeRange::new(self.start_time, self.end_time)
    }
}
