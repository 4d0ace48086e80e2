//! Tracking events emitted by the ingestion flow.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "skip_detected", "userId": 1, "videoId": 2, "reportedStart": 5.0, ... }
//! ```

mod stats;

use serde::{Deserialize, Serialize};

pub use stats::{StatsSnapshot, TrackingStats};

/// Everything observable about a single ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrackingEvent {
    /// A new interval was stored.
    IntervalInserted {
        #[serde(rename = "userId")]
        user_id: i64,
        #[serde(rename = "videoId")]
        video_id: i64,
        #[serde(rename = "intervalId")]
        interval_id: i64,
        #[serde(rename = "startTime")]
        start_time: f64,
        #[serde(rename = "endTime")]
        end_time: f64,
    },

    /// The last stored interval was extended to a later end.
    IntervalExtended {
        #[serde(rename = "userId")]
        user_id: i64,
        #[serde(rename = "videoId")]
        video_id: i64,
        #[serde(rename = "intervalId")]
        interval_id: i64,
        #[serde(rename = "startTime")]
        start_time: f64,
        #[serde(rename = "endTime")]
        end_time: f64,
    },

    /// Clamping left an empty range, so nothing was stored.
    IntervalDiscarded {
        #[serde(rename = "userId")]
        user_id: i64,
        #[serde(rename = "videoId")]
        video_id: i64,
        #[serde(rename = "reportedStart")]
        reported_start: f64,
        #[serde(rename = "reportedEnd")]
        reported_end: f64,
    },

    /// A report spanned more than the skip threshold and was reduced to its tail.
    SkipDetected {
        #[serde(rename = "userId")]
        user_id: i64,
        #[serde(rename = "videoId")]
        video_id: i64,
        #[serde(rename = "reportedStart")]
        reported_start: f64,
        #[serde(rename = "reportedEnd")]
        reported_end: f64,
        #[serde(rename = "creditedStart")]
        credited_start: f64,
    },

    /// A completion marker was ingested.
    CompletionMarker {
        #[serde(rename = "userId")]
        user_id: i64,
        #[serde(rename = "videoId")]
        video_id: i64,
    },

    /// The progress summary was recomputed and stored.
    ProgressUpdated {
        #[serde(rename = "userId")]
        user_id: i64,
        #[serde(rename = "videoId")]
        video_id: i64,
        #[serde(rename = "uniqueSecondsWatched")]
        unique_seconds_watched: f64,
        #[serde(rename = "progressPercentage")]
        progress_percentage: u32,
        #[serde(rename = "lastPosition")]
        last_position: f64,
    },
}

impl TrackingEvent {
    /// Event name for log lines and wire protocols.
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::IntervalInserted { .. } => "interval:inserted",
            Self::IntervalExtended { .. } => "interval:extended",
            Self::IntervalDiscarded { .. } => "interval:discarded",
            Self::SkipDetected { .. } => "tracking:skip_detected",
            Self::CompletionMarker { .. } => "tracking:completion_marker",
            Self::ProgressUpdated { .. } => "progress:updated",
        }
    }

    /// The (user, video) pair this event concerns.
    pub const fn key(&self) -> (i64, i64) {
        match *self {
            Self::IntervalInserted {
                user_id, video_id, ..
            }
            | Self::IntervalExtended {
                user_id, video_id, ..
            }
            | Self::IntervalDiscarded {
                user_id, video_id, ..
            }
            | Self::SkipDetected {
                user_id, video_id, ..
            }
            | Self::CompletionMarker { user_id, video_id }
            | Self::ProgressUpdated {
                user_id, video_id, ..
            } => (user_id, video_id),
        }
    }
}
