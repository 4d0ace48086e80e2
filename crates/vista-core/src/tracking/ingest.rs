//! Ingestion policy: clamping, skip detection and the extend-vs-insert decision.

use crate::domain::{TimeRange, WatchedInterval};
use crate::settings::TrackingSettings;

/// What to do with the stored interval set for a report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IngestAction {
    /// Continue the last stored interval: same start, later end.
    Extend { interval_id: i64, range: TimeRange },
    /// Store a new interval.
    Insert(TimeRange),
    /// Clamping left nothing to store (the report lies past the video's end).
    Discard,
}

/// Outcome of applying the ingestion policy to a single report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngestPlan {
    /// End time as reported, before clamping to the video duration.
    pub original_end: f64,
    /// Range after clamping and skip detection.
    pub effective: TimeRange,
    /// The reported span was too long to be continuous viewing.
    pub skip_detected: bool,
    pub action: IngestAction,
}

/// Apply clamps and skip detection to `reported`, then decide whether it
/// extends `last_stored` or becomes a new interval.
///
/// `reported` must already be validated as finite with `start < end`.
/// `last_stored` is the final interval of the stored set ordered by start time.
pub fn plan_ingest(
    settings: &TrackingSettings,
    video_duration: f64,
    reported: TimeRange,
    last_stored: Option<&WatchedInterval>,
) -> IngestPlan {
    let original_end = reported.end_time;

    let end = reported.end_time.min(video_duration);
    let mut start = reported.start_time.max(0.0);

    let skip_detected = end - start > settings.skip_threshold_secs;
    if skip_detected {
        start = start.max(end - settings.skip_credit_secs);
    }

    let effective = TimeRange::new(start, end);

    let action = if !effective.is_valid() {
        IngestAction::Discard
    } else {
        match last_stored {
            Some(last)
                if (start - last.start_time).abs() < settings.extension_tolerance_secs
                    && end > last.end_time =>
            {
                IngestAction::Extend {
                    interval_id: last.id,
                    range: TimeRange::new(last.start_time, end),
                }
            }
            _ => IngestAction::Insert(effective),
        }
    };

    IngestPlan {
        original_end,
        effective,
        skip_detected,
        action,
    }
}
