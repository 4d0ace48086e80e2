//! Progress derivation: capped percentage and resume position.

use crate::domain::{ProgressReport, VideoProgress};
use crate::settings::TrackingSettings;

/// Resume points closer than this to the end restart a little earlier.
const RESUME_END_GUARD_SECS: f64 = 5.0;

/// How far before the end playback restarts when the resume point is too close to it.
const RESUME_REWIND_SECS: f64 = 10.0;

/// Completion percentage for `unique_seconds` of a video lasting `duration` seconds.
///
/// Rounds to the nearest whole percent. A rounded 100 is only reported when
/// coverage reaches `completion_ratio` of the duration or the caller sent an
/// explicit completion marker; otherwise it is capped at `capped_percentage`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_percentage(
    unique_seconds: f64,
    duration: f64,
    is_completion: bool,
    settings: &TrackingSettings,
) -> u32 {
    if duration <= 0.0 || !unique_seconds.is_finite() {
        return 0;
    }

    let raw = (unique_seconds / duration * 100.0).round().max(0.0);
    if raw >= 100.0 && !is_completion && unique_seconds < duration * settings.completion_ratio {
        return settings.capped_percentage;
    }

    raw as u32
}

/// Position playback should resume from after this report.
///
/// Completion markers are usually synthesized as `[0, duration]`, so they
/// keep the existing resume point, or fall back to `default_resume_secs`
/// when there is none. Normal reports resume at the reported end, before
/// clamping to the video duration.
pub fn resume_position(
    is_completion: bool,
    original_end: f64,
    existing: Option<&VideoProgress>,
    settings: &TrackingSettings,
) -> f64 {
    if is_completion {
        existing.map_or(settings.default_resume_secs, |progress| progress.last_position)
    } else {
        original_end
    }
}

/// Derive the full progress report for a freshly merged interval set.
pub fn derive_progress(
    unique_seconds: f64,
    duration: f64,
    is_completion: bool,
    original_end: f64,
    existing: Option<&VideoProgress>,
    settings: &TrackingSettings,
) -> ProgressReport {
    ProgressReport {
        unique_seconds_watched: unique_seconds,
        progress_percentage: progress_percentage(unique_seconds, duration, is_completion, settings),
        last_position: resume_position(is_completion, original_end, existing, settings),
    }
}

/// Where a player should actually start for a stored resume point.
///
/// Starting within a few seconds of the end would immediately finish the
/// video again, so such positions rewind to ten seconds before the end.
pub fn playback_start(last_position: f64, duration: f64) -> f64 {
    if duration - last_position < RESUME_END_GUARD_SECS {
        (duration - RESUME_REWIND_SECS).max(0.0)
    } else {
        last_position.max(0.0)
    }
}

/// Whether `position` falls inside the near-end window of the video.
///
/// Players use this to synthesize a completion marker when playback gets
/// close enough to the end.
pub fn is_near_end(position: f64, duration: f64, settings: &TrackingSettings) -> bool {
    duration > 0.0 && duration - position <= duration * settings.near_end_ratio
}
