//! Watch command handler.
//!
//! Mirrors what a player sends: the interval itself, and when playback
//! stopped near the end of the video, a completion marker covering the
//! whole video.

use anyhow::Result;
use serde_json::json;

use vista_core::{ProgressOutcome, ProgressReport, TrackingSettings, Video, WatchReport, is_near_end};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{display_progress, print_json};

/// Execute the watch command.
pub async fn execute(ctx: &CliContext, report: WatchReport) -> Result<()> {
    let progress = ctx.app().progress();
    let mut outcome = progress.ingest(report).await?;
    let mut marker_sent = false;

    if outcome.is_success() {
        if let Some(video) = ctx.app().videos().get(report.video_id).await? {
            if let Some(marker) = completion_follow_up(&report, &video, progress.settings()) {
                tracing::debug!(video_id = video.id, "Near the end, sending completion marker");
                outcome = progress.ingest(marker).await?;
                marker_sent = true;
            }
        }
    }

    let report = reported(outcome)?;
    if ctx.json {
        return print_json(&json!({
            "success": true,
            "uniqueSecondsWatched": report.unique_seconds_watched,
            "progressPercentage": report.progress_percentage,
            "lastPosition": report.last_position,
            "completionMarkerSent": marker_sent,
        }));
    }

    display_progress(&report, None);
    if marker_sent {
        println!("(completion marker sent)");
    }
    Ok(())
}

/// Completion marker to send after `report`, if playback ended near the end.
pub fn completion_follow_up(
    report: &WatchReport,
    video: &Video,
    settings: &TrackingSettings,
) -> Option<WatchReport> {
    (!report.is_completion && is_near_end(report.end_time, video.duration_seconds, settings))
        .then(|| WatchReport::completion_marker(report.user_id, video.id, video.duration_seconds))
}

/// Unwrap a reported outcome or turn a rejection into a CLI error.
pub(crate) fn reported(outcome: ProgressOutcome) -> Result<ProgressReport> {
    match outcome {
        ProgressOutcome::Reported(report) => Ok(report),
        ProgressOutcome::Rejected(rejection) => Err(CliError::Rejected(rejection.to_string()).into()),
    }
}
