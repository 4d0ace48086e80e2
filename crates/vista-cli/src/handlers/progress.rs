//! Progress command handler.

use anyhow::Result;
use serde_json::json;

use vista_core::playback_start;

use crate::bootstrap::CliContext;
use crate::handlers::watch::reported;
use crate::presentation::{display_progress, print_json};

/// Execute the progress command.
///
/// Shows the stored progress and where a player would resume, which is
/// rewound when the stored position sits at the very end of the video.
pub async fn execute(ctx: &CliContext, user_id: i64, video_id: i64) -> Result<()> {
    let report = reported(ctx.app().progress().get_progress(user_id, video_id).await?)?;
    let resume_at = ctx
        .app()
        .videos()
        .get(video_id)
        .await?
        .map(|video| playback_start(report.last_position, video.duration_seconds));

    if ctx.json {
        return print_json(&json!({
            "success": true,
            "uniqueSecondsWatched": report.unique_seconds_watched,
            "progressPercentage": report.progress_percentage,
            "lastPosition": report.last_position,
            "resumeAt": resume_at,
        }));
    }

    display_progress(&report, resume_at);
    Ok(())
}
