//! Intervals command handler.

use anyhow::Result;
use serde_json::json;

use vista_core::unique_seconds;

use crate::bootstrap::CliContext;
use crate::presentation::{display_intervals, print_json};

/// Execute the intervals command.
pub async fn execute(ctx: &CliContext, user_id: i64, video_id: i64) -> Result<()> {
    let progress = ctx.app().progress();
    let stored = progress.stored_intervals(user_id, video_id).await?;
    let merged = progress.merged_intervals(user_id, video_id).await?;

    if ctx.json {
        return print_json(&json!({
            "stored": stored,
            "merged": merged,
            "uniqueSecondsWatched": unique_seconds(&merged),
        }));
    }

    display_intervals(&stored, &merged);
    if !merged.is_empty() {
        println!("Unique watched: {:.2}s", unique_seconds(&merged));
    }
    Ok(())
}
