//! Video catalog command handler.

use anyhow::Result;
use serde_json::json;

use vista_core::NewVideo;

use crate::bootstrap::CliContext;
use crate::commands::VideoCommand;
use crate::presentation::{display_video, display_video_table, print_json};

/// Execute a video subcommand.
pub async fn execute(ctx: &CliContext, command: VideoCommand) -> Result<()> {
    match command {
        VideoCommand::Add {
            title,
            duration,
            url,
        } => add(ctx, NewVideo::new(title, duration, url.unwrap_or_default())).await,
        VideoCommand::List => list(ctx).await,
        VideoCommand::Show { id } => show(ctx, id).await,
    }
}

async fn add(ctx: &CliContext, video: NewVideo) -> Result<()> {
    let created = ctx.app().videos().add(video).await?;
    if ctx.json {
        return print_json(&json!(created));
    }
    println!("✓ Added video {} (ID: {})", created.title, created.id);
    Ok(())
}

async fn list(ctx: &CliContext) -> Result<()> {
    let videos = ctx.app().videos().list().await?;
    if ctx.json {
        return print_json(&json!(videos));
    }
    if videos.is_empty() {
        println!("No videos found.");
        println!("Use 'vista video add --title <title> --duration <secs>' to add one.");
        return Ok(());
    }
    display_video_table(&videos);
    Ok(())
}

async fn show(ctx: &CliContext, id: i64) -> Result<()> {
    let video = ctx.app().videos().require(id).await?;
    if ctx.json {
        return print_json(&json!(video));
    }
    display_video(&video);
    Ok(())
}
