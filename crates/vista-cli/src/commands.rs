//! Main commands enum and subcommands.
//!
//! This module defines the available commands for the CLI tool.

use clap::{Args, Subcommand};

use vista_core::SettingsUpdate;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show resolved paths for the data root, database and .env file
    Paths,

    /// Manage the video catalog
    Video {
        #[command(subcommand)]
        command: VideoCommand,
    },

    /// Record a watched interval, as a player would on pause, seek or tick
    Watch {
        /// User who watched
        #[arg(long)]
        user: i64,
        /// Video that was watched
        #[arg(long)]
        video: i64,
        /// Start of the interval in seconds
        #[arg(long, allow_negative_numbers = true)]
        start: f64,
        /// End of the interval in seconds
        #[arg(long, allow_negative_numbers = true)]
        end: f64,
        /// Send this report as a completion marker
        #[arg(long)]
        complete: bool,
    },

    /// Show progress and resume point for a user and video
    Progress {
        #[arg(long)]
        user: i64,
        #[arg(long)]
        video: i64,
    },

    /// Show stored and merged intervals for a user and video
    Intervals {
        #[arg(long)]
        user: i64,
        #[arg(long)]
        video: i64,
    },

    /// View or change tracking thresholds
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Video catalog commands.
#[derive(Subcommand)]
pub enum VideoCommand {
    /// Register a video
    Add {
        /// Video title
        #[arg(long)]
        title: String,
        /// Duration in seconds
        #[arg(long)]
        duration: f64,
        /// Playback URL
        #[arg(long)]
        url: Option<String>,
    },
    /// List all videos
    List,
    /// Show a single video
    Show {
        /// Video ID
        id: i64,
    },
}

/// Tracking settings commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current tracking settings
    Show,
    /// Update tracking settings
    Set(SettingsArgs),
}

/// Tracking settings that can be changed from the command line.
#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    /// Gap in seconds still merged into one interval
    #[arg(long)]
    pub merge_tolerance_secs: Option<f64>,
    /// Start-time tolerance in seconds for extending the last interval
    #[arg(long)]
    pub extension_tolerance_secs: Option<f64>,
    /// Reported spans longer than this many seconds count as a skip
    #[arg(long)]
    pub skip_threshold_secs: Option<f64>,
    /// Seconds credited at the end of a skipped span
    #[arg(long)]
    pub skip_credit_secs: Option<f64>,
    /// Unique coverage ratio (0-1] needed before 100% without a completion marker
    #[arg(long)]
    pub completion_ratio: Option<f64>,
    /// Percentage shown instead of 100 when coverage is insufficient (< 100)
    #[arg(long)]
    pub capped_percentage: Option<u32>,
    /// Resume position after a first-ever completion marker
    #[arg(long)]
    pub default_resume_secs: Option<f64>,
    /// Fraction of the duration from the end that counts as near the end
    #[arg(long)]
    pub near_end_ratio: Option<f64>,
}

impl SettingsArgs {
    pub fn into_update(self) -> SettingsUpdate {
        SettingsUpdate {
            merge_tolerance_secs: self.merge_tolerance_secs,
            extension_tolerance_secs: self.extension_tolerance_secs,
            skip_threshold_secs: self.skip_threshold_secs,
            skip_credit_secs: self.skip_credit_secs,
            completion_ratio: self.completion_ratio,
            capped_percentage: self.capped_percentage,
            default_resume_secs: self.default_resume_secs,
            near_end_ratio: self.near_end_ratio,
        }
    }
}
