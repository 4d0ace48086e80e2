//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms.

pub mod progress_display;
pub mod tables;

pub use progress_display::{
    display_intervals, display_progress, display_settings, display_stats, display_video,
    display_video_table,
};
pub use tables::{format_clock, print_json, print_separator, truncate_string};
