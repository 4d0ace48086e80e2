//! Text rendering for videos, progress reports, intervals and settings.

use vista_core::{ProgressReport, StatsSnapshot, TimeRange, TrackingSettings, Video, WatchedInterval};

use super::tables::{format_clock, print_separator, truncate_string};

pub fn display_video(video: &Video) {
    println!("Video {}: {}", video.id, video.title);
    println!(
        "  Duration: {} ({:.1}s)",
        format_clock(video.duration_seconds),
        video.duration_seconds
    );
    if !video.url.is_empty() {
        println!("  URL:      {}", video.url);
    }
}

/// Print a progress report. `resume_at` is where a player would start.
pub fn display_progress(report: &ProgressReport, resume_at: Option<f64>) {
    println!("Progress:       {}%", report.progress_percentage);
    println!(
        "Unique watched: {:.1}s ({})",
        report.unique_seconds_watched,
        format_clock(report.unique_seconds_watched)
    );
    println!(
        "Last position:  {:.1}s ({})",
        report.last_position,
        format_clock(report.last_position)
    );
    if let Some(start) = resume_at {
        println!("Resume at:      {}", format_clock(start));
    }
}

pub fn display_intervals(stored: &[WatchedInterval], merged: &[TimeRange]) {
    if stored.is_empty() {
        println!("No watched intervals recorded.");
        return;
    }

    println!("Stored intervals ({}):", stored.len());
    println!("{:<6} {:>10} {:>10} {:>10}", "ID", "Start", "End", "Length");
    print_separator(39);
    for interval in stored {
        let range = interval.range();
        println!(
            "{:<6} {:>10.2} {:>10.2} {:>10.2}",
            interval.id,
            range.start_time,
            range.end_time,
            range.duration()
        );
    }

    println!();
    println!("Merged coverage ({}):", merged.len());
    for range in merged {
        println!(
            "  {} - {}  ({:.2}s)",
            format_clock(range.start_time),
            format_clock(range.end_time),
            range.duration()
        );
    }
}

pub fn display_settings(settings: &TrackingSettings) {
    println!("Tracking settings:");
    println!("  merge_tolerance_secs     = {}", settings.merge_tolerance_secs);
    println!("  extension_tolerance_secs = {}", settings.extension_tolerance_secs);
    println!("  skip_threshold_secs      = {}", settings.skip_threshold_secs);
    println!("  skip_credit_secs         = {}", settings.skip_credit_secs);
    println!("  completion_ratio         = {}", settings.completion_ratio);
    println!("  capped_percentage        = {}", settings.capped_percentage);
    println!("  default_resume_secs      = {}", settings.default_resume_secs);
    println!("  near_end_ratio           = {}", settings.near_end_ratio);
}

/// Print the video catalog as a table.
pub fn display_video_table(videos: &[Video]) {
    println!("{:<5} {:<40} {:>10}", "ID", "Title", "Duration");
    print_separator(57);
    for video in videos {
        println!(
            "{:<5} {:<40} {:>10}",
            video.id,
            truncate_string(&video.title, 40),
            format_clock(video.duration_seconds)
        );
    }
}

pub fn display_stats(stats: &StatsSnapshot) {
    eprintln!(
        "[stats] inserted={} extended={} discarded={} skips={} completions={} progress_updates={}",
        stats.intervals_inserted,
        stats.intervals_extended,
        stats.intervals_discarded,
        stats.skips_detected,
        stats.completion_markers,
        stats.progress_updates,
    );
    if let Some(ratio) = stats.extension_ratio() {
        eprintln!("[stats] extension ratio {:.0}%", ratio * 100.0);
    }
}
