#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod events;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;
pub mod tracking;

// Re-export commonly used types for convenience
pub use domain::{
    NewVideo, ProgressReport, TimeRange, Video, VideoProgress, WatchReport, WatchedInterval,
};
pub use events::{StatsSnapshot, TrackingEvent, TrackingStats};
pub use ports::{
    CoreError, IntervalRepository, NoopEmitter, ProgressRepository, Repos, RepositoryError,
    SettingsRepository, TrackingEventEmitter, VideoRepository,
};
pub use services::{
    AppCore, ProgressOutcome, ProgressService, Rejection, SettingsService, VideoService,
};
pub use settings::{SettingsError, SettingsUpdate, TrackingSettings, validate_settings};
pub use tracking::{
    IngestAction, IngestPlan, derive_progress, is_near_end, merge_intervals, plan_ingest,
    playback_start, progress_percentage, resume_position, unique_seconds,
};

// Re-export path utilities
pub use paths::{DATA_DIR_ENV, PathError, data_root, database_path, database_path_in, env_file_path};

// Only the integration tests under tests/ use these
#[cfg(test)]
use proptest as _;
#[cfg(test)]
use vista_db as _;
