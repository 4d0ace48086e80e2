//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_interval_repository;
mod sqlite_progress_repository;
mod sqlite_settings_repository;
mod sqlite_video_repository;

pub use sqlite_interval_repository::SqliteIntervalRepository;
pub use sqlite_progress_repository::SqliteProgressRepository;
pub use sqlite_settings_repository::SqliteSettingsRepository;
pub use sqlite_video_repository::SqliteVideoRepository;
