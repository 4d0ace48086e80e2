//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::Row;
use sqlx::error::ErrorKind;
use sqlx::sqlite::SqliteRow;
use vista_core::{RepositoryError, Video, VideoProgress, WatchedInterval};

/// Shared SELECT column lists.
pub const VIDEO_SELECT_COLUMNS: &str = "id, title, duration_seconds, url";
pub const INTERVAL_SELECT_COLUMNS: &str = "id, user_id, video_id, start_time, end_time";
pub const PROGRESS_SELECT_COLUMNS: &str =
    "user_id, video_id, unique_seconds_watched, last_position, updated_at";

/// Timestamp format written to TEXT columns.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

pub fn format_datetime(at: DateTime<Utc>) -> String {
    at.format(DATETIME_FORMAT).to_string()
}

/// Helper to parse datetime strings that may have "UTC" suffix.
pub fn parse_datetime(datetime_str: &str) -> Option<DateTime<Utc>> {
    let trimmed = datetime_str.trim_end_matches(" UTC");
    NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT)
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .ok()
}

/// Map a sqlx error, separating constraint violations from other failures.
pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match e.as_database_error().map(|db| db.kind()) {
        Some(
            ErrorKind::CheckViolation
            | ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation,
        ) => RepositoryError::Constraint(e.to_string()),
        _ => RepositoryError::Storage(e.to_string()),
    }
}

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepositoryError::Storage(e.to_string()))
}

/// Parse a database row into a Video.
pub fn row_to_video(row: &SqliteRow) -> Result<Video, RepositoryError> {
    Ok(Video {
        id: column(row, "id")?,
        title: column(row, "title")?,
        duration_seconds: column(row, "duration_seconds")?,
        url: column(row, "url")?,
    })
}

/// Parse a database row into a WatchedInterval.
pub fn row_to_interval(row: &SqliteRow) -> Result<WatchedInterval, RepositoryError> {
    Ok(WatchedInterval {
        id: column(row, "id")?,
        user_id: column(row, "user_id")?,
        video_id: column(row, "video_id")?,
        start_time: column(row, "start_time")?,
        end_time: column(row, "end_time")?,
    })
}

/// Parse a database row into a VideoProgress.
pub fn row_to_progress(row: &SqliteRow) -> Result<VideoProgress, RepositoryError> {
    let updated_at: String = column(row, "updated_at")?;
    let updated_at = parse_datetime(&updated_at).ok_or_else(|| {
        RepositoryError::Storage(format!("Invalid updated_at timestamp: {updated_at}"))
    })?;

    Ok(VideoProgress {
        user_id: column(row, "user_id")?,
        video_id: column(row, "video_id")?,
        unique_seconds_watched: column(row, "unique_seconds_watched")?,
        last_position: column(row, "last_position")?,
        updated_at,
    })
}
