//! `SQLite` implementation of the `ProgressRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use vista_core::{ProgressRepository, RepositoryError, VideoProgress};

use super::row_mappers::{
    PROGRESS_SELECT_COLUMNS, format_datetime, map_sqlx_error, row_to_progress,
};

/// `SQLite` implementation of the `ProgressRepository` trait.
///
/// One row per (user, video), written with `ON CONFLICT ... DO UPDATE`.
pub struct SqliteProgressRepository {
    pool: SqlitePool,
}

impl SqliteProgressRepository {
    /// Create a new `SQLite` progress repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgressRepository for SqliteProgressRepository {
    async fn find(
        &self,
        user_id: i64,
        video_id: i64,
    ) -> Result<Option<VideoProgress>, RepositoryError> {
        let query = format!(
            "SELECT {PROGRESS_SELECT_COLUMNS} FROM video_progress WHERE user_id = ? AND video_id = ?"
        );

        let row = sqlx::query(&query)
            .bind(user_id)
            .bind(video_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_progress).transpose()
    }

    async fn upsert(
        &self,
        user_id: i64,
        video_id: i64,
        unique_seconds_watched: f64,
        last_position: f64,
    ) -> Result<VideoProgress, RepositoryError> {
        let updated_at = Utc::now();

        sqlx::query(
            r#"INSERT INTO video_progress (
                user_id, video_id, unique_seconds_watched, last_position, updated_at
            ) VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(user_id, video_id) DO UPDATE SET
                unique_seconds_watched = excluded.unique_seconds_watched,
                last_position = excluded.last_position,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id)
        .bind(video_id)
        .bind(unique_seconds_watched)
        .bind(last_position)
        .bind(format_datetime(updated_at))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(VideoProgress {
            user_id,
            video_id,
            unique_seconds_watched,
            last_position,
            updated_at,
        })
    }
}
