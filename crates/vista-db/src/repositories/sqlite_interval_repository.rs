//! `SQLite` implementation of the `IntervalRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use vista_core::{IntervalRepository, RepositoryError, TimeRange, WatchedInterval};

use super::row_mappers::{INTERVAL_SELECT_COLUMNS, map_sqlx_error, row_to_interval};

/// `SQLite` implementation of the `IntervalRepository` trait.
///
/// The table enforces `start_time < end_time`; a violating write surfaces
/// as `RepositoryError::Constraint`.
pub struct SqliteIntervalRepository {
    pool: SqlitePool,
}

impl SqliteIntervalRepository {
    /// Create a new `SQLite` interval repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IntervalRepository for SqliteIntervalRepository {
    async fn list(
        &self,
        user_id: i64,
        video_id: i64,
    ) -> Result<Vec<WatchedInterval>, RepositoryError> {
        let query = format!(
            "SELECT {INTERVAL_SELECT_COLUMNS} FROM watched_intervals \
             WHERE user_id = ? AND video_id = ? ORDER BY start_time, id"
        );

        let rows = sqlx::query(&query)
            .bind(user_id)
            .bind(video_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_interval).collect()
    }

    async fn insert(
        &self,
        user_id: i64,
        video_id: i64,
        range: TimeRange,
    ) -> Result<i64, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO watched_intervals (user_id, video_id, start_time, end_time) VALUES (?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(video_id)
        .bind(range.start_time)
        .bind(range.end_time)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, id: i64, range: TimeRange) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("UPDATE watched_intervals SET start_time = ?, end_time = ? WHERE id = ?")
                .bind(range.start_time)
                .bind(range.end_time)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Interval with ID {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestDb;

    async fn db_with_video() -> (TestDb, i64) {
        let db = TestDb::new().await.unwrap();
        let video = db.seed_video("Lecture", 100.0).await.unwrap();
        (db, video.id)
    }

    #[tokio::test]
    async fn test_list_orders_by_start_then_id() {
        let (db, video_id) = db_with_video().await;
        let repo = db.interval_repository();

        let late = repo.insert(1, video_id, TimeRange::new(50.0, 60.0)).await.unwrap();
        let early = repo.insert(1, video_id, TimeRange::new(0.0, 10.0)).await.unwrap();
        let tie = repo.insert(1, video_id, TimeRange::new(0.0, 5.0)).await.unwrap();

        let ids: Vec<i64> = repo
            .list(1, video_id)
            .await
            .unwrap()
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![early, tie, late]);
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_user_and_video() {
        let (db, video_id) = db_with_video().await;
        let repo = db.interval_repository();

        repo.insert(1, video_id, TimeRange::new(0.0, 10.0)).await.unwrap();
        repo.insert(2, video_id, TimeRange::new(0.0, 20.0)).await.unwrap();

        let rows = repo.list(2, video_id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].range(), TimeRange::new(0.0, 20.0));
        assert!(repo.list(1, video_id + 1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_extends_in_place() {
        let (db, video_id) = db_with_video().await;
        let repo = db.interval_repository();

        let id = repo.insert(1, video_id, TimeRange::new(0.0, 2.0)).await.unwrap();
        repo.update(id, TimeRange::new(0.0, 4.0)).await.unwrap();

        let rows = repo.list(1, video_id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].range(), TimeRange::new(0.0, 4.0));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (db, _) = db_with_video().await;
        let result = db
            .interval_repository()
            .update(99, TimeRange::new(0.0, 1.0))
            .await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_degenerate_range_rejected_by_schema() {
        let (db, video_id) = db_with_video().await;
        let result = db
            .interval_repository()
            .insert(1, video_id, TimeRange::new(5.0, 5.0))
            .await;
        assert!(matches!(result, Err(RepositoryError::Constraint(_))));
    }
}
