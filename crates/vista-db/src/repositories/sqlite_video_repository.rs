//! `SQLite` implementation of the `VideoRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use vista_core::{NewVideo, RepositoryError, Video, VideoRepository};

use super::row_mappers::{VIDEO_SELECT_COLUMNS, map_sqlx_error, row_to_video};

/// `SQLite` implementation of the `VideoRepository` trait.
pub struct SqliteVideoRepository {
    pool: SqlitePool,
}

impl SqliteVideoRepository {
    /// Create a new `SQLite` video repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoRepository for SqliteVideoRepository {
    async fn list(&self) -> Result<Vec<Video>, RepositoryError> {
        let query = format!("SELECT {VIDEO_SELECT_COLUMNS} FROM videos ORDER BY id");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_video).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Video>, RepositoryError> {
        let query = format!("SELECT {VIDEO_SELECT_COLUMNS} FROM videos WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_video).transpose()
    }

    async fn insert(&self, video: &NewVideo) -> Result<Video, RepositoryError> {
        let result =
            sqlx::query("INSERT INTO videos (title, duration_seconds, url) VALUES (?, ?, ?)")
                .bind(&video.title)
                .bind(video.duration_seconds)
                .bind(&video.url)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(Video {
            id: result.last_insert_rowid(),
            title: video.title.clone(),
            duration_seconds: video.duration_seconds,
            url: video.url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup_test_database;

    #[tokio::test]
    async fn test_insert_find_list() {
        let repo = SqliteVideoRepository::new(setup_test_database().await.unwrap());

        let first = repo
            .insert(&NewVideo::new("Ownership", 754.5, "https://cdn.example.com/own.mp4"))
            .await
            .unwrap();
        let second = repo
            .insert(&NewVideo::new("Borrowing", 300.0, ""))
            .await
            .unwrap();

        assert_eq!(repo.find_by_id(first.id).await.unwrap(), Some(first.clone()));
        assert_eq!(repo.list().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let repo = SqliteVideoRepository::new(setup_test_database().await.unwrap());
        assert_eq!(repo.find_by_id(404).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_non_positive_duration_is_constraint_error() {
        let repo = SqliteVideoRepository::new(setup_test_database().await.unwrap());
        let result = repo.insert(&NewVideo::new("Broken", 0.0, "")).await;
        assert!(matches!(result, Err(RepositoryError::Constraint(_))));
    }
}
