//! Video progress repository port.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::VideoProgress;

/// Storage for the per-(user, video) progress summary.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Load the progress row, if one exists.
    async fn find(
        &self,
        user_id: i64,
        video_id: i64,
    ) -> Result<Option<VideoProgress>, RepositoryError>;

    /// Insert or replace the progress row and return what was stored.
    async fn upsert(
        &self,
        user_id: i64,
        video_id: i64,
        unique_seconds_watched: f64,
        last_position: f64,
    ) -> Result<VideoProgress, RepositoryError>;
}
