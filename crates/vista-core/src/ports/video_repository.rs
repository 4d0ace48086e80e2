//! Video catalog repository port.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewVideo, Video};

/// Read access to the video catalog, plus registration of new videos.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// List all videos, ordered by id.
    async fn list(&self) -> Result<Vec<Video>, RepositoryError>;

    /// Find a video by id. Returns `None` when it does not exist.
    async fn find_by_id(&self, id: i64) -> Result<Option<Video>, RepositoryError>;

    /// Persist a new video and return it with its assigned id.
    async fn insert(&self, video: &NewVideo) -> Result<Video, RepositoryError>;
}
