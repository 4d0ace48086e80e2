//! Video service - catalog operations.

use crate::domain::{NewVideo, Video};
use crate::ports::{CoreError, VideoRepository};
use std::sync::Arc;

/// Service for video catalog operations.
///
/// Thin facade over `VideoRepository` that validates new entries.
pub struct VideoService {
    repo: Arc<dyn VideoRepository>,
}

impl VideoService {
    /// Create a new video service with the given repository.
    pub fn new(repo: Arc<dyn VideoRepository>) -> Self {
        Self { repo }
    }

    /// List all videos.
    pub async fn list(&self) -> Result<Vec<Video>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Get a video by id.
    pub async fn get(&self, id: i64) -> Result<Option<Video>, CoreError> {
        self.repo.find_by_id(id).await.map_err(CoreError::from)
    }

    /// Get a video by id. Returns error if not found.
    pub async fn require(&self, id: i64) -> Result<Video, CoreError> {
        self.get(id)
            .await?
            .ok_or_else(|| CoreError::Validation(format!("Video not found: {id}")))
    }

    /// Register a new video.
    pub async fn add(&self, video: NewVideo) -> Result<Video, CoreError> {
        if video.title.trim().is_empty() {
            return Err(CoreError::Validation("Video title cannot be empty".into()));
        }
        if !(video.duration_seconds.is_finite() && video.duration_seconds > 0.0) {
            return Err(CoreError::Validation(format!(
                "Video duration must be a positive number of seconds, got {}",
                video.duration_seconds
            )));
        }

        let created = self.repo.insert(&video).await?;
        tracing::info!(
            video_id = created.id,
            duration = created.duration_seconds,
            "Video added"
        );
        Ok(created)
    }
}
