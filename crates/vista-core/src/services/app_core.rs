//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, HTTP)
//! receive an `AppCore` instance and use it to access all functionality.

use crate::ports::{CoreError, Repos, TrackingEventEmitter};
use crate::settings::{TrackingSettings, validate_settings};
use std::sync::Arc;

use super::{ProgressService, SettingsService, VideoService};

/// The core application facade.
///
/// `AppCore` provides access to all core services. It's constructed at the
/// adapter's composition root (main.rs or bootstrap.rs) with concrete
/// implementations of repositories and an event emitter.
///
/// # Example
///
/// ```ignore
/// let repos = vista_db::CoreFactory::build_repos(pool);
/// let core = AppCore::load(repos, Arc::new(NoopEmitter::new())).await?;
///
/// let outcome = core.progress().ingest(WatchReport::new(1, 7, 0.0, 12.5)).await?;
/// ```
pub struct AppCore {
    progress: ProgressService,
    videos: VideoService,
    settings: SettingsService,
}

impl AppCore {
    /// Create a new `AppCore` that tracks with the given settings.
    pub fn new(
        repos: Repos,
        tracking: TrackingSettings,
        events: Arc<dyn TrackingEventEmitter>,
    ) -> Self {
        Self {
            progress: ProgressService::new(
                Arc::clone(&repos.videos),
                repos.intervals,
                repos.progress,
                tracking,
                events,
            ),
            videos: VideoService::new(repos.videos),
            settings: SettingsService::new(repos.settings),
        }
    }

    /// Create an `AppCore` using the persisted tracking settings.
    ///
    /// Stored settings are validated before use.
    pub async fn load(
        repos: Repos,
        events: Arc<dyn TrackingEventEmitter>,
    ) -> Result<Self, CoreError> {
        let tracking = repos.settings.load().await?;
        validate_settings(&tracking)?;
        Ok(Self::new(repos, tracking, events))
    }

    /// Access the progress service.
    pub const fn progress(&self) -> &ProgressService {
        &self.progress
    }

    /// Access the video service.
    pub const fn videos(&self) -> &VideoService {
        &self.videos
    }

    /// Access the settings service.
    pub const fn settings(&self) -> &SettingsService {
        &self.settings
    }
}
