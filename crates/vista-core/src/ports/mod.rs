//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the tracking services expect from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Repository traits are minimal and CRUD-focused
//! - Event emission never blocks the caller

pub mod event_emitter;
pub mod interval_repository;
pub mod progress_repository;
pub mod settings_repository;
pub mod video_repository;

use std::sync::Arc;
use thiserror::Error;

use crate::settings::SettingsError;

// Re-export port traits for convenience
pub use event_emitter::{NoopEmitter, TrackingEventEmitter};
pub use interval_repository::IntervalRepository;
pub use progress_repository::ProgressRepository;
pub use settings_repository::SettingsRepository;
pub use video_repository::VideoRepository;

/// Container for all repository trait objects.
///
/// Lives in `vista-core` so that `AppCore` can accept it without depending
/// on `vista-db`.
///
/// # Example
///
/// ```ignore
/// // In vista-db factory:
/// pub fn build_repos(pool: SqlitePool) -> Repos { ... }
///
/// // In adapter bootstrap:
/// let repos = vista_db::CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos, settings, emitter);
/// ```
#[derive(Clone)]
pub struct Repos {
    /// Video catalog lookups.
    pub videos: Arc<dyn VideoRepository>,
    /// Stored watched intervals per (user, video).
    pub intervals: Arc<dyn IntervalRepository>,
    /// Cached progress summaries per (user, video).
    pub progress: Arc<dyn ProgressRepository>,
    /// Tracking settings persistence.
    pub settings: Arc<dyn SettingsRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        videos: Arc<dyn VideoRepository>,
        intervals: Arc<dyn IntervalRepository>,
        progress: Arc<dyn ProgressRepository>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            videos,
            intervals,
            progress,
            settings,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// Abstracts storage implementation details (e.g., sqlx errors) so services
/// can handle persistence failures without knowing the backend.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., check or unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes, HTTP status
/// codes). Caller-facing validation of playback reports is not an error: it
/// is returned as a `Rejection` inside a successful result.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Settings failed validation.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}
