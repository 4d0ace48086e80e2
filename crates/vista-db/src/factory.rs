//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use vista_core::{AppCore, CoreError, Repos, TrackingEventEmitter};

use crate::repositories::{
    SqliteIntervalRepository, SqliteProgressRepository, SqliteSettingsRepository,
    SqliteVideoRepository,
};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Create a `SQLite` connection pool.
    ///
    /// # Arguments
    ///
    /// * `db_url` - `SQLite` connection URL (e.g., "sqlite:~/.local/share/vista/data/vista.db")
    pub async fn create_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
        let pool = SqlitePool::connect(db_url).await?;
        Ok(pool)
    }

    /// Build all `SQLite` repositories from a pool.
    ///
    /// Returns a `Repos` struct from `vista-core` containing trait-object-wrapped
    /// repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteVideoRepository::new(pool.clone())),
            Arc::new(SqliteIntervalRepository::new(pool.clone())),
            Arc::new(SqliteProgressRepository::new(pool.clone())),
            Arc::new(SqliteSettingsRepository::new(pool)),
        )
    }

    /// Build a complete `AppCore` from a pool, using the stored tracking settings.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let core = AppCore::load(repos, events).await?;
    /// ```
    pub async fn build_app_core(
        pool: SqlitePool,
        events: Arc<dyn TrackingEventEmitter>,
    ) -> Result<AppCore, CoreError> {
        AppCore::load(Self::build_repos(pool), events).await
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// All repositories backed by this database.
    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(self.pool.clone())
    }

    /// Insert a video directly and return it.
    pub async fn seed_video(
        &self,
        title: &str,
        duration_seconds: f64,
    ) -> anyhow::Result<vista_core::Video> {
        use vista_core::VideoRepository;

        let video = vista_core::NewVideo::new(title, duration_seconds, "");
        Ok(self.video_repository().insert(&video).await?)
    }

    /// Create a video repository using this test database.
    pub fn video_repository(&self) -> SqliteVideoRepository {
        SqliteVideoRepository::new(self.pool.clone())
    }

    /// Create an interval repository using this test database.
    pub fn interval_repository(&self) -> SqliteIntervalRepository {
        SqliteIntervalRepository::new(self.pool.clone())
    }

    /// Create a progress repository using this test database.
    pub fn progress_repository(&self) -> SqliteProgressRepository {
        SqliteProgressRepository::new(self.pool.clone())
    }

    /// Create a settings repository using this test database.
    pub fn settings_repository(&self) -> SqliteSettingsRepository {
        SqliteSettingsRepository::new(self.pool.clone())
    }
}
