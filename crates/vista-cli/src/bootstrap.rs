//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Database pool and repositories (via vista-db)
//! - Tracking counters used as the event emitter
//! - Core services (via vista-core)
//!
//! Command handlers receive the fully-composed `AppCore` and delegate work to it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use vista_core::paths::database_path;
use vista_core::services::AppCore;
use vista_core::{
    CoreError, StatsSnapshot, TrackingEventEmitter, TrackingSettings, TrackingStats,
};
use vista_db::{CoreFactory, setup_database};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// Print results as JSON instead of text.
    pub json: bool,
}

impl CliConfig {
    /// Create config with the default database location.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            database_path: database_path()?,
            json: false,
        })
    }

    /// Create config for an explicit database file.
    pub fn with_database(database_path: PathBuf) -> Self {
        Self {
            database_path,
            json: false,
        }
    }

    #[must_use]
    pub const fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// Counters fed by every ingestion in this process.
    pub stats: TrackingStats,
    /// Print results as JSON instead of text.
    pub json: bool,
    /// Database file this context is connected to.
    pub database_path: PathBuf,
}

impl CliContext {
    /// Access the AppCore.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    /// Current tracking counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Opens the database and applies the schema
/// 2. Builds the repositories
/// 3. Loads and validates the stored tracking settings, falling back to
///    defaults when they are invalid so `config set` can still repair them
/// 4. Assembles the `AppCore` with a `TrackingStats` emitter
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let pool = setup_database(&config.database_path).await?;
    tracing::debug!(path = %config.database_path.display(), "Database opened");

    let stats = TrackingStats::new();
    let events: Arc<dyn TrackingEventEmitter> = Arc::new(stats.clone());
    let app = match CoreFactory::build_app_core(pool.clone(), Arc::clone(&events)).await {
        Ok(app) => app,
        Err(CoreError::Settings(err)) => {
            tracing::warn!(%err, "Stored tracking settings are invalid, using defaults");
            AppCore::new(
                CoreFactory::build_repos(pool),
                TrackingSettings::with_defaults(),
                events,
            )
        }
        Err(err) => return Err(err.into()),
    };

    Ok(CliContext {
        app,
        stats,
        json: config.json,
        database_path: config.database_path,
    })
}
