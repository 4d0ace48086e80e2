//! Settings repository trait definition.
//!
//! This port defines the interface for tracking settings persistence.
//! Implementations handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::settings::TrackingSettings;

/// Repository for tracking settings persistence.
///
/// Settings are stored and loaded as a whole; the implementation handles
/// serialization.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Load tracking settings.
    ///
    /// Returns default settings if none are stored.
    async fn load(&self) -> Result<TrackingSettings, RepositoryError>;

    /// Save tracking settings.
    async fn save(&self, settings: &TrackingSettings) -> Result<(), RepositoryError>;
}
