//! Tracking settings and validation.
//!
//! Every threshold the tracking engine applies lives here so deployments can
//! tune them without code changes. These are pure domain types with no
//! infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Tolerance used when merging adjacent intervals (100ms of reporting jitter).
pub const DEFAULT_MERGE_TOLERANCE_SECS: f64 = 0.1;

/// Tolerance on start times when deciding to extend the last stored interval.
pub const DEFAULT_EXTENSION_TOLERANCE_SECS: f64 = 0.1;

/// Reported spans longer than this are treated as a scrub, not viewing.
pub const DEFAULT_SKIP_THRESHOLD_SECS: f64 = 60.0;

/// Seconds credited at the tail of a skip-detected span.
pub const DEFAULT_SKIP_CREDIT_SECS: f64 = 5.0;

/// Unique coverage required before an organic 100% is allowed.
pub const DEFAULT_COMPLETION_RATIO: f64 = 0.95;

/// Percentage reported when rounding would claim 100% without enough coverage.
pub const DEFAULT_CAPPED_PERCENTAGE: u32 = 99;

/// Resume position used when a completion marker arrives with no prior progress.
pub const DEFAULT_RESUME_SECS: f64 = 5.0;

/// Fraction of the duration, measured from the end, that counts as "near the end".
pub const DEFAULT_NEAR_END_RATIO: f64 = 0.05;

/// Thresholds applied by the watched-interval accounting engine.
///
/// Missing fields deserialize to their defaults so stored settings survive
/// the addition of new knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingSettings {
    /// Gap tolerated between intervals that are still merged together.
    pub merge_tolerance_secs: f64,

    /// Start-time tolerance for treating a report as a continuation.
    pub extension_tolerance_secs: f64,

    /// Span above which a report is treated as a skip.
    pub skip_threshold_secs: f64,

    /// Tail of a skipped span that is still credited as watched.
    pub skip_credit_secs: f64,

    /// Coverage ratio (0-1] gating an organic 100%.
    pub completion_ratio: f64,

    /// Percentage reported instead of 100 when coverage is insufficient.
    pub capped_percentage: u32,

    /// Resume position for a first-ever completion marker.
    pub default_resume_secs: f64,

    /// Near-end window as a fraction of the video duration.
    pub near_end_ratio: f64,
}

impl Default for TrackingSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl TrackingSettings {
    /// Create settings with the production defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            merge_tolerance_secs: DEFAULT_MERGE_TOLERANCE_SECS,
            extension_tolerance_secs: DEFAULT_EXTENSION_TOLERANCE_SECS,
            skip_threshold_secs: DEFAULT_SKIP_THRESHOLD_SECS,
            skip_credit_secs: DEFAULT_SKIP_CREDIT_SECS,
            completion_ratio: DEFAULT_COMPLETION_RATIO,
            capped_percentage: DEFAULT_CAPPED_PERCENTAGE,
            default_resume_secs: DEFAULT_RESUME_SECS,
            near_end_ratio: DEFAULT_NEAR_END_RATIO,
        }
    }

    /// Merge a partial update into these settings, only touching fields that are Some.
    pub fn merge(&mut self, update: &SettingsUpdate) {
        if let Some(value) = update.merge_tolerance_secs {
            self.merge_tolerance_secs = value;
        }
        if let Some(value) = update.extension_tolerance_secs {
            self.extension_tolerance_secs = value;
        }
        if let Some(value) = update.skip_threshold_secs {
            self.skip_threshold_secs = value;
        }
        if let Some(value) = update.skip_credit_secs {
            self.skip_credit_secs = value;
        }
        if let Some(value) = update.completion_ratio {
            self.completion_ratio = value;
        }
        if let Some(value) = update.capped_percentage {
            self.capped_percentage = value;
        }
        if let Some(value) = update.default_resume_secs {
            self.default_resume_secs = value;
        }
        if let Some(value) = update.near_end_ratio {
            self.near_end_ratio = value;
        }
    }
}

/// Partial settings update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub merge_tolerance_secs: Option<f64>,
    pub extension_tolerance_secs: Option<f64>,
    pub skip_threshold_secs: Option<f64>,
    pub skip_credit_secs: Option<f64>,
    pub completion_ratio: Option<f64>,
    pub capped_percentage: Option<u32>,
    pub default_resume_secs: Option<f64>,
    pub near_end_ratio: Option<f64>,
}

impl SettingsUpdate {
    pub const fn is_empty(&self) -> bool {
        self.merge_tolerance_secs.is_none()
            && self.extension_tolerance_secs.is_none()
            && self.skip_threshold_secs.is_none()
            && self.skip_credit_secs.is_none()
            && self.completion_ratio.is_none()
            && self.capped_percentage.is_none()
            && self.default_resume_secs.is_none()
            && self.near_end_ratio.is_none()
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("{field} must be a finite, non-negative number of seconds, got {value}")]
    InvalidSeconds { field: &'static str, value: f64 },

    #[error("Skip threshold must be greater than zero, got {0}")]
    InvalidSkipThreshold(f64),

    #[error("Skip credit ({credit}s) must be positive and not exceed the skip threshold ({threshold}s)")]
    InvalidSkipCredit { credit: f64, threshold: f64 },

    #[error("{field} must be in (0, 1], got {value}")]
    InvalidRatio { field: &'static str, value: f64 },

    #[error("Capped percentage must be below 100, got {0}")]
    InvalidCappedPercentage(u32),
}

fn check_seconds(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::InvalidSeconds { field, value })
    }
}

fn check_ratio(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(SettingsError::InvalidRatio { field, value })
    }
}

/// Validate settings values.
pub fn validate_settings(settings: &TrackingSettings) -> Result<(), SettingsError> {
    check_seconds("merge_tolerance_secs", settings.merge_tolerance_secs)?;
    check_seconds("extension_tolerance_secs", settings.extension_tolerance_secs)?;
    check_seconds("default_resume_secs", settings.default_resume_secs)?;

    if !(settings.skip_threshold_secs.is_finite() && settings.skip_threshold_secs > 0.0) {
        return Err(SettingsError::InvalidSkipThreshold(
            settings.skip_threshold_secs,
        ));
    }

    let credit = settings.skip_credit_secs;
    if !(credit.is_finite() && credit > 0.0 && credit <= settings.skip_threshold_secs) {
        return Err(SettingsError::InvalidSkipCredit {
            credit,
            threshold: settings.skip_threshold_secs,
        });
    }

    check_ratio("completion_ratio", settings.completion_ratio)?;
    check_ratio("near_end_ratio", settings.near_end_ratio)?;

    if settings.capped_percentage >= 100 {
        return Err(SettingsError::InvalidCappedPercentage(
            settings.capped_percentage,
        ));
    }

    Ok(())
}
