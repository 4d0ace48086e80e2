//! Video catalog types.

use serde::{Deserialize, Serialize};

/// A video in the catalog.
///
/// Read-only from the tracking engine's perspective: it supplies the clamp
/// ceiling and the percentage denominator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub duration_seconds: f64,
    pub url: String,
}

/// A video that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    pub title: String,
    pub duration_seconds: f64,
    pub url: String,
}

impl NewVideo {
    pub fn new(title: impl Into<String>, duration_seconds: f64, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            duration_seconds,
            url: url.into(),
        }
    }
}
