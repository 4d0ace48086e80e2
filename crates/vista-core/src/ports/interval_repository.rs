//! Watched interval repository port.
//!
//! Intervals are only ever inserted or extended; nothing in the tracking
//! flow deletes them.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{TimeRange, WatchedInterval};

/// Storage for watched intervals keyed by (user, video).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IntervalRepository: Send + Sync {
    /// All stored intervals for the pair, ordered by start time then id.
    async fn list(&self, user_id: i64, video_id: i64)
    -> Result<Vec<WatchedInterval>, RepositoryError>;

    /// Store a new interval and return its id.
    async fn insert(
        &self,
        user_id: i64,
        video_id: i64,
        range: TimeRange,
    ) -> Result<i64, RepositoryError>;

    /// Overwrite the bounds of an existing interval.
    async fn update(&self, id: i64, range: TimeRange) -> Result<(), RepositoryError>;
}
