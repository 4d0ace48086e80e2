//! Progress service - ingestion of playback reports and progress lookup.
//!
//! Each ingestion runs: read stored intervals, decide, write (extend or
//! insert), re-read, merge, write progress. Reports for the same
//! (user, video) pair are serialized so rapid periodic pings extend one
//! interval instead of racing into separate rows.

use std::sync::Arc;

use serde::Serialize;

use super::key_lock::KeyedLocks;
use crate::domain::{ProgressReport, TimeRange, WatchReport, WatchedInterval};
use crate::events::TrackingEvent;
use crate::ports::{
    CoreError, IntervalRepository, ProgressRepository, TrackingEventEmitter, VideoRepository,
};
use crate::settings::TrackingSettings;
use crate::tracking::{
    IngestAction, derive_progress, merge_intervals, plan_ingest, progress_percentage,
    unique_seconds,
};

/// Why a report or lookup was refused.
///
/// Rejections are caller errors with a user-facing message. They are
/// returned inside `Ok`, never as `CoreError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    #[error("Start time must be less than end time")]
    InvalidInterval,

    #[error("Start time and end time must be finite numbers")]
    NonFiniteTime,

    #[error("Video not found")]
    VideoNotFound,
}

/// Result of an ingestion or lookup that reached the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressOutcome {
    Reported(ProgressReport),
    Rejected(Rejection),
}

impl ProgressOutcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Reported(_))
    }

    pub const fn report(&self) -> Option<&ProgressReport> {
        match self {
            Self::Reported(report) => Some(report),
            Self::Rejected(_) => None,
        }
    }

    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Reported(_) => None,
            Self::Rejected(rejection) => Some(*rejection),
        }
    }
}

/// Orchestrates the tracking engine against the storage ports.
pub struct ProgressService {
    videos: Arc<dyn VideoRepository>,
    intervals: Arc<dyn IntervalRepository>,
    progress: Arc<dyn ProgressRepository>,
    settings: TrackingSettings,
    events: Arc<dyn TrackingEventEmitter>,
    locks: KeyedLocks<(i64, i64)>,
}

impl ProgressService {
    pub fn new(
        videos: Arc<dyn VideoRepository>,
        intervals: Arc<dyn IntervalRepository>,
        progress: Arc<dyn ProgressRepository>,
        settings: TrackingSettings,
        events: Arc<dyn TrackingEventEmitter>,
    ) -> Self {
        Self {
            videos,
            intervals,
            progress,
            settings,
            events,
            locks: KeyedLocks::new(),
        }
    }

    /// Thresholds this service was built with.
    pub const fn settings(&self) -> &TrackingSettings {
        &self.settings
    }

    /// Record a playback report and return the recomputed progress.
    ///
    /// Validation happens before any storage access. Persistence failures
    /// are returned as `CoreError::Repository` and are not retried.
    pub async fn ingest(&self, report: WatchReport) -> Result<ProgressOutcome, CoreError> {
        let WatchReport {
            user_id,
            video_id,
            is_completion,
            ..
        } = report;
        let reported = report.range();

        if !reported.is_finite() {
            tracing::debug!(user_id, video_id, "Rejected non-finite report");
            return Ok(ProgressOutcome::Rejected(Rejection::NonFiniteTime));
        }
        if !reported.is_valid() {
            tracing::debug!(
                user_id,
                video_id,
                start = reported.start_time,
                end = reported.end_time,
                "Rejected inverted interval"
            );
            return Ok(ProgressOutcome::Rejected(Rejection::InvalidInterval));
        }

        let Some(video) = self.videos.find_by_id(video_id).await? else {
            tracing::debug!(user_id, video_id, "Rejected report for unknown video");
            return Ok(ProgressOutcome::Rejected(Rejection::VideoNotFound));
        };
        let duration = video.duration_seconds;

        let _guard = self.locks.lock((user_id, video_id)).await;

        let stored = self.intervals.list(user_id, video_id).await?;
        let plan = plan_ingest(&self.settings, duration, reported, stored.last());

        if plan.skip_detected {
            tracing::info!(
                user_id,
                video_id,
                reported_start = reported.start_time,
                reported_end = reported.end_time,
                credited_start = plan.effective.start_time,
                "Skip detected, crediting tail only"
            );
            self.events.emit(TrackingEvent::SkipDetected {
                user_id,
                video_id,
                reported_start: reported.start_time,
                reported_end: reported.end_time,
                credited_start: plan.effective.start_time,
            });
        }
        if is_completion {
            self.events.emit(TrackingEvent::CompletionMarker { user_id, video_id });
        }

        self.apply(user_id, video_id, reported, plan.action).await?;

        let all = self.intervals.list(user_id, video_id).await?;
        let merged = merge_intervals(
            all.iter().map(WatchedInterval::range),
            self.settings.merge_tolerance_secs,
        );
        let unique = unique_seconds(&merged);

        let existing = if is_completion {
            self.progress.find(user_id, video_id).await?
        } else {
            None
        };
        let derived = derive_progress(
            unique,
            duration,
            is_completion,
            plan.original_end,
            existing.as_ref(),
            &self.settings,
        );

        self.progress
            .upsert(user_id, video_id, unique, derived.last_position)
            .await?;

        tracing::debug!(
            user_id,
            video_id,
            unique_seconds = unique,
            percentage = derived.progress_percentage,
            last_position = derived.last_position,
            "Progress updated"
        );
        self.events.emit(TrackingEvent::ProgressUpdated {
            user_id,
            video_id,
            unique_seconds_watched: unique,
            progress_percentage: derived.progress_percentage,
            last_position: derived.last_position,
        });

        Ok(ProgressOutcome::Reported(derived))
    }

    async fn apply(
        &self,
        user_id: i64,
        video_id: i64,
        reported: TimeRange,
        action: IngestAction,
    ) -> Result<(), CoreError> {
        match action {
            IngestAction::Extend { interval_id, range } => {
                self.intervals.update(interval_id, range).await?;
                self.events.emit(TrackingEvent::IntervalExtended {
                    user_id,
                    video_id,
                    interval_id,
                    start_time: range.start_time,
                    end_time: range.end_time,
                });
            }
            IngestAction::Insert(range) => {
                let interval_id = self.intervals.insert(user_id, video_id, range).await?;
                self.events.emit(TrackingEvent::IntervalInserted {
                    user_id,
                    video_id,
                    interval_id,
                    start_time: range.start_time,
                    end_time: range.end_time,
                });
            }
            IngestAction::Discard => {
                tracing::warn!(
                    user_id,
                    video_id,
                    start = reported.start_time,
                    end = reported.end_time,
                    "Report lies outside the video, nothing stored"
                );
                self.events.emit(TrackingEvent::IntervalDiscarded {
                    user_id,
                    video_id,
                    reported_start: reported.start_time,
                    reported_end: reported.end_time,
                });
            }
        }
        Ok(())
    }

    /// Current progress from the stored summary.
    ///
    /// A user with no stored progress gets zeros. The 99% cap applies to
    /// the stored unique seconds as it does during ingestion.
    pub async fn get_progress(
        &self,
        user_id: i64,
        video_id: i64,
    ) -> Result<ProgressOutcome, CoreError> {
        let Some(video) = self.videos.find_by_id(video_id).await? else {
            return Ok(ProgressOutcome::Rejected(Rejection::VideoNotFound));
        };

        let report = match self.progress.find(user_id, video_id).await? {
            Some(progress) => ProgressReport {
                unique_seconds_watched: progress.unique_seconds_watched,
                progress_percentage: progress_percentage(
                    progress.unique_seconds_watched,
                    video.duration_seconds,
                    false,
                    &self.settings,
                ),
                last_position: progress.last_position,
            },
            None => ProgressReport::empty(),
        };

        Ok(ProgressOutcome::Reported(report))
    }

    /// Canonical merged coverage for a (user, video) pair.
    pub async fn merged_intervals(
        &self,
        user_id: i64,
        video_id: i64,
    ) -> Result<Vec<TimeRange>, CoreError> {
        let stored = self.intervals.list(user_id, video_id).await?;
        Ok(merge_intervals(
            stored.iter().map(WatchedInterval::range),
            self.settings.merge_tolerance_secs,
        ))
    }

    /// Raw stored intervals, ordered by start time.
    pub async fn stored_intervals(
        &self,
        user_id: i64,
        video_id: i64,
    ) -> Result<Vec<WatchedInterval>, CoreError> {
        self.intervals
            .list(user_id, video_id)
            .await
            .map_err(CoreError::from)
    }
}
