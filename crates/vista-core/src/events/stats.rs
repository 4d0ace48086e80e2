//! In-process counters fed by tracking events.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use super::TrackingEvent;
use crate::ports::TrackingEventEmitter;

#[derive(Debug, Default)]
struct Counters {
    inserted: AtomicU64,
    extended: AtomicU64,
    discarded: AtomicU64,
    skips: AtomicU64,
    completions: AtomicU64,
    progress_updates: AtomicU64,
}

/// Event emitter that counts what the ingestion flow did.
///
/// Clones share the same counters, so one handle can be given to the core
/// and another kept for reporting.
#[derive(Debug, Clone, Default)]
pub struct TrackingStats {
    counters: Arc<Counters>,
}

/// Point-in-time copy of [`TrackingStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub intervals_inserted: u64,
    pub intervals_extended: u64,
    pub intervals_discarded: u64,
    pub skips_detected: u64,
    pub completion_markers: u64,
    pub progress_updates: u64,
}

impl StatsSnapshot {
    /// Share of stored reports that extended an existing interval.
    ///
    /// `None` until at least one interval has been stored.
    #[allow(clippy::cast_precision_loss)]
    pub fn extension_ratio(&self) -> Option<f64> {
        let stored = self.intervals_inserted + self.intervals_extended;
        (stored > 0).then(|| self.intervals_extended as f64 / stored as f64)
    }
}

impl TrackingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let c = &self.counters;
        StatsSnapshot {
            intervals_inserted: c.inserted.load(Ordering::Relaxed),
            intervals_extended: c.extended.load(Ordering::Relaxed),
            intervals_discarded: c.discarded.load(Ordering::Relaxed),
            skips_detected: c.skips.load(Ordering::Relaxed),
            completion_markers: c.completions.load(Ordering::Relaxed),
            progress_updates: c.progress_updates.load(Ordering::Relaxed),
        }
    }
}

impl TrackingEventEmitter for TrackingStats {
    fn emit(&self, event: TrackingEvent) {
        let (user_id, video_id) = event.key();
        tracing::trace!(event = event.event_name(), user_id, video_id, "Tracking event");

        let c = &self.counters;
        let counter = match event {
            TrackingEvent::IntervalInserted { .. } => &c.inserted,
            TrackingEvent::IntervalExtended { .. } => &c.extended,
            TrackingEvent::IntervalDiscarded { .. } => &c.discarded,
            TrackingEvent::SkipDetected { .. } => &c.skips,
            TrackingEvent::CompletionMarker { .. } => &c.completions,
            TrackingEvent::ProgressUpdated { .. } => &c.progress_updates,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn clone_box(&self) -> Box<dyn TrackingEventEmitter> {
        Box::new(self.clone())
    }
}
