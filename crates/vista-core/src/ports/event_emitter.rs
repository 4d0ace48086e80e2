//! Event emitter trait for tracking observability.
//!
//! This module defines the abstraction for emitting tracking events.
//! Implementations decide what to do with them (count, log, forward).

use crate::events::TrackingEvent;

/// Trait for emitting tracking events.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and contexts that don't need events
/// - `TrackingStats` - Keeps counters for skips, completions and
///   extend-vs-insert decisions
pub trait TrackingEventEmitter: Send + Sync {
    /// Emit a tracking event.
    ///
    /// This method must not block.
    fn emit(&self, event: TrackingEvent);

    /// Clone this emitter into a boxed trait object.
    fn clone_box(&self) -> Box<dyn TrackingEventEmitter>;
}

/// A no-op event emitter that discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    pub const fn new() -> Self {
        Self
    }
}

impl TrackingEventEmitter for NoopEmitter {
    fn emit(&self, _event: TrackingEvent) {}

    fn clone_box(&self) -> Box<dyn TrackingEventEmitter> {
        Box::new(self.clone())
    }
}
