//! Watched-interval accounting engine.
//!
//! Pure, synchronous functions that turn raw playback reports into a
//! canonical interval set, unique watch time and progress values. The
//! services layer feeds them stored data and persists what they return.
//!
//! - `merge` - canonical non-overlapping interval set
//! - `coverage` - unique seconds watched
//! - `ingest` - clamps, skip detection, extend-vs-insert decision
//! - `derive` - capped percentage and resume position

pub mod coverage;
pub mod derive;
pub mod ingest;
pub mod merge;

pub use coverage::unique_seconds;
pub use derive::{derive_progress, is_near_end, playback_start, progress_percentage, resume_position};
pub use ingest::{IngestAction, IngestPlan, plan_ingest};
pub use merge::merge_intervals;
