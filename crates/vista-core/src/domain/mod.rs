//! Domain types for watched-interval accounting.
//!
//! These are pure data types with no infrastructure dependencies. They are
//! shared by the tracking engine, the port traits and every adapter.

pub mod interval;
pub mod progress;
pub mod video;

pub use interval::{TimeRange, WatchedInterval};
pub use progress::{ProgressReport, VideoProgress, WatchReport};
pub use video::{NewVideo, Video};
