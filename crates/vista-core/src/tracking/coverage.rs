//! Unique watch time.

use crate::domain::TimeRange;

/// Sum the widths of merged ranges.
///
/// Each width is floored at zero, so a stray inverted range contributes
/// nothing rather than subtracting time.
pub fn unique_seconds(merged: &[TimeRange]) -> f64 {
    merged.iter().map(TimeRange::duration).sum()
}
