//! Property tests for interval merging and unique-time accounting.

use proptest::prelude::*;

use vista_core::{TimeRange, merge_intervals, unique_seconds};

const TOLERANCE: f64 = 0.1;

fn watched_ranges() -> impl Strategy<Value = Vec<TimeRange>> {
    prop::collection::vec((0.0..600.0f64, 0.01..40.0f64), 1..25).prop_map(|spans| {
        spans
            .into_iter()
            .map(|(start, len)| TimeRange::new(start, start + len))
            .collect()
    })
}

fn raw_total(ranges: &[TimeRange]) -> f64 {
    ranges.iter().map(TimeRange::duration).sum()
}

/// Length of the largest overlap between any two ranges.
fn largest_overlap(ranges: &[TimeRange]) -> f64 {
    let mut largest = 0.0_f64;
    for (i, a) in ranges.iter().enumerate() {
        for b in &ranges[i + 1..] {
            let overlap = a.end_time.min(b.end_time) - a.start_time.max(b.start_time);
            largest = largest.max(overlap);
        }
    }
    largest
}

proptest! {
    #[test]
    fn test_merge_is_idempotent(ranges in watched_ranges()) {
        let once = merge_intervals(ranges, TOLERANCE);
        let twice = merge_intervals(once.clone(), TOLERANCE);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_input_order_does_not_matter(
        (ranges, shuffled) in watched_ranges()
            .prop_flat_map(|ranges| (Just(ranges.clone()), Just(ranges).prop_shuffle()))
    ) {
        prop_assert_eq!(
            merge_intervals(ranges, TOLERANCE),
            merge_intervals(shuffled, TOLERANCE)
        );
    }

    #[test]
    fn test_merged_ranges_are_sorted_and_separated(ranges in watched_ranges()) {
        let merged = merge_intervals(ranges, TOLERANCE);
        for pair in merged.windows(2) {
            prop_assert!(pair[0].start_time < pair[0].end_time);
            prop_assert!(pair[1].start_time - pair[0].end_time > TOLERANCE - 1e-9);
        }
    }

    #[test]
    fn test_every_input_is_covered(ranges in watched_ranges()) {
        let merged = merge_intervals(ranges.clone(), TOLERANCE);
        for range in &ranges {
            prop_assert!(
                merged
                    .iter()
                    .any(|m| m.start_time <= range.start_time && range.end_time <= m.end_time),
                "{:?} not covered by {:?}",
                range,
                merged
            );
        }
    }

    #[test]
    fn test_unique_time_within_span(ranges in watched_ranges()) {
        let lowest = ranges.iter().map(|r| r.start_time).fold(f64::INFINITY, f64::min);
        let highest = ranges.iter().map(|r| r.end_time).fold(f64::NEG_INFINITY, f64::max);
        let longest = ranges.iter().map(TimeRange::duration).fold(0.0, f64::max);

        let unique = unique_seconds(&merge_intervals(ranges, TOLERANCE));

        prop_assert!(unique <= highest - lowest + 1e-9);
        prop_assert!(unique + 1e-9 >= longest);
    }

    // Without tolerance, merging is a plain union: overlaps only ever remove time.
    #[test]
    fn test_unique_time_never_exceeds_raw_total(ranges in watched_ranges()) {
        let raw = raw_total(&ranges);
        let overlap = largest_overlap(&ranges);

        let unique = unique_seconds(&merge_intervals(ranges, 0.0));

        prop_assert!(unique <= raw + 1e-6);
        if overlap <= 0.0 {
            prop_assert!((unique - raw).abs() < 1e-6);
        } else {
            prop_assert!(unique <= raw - overlap + 1e-6);
        }
    }

    // Gaps under the tolerance are absorbed, adding at most that much per join.
    #[test]
    fn test_tolerance_bounds_absorbed_gaps(ranges in watched_ranges()) {
        let raw = raw_total(&ranges);
        let joins = ranges.len().saturating_sub(1);

        let unique = unique_seconds(&merge_intervals(ranges, TOLERANCE));

        prop_assert!(unique <= raw + TOLERANCE * joins as f64 + 1e-6);
    }
}
