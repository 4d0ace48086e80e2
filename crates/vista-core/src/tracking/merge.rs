//! Interval merging.

use crate::domain::TimeRange;

/// Merge watched ranges into a sorted, non-overlapping set.
///
/// Degenerate ranges (`start >= end`, including NaN bounds) are dropped
/// first. Ranges whose start falls within `tolerance` seconds of the current
/// merged end are folded into it, absorbing sub-tolerance reporting jitter.
/// Input order does not matter and the result never aliases the input.
pub fn merge_intervals<I>(ranges: I, tolerance: f64) -> Vec<TimeRange>
where
    I: IntoIterator<Item = TimeRange>,
{
    let mut sorted: Vec<TimeRange> = ranges.into_iter().filter(TimeRange::is_valid).collect();
    sorted.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

    let mut merged: Vec<TimeRange> = Vec::with_capacity(sorted.len());
    for next in sorted {
        match merged.pop() {
            Some(current) if next.start_time <= current.end_time + tolerance => {
                merged.push(TimeRange::new(
                    current.start_time,
                    current.end_time.max(next.end_time),
                ));
            }
            Some(current) => {
                merged.push(current);
                merged.push(next);
            }
            None => merged.push(next),
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 0.1;

    fn r(start: f64, end: f64) -> TimeRange {
        TimeRange::new(start, end)
    }

    fn total_raw(ranges: &[TimeRange]) -> f64 {
        ranges.iter().map(TimeRange::duration).sum()
    }

    fn total_merged(ranges: &[TimeRange]) -> f64 {
        crate::tracking::unique_seconds(&merge_intervals(ranges.iter().copied(), TOL))
    }

    fn sample_sets() -> Vec<Vec<TimeRange>> {
        vec![
            vec![],
            vec![r(0.0, 10.0)],
            vec![r(0.0, 10.0), r(9.0, 20.0)],
            vec![r(0.0, 10.0), r(20.0, 30.0)],
            vec![r(40.0, 45.0), r(0.0, 5.0), r(4.0, 12.0), r(30.0, 41.0), r(11.95, 13.0)],
            vec![r(0.0, 100.0), r(10.0, 20.0), r(50.0, 60.0)],
            vec![r(5.0, 5.0), r(7.0, 3.0), r(1.0, 2.0)],
            vec![r(0.0, 1.0), r(1.05, 2.0), r(2.2, 3.0), r(2.95, 4.0)],
        ]
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_intervals(Vec::new(), TOL).is_empty());
    }

    #[test]
    fn test_single_interval_is_copied() {
        let input = vec![r(3.0, 8.0)];
        let merged = merge_intervals(input.iter().copied(), TOL);
        assert_eq!(merged, input);
    }

    #[test]
    fn test_overlapping_pair_merges() {
        let merged = merge_intervals(vec![r(0.0, 10.0), r(9.0, 20.0)], TOL);
        assert_eq!(merged, vec![r(0.0, 20.0)]);
    }

    #[test]
    fn test_gap_keeps_two_ranges() {
        let merged = merge_intervals(vec![r(0.0, 10.0), r(20.0, 30.0)], TOL);
        assert_eq!(merged, vec![r(0.0, 10.0), r(20.0, 30.0)]);
    }

    #[test]
    fn test_jitter_within_tolerance_merges() {
        let merged = merge_intervals(vec![r(0.0, 10.0), r(10.08, 15.0)], TOL);
        assert_eq!(merged, vec![r(0.0, 15.0)]);

        let split = merge_intervals(vec![r(0.0, 10.0), r(10.2, 15.0)], TOL);
        assert_eq!(split.len(), 2);
    }

    #[test]
    fn test_contained_range_is_absorbed() {
        let merged = merge_intervals(vec![r(0.0, 100.0), r(10.0, 20.0)], TOL);
        assert_eq!(merged, vec![r(0.0, 100.0)]);
    }

    #[test]
    fn test_degenerate_ranges_are_dropped() {
        let merged = merge_intervals(vec![r(5.0, 5.0), r(7.0, 3.0), r(f64::NAN, 2.0)], TOL);
        assert!(merged.is_empty());

        let merged = merge_intervals(vec![r(5.0, 5.0), r(1.0, 2.0)], TOL);
        assert_eq!(merged, vec![r(1.0, 2.0)]);
    }

    #[test]
    fn test_unsorted_input() {
        let merged = merge_intervals(vec![r(20.0, 30.0), r(0.0, 10.0), r(5.0, 21.0)], TOL);
        assert_eq!(merged, vec![r(0.0, 30.0)]);
    }

    #[test]
    fn test_merge_is_idempotent() {
        for set in sample_sets() {
            let once = merge_intervals(set.clone(), TOL);
            let twice = merge_intervals(once.clone(), TOL);
            assert_eq!(once, twice, "set {set:?}");
        }
    }

    #[test]
    fn test_merge_is_order_independent() {
        for set in sample_sets() {
            let expected = merge_intervals(set.clone(), TOL);

            let mut reversed = set.clone();
            reversed.reverse();
            assert_eq!(merge_intervals(reversed, TOL), expected);

            for shift in 0..set.len() {
                let mut rotated = set.clone();
                rotated.rotate_left(shift);
                assert_eq!(merge_intervals(rotated, TOL), expected);
            }
        }
    }

    #[test]
    fn test_adjacent_output_ranges_are_separated() {
        for set in sample_sets() {
            let merged = merge_intervals(set, TOL);
            for pair in merged.windows(2) {
                assert!(pair[0].end_time + TOL < pair[1].start_time, "{pair:?}");
            }
            assert!(merged.iter().all(TimeRange::is_valid));
        }
    }

    #[test]
    fn test_unique_time_never_exceeds_raw_time() {
        for set in sample_sets() {
            assert!(total_merged(&set) <= total_raw(&set) + 1e-9, "set {set:?}");
        }

        let disjoint = vec![r(0.0, 10.0), r(20.0, 30.0)];
        assert!((total_merged(&disjoint) - total_raw(&disjoint)).abs() < 1e-9);

        let overlapping = vec![r(0.0, 10.0), r(9.0, 20.0)];
        assert!(total_merged(&overlapping) < total_raw(&overlapping));
    }
}
