//! End-to-end ingestion against the SQLite adapters.

mod common;

use std::sync::Arc;

use common::{Harness, USER, approx};
use vista_core::{
    AppCore, NoopEmitter, ProgressOutcome, ProgressReport, Rejection, SettingsUpdate, TimeRange,
    TrackingSettings, WatchReport,
};

#[tokio::test]
async fn overlapping_reports_merge_into_one_range() {
    let h = Harness::new(100.0).await;

    h.watch(0.0, 10.0).await;
    let report = h.watch(9.0, 20.0).await;

    assert!(approx(report.unique_seconds_watched, 20.0));
    assert_eq!(report.progress_percentage, 20);
    let merged = h.core.progress().merged_intervals(USER, h.video_id).await.unwrap();
    assert_eq!(merged, vec![TimeRange::new(0.0, 20.0)]);
}

#[tokio::test]
async fn gap_leaves_two_ranges() {
    let h = Harness::new(100.0).await;

    h.watch(0.0, 10.0).await;
    let report = h.watch(20.0, 30.0).await;

    assert!(approx(report.unique_seconds_watched, 20.0));
    assert_eq!(report.progress_percentage, 20);
    let merged = h.core.progress().merged_intervals(USER, h.video_id).await.unwrap();
    assert_eq!(merged.len(), 2);
}

#[tokio::test]
async fn scrub_only_credits_last_five_seconds() {
    let h = Harness::new(100.0).await;

    let report = h.watch(5.0, 70.0).await;

    assert_eq!(h.stored().await, vec![(65.0, 70.0)]);
    assert!(approx(report.unique_seconds_watched, 5.0));
    assert!(approx(report.last_position, 70.0));
    assert_eq!(h.stats.snapshot().skips_detected, 1);
}

#[tokio::test]
async fn coverage_threshold_boundaries() {
    // 49 of 50 seconds is 98%, already above the completion ratio.
    let h = Harness::new(50.0).await;
    h.watch(0.0, 40.0).await;
    let report = h.watch(40.0, 49.0).await;
    assert_eq!(report.progress_percentage, 98);

    // Exactly 95% and just under.
    let h = Harness::new(100.0).await;
    h.watch(0.0, 50.0).await;
    let report = h.watch(50.0, 95.0).await;
    assert_eq!(report.progress_percentage, 95);

    let h = Harness::new(100.0).await;
    h.watch(0.0, 50.0).await;
    let report = h.watch(50.0, 94.9).await;
    assert_eq!(report.progress_percentage, 95);
    assert!(report.unique_seconds_watched < 95.0);
}

#[tokio::test]
async fn first_completion_marker_resumes_at_five_seconds() {
    let h = Harness::new(100.0).await;

    let report = h.complete().await;

    assert!(approx(report.last_position, 5.0));
    assert_eq!(h.stats.snapshot().completion_markers, 1);
}

#[tokio::test]
async fn extension_needs_matching_start() {
    let h = Harness::new(100.0).await;

    h.watch(0.0, 5.0).await;
    h.watch(4.95, 10.0).await;
    assert_eq!(h.stored().await.len(), 2);

    let h = Harness::new(100.0).await;
    h.watch(0.0, 5.0).await;
    h.watch(0.05, 10.0).await;
    assert_eq!(h.stored().await, vec![(0.0, 10.0)]);

    // Same start but no forward progress inserts rather than shrinking.
    let h = Harness::new(100.0).await;
    h.watch(0.0, 5.0).await;
    h.watch(0.0, 3.0).await;
    assert_eq!(h.stored().await.len(), 2);
}

#[tokio::test]
async fn periodic_ticks_keep_one_row() {
    let h = Harness::new(600.0).await;

    let mut end = 2.0;
    while end <= 40.0 {
        h.watch(10.0, 10.0 + end).await;
        end += 2.0;
    }

    assert_eq!(h.stored().await, vec![(10.0, 50.0)]);
    let snapshot = h.stats.snapshot();
    assert_eq!(snapshot.intervals_inserted, 1);
    assert_eq!(snapshot.intervals_extended, 19);
}

#[tokio::test]
async fn completion_marker_never_moves_resume_point() {
    let h = Harness::new(100.0).await;

    h.watch(0.0, 30.0).await;
    h.watch(30.0, 42.5).await;
    let before = h.core.progress().get_progress(USER, h.video_id).await.unwrap();

    let report = h.complete().await;

    assert!(approx(report.last_position, 42.5));
    assert!(approx(
        before.report().unwrap().last_position,
        report.last_position
    ));
}

#[tokio::test]
async fn completion_marker_lifts_the_cap() {
    let strict = TrackingSettings {
        completion_ratio: 1.0,
        ..TrackingSettings::with_defaults()
    };
    let h = Harness::with_settings(100.0, strict).await;

    h.watch(0.0, 50.0).await;
    let organic = h.watch(50.0, 99.6).await;
    assert_eq!(organic.progress_percentage, 99);

    let marked = h
        .send(WatchReport::new(USER, h.video_id, 0.0, 99.7).as_completion())
        .await;
    assert!(marked.unique_seconds_watched < 100.0);
    assert_eq!(marked.progress_percentage, 100);

    // Lookups apply the cap to the stored value without a marker.
    let looked_up = h.core.progress().get_progress(USER, h.video_id).await.unwrap();
    assert_eq!(looked_up.report().unwrap().progress_percentage, 99);
}

#[tokio::test]
async fn get_progress_defaults_and_not_found() {
    let h = Harness::new(100.0).await;

    let empty = h.core.progress().get_progress(USER, h.video_id).await.unwrap();
    assert_eq!(empty, ProgressOutcome::Reported(ProgressReport::empty()));

    let missing = h.core.progress().get_progress(USER, 999).await.unwrap();
    assert_eq!(missing.rejection(), Some(Rejection::VideoNotFound));
}

#[tokio::test]
async fn rejected_reports_leave_no_trace() {
    let h = Harness::new(100.0).await;
    let progress = h.core.progress();

    let outcomes = [
        progress.ingest(WatchReport::new(USER, h.video_id, 10.0, 5.0)).await.unwrap(),
        progress.ingest(WatchReport::new(USER, h.video_id, 0.0, f64::INFINITY)).await.unwrap(),
        progress.ingest(WatchReport::new(USER, 999, 0.0, 5.0)).await.unwrap(),
    ];

    assert_eq!(
        outcomes.map(|o| o.rejection()),
        [
            Some(Rejection::InvalidInterval),
            Some(Rejection::NonFiniteTime),
            Some(Rejection::VideoNotFound),
        ]
    );
    assert!(h.stored().await.is_empty());
    let current = progress.get_progress(USER, h.video_id).await.unwrap();
    assert_eq!(current.report(), Some(&ProgressReport::empty()));
}

#[tokio::test]
async fn reports_past_the_end_are_discarded() {
    let h = Harness::new(100.0).await;

    let report = h.watch(101.0, 104.0).await;

    assert!(h.stored().await.is_empty());
    assert!(approx(report.last_position, 104.0));
    assert_eq!(h.stats.snapshot().intervals_discarded, 1);
}

#[tokio::test]
async fn users_are_tracked_independently() {
    let h = Harness::new(100.0).await;

    h.watch(0.0, 30.0).await;
    let other = h
        .send(WatchReport::new(USER + 1, h.video_id, 50.0, 60.0))
        .await;

    assert!(approx(other.unique_seconds_watched, 10.0));
    let first = h.core.progress().get_progress(USER, h.video_id).await.unwrap();
    assert!(approx(first.report().unwrap().unique_seconds_watched, 30.0));
}

#[tokio::test]
async fn concurrent_reports_for_one_viewer_all_land() {
    let h = Harness::new(100.0).await;
    let progress = h.core.progress();

    let (a, b, c) = tokio::join!(
        progress.ingest(WatchReport::new(USER, h.video_id, 0.0, 2.0)),
        progress.ingest(WatchReport::new(USER, h.video_id, 0.0, 4.0)),
        progress.ingest(WatchReport::new(USER, h.video_id, 0.0, 6.0)),
    );
    for outcome in [a, b, c] {
        assert!(outcome.unwrap().is_success());
    }

    let merged = progress.merged_intervals(USER, h.video_id).await.unwrap();
    assert_eq!(merged, vec![TimeRange::new(0.0, 6.0)]);
    let current = progress.get_progress(USER, h.video_id).await.unwrap();
    assert!(approx(current.report().unwrap().unique_seconds_watched, 6.0));
    assert_eq!(h.stats.snapshot().progress_updates, 3);
}

#[tokio::test]
async fn settings_changes_apply_to_new_cores() {
    let h = Harness::new(300.0).await;

    h.core
        .settings()
        .update(SettingsUpdate {
            skip_threshold_secs: Some(120.0),
            ..Default::default()
        })
        .await
        .unwrap();

    let core = AppCore::load(h.db.repos(), Arc::new(NoopEmitter::new()))
        .await
        .unwrap();
    let outcome = core
        .progress()
        .ingest(WatchReport::new(USER, h.video_id, 0.0, 90.0))
        .await
        .unwrap();

    // 90 s is under the new threshold, so it is credited in full.
    assert!(approx(outcome.report().unwrap().unique_seconds_watched, 90.0));
}
