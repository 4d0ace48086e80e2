//! Common test utilities.
//!
//! Wires an `AppCore` to an in-memory `SQLite` database with one seeded video.

#![allow(dead_code)]

use std::sync::Arc;

use vista_core::{AppCore, ProgressReport, TrackingSettings, TrackingStats, WatchReport};
use vista_db::TestDb;

pub const USER: i64 = 1;

pub struct Harness {
    pub db: TestDb,
    pub core: AppCore,
    pub stats: TrackingStats,
    pub video_id: i64,
}

impl Harness {
    pub async fn new(duration_seconds: f64) -> Self {
        Self::with_settings(duration_seconds, TrackingSettings::with_defaults()).await
    }

    pub async fn with_settings(duration_seconds: f64, settings: TrackingSettings) -> Self {
        let db = TestDb::new().await.expect("test database");
        let video = db
            .seed_video("Integration lecture", duration_seconds)
            .await
            .expect("seed video");
        let stats = TrackingStats::new();
        let core = AppCore::new(db.repos(), settings, Arc::new(stats.clone()));
        Self {
            db,
            core,
            stats,
            video_id: video.id,
        }
    }

    pub async fn watch(&self, start: f64, end: f64) -> ProgressReport {
        self.send(WatchReport::new(USER, self.video_id, start, end)).await
    }

    pub async fn complete(&self) -> ProgressReport {
        let video = self
            .core
            .videos()
            .require(self.video_id)
            .await
            .expect("video");
        self.send(WatchReport::completion_marker(
            USER,
            self.video_id,
            video.duration_seconds,
        ))
        .await
    }

    pub async fn send(&self, report: WatchReport) -> ProgressReport {
        let outcome = self.core.progress().ingest(report).await.expect("ingest");
        *outcome.report().expect("report accepted")
    }

    pub async fn stored(&self) -> Vec<(f64, f64)> {
        self.core
            .progress()
            .stored_intervals(USER, self.video_id)
            .await
            .expect("intervals")
            .iter()
            .map(|i| (i.start_time, i.end_time))
            .collect()
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
