//! Core services - the application's business logic layer.
//!
//! This module contains high-level service abstractions that orchestrate
//! between ports (trait interfaces) and the tracking engine. Services here
//! are pure orchestrators - they don't know about concrete implementations.

mod app_core;
mod key_lock;
mod progress_service;
mod settings_service;
mod video_service;

pub use app_core::AppCore;
pub use progress_service::{ProgressOutcome, ProgressService, Rejection};
pub use settings_service::SettingsService;
pub use video_service::VideoService;
