//! Command handlers that delegate to AppCore.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call AppCore methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT access repositories directly or contain tracking logic.

pub mod config;
pub mod intervals;
pub mod paths;
pub mod progress;
pub mod video;
pub mod watch;
