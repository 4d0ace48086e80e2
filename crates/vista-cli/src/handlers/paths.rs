//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics.

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use vista_core::paths::{DATA_DIR_ENV, data_root, env_file_path};

use crate::presentation::print_json;

/// Execute the paths command.
///
/// `database` is the file the CLI actually opened, which differs from the
/// default location when `--database` is given.
pub fn execute(database: &Path, as_json: bool) -> Result<()> {
    let root = data_root()?;
    let env_file = env_file_path()?;

    if as_json {
        return print_json(&json!({
            "dataRoot": root.display().to_string(),
            "database": database.display().to_string(),
            "envFile": env_file.display().to_string(),
        }));
    }

    println!("data_root = {}", root.display());
    println!("database  = {}", database.display());
    println!("env_file  = {}", env_file.display());
    if std::env::var_os(DATA_DIR_ENV).is_some() {
        println!("(data root set by {DATA_DIR_ENV})");
    }
    Ok(())
}
