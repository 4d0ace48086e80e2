//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for recording and inspecting video watch progress.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "vista")]
#[command(about = "Track unique watch time and resume points for course videos")]
#[command(version)]
pub struct Cli {
    /// Use this database file instead of the one under the data root
    #[arg(long = "database", global = true, env = "VISTA_DATABASE")]
    pub database: Option<PathBuf>,

    /// Enable verbose/debug output and print tracking counters
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
