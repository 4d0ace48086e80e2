//! Path utilities for vista data directories.
//!
//! Provides the canonical locations for the database and the optional
//! `.env` file. Returns `PathBuf` and `PathError`; no terminal I/O.

mod database;
mod error;
mod platform;

pub use database::{database_path, database_path_in};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, env_file_path};
