//! Data root resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "VISTA_DATA_DIR";

/// Get the root directory for application data (database, `.env`).
///
/// Resolution order:
/// 1. `VISTA_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/vista`)
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    resolve_data_root(env::var_os(DATA_DIR_ENV).map(PathBuf::from), dirs::data_local_dir())
}

pub(super) fn resolve_data_root(
    override_dir: Option<PathBuf>,
    system_dir: Option<PathBuf>,
) -> Result<PathBuf, PathError> {
    let root = match override_dir.filter(|p| !p.as_os_str().is_empty()) {
        Some(path) => path,
        None => system_dir.ok_or(PathError::NoDataDir)?.join("vista"),
    };
    ensure_dir(&root)?;
    Ok(root)
}

pub(super) fn ensure_dir(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Path to the `.env` file in the data root.
pub fn env_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(".env"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let temp = tempfile::tempdir().unwrap();
        let custom = temp.path().join("custom");
        let root =
            resolve_data_root(Some(custom.clone()), Some(temp.path().join("system"))).unwrap();
        assert_eq!(root, custom);
        assert!(custom.is_dir());
    }

    #[test]
    fn test_system_dir_gets_app_subdir() {
        let temp = tempfile::tempdir().unwrap();
        let root = resolve_data_root(None, Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(root, temp.path().join("vista"));
    }

    #[test]
    fn test_empty_override_ignored() {
        let temp = tempfile::tempdir().unwrap();
        let root =
            resolve_data_root(Some(PathBuf::new()), Some(temp.path().to_path_buf())).unwrap();
        assert!(root.ends_with("vista"));
    }

    #[test]
    fn test_no_data_dir() {
        assert!(matches!(
            resolve_data_root(None, None),
            Err(PathError::NoDataDir)
        ));
    }

    #[test]
    fn test_file_in_the_way() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("occupied");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            resolve_data_root(Some(file), None),
            Err(PathError::NotADirectory(_))
        ));
    }
}
