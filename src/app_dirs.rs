//! Filesystem locations for per-user application files.
//!
//! Everything lives under a single `.samplab` folder in the OS config
//! directory (e.g. `%APPDATA%` on Windows). A `SAMPLAB_HOME` environment
//! variable overrides the base for portable setups. Only log files are
//! stored here; sample data itself is never written to disk.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory under the OS config root.
pub const APP_DIR_NAME: &str = ".samplab";

const HOME_ENV: &str = "SAMPLAB_HOME";

/// Errors raised while resolving or preparing application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// No base config directory could be resolved on this platform.
    #[error("no base directory available for application files")]
    NoBaseDir,
    /// Creating a directory failed.
    #[error("failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Return the logs directory, creating it if needed.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    let base = base_dir().ok_or(AppDirError::NoBaseDir)?;
    ensure_dir(app_dir_under(&base).join("logs"))
}

fn app_dir_under(base: &Path) -> PathBuf {
    base.join(APP_DIR_NAME)
}

fn base_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(HOME_ENV) {
        return Some(PathBuf::from(path));
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, AppDirError> {
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn app_dir_nests_under_the_base() {
        let dir = app_dir_under(Path::new("/tmp/base"));
        assert_eq!(dir, Path::new("/tmp/base").join(APP_DIR_NAME));
    }

    #[test]
    fn ensure_dir_creates_missing_parents() {
        let base = tempdir().unwrap();
        let target = app_dir_under(base.path()).join("logs");
        let created = ensure_dir(target.clone()).unwrap();
        assert_eq!(created, target);
        assert!(created.is_dir());
    }
}
