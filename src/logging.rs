//! File-backed tracing setup.
//!
//! The terminal belongs to the dashboard while it runs, so log lines go to a
//! file instead of stderr. Verbosity follows `RUST_LOG` and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{DashboardError, DashboardResult};

pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber writing to `path`.
///
/// Returns the log file in use, or `None` when no location is known and
/// logging stays disabled.
pub fn init(path: Option<&Path>) -> DashboardResult<Option<PathBuf>> {
    let Some(path) = path else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| DashboardError::Logging {
            message: err.to_string(),
        })?;

    tracing::info!(log_file = %path.display(), "logging initialized");
    Ok(Some(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_disables_logging() {
        assert_eq!(init(None).unwrap(), None);
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending
        let err = init(Some(dir.path())).unwrap_err();
        assert!(matches!(err, DashboardError::Io(_)));
    }
}
