//! Shared helpers for command implementations

use std::path::{Path, PathBuf};

use crate::config::{BundlerConfig, CONFIG_FILE_NAME};
use crate::error::{ModwrapError, Result};

/// Resolve the root directory from the global --dir flag or the current directory
pub fn resolve_root(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| ModwrapError::IoError {
            message: format!("Failed to get current directory: {}", e),
        }),
    }
}

/// Load the effective configuration for `root`
///
/// An explicit --config path must exist. Without one, modwrap.yaml in the
/// root is used when present, and the built-in defaults when not.
pub fn load_config(root: &Path, config: Option<&Path>) -> Result<BundlerConfig> {
    match config {
        Some(path) => BundlerConfig::load(&root.join(path)),
        None => {
            let default_path = root.join(CONFIG_FILE_NAME);
            if default_path.exists() {
                BundlerConfig::load(&default_path)
            } else {
                Ok(BundlerConfig::defaults())
            }
        }
    }
}
