//! Init command implementation
//!
//! Writes a modwrap.yaml describing the built-in manifest so it can be
//! edited, instead of living as constants inside the binary.

use std::path::PathBuf;

use crate::cli::InitArgs;
use crate::commands::helpers;
use crate::config::{BundlerConfig, CONFIG_FILE_NAME};
use crate::error::{ModwrapError, Result};

/// Run init command
pub fn run(dir: Option<PathBuf>, args: InitArgs) -> Result<()> {
    let root = helpers::resolve_root(dir)?;
    let path = root.join(CONFIG_FILE_NAME);

    if path.exists() && !args.force {
        return Err(ModwrapError::ConfigExists {
            path: path.display().to_string(),
        });
    }

    let yaml = BundlerConfig::defaults().to_yaml()?;
    std::fs::write(&path, yaml).map_err(|e| ModwrapError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    println!("wrote {}", path.display());
    Ok(())
}
