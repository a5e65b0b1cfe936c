//! Bundler configuration (modwrap.yaml)
//!
//! The configuration carries everything that was a hard-coded constant in
//! earlier revisions of this tool: the ordered fragment manifest, the output
//! path, and the confirmation message. A `BundlerConfig` value is handed to
//! the bundler explicitly, so tests can point the output at a temporary
//! location without touching global state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ModwrapError, Result};

/// Name of the configuration file looked up in the root directory
pub const CONFIG_FILE_NAME: &str = "modwrap.yaml";

/// One entry of the fragment manifest: a placeholder name and the file
/// whose contents are substituted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentSpec {
    /// Placeholder name the fragment binds to
    pub name: String,

    /// Path to the fragment file, relative to the root directory
    pub path: PathBuf,
}

impl FragmentSpec {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Bundler configuration from modwrap.yaml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundlerConfig {
    /// Ordered fragment manifest; fragments are read in this order
    pub fragments: Vec<FragmentSpec>,

    /// Path the bundle is written to, relative to the root directory
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Confirmation message printed after a successful build
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Path to a template file; the built-in wrapper is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

fn default_output() -> PathBuf {
    PathBuf::from("mips.js")
}

impl BundlerConfig {
    /// The manifest the tool was born with: five fragment files wrapped
    /// into `mips.js`.
    pub fn defaults() -> Self {
        Self {
            fragments: vec![
                FragmentSpec::new("utils", "utils.js"),
                FragmentSpec::new("text_parser", "text.js"),
                FragmentSpec::new("data_parser", "data.js"),
                FragmentSpec::new("parser", "parser.js"),
                FragmentSpec::new("runtime", "runtime.js"),
            ],
            output: default_output(),
            message: None,
            template: None,
        }
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str, origin: &Path) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ModwrapError::ConfigParseFailed {
                path: origin.display().to_string(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = match std::fs::read_to_string(path) {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ModwrapError::ConfigNotFound {
                    path: path.display().to_string(),
                });
            }
            Err(e) => {
                return Err(ModwrapError::ConfigReadFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        };
        Self::from_yaml(&yaml, path)
    }

    /// Serialize configuration to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ModwrapError::ConfigInvalid {
            message: e.to_string(),
        })
    }

    /// Validate the manifest
    ///
    /// Names must be unique, non-empty identifiers; paths must be non-empty.
    /// The manifest itself must not be empty.
    pub fn validate(&self) -> Result<()> {
        if self.fragments.is_empty() {
            return Err(ModwrapError::ConfigInvalid {
                message: "fragment manifest is empty".to_string(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for spec in &self.fragments {
            if !is_valid_name(&spec.name) {
                return Err(ModwrapError::ConfigInvalid {
                    message: format!(
                        "invalid fragment name '{}' (expected an identifier)",
                        spec.name
                    ),
                });
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(ModwrapError::ConfigInvalid {
                    message: format!("duplicate fragment name '{}'", spec.name),
                });
            }
            if spec.path.as_os_str().is_empty() {
                return Err(ModwrapError::ConfigInvalid {
                    message: format!("fragment '{}' has an empty path", spec.name),
                });
            }
        }

        if self.output.as_os_str().is_empty() {
            return Err(ModwrapError::ConfigInvalid {
                message: "output path is empty".to_string(),
            });
        }

        Ok(())
    }

    /// Confirmation message for a successful build
    pub fn message(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => format!("script written to {}", self.output.display()),
        }
    }
}

/// Placeholder names are identifiers: `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
