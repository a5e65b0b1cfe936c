//! Error types and handling for Modwrap
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors are grouped by domain: configuration, template, fragment, and
//! output. All of them abort the current operation immediately; there is no
//! retry or recovery layer.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Modwrap operations
#[derive(Error, Diagnostic, Debug)]
pub enum ModwrapError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(modwrap::config::not_found),
        help("Run 'modwrap init' to create a modwrap.yaml, or omit --config to use the built-in manifest")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(modwrap::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(modwrap::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(modwrap::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Configuration file already exists: {path}")]
    #[diagnostic(
        code(modwrap::config::exists),
        help("Pass --force to overwrite the existing file")
    )]
    ConfigExists { path: String },

    // Template errors
    #[error("Failed to read template file: {path}")]
    #[diagnostic(code(modwrap::template::read_failed))]
    TemplateReadFailed { path: String, reason: String },

    #[error("Failed to parse template: {reason}")]
    #[diagnostic(
        code(modwrap::template::parse_failed),
        help("Placeholders are written {{name}} with a non-empty identifier name")
    )]
    TemplateParseFailed { reason: String },

    #[error("Template placeholder '{name}' has no fragment in the manifest")]
    #[diagnostic(
        code(modwrap::template::placeholder_unbound),
        help("Add a fragment named '{name}' to the manifest, or remove the placeholder from the template")
    )]
    PlaceholderUnbound { name: String },

    #[error("Fragment '{name}' is never used by the template")]
    #[diagnostic(
        code(modwrap::template::fragment_unused),
        help("Remove the fragment from the manifest, or add a placeholder for '{name}' to the template")
    )]
    FragmentUnused { name: String },

    // Fragment errors
    #[error("Fragment '{name}' not found: {path}")]
    #[diagnostic(
        code(modwrap::fragment::not_found),
        help("Check the fragment paths in the manifest against the files on disk")
    )]
    FragmentNotFound { name: String, path: String },

    #[error("Failed to read fragment '{name}': {path}")]
    #[diagnostic(code(modwrap::fragment::read_failed))]
    FragmentReadFailed {
        name: String,
        path: String,
        reason: String,
    },

    // Output errors
    #[error("Failed to write bundle: {path}")]
    #[diagnostic(code(modwrap::bundle::write_failed))]
    BundleWriteFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to write file: {path}")]
    #[diagnostic(code(modwrap::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(modwrap::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ModwrapError {
    fn from(err: std::io::Error) -> Self {
        ModwrapError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for Modwrap operations
pub type Result<T> = miette::Result<T, ModwrapError>;
