//! Error handling for the esmify CLI.
//!
//! The error hierarchy follows these principles:
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Domain-specific errors** (`ConfigError`) carry field-level detail
//! - **Conversion errors** from the library are wrapped unchanged, so their
//!   diagnostic codes survive into the miette report
//! - **Context helpers** attach paths at call sites
//!
//! # Example
//!
//! ```rust,no_run
//! use esmify_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_source(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod report;

pub use report::cli_error_to_miette;

use esmify::EsmError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (missing file, bad values, unknown project)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Selection, parse or write failures from the converter
    #[error(transparent)]
    Convert(#[from] EsmError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `check` found files that still use CommonJS
    #[error("{count} file(s) would be rewritten\n\nHint: Run 'esmify convert' to apply the changes")]
    ChangesDetected {
        /// Number of files that would change
        count: usize,
    },
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file given with `--config` doesn't exist
    #[error("Config file not found: {}\n\nHint: Create an esmify.config.json file or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// `--project` names a project missing from the config
    #[error("Project '{name}' not found in config\n\nHint: {hint}")]
    ProjectNotFound {
        /// Requested project name
        name: String,
        /// Lists the configured projects
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding path context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into `FileNotFound` for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                CliError::Convert(EsmError::NotFound(_)) => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }
}
