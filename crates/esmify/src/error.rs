//! Error types for CommonJS to ESM conversion

use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while selecting, parsing or rewriting files
#[derive(Error, Debug, Diagnostic)]
pub enum EsmError {
    /// The root of the file tree (or a file it reported) does not exist
    #[error("Path not found: {}", .0.display())]
    #[diagnostic(
        code(esmify::not_found),
        help("check the root path passed to the converter")
    )]
    NotFound(PathBuf),

    /// Source text could not be parsed
    #[error("Failed to parse {}: {message}", path.display())]
    #[diagnostic(code(esmify::parse_failure))]
    ParseFailure { path: PathBuf, message: String },

    /// An include or exclude pattern is not a valid glob
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(esmify::invalid_glob),
        help("supported syntax: `*`, `**` and brace lists such as `*.{{js,ts}}`")
    )]
    InvalidGlob { pattern: String, reason: String },

    /// The underlying file tree failed to read or write
    #[error("I/O error on {}: {message}", path.display())]
    #[diagnostic(code(esmify::io))]
    Io { path: PathBuf, message: String },
}

impl EsmError {
    /// Create a NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }

    /// Create a ParseFailure error
    pub fn parse_failure(path: &Path, message: impl Into<String>) -> Self {
        Self::ParseFailure {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Create an InvalidGlob error
    pub fn invalid_glob(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidGlob {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    /// Wrap an I/O error with the path it happened on
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound(path.to_path_buf());
        }
        Self::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, EsmError>;
