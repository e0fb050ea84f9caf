//! esmify CLI - rewrite CommonJS sources into ES modules.
//!
//! This crate provides the command-line interface for the `esmify` library,
//! exposing tree conversion, CI checks and single-file previews with
//! actionable error messages.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`config`] - `esmify.config.json` loading and validation
//! - [`commands`] - `convert`, `check` and `print`
//! - [`error`] - Error types with hints, converted to miette reports
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status lines and run summaries
//!
//! # Example
//!
//! ```rust,no_run
//! use esmify_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
