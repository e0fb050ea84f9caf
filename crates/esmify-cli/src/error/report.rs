//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;

/// Convert CliError to miette Report
///
/// Library errors already implement `Diagnostic` and keep their codes and
/// help text; everything else is reported by message.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Convert(e) => Report::new(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}
