//! Check command implementation.
//!
//! Runs the conversion without writing and fails when any file would change.

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the check command.
///
/// # Errors
///
/// Returns `CliError::ChangesDetected` when at least one selected file still
/// contains a rewritable pattern, plus every error `convert` can return.
pub fn execute(args: CheckArgs) -> Result<()> {
    let (root, report, _) = utils::run_conversion(&args.selection, true)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        ui::info(&format!("Checked {} file(s)", report.files.len()));
        for file in report.changed_files() {
            ui::warning(&format!(
                "  {} {}",
                utils::display_path(&root, &file.relative),
                ui::format_stats(&file.stats)
            ));
        }
    }

    match report.changed_count() {
        0 => {
            if !args.json {
                ui::success("All files already use ES module syntax");
            }
            Ok(())
        }
        count => Err(CliError::ChangesDetected { count }),
    }
}
