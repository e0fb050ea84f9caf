//! Convert command implementation.
//!
//! Rewrites every selected file in place (or reports, with `--dry-run`).

use crate::cli::ConvertArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use tracing::debug;

/// Execute the convert command.
///
/// # Steps
///
/// 1. Load esmify.config.json, `ESMIFY_*` variables and flags
/// 2. Resolve the root (positional, `--project`, or the working directory)
/// 3. Convert each selected file, stopping at the first failure
/// 4. Print the summary (or the JSON report with `--json`)
///
/// # Errors
///
/// Returns errors for invalid configuration, a missing root or project, and
/// any file that fails to parse or write.
pub fn execute(args: ConvertArgs) -> Result<()> {
    let (root, report, elapsed) = utils::run_conversion(&args.selection, args.dry_run)?;
    debug!(root = %root.display(), files = report.files.len(), "convert finished");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    ui::print_conversion_summary(&root, &report, elapsed);

    if report.dry_run {
        ui::info("Dry run: no files were written");
    } else if report.changed_count() == 0 {
        ui::success("Nothing to convert");
    } else {
        ui::success(&format!(
            "Converted {} of {} file(s)",
            report.changed_count(),
            report.files.len()
        ));
    }
    Ok(())
}
