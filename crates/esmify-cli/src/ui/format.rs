//! Formatting utilities for durations, rewrite counts and run summaries.

use super::messages::paint;
use console::Term;
use esmify::{ConvertReport, RewriteStats};
use owo_colors::Style;
use std::path::Path;
use std::time::Duration;

/// Format duration in human-readable format.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use esmify_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Summarize rewrite counts, omitting zero entries.
///
/// ```
/// use esmify::RewriteStats;
/// use esmify_cli::ui::format_stats;
///
/// let stats = RewriteStats { exports: 1, imports: 2, ..Default::default() };
/// assert_eq!(format_stats(&stats), "(1 export, 2 imports)");
/// assert_eq!(format_stats(&RewriteStats::default()), "(unchanged)");
/// ```
pub fn format_stats(stats: &RewriteStats) -> String {
    let parts: Vec<String> = [
        (stats.exports, "export"),
        (stats.imports, "import"),
        (stats.inline_calls, "inline require"),
    ]
    .into_iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, noun)| {
        if count == 1 {
            format!("1 {noun}")
        } else {
            format!("{count} {noun}s")
        }
    })
    .collect();

    if parts.is_empty() {
        "(unchanged)".to_string()
    } else {
        format!("({})", parts.join(", "))
    }
}

/// Print a table of changed files and run totals to stderr.
pub fn print_conversion_summary(root: &Path, report: &ConvertReport, elapsed: Duration) {
    let term = Term::stderr();
    let width = (term.size().1 as usize).min(80);

    let title = if report.dry_run {
        "Conversion Summary (dry run)"
    } else {
        "Conversion Summary"
    };
    eprintln!("\n{}", paint(title, Style::new().bold().underline()));
    eprintln!("{}", "─".repeat(width));

    for file in report.changed_files() {
        eprintln!(
            "  {} {} {}",
            paint("▸", Style::new().blue()),
            file.relative,
            paint(format_stats(&file.stats), Style::new().dimmed())
        );
    }

    eprintln!("{}", "─".repeat(width));

    let totals = report.totals();
    eprintln!(
        "  {} {} changed, {} scanned, {} dir(s) pruned under {} in {}",
        paint("Total:", Style::new().bold()),
        report.changed_count(),
        report.scanned,
        report.pruned,
        root.display(),
        format_duration(elapsed)
    );
    if totals.total() > 0 {
        eprintln!("  {}", paint(format_stats(&totals), Style::new().dimmed()));
    }
}
