//! Status message functions for terminal output.

use owo_colors::{OwoColorize, Stream, Style};
use std::fmt::Display;

pub(crate) fn paint<T: Display>(text: T, style: Style) -> String {
    text.if_supports_color(Stream::Stderr, |t| t.style(style))
        .to_string()
}

/// Print a success message to stderr.
///
/// ```no_run
/// use esmify_cli::ui::success;
///
/// success("Converted 12 file(s)");
/// ```
pub fn success(message: &str) {
    eprintln!("{} {}", paint("✓", Style::new().green().bold()), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", paint("ℹ", Style::new().blue().bold()), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        paint("⚠", Style::new().yellow().bold()),
        paint(message, Style::new().yellow())
    );
}
