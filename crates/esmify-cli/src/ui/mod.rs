//! Terminal UI utilities for status lines and run summaries.
//!
//! All output here goes to stderr so stdout stays free for `print` and
//! `--json`.
//!
//! # Examples
//!
//! ```no_run
//! use esmify_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Converted 3 file(s)");
//! ui::warning("src/index.js would be rewritten");
//! ```

mod format;
mod messages;

pub use format::{format_duration, format_stats, print_conversion_summary};
pub use messages::{info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR wins over FORCE_COLOR
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on flags and environment.
///
/// Call once, early in main. `--no-color` always disables colors.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}
