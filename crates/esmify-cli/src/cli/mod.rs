//! Command-line interface definition for esmify.
//!
//! This module defines the CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `esmify convert` - Rewrite every selected file in place
//! - `esmify check` - Report files that would change, without writing
//! - `esmify print` - Print one converted file to stdout

mod commands;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConvertArgs, PrintArgs, SelectionArgs};
pub use validation::parse_glob;

/// esmify - rewrite CommonJS modules into ES modules
#[derive(Parser, Debug)]
#[command(
    name = "esmify",
    version,
    about = "Rewrite CommonJS require/module.exports into ES module syntax",
    long_about = "esmify walks a source tree and rewrites `require(...)` and \
                  `module.exports = ...` into `import` and `export default`.\n\
                  Code it does not rewrite is copied through byte for byte."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows every visited file, pruned directory and rewrite count.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
