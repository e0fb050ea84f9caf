use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::parse_glob;

/// Available esmify subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite CommonJS sources in place
    ///
    /// Walks ROOT (default: current directory), selects files with the
    /// include/exclude globs and writes each converted file back.
    Convert(ConvertArgs),

    /// Report files that would be rewritten
    ///
    /// Runs the same selection and conversion as `convert` without writing.
    /// Exits with an error when any file would change, for use in CI.
    Check(CheckArgs),

    /// Print one converted file to stdout
    ///
    /// The file on disk is left untouched.
    Print(PrintArgs),
}

/// File selection shared by `convert` and `check`
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Directory (or single file) to convert
    ///
    /// Defaults to the current directory.
    #[arg(value_name = "ROOT", conflicts_with = "project")]
    pub root: Option<PathBuf>,

    /// Convert a project declared under `projects` in the config file
    #[arg(short, long, value_name = "NAME")]
    pub project: Option<String>,

    /// Only convert files matching this glob (repeatable)
    ///
    /// Replaces the configured include globs.
    ///
    /// Examples:
    ///   esmify convert --include 'src/**/*.ts'
    ///   esmify convert -i '**/*.{js,cjs}' -i 'bin/*'
    #[arg(short, long = "include", value_name = "GLOB", value_parser = parse_glob)]
    pub include: Vec<String>,

    /// Skip files and prune directories matching this glob (repeatable)
    ///
    /// Replaces the configured exclude globs, including the built-in
    /// dependency and build directories.
    #[arg(short, long = "exclude", value_name = "GLOB", value_parser = parse_glob)]
    pub exclude: Vec<String>,

    /// Path to the config file
    ///
    /// Defaults to esmify.config.json in the current directory, if present.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the convert command
#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run report as JSON to stdout
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Print the run report as JSON to stdout
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the print command
#[derive(Args, Debug, Clone)]
pub struct PrintArgs {
    /// Source file to convert
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}
