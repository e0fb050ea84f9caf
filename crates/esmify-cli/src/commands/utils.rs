//! Shared utilities for command implementations.

use crate::cli::SelectionArgs;
use crate::config::EsmifyConfig;
use crate::error::{CliError, Result};
use esmify::{ConvertReport, NativeTree, convert_tree};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Resolve a path relative to a working directory.
///
/// If the path is absolute, returns it unchanged. Otherwise, joins it with
/// the working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {}", e),
        ))
    })
}

/// Load config, resolve the root and run the converter over the filesystem.
///
/// Shared by `convert` and `check`; `dry_run` forces a dry run regardless of
/// configuration.
pub fn run_conversion(
    selection: &SelectionArgs,
    dry_run: bool,
) -> Result<(PathBuf, ConvertReport, Duration)> {
    let cwd = get_cwd()?;
    let config = EsmifyConfig::load(selection, dry_run, &cwd)?;
    let root = config.resolve_root(selection, &cwd)?;

    let start = Instant::now();
    let mut tree = NativeTree::new();
    let report = convert_tree(&mut tree, &root, &config.convert_options())?;

    Ok((root, report, start.elapsed()))
}

/// Path of a reported file as shown to the user
pub fn display_path(root: &Path, relative: &str) -> String {
    if root.is_file() {
        root.display().to_string()
    } else {
        relative.to_string()
    }
}
