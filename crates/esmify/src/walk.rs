//! Depth-first traversal of a [`FileTree`] with glob filtering
//!
//! Paths handed to the filter are relative to the root and always use `/`,
//! whatever the platform separator.

use crate::error::{EsmError, Result};
use crate::glob::GlobFilter;
use crate::store::FileTree;
use std::path::Path;
use tracing::debug;

/// Counts gathered during a walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Files seen, eligible or not
    pub files: usize,
    /// Files handed to the callback
    pub eligible: usize,
    /// Directories skipped by an exclude glob
    pub pruned: usize,
}

/// Walk `root`, calling `on_file` for every eligible file
///
/// Children are visited in the order the tree returns them. The callback
/// receives the tree back so it can read and write while the walk is in
/// progress. The first error, from the tree or the callback, stops the walk.
///
/// A root that is itself a file is matched by its file name.
pub fn walk<T, F>(tree: &mut T, root: &Path, filter: &GlobFilter, mut on_file: F) -> Result<WalkStats>
where
    T: FileTree + ?Sized,
    F: FnMut(&mut T, &Path, &str) -> Result<()>,
{
    if !tree.exists(root) {
        return Err(EsmError::not_found(root));
    }

    let mut stats = WalkStats::default();

    if tree.is_file(root) {
        let relative = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        stats.files += 1;
        if filter.is_eligible(&relative) {
            stats.eligible += 1;
            on_file(tree, root, &relative)?;
        }
        return Ok(stats);
    }

    walk_dir(tree, root, "", filter, &mut stats, &mut on_file)?;
    Ok(stats)
}

fn walk_dir<T, F>(
    tree: &mut T,
    dir: &Path,
    prefix: &str,
    filter: &GlobFilter,
    stats: &mut WalkStats,
    on_file: &mut F,
) -> Result<()>
where
    T: FileTree + ?Sized,
    F: FnMut(&mut T, &Path, &str) -> Result<()>,
{
    for name in tree.children(dir)? {
        let path = dir.join(&name);
        let relative = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}/{name}")
        };

        if tree.is_file(&path) {
            stats.files += 1;
            if filter.is_eligible(&relative) {
                stats.eligible += 1;
                on_file(tree, &path, &relative)?;
            }
        } else if filter.is_excluded_dir(&relative) {
            debug!(dir = %relative, "pruned");
            stats.pruned += 1;
        } else {
            walk_dir(tree, &path, &relative, filter, stats, on_file)?;
        }
    }
    Ok(())
}
