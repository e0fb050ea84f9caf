//! Tree-level pipeline: select files, rewrite each, write them back

use crate::engine::{RewriteEngine, RewriteStats};
use crate::error::{EsmError, Result};
use crate::options::ConvertOptions;
use crate::store::FileTree;
use crate::walk::walk;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome for one eligible file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: PathBuf,
    /// Root-relative, `/`-separated
    pub relative: String,
    /// Whether the rewritten text differs from the original
    pub changed: bool,
    pub stats: RewriteStats,
}

/// Outcome of a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertReport {
    /// Eligible files in visit order
    pub files: Vec<FileReport>,
    /// Files seen by the walk, eligible or not
    pub scanned: usize,
    /// Directories skipped by an exclude glob
    pub pruned: usize,
    pub dry_run: bool,
}

impl ConvertReport {
    /// Files whose content changed (or would change, in a dry run)
    pub fn changed_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.changed)
    }

    pub fn changed_count(&self) -> usize {
        self.changed_files().count()
    }

    /// Rewrite counts summed over every file
    pub fn totals(&self) -> RewriteStats {
        let mut totals = RewriteStats::default();
        for file in &self.files {
            totals.add(&file.stats);
        }
        totals
    }
}

/// Convert every eligible file under `root`
///
/// Each file is read, rewritten and (unless `dry_run`) written back before
/// the next is visited. The first failure stops the run; files already
/// written stay written, and the failing file is not touched.
pub fn convert_tree<T>(tree: &mut T, root: &Path, options: &ConvertOptions) -> Result<ConvertReport>
where
    T: FileTree + ?Sized,
{
    let filter = options.filter()?;
    let engine = RewriteEngine::standard();
    let mut files = Vec::new();

    let walked = walk(tree, root, &filter, |tree, path, relative| {
        let source = tree.read(path)?.ok_or_else(|| EsmError::not_found(path))?;
        let conversion = engine.convert(path, &source)?;

        if !options.dry_run {
            tree.write(path, &conversion.code)?;
        }

        debug!(
            file = relative,
            changed = conversion.changed,
            rewrites = conversion.stats.total(),
            "converted"
        );
        files.push(FileReport {
            path: path.to_path_buf(),
            relative: relative.to_string(),
            changed: conversion.changed,
            stats: conversion.stats,
        });
        Ok(())
    })?;

    let report = ConvertReport {
        files,
        scanned: walked.files,
        pruned: walked.pruned,
        dry_run: options.dry_run,
    };

    info!(
        root = %root.display(),
        eligible = report.files.len(),
        changed = report.changed_count(),
        pruned = report.pruned,
        dry_run = report.dry_run,
        "conversion finished"
    );

    Ok(report)
}
