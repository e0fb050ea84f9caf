//! Configuration system for esmify with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod loading;
mod validation;

use esmify::ConvertOptions;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub use defaults::*;
pub use validation::*;

/// esmify configuration - loaded from esmify.config.json, `ESMIFY_*`
/// environment variables and CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EsmifyConfig {
    /// Globs a file must match to be converted
    #[serde(default = "default_include", deserialize_with = "deserialize_globs")]
    pub include: Vec<String>,

    /// Globs that exclude files and prune directories
    #[serde(default = "default_exclude", deserialize_with = "deserialize_globs")]
    pub exclude: Vec<String>,

    /// Named roots selectable with `--project`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub projects: BTreeMap<String, PathBuf>,

    /// Report without writing
    #[serde(default)]
    pub dry_run: bool,
}

impl EsmifyConfig {
    /// Options for the converter
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::new()
            .include(self.include.iter().cloned())
            .exclude(self.exclude.iter().cloned())
            .dry_run(self.dry_run)
    }
}

/// A glob list written as an array or as one comma-separated string
#[derive(Deserialize)]
#[serde(untagged)]
enum GlobList {
    Many(Vec<String>),
    One(String),
}

/// Accept `["a", "b"]` as well as `"a,b"` (the form `ESMIFY_INCLUDE` takes)
fn deserialize_globs<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match GlobList::deserialize(deserializer)? {
        GlobList::Many(globs) => globs,
        GlobList::One(list) => split_globs(&list),
    })
}

/// Split a comma-separated glob list; commas inside `{...}` stay in the glob.
pub fn split_globs(list: &str) -> Vec<String> {
    let mut globs = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                globs.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    globs.push(&list[start..]);

    globs
        .into_iter()
        .map(str::trim)
        .filter(|glob| !glob.is_empty())
        .map(str::to_string)
        .collect()
}
