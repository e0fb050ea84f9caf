//! Options consumed by the tree-level converter

use crate::error::Result;
use crate::glob::{GlobFilter, default_exclude, default_include};
use serde::{Deserialize, Serialize};

/// Selection and write behaviour for [`convert_tree`](crate::convert_tree)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    /// Globs a file must match to be converted
    pub include: Vec<String>,

    /// Globs that exclude a file or prune a directory
    pub exclude: Vec<String>,

    /// Report what would change without writing
    pub dry_run: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            include: default_include(),
            exclude: default_exclude(),
            dry_run: false,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the include globs
    pub fn include<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the exclude globs
    pub fn exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Compile the globs
    pub fn filter(&self) -> Result<GlobFilter> {
        GlobFilter::new(&self.include[..], &self.exclude[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EsmError;

    #[test]
    fn defaults_cover_sources_and_dependency_dirs() {
        let options = ConvertOptions::default();
        assert_eq!(options.include, default_include());
        assert!(options.exclude.contains(&"**/node_modules/**".to_string()));
        assert!(!options.dry_run);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let options: ConvertOptions = serde_json::from_str(r#"{ "dryRun": true }"#).unwrap();
        assert!(options.dry_run);
        assert_eq!(options.include, default_include());
    }

    #[test]
    fn builder_replaces_globs() {
        let options = ConvertOptions::new().include(["**/*.ts"]).exclude(["legacy/**"]);
        let filter = options.filter().unwrap();
        assert!(filter.is_eligible("src/a.ts"));
        assert!(!filter.is_eligible("src/a.js"));
        assert!(!filter.is_eligible("legacy/a.ts"));
    }

    #[test]
    fn invalid_glob_reported_by_filter() {
        let err = ConvertOptions::new().include(["{a,b"]).filter().unwrap_err();
        assert!(matches!(err, EsmError::InvalidGlob { .. }));
    }
}
