//! Include/exclude glob matching for file selection
//!
//! The matcher knows nothing about the tree walk: it only answers whether a
//! root-relative, `/`-separated path is eligible or pruned.

use crate::error::{EsmError, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// File extensions treated as convertible source
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"];

/// Dependency, build and cache directories that are never descended into
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "bower_components",
    "jspm_packages",
    "dist",
    "build",
    "coverage",
    "tmp",
    ".git",
    ".cache",
    ".next",
    ".nuxt",
    ".turbo",
    ".output",
];

/// Default include globs: every recognized source extension at any depth
pub fn default_include() -> Vec<String> {
    vec![format!("**/*.{{{}}}", SOURCE_EXTENSIONS.join(","))]
}

/// Default exclude globs: each of [`EXCLUDED_DIRS`] in its three forms
pub fn default_exclude() -> Vec<String> {
    EXCLUDED_DIRS
        .iter()
        .flat_map(|name| expand_excluded_dir(name))
        .collect()
}

/// Expand a directory name into the bare name, everything beneath it at the
/// root, and everything beneath it at any depth.
pub fn expand_excluded_dir(name: &str) -> [String; 3] {
    [
        name.to_string(),
        format!("{name}/**"),
        format!("**/{name}/**"),
    ]
}

/// Compiled include/exclude rule sets
#[derive(Debug, Clone)]
pub struct GlobFilter {
    include: GlobSet,
    exclude: GlobSet,
}

impl GlobFilter {
    /// Compile include and exclude patterns
    ///
    /// `*` never crosses a `/`; only `**` spans segments.
    pub fn new<S: AsRef<str>>(include: &[S], exclude: &[S]) -> Result<Self> {
        Ok(Self {
            include: compile(include)?,
            exclude: compile(exclude)?,
        })
    }

    /// Whether any include pattern matches
    pub fn is_included(&self, relative: &str) -> bool {
        self.include.is_match(relative)
    }

    /// Whether any exclude pattern matches
    pub fn is_excluded(&self, relative: &str) -> bool {
        self.exclude.is_match(relative)
    }

    /// Whether a directory must be pruned
    ///
    /// `name/**` only matches paths beneath `name`, so the directory is also
    /// probed with a trailing separator.
    pub fn is_excluded_dir(&self, relative: &str) -> bool {
        self.is_excluded(relative) || self.exclude.is_match(format!("{relative}/"))
    }

    /// A file is eligible when it is included and not excluded
    pub fn is_eligible(&self, relative: &str) -> bool {
        self.is_included(relative) && !self.is_excluded(relative)
    }
}

impl Default for GlobFilter {
    fn default() -> Self {
        Self::new(&default_include()[..], &default_exclude()[..]).expect("built-in globs should always compile")
    }
}

fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| EsmError::invalid_glob(pattern, e.kind()))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| EsmError::invalid_glob(patterns_joined(patterns), e))
}

fn patterns_joined<S: AsRef<str>>(patterns: &[S]) -> String {
    patterns
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_filter() -> GlobFilter {
        GlobFilter::default()
    }

    #[test]
    fn default_include_covers_source_extensions() {
        let filter = default_filter();
        for path in [
            "index.js",
            "src/app.ts",
            "src/deep/nested/view.tsx",
            "lib/config.cjs",
            "lib/entry.mjs",
        ] {
            assert!(filter.is_eligible(path), "{path} should be eligible");
        }
        assert!(!filter.is_eligible("README.md"));
        assert!(!filter.is_eligible("src/styles.css"));
    }

    #[test]
    fn excluded_dirs_pruned_at_root_and_nested() {
        let filter = default_filter();
        assert!(filter.is_excluded_dir("node_modules"));
        assert!(filter.is_excluded_dir("packages/api/node_modules"));
        assert!(filter.is_excluded_dir("dist"));
        assert!(filter.is_excluded_dir("apps/web/.next"));
        assert!(!filter.is_excluded_dir("src"));
        assert!(!filter.is_excluded_dir("src/distance"));
    }

    #[test]
    fn files_beneath_excluded_dirs_not_eligible() {
        let filter = default_filter();
        assert!(!filter.is_eligible("node_modules/left-pad/index.js"));
        assert!(!filter.is_eligible("packages/a/node_modules/x/index.js"));
        assert!(!filter.is_eligible("dist/bundle.js"));
    }

    #[test]
    fn single_star_stays_within_segment() {
        let filter = GlobFilter::new(&["src/*.js"], &[] as &[&str]).unwrap();
        assert!(filter.is_eligible("src/index.js"));
        assert!(!filter.is_eligible("src/nested/index.js"));
    }

    #[test]
    fn brace_lists_expand() {
        let filter = GlobFilter::new(&["**/*.{js,ts}"], &[] as &[&str]).unwrap();
        assert!(filter.is_eligible("a.js"));
        assert!(filter.is_eligible("b/c.ts"));
        assert!(!filter.is_eligible("b/c.tsx"));
    }

    #[test]
    fn expand_excluded_dir_forms() {
        assert_eq!(
            expand_excluded_dir("vendor"),
            [
                "vendor".to_string(),
                "vendor/**".to_string(),
                "**/vendor/**".to_string()
            ]
        );
    }

    #[test]
    fn invalid_pattern_rejected() {
        let err = GlobFilter::new(&["src/[abc"], &[] as &[&str]).unwrap_err();
        assert!(matches!(err, EsmError::InvalidGlob { pattern, .. } if pattern == "src/[abc"));
    }
}
