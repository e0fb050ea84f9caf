//! Rewrite engine: runs the passes over one source text
//!
//! Each pass sees a fresh parse of the previous pass's output and returns
//! span edits; the printer applies them to produce the next text. Nothing
//! is shared between passes or between files.

use crate::error::Result;
use crate::parser::{ParseOptions, ParsedProgram, parse};
use crate::passes::{ExportRewrite, InlineRequireRewrite, TopLevelRequireRewrite};
use crate::printer::{Edit, print};
use oxc_allocator::Allocator;
use serde::Serialize;
use std::path::Path;
use tracing::trace;

/// Identifies a pass for logging and statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassKind {
    Export,
    TopLevelRequire,
    InlineRequire,
}

impl PassKind {
    pub fn name(self) -> &'static str {
        match self {
            PassKind::Export => "export-rewrite",
            PassKind::TopLevelRequire => "top-level-require-rewrite",
            PassKind::InlineRequire => "inline-require-rewrite",
        }
    }
}

/// Result of a rewrite pass
#[derive(Debug, Default)]
pub struct PassResult {
    /// Edits against the text the pass parsed
    pub edits: Vec<Edit>,
    /// Number of constructs rewritten
    pub rewrites: usize,
    /// Number of import declarations the pass introduced
    pub synthetic_imports: usize,
}

impl PassResult {
    /// One rewrite per edit
    pub fn new(edits: Vec<Edit>) -> Self {
        Self {
            rewrites: edits.len(),
            edits,
            synthetic_imports: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

/// Trait for rewrite passes
pub trait RewritePass {
    fn kind(&self) -> PassKind;

    /// Inspect a parsed program and describe the rewrite as edits
    fn run<'a>(&self, parsed: &ParsedProgram<'a>) -> PassResult;
}

/// Per-file counts of what was rewritten
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteStats {
    /// `module.exports =` → `export default`
    pub exports: usize,
    /// Declarations turned into imports
    pub imports: usize,
    /// Inline loader calls replaced
    pub inline_calls: usize,
    /// Synthetic imports prepended
    pub synthetic_imports: usize,
}

impl RewriteStats {
    fn record(&mut self, kind: PassKind, result: &PassResult) {
        match kind {
            PassKind::Export => self.exports += result.rewrites,
            PassKind::TopLevelRequire => self.imports += result.rewrites,
            PassKind::InlineRequire => {
                self.inline_calls += result.rewrites;
                self.synthetic_imports += result.synthetic_imports;
            }
        }
    }

    pub fn total(&self) -> usize {
        self.exports + self.imports + self.inline_calls
    }

    pub fn add(&mut self, other: &RewriteStats) {
        self.exports += other.exports;
        self.imports += other.imports;
        self.inline_calls += other.inline_calls;
        self.synthetic_imports += other.synthetic_imports;
    }
}

/// Output of converting one source text
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Final text
    pub code: String,
    /// Whether the text differs from the input
    pub changed: bool,
    pub stats: RewriteStats,
}

/// Applies an ordered list of passes to source text
pub struct RewriteEngine {
    passes: Vec<Box<dyn RewritePass>>,
}

impl RewriteEngine {
    /// Create an engine with no passes
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    /// The standard pipeline: export, top-level require, inline require
    pub fn standard() -> Self {
        Self::new()
            .add_pass(ExportRewrite)
            .add_pass(TopLevelRequireRewrite)
            .add_pass(InlineRequireRewrite)
    }

    /// Add a rewrite pass
    pub fn add_pass<P: RewritePass + 'static>(mut self, pass: P) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Run every pass over `source`
    ///
    /// `path` selects the language (by extension) and labels errors.
    pub fn convert(&self, path: &Path, source: &str) -> Result<Conversion> {
        let options = ParseOptions::from_path(path);
        let mut code = source.to_string();
        let mut stats = RewriteStats::default();

        for pass in &self.passes {
            let allocator = Allocator::default();
            let result = {
                let parsed = parse(&allocator, &code, path, options)?;
                pass.run(&parsed)
            };

            trace!(
                pass = pass.kind().name(),
                file = %path.display(),
                rewrites = result.rewrites,
                "pass finished"
            );

            if result.is_empty() {
                continue;
            }
            stats.record(pass.kind(), &result);
            code = print(&code, &result.edits);
        }

        Ok(Conversion {
            changed: code != source,
            code,
            stats,
        })
    }
}

impl Default for RewriteEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Convert a single source text with the standard pipeline
pub fn convert_source(path: &Path, source: &str) -> Result<Conversion> {
    RewriteEngine::standard().convert(path, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EsmError;

    fn convert(source: &str) -> Conversion {
        convert_source(Path::new("index.js"), source).unwrap()
    }

    #[test]
    fn scenario_default_import() {
        let out = convert("const fs = require('fs');\n");
        assert!(out.code.contains("import fs from 'fs'"));
        assert!(!out.code.contains("require("));
        assert_eq!(out.stats.imports, 1);
    }

    #[test]
    fn scenario_named_import() {
        let out = convert("const { foo, bar } = require('example');\n");
        assert!(out.code.contains("import { foo, bar } from 'example'"));
    }

    #[test]
    fn scenario_export_default() {
        let out = convert("module.exports = { foo: 42 };\n");
        assert_eq!(out.code, "export default { foo: 42 };\n");
        assert!(!out.code.contains("module.exports"));
    }

    #[test]
    fn scenario_export_with_inline_require() {
        let out = convert("module.exports = { foo: require('example') };\n");
        assert_eq!(
            out.code,
            "import _import0 from 'example';\nexport default { foo: _import0 };\n"
        );
        assert_eq!(
            out.stats,
            RewriteStats {
                exports: 1,
                imports: 0,
                inline_calls: 1,
                synthetic_imports: 1,
            }
        );
    }

    #[test]
    fn scenario_dedup_two_paths() {
        let out = convert(
            "use(require('example'));\nuse(require('bar'));\nuse(require('example'));\n",
        );
        assert_eq!(
            out.code,
            "import _import0 from 'example';\nimport _import1 from 'bar';\n\
             use(_import0);\nuse(_import1);\nuse(_import0);\n"
        );
    }

    #[test]
    fn top_level_require_consumed_before_inline() {
        let out = convert("const a = require('a');\nconst b = wrap(require('b'));\n");
        assert_eq!(
            out.code,
            "import _import0 from 'b';\nimport a from 'a';\nconst b = wrap(_import0);\n"
        );
    }

    #[test]
    fn full_module() {
        let source = "\
'use strict';
// Dependencies
const path = require('path');
const { readFile, writeFile } = require('fs');
const { join: joinPath } = require('path');

/**
 * Loads a plugin lazily.
 */
function plugin(name) {
  return require('./plugins/' + name);
}

module.exports = {
  plugin,
  version: require('./package.json').version,
};
";
        let expected = "\
import _import0 from 'path';
import _import1 from './package.json';
'use strict';
// Dependencies
import path from 'path';
import { readFile, writeFile } from 'fs';
const { join: joinPath } = _import0;

/**
 * Loads a plugin lazily.
 */
function plugin(name) {
  return require('./plugins/' + name);
}

export default {
  plugin,
  version: _import1.version,
};
";
        let out = convert(source);
        assert_eq!(out.code, expected);
        assert!(out.changed);
    }

    #[test]
    fn unrecognized_source_is_byte_identical() {
        let source = "// comment\r\nimport x from 'x';\r\n\r\nexport const y = x  ;  \r\n";
        let out = convert(source);
        assert_eq!(out.code, source);
        assert!(!out.changed);
        assert_eq!(out.stats.total(), 0);
    }

    #[test]
    fn second_run_is_noop() {
        let first = convert("const a = require('a');\nmodule.exports = f(require('b'));\n");
        let second = convert(&first.code);
        assert_eq!(second.code, first.code);
        assert!(!second.changed);
    }

    #[test]
    fn typescript_files_parse_with_types() {
        let out = convert_source(
            Path::new("src/index.ts"),
            "const fs = require('fs');\nconst n: number = 1;\nmodule.exports = n as number;\n",
        )
        .unwrap();
        assert_eq!(
            out.code,
            "import fs from 'fs';\nconst n: number = 1;\nexport default n as number;\n"
        );
    }

    #[test]
    fn exported_function_led_values_stay_expressions() {
        for (source, expected) in [
            (
                "module.exports = function () { return {}; }();\n",
                "export default (function () { return {}; }());\n",
            ),
            (
                "module.exports = function () { return this; }.call(this);\n",
                "export default (function () { return this; }.call(this));\n",
            ),
            ("module.exports = class {}.name;\n", "export default (class {}.name);\n"),
        ] {
            let out = convert(source);
            assert_eq!(out.code, expected);
            assert_eq!(out.stats.exports, 1);

            let again = convert(&out.code);
            assert_eq!(again.code, out.code, "{source}");
        }
    }

    #[test]
    fn parenthesized_export_still_hoists_inline_requires() {
        let out = convert("module.exports = function () { return require('x'); }();\n");
        assert_eq!(
            out.code,
            "import _import0 from 'x';\nexport default (function () { return _import0; }());\n"
        );
    }

    #[test]
    fn parse_failure_is_reported() {
        let err = convert_source(Path::new("bad.js"), "const = require('x');").unwrap_err();
        assert!(matches!(err, EsmError::ParseFailure { .. }));
    }

    #[test]
    fn empty_engine_returns_input() {
        let out = RewriteEngine::new()
            .convert(Path::new("a.js"), "module.exports = 1;")
            .unwrap();
        assert_eq!(out.code, "module.exports = 1;");
    }
}
