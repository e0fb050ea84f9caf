//! Rewrite CommonJS modules into ES module syntax
//!
//! This crate converts `require(...)` and `module.exports = ...` into
//! `import`/`export default`, using the OXC parser for the syntax tree and
//! span-based edits for the output, so everything a rewrite does not touch
//! is copied through byte for byte.
//!
//! # Pipeline
//!
//! 1. **Export rewrite**: top-level `module.exports = <expr>` becomes
//!    `export default <expr>`.
//! 2. **Top-level require rewrite**: `const x = require('x')` becomes
//!    `import x from 'x'`, and `const { a, b } = require('x')` becomes
//!    `import { a, b } from 'x'`.
//! 3. **Inline require rewrite**: every other `require('x')` is replaced by a
//!    synthetic `_import<N>` binding, with one import per distinct path
//!    prepended to the file.
//!
//! Only calls with a single string-literal argument are rewritten.
//!
//! # Examples
//!
//! ## Single source
//!
//! ```rust
//! use esmify::convert_source;
//! use std::path::Path;
//!
//! let out = convert_source(
//!     Path::new("index.js"),
//!     "module.exports = { foo: require('example') };\n",
//! )?;
//! assert_eq!(
//!     out.code,
//!     "import _import0 from 'example';\nexport default { foo: _import0 };\n"
//! );
//! # Ok::<(), esmify::EsmError>(())
//! ```
//!
//! ## Whole tree
//!
//! ```rust
//! use esmify::{ConvertOptions, MemoryTree, convert_tree};
//! use std::path::Path;
//!
//! let mut tree = MemoryTree::new()
//!     .with_file("/app/src/index.ts", "const fs = require('fs');\n")
//!     .with_file("/app/legacy.js", "const fs = require('fs');\n");
//!
//! let options = ConvertOptions::new().include(["**/*.ts"]);
//! let report = convert_tree(&mut tree, Path::new("/app"), &options)?;
//!
//! assert_eq!(report.changed_count(), 1);
//! assert_eq!(tree.get("/app/src/index.ts"), Some("import fs from 'fs';\n"));
//! assert_eq!(tree.get("/app/legacy.js"), Some("const fs = require('fs');\n"));
//! # Ok::<(), esmify::EsmError>(())
//! ```

pub mod convert;
pub mod detect;
pub mod engine;
pub mod error;
pub mod glob;
pub mod options;
pub mod parser;
pub mod passes;
pub mod printer;
pub mod store;
pub mod walk;

pub use convert::{ConvertReport, FileReport, convert_tree};
pub use detect::{Binding, ModulePath, Pattern, detect_call, detect_statement};
pub use engine::{
    Conversion, PassKind, PassResult, RewriteEngine, RewritePass, RewriteStats, convert_source,
};
pub use error::{EsmError, Result};
pub use glob::{GlobFilter, default_exclude, default_include};
pub use options::ConvertOptions;
pub use parser::{ParseOptions, ParsedProgram, parse};
pub use passes::{
    ExportRewrite, ImportContext, ImportRecord, InlineRequireRewrite, TopLevelRequireRewrite,
};
pub use printer::{Edit, print};
pub use store::{FileTree, MemoryTree, NativeTree};
pub use walk::{WalkStats, walk};
