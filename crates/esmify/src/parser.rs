//! Parser façade over `oxc_parser`
//!
//! Every source file is parsed with module semantics so the output of one
//! rewrite pass (which may already contain `import`/`export`) re-parses
//! cleanly as input to the next.

use crate::error::{EsmError, Result};
use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::{ParseOptions as OxcParseOptions, Parser};
use oxc_span::SourceType;
use std::path::Path;

/// Parse options for reading source code
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Source type (JavaScript, TypeScript, JSX, TSX)
    pub source_type: SourceType,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source_type: SourceType::mjs(),
        }
    }
}

impl ParseOptions {
    /// Create parse options from a file path (auto-detects language and JSX)
    ///
    /// Unknown extensions fall back to plain JavaScript.
    pub fn from_path(path: &Path) -> Self {
        let source_type = SourceType::from_path(path)
            .unwrap_or(SourceType::mjs())
            .with_module(true);
        Self { source_type }
    }
}

/// Parsed program with the text it was parsed from
pub struct ParsedProgram<'a> {
    /// The parsed AST program
    pub program: Program<'a>,
    /// Source text the program's spans point into
    pub source_text: &'a str,
}

/// Parse source code into an AST
///
/// Any parser diagnostic is fatal; no partial tree is returned.
pub fn parse<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    path: &Path,
    options: ParseOptions,
) -> Result<ParsedProgram<'a>> {
    // CommonJS bodies are function bodies, so a top-level `return` is legal.
    let ret = Parser::new(allocator, source, options.source_type)
        .with_options(OxcParseOptions {
            allow_return_outside_function: true,
            ..OxcParseOptions::default()
        })
        .parse();

    if ret.panicked || !ret.errors.is_empty() {
        let message = if ret.errors.is_empty() {
            "parser aborted".to_string()
        } else {
            ret.errors
                .iter()
                .map(|err| err.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        return Err(EsmError::parse_failure(path, message));
    }

    Ok(ParsedProgram {
        program: ret.program,
        source_text: source,
    })
}
