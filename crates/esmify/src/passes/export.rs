//! Pass 1: `module.exports = <expr>` → `export default <expr>`

use super::{render_comments, scan_gap};
use crate::detect::{Pattern, detect_statement, slice};
use crate::engine::{PassKind, PassResult, RewritePass};
use crate::parser::ParsedProgram;
use crate::printer::Edit;
use oxc_span::Span;
use tracing::warn;

/// Rewrites the top-level export assignment into a default export
///
/// Only the `module.exports =` prefix is replaced; comments inside it are
/// carried over, and the right-hand side and whatever follows it in the
/// statement are kept verbatim. A value that starts with `function` or
/// `class` without being that expression is wrapped in parentheses so it
/// still reads as an expression. A file with more than one top-level export
/// assignment is left alone, since two default exports would not be a valid
/// module.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportRewrite;

impl RewritePass for ExportRewrite {
    fn kind(&self) -> PassKind {
        PassKind::Export
    }

    fn run<'a>(&self, parsed: &ParsedProgram<'a>) -> PassResult {
        let source = parsed.source_text;
        let mut rewrites = Vec::new();

        for stmt in &parsed.program.body {
            match detect_statement(stmt, source) {
                Some(Pattern::ExportAssignment {
                    statement,
                    value,
                    parenthesize,
                    ..
                }) => rewrites.push(rewrite(source, statement, value, parenthesize)),
                Some(Pattern::TopLevelRequire { .. } | Pattern::InlineRequireCall { .. }) | None => {}
            }
        }

        if rewrites.len() > 1 {
            warn!(
                count = rewrites.len(),
                "multiple module.exports assignments; leaving them unconverted"
            );
            return PassResult::default();
        }

        PassResult {
            rewrites: rewrites.len(),
            edits: rewrites.into_iter().flatten().collect(),
            synthetic_imports: 0,
        }
    }
}

fn rewrite(source: &str, statement: Span, value: Span, parenthesize: bool) -> Vec<Edit> {
    let prefix = slice(source, Span::new(statement.start, value.start));
    let (head, comments) = match scan_gap(prefix, b'=') {
        Some(gap) => (statement.start + gap.token as u32 + 1, gap.before),
        None => (value.start, Vec::new()),
    };

    let mut text = String::from("export default");
    text.push_str(&render_comments(&comments));
    if head == value.start && !text.ends_with('\n') {
        text.push(' ');
    }

    let mut edits = vec![Edit::replace(Span::new(statement.start, head), text)];
    if parenthesize {
        edits.push(Edit::insert(value.start, "("));
        edits.push(Edit::insert(value.end, ")"));
    }
    edits
}
