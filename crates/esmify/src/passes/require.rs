//! Pass 2: `const x = require('x')` → `import x from 'x'`

use super::{render_comments, render_import, scan_gap};
use crate::detect::{Pattern, detect_statement, slice};
use crate::engine::{PassKind, PassResult, RewritePass};
use crate::parser::ParsedProgram;
use crate::printer::Edit;
use oxc_span::Span;

/// Turns top-level loader declarations into import declarations
///
/// An identifier binding becomes a default import and a shorthand object
/// pattern becomes a named import. When the declaration has further
/// declarators they are kept, unrewritten, in a declaration of the same kind
/// on the following line, and comments between the first declarator and
/// the rest follow the import.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopLevelRequireRewrite;

impl RewritePass for TopLevelRequireRewrite {
    fn kind(&self) -> PassKind {
        PassKind::TopLevelRequire
    }

    fn run<'a>(&self, parsed: &ParsedProgram<'a>) -> PassResult {
        let source = parsed.source_text;
        let mut edits = Vec::new();

        for stmt in &parsed.program.body {
            let Some(Pattern::TopLevelRequire {
                declaration,
                declarator,
                binding,
                module,
                rest,
            }) = detect_statement(stmt, source)
            else {
                continue;
            };

            let mut text = render_import(&binding, &module);
            match rest {
                None => {
                    text.push_str(slice(source, Span::new(declarator.end, declaration.end)));
                }
                Some(rest) => {
                    let keyword = slice(source, Span::new(declaration.start, declarator.start));
                    let between = slice(source, Span::new(declarator.end, rest.start));
                    let comments: Vec<&str> = scan_gap(between, b',')
                        .map(|gap| gap.before.into_iter().chain(gap.after).collect())
                        .unwrap_or_default();
                    text.push(';');
                    text.push_str(&render_comments(&comments));
                    if !text.ends_with('\n') {
                        text.push('\n');
                    }
                    text.push_str(keyword);
                    text.push_str(slice(source, Span::new(rest.start, declaration.end)));
                }
            }
            edits.push(Edit::replace(declaration, text));
        }

        PassResult::new(edits)
    }
}
