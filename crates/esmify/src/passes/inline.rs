//! Pass 3: hoist every remaining `require('x')` into a synthetic import

use crate::detect::{ModulePath, Pattern, detect_call};
use crate::engine::{PassKind, PassResult, RewritePass};
use crate::parser::ParsedProgram;
use crate::printer::Edit;
use indexmap::IndexMap;
use oxc_ast::ast::CallExpression;
use oxc_ast_visit::{Visit, walk};
use oxc_span::GetSpan;

/// One hoisted import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    /// `_import<N>`
    pub synthetic_name: String,
    /// Cooked module path
    pub module_path: String,
    /// Literal as first written, quotes included
    pub raw: String,
}

impl ImportRecord {
    fn declaration(&self) -> String {
        format!("import {} from {};\n", self.synthetic_name, self.raw)
    }
}

/// Per-file accumulator of synthetic imports
///
/// Keyed by cooked module path; insertion order is first-seen order, which
/// is also the numbering order.
#[derive(Debug, Default)]
pub struct ImportContext {
    records: IndexMap<String, ImportRecord>,
}

impl ImportContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synthetic name for a module path, allocating the next one on first sight
    pub fn binding_for(&mut self, module: &ModulePath<'_>) -> &str {
        let next = self.records.len();
        &self
            .records
            .entry(module.value.clone())
            .or_insert_with(|| ImportRecord {
                synthetic_name: format!("_import{next}"),
                module_path: module.value.clone(),
                raw: module.raw.to_string(),
            })
            .synthetic_name
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in first-seen order
    pub fn records(&self) -> impl Iterator<Item = &ImportRecord> {
        self.records.values()
    }
}

/// Replaces loader calls in expression position with synthetic bindings
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineRequireRewrite;

impl RewritePass for InlineRequireRewrite {
    fn kind(&self) -> PassKind {
        PassKind::InlineRequire
    }

    fn run<'a>(&self, parsed: &ParsedProgram<'a>) -> PassResult {
        let program = &parsed.program;

        let mut visitor = InlineVisitor {
            source: parsed.source_text,
            context: ImportContext::new(),
            edits: Vec::new(),
        };
        visitor.visit_program(program);

        let InlineVisitor {
            context, mut edits, ..
        } = visitor;
        if context.is_empty() {
            return PassResult::default();
        }

        let call_sites = edits.len();
        let anchor = program
            .directives
            .first()
            .map(|d| d.span.start)
            .or_else(|| program.body.first().map(|s| s.span().start))
            .unwrap_or(program.span.start);
        let header: String = context.records().map(ImportRecord::declaration).collect();
        edits.push(Edit::insert(anchor, header));

        PassResult {
            edits,
            rewrites: call_sites,
            synthetic_imports: context.len(),
        }
    }
}

struct InlineVisitor<'s> {
    source: &'s str,
    context: ImportContext,
    edits: Vec<Edit>,
}

impl<'a, 's: 'a> Visit<'a> for InlineVisitor<'s> {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        match detect_call(call, self.source) {
            Some(Pattern::InlineRequireCall { call: site, module }) => {
                let name = self.context.binding_for(&module).to_string();
                self.edits.push(Edit::replace(site, name));
            }
            Some(Pattern::ExportAssignment { .. } | Pattern::TopLevelRequire { .. }) | None => {
                walk::walk_call_expression(self, call);
            }
        }
    }
}
