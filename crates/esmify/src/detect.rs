//! Pattern detectors for legacy module syntax
//!
//! Each detector looks at exactly one node and either returns a [`Pattern`]
//! or nothing. Shapes are checked precisely: `module.exports.foo = x`,
//! `require(a, b)`, `require(name)` and `` require(`x`) `` never match.

use oxc_ast::ast::{
    Argument, AssignmentOperator, AssignmentTarget, BindingPattern, BindingPatternKind,
    BindingProperty, CallExpression, ChainElement, Expression, ExpressionStatement, Statement,
    VariableDeclaration, VariableDeclarationKind,
};
use oxc_span::{GetSpan, Span};

/// Name of the synchronous loader function
pub const LOADER: &str = "require";
/// Object half of the export target
pub const EXPORT_OBJECT: &str = "module";
/// Property half of the export target
pub const EXPORT_PROPERTY: &str = "exports";

/// A literal module specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePath<'a> {
    /// Cooked string value, used to deduplicate
    pub value: String,
    /// Literal exactly as written, quotes included
    pub raw: &'a str,
}

/// Shape of the binding a top-level require initializes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding<'a> {
    /// `const name = require(...)`
    Identifier(&'a str),
    /// `const { a, b } = require(...)`
    Destructure(Vec<&'a str>),
}

/// A recognized legacy construct
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern<'a> {
    /// `module.exports = <expr>`
    ExportAssignment {
        /// Whole expression statement
        statement: Span,
        /// The `module.exports` target
        target: Span,
        /// Right-hand side expression
        value: Span,
        /// The value begins with `function` or `class` without being that
        /// expression, so after `export default` it would read as a
        /// declaration
        parenthesize: bool,
    },
    /// A declaration whose first declarator is initialized by `require('x')`
    TopLevelRequire {
        /// Whole declaration statement
        declaration: Span,
        /// The first declarator
        declarator: Span,
        binding: Binding<'a>,
        module: ModulePath<'a>,
        /// Remaining declarators, if any
        rest: Option<Span>,
    },
    /// `require('x')` anywhere else
    InlineRequireCall { call: Span, module: ModulePath<'a> },
}

/// Detect a statement-level pattern
pub fn detect_statement<'a>(stmt: &Statement<'a>, source: &'a str) -> Option<Pattern<'a>> {
    match stmt {
        Statement::ExpressionStatement(expr) => detect_export_assignment(expr),
        Statement::VariableDeclaration(decl) => detect_top_level_require(decl, source),
        _ => None,
    }
}

/// Detect a loader call in expression position
pub fn detect_call<'a>(call: &CallExpression<'a>, source: &'a str) -> Option<Pattern<'a>> {
    let module = loader_module_path(call, source)?;
    Some(Pattern::InlineRequireCall {
        call: call.span,
        module,
    })
}

fn detect_export_assignment<'a>(stmt: &ExpressionStatement<'a>) -> Option<Pattern<'a>> {
    let Expression::AssignmentExpression(assign) = &stmt.expression else {
        return None;
    };
    if assign.operator != AssignmentOperator::Assign {
        return None;
    }
    let AssignmentTarget::StaticMemberExpression(member) = &assign.left else {
        return None;
    };
    let Expression::Identifier(object) = &member.object else {
        return None;
    };
    if member.optional
        || object.name.as_str() != EXPORT_OBJECT
        || member.property.name.as_str() != EXPORT_PROPERTY
    {
        return None;
    }

    let parenthesize = !matches!(
        assign.right,
        Expression::FunctionExpression(_) | Expression::ClassExpression(_)
    ) && leftmost_is_function_or_class(&assign.right);

    Some(Pattern::ExportAssignment {
        statement: stmt.span,
        target: member.span,
        value: assign.right.span(),
        parenthesize,
    })
}

/// Whether the first token of `expr` belongs to a function or class expression
fn leftmost_is_function_or_class(expr: &Expression<'_>) -> bool {
    if let Some(member) = expr.as_member_expression() {
        return leftmost_is_function_or_class(member.object());
    }
    match expr {
        Expression::FunctionExpression(_) | Expression::ClassExpression(_) => true,
        Expression::CallExpression(call) => leftmost_is_function_or_class(&call.callee),
        Expression::TaggedTemplateExpression(tagged) => {
            leftmost_is_function_or_class(&tagged.tag)
        }
        Expression::BinaryExpression(binary) => leftmost_is_function_or_class(&binary.left),
        Expression::LogicalExpression(logical) => leftmost_is_function_or_class(&logical.left),
        Expression::ConditionalExpression(cond) => leftmost_is_function_or_class(&cond.test),
        Expression::SequenceExpression(seq) => seq
            .expressions
            .first()
            .is_some_and(leftmost_is_function_or_class),
        Expression::ChainExpression(chain) => match &chain.expression {
            ChainElement::CallExpression(call) => leftmost_is_function_or_class(&call.callee),
            ChainElement::TSNonNullExpression(non_null) => {
                leftmost_is_function_or_class(&non_null.expression)
            }
            element => element
                .as_member_expression()
                .is_some_and(|member| leftmost_is_function_or_class(member.object())),
        },
        Expression::TSAsExpression(cast) => leftmost_is_function_or_class(&cast.expression),
        Expression::TSSatisfiesExpression(cast) => leftmost_is_function_or_class(&cast.expression),
        Expression::TSNonNullExpression(non_null) => {
            leftmost_is_function_or_class(&non_null.expression)
        }
        Expression::TSInstantiationExpression(inst) => {
            leftmost_is_function_or_class(&inst.expression)
        }
        _ => false,
    }
}

fn detect_top_level_require<'a>(
    decl: &VariableDeclaration<'a>,
    source: &'a str,
) -> Option<Pattern<'a>> {
    if decl.declare
        || !matches!(
            decl.kind,
            VariableDeclarationKind::Const
                | VariableDeclarationKind::Let
                | VariableDeclarationKind::Var
        )
    {
        return None;
    }

    // Only the first declarator is inspected.
    let first = decl.declarations.first()?;
    let Expression::CallExpression(call) = first.init.as_ref()? else {
        return None;
    };
    let module = loader_module_path(call, source)?;
    let binding = binding_shape(&first.id, source)?;

    let rest = match (decl.declarations.get(1), decl.declarations.last()) {
        (Some(second), Some(last)) => Some(Span::new(second.span.start, last.span.end)),
        _ => None,
    };

    Some(Pattern::TopLevelRequire {
        declaration: decl.span,
        declarator: first.span,
        binding,
        module,
        rest,
    })
}

/// `require('<literal>')`: plain identifier callee, exactly one string argument
fn loader_module_path<'a>(call: &CallExpression<'a>, source: &'a str) -> Option<ModulePath<'a>> {
    let Expression::Identifier(callee) = &call.callee else {
        return None;
    };
    if call.optional || callee.name.as_str() != LOADER || call.arguments.len() != 1 {
        return None;
    }
    let Some(Argument::StringLiteral(literal)) = call.arguments.first() else {
        return None;
    };

    Some(ModulePath {
        value: literal.value.to_string(),
        raw: slice(source, literal.span),
    })
}

fn binding_shape<'a>(pattern: &BindingPattern<'a>, source: &'a str) -> Option<Binding<'a>> {
    if pattern.type_annotation.is_some() {
        return None;
    }
    match &pattern.kind {
        BindingPatternKind::BindingIdentifier(ident) => {
            Some(Binding::Identifier(slice(source, ident.span)))
        }
        BindingPatternKind::ObjectPattern(object) => {
            if object.rest.is_some() {
                return None;
            }
            let names = object
                .properties
                .iter()
                .map(|prop| shorthand_name(prop, source))
                .collect::<Option<Vec<_>>>()?;
            Some(Binding::Destructure(names))
        }
        BindingPatternKind::ArrayPattern(_) | BindingPatternKind::AssignmentPattern(_) => None,
    }
}

/// `{ name }` only; renames, defaults, nesting and computed keys disqualify
fn shorthand_name<'a>(prop: &BindingProperty<'a>, source: &'a str) -> Option<&'a str> {
    if !prop.shorthand || prop.computed {
        return None;
    }
    match &prop.value.kind {
        BindingPatternKind::BindingIdentifier(ident) => Some(slice(source, ident.span)),
        _ => None,
    }
}

pub(crate) fn slice(source: &str, span: Span) -> &str {
    &source[span.start as usize..span.end as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ParseOptions, parse};
    use oxc_allocator::Allocator;
    use oxc_ast_visit::{Visit, walk};
    use std::path::Path;

    fn first_statement_pattern(source: &str) -> Option<String> {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, source, Path::new("t.js"), ParseOptions::default()).unwrap();
        let stmt = parsed.program.body.first()?;
        detect_statement(stmt, source).map(|p| describe(&p, source))
    }

    fn calls(source: &str) -> Vec<String> {
        struct Calls<'s> {
            source: &'s str,
            found: Vec<String>,
        }
        impl<'a, 's> Visit<'a> for Calls<'s>
        where
            's: 'a,
        {
            fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
                if let Some(Pattern::InlineRequireCall { module, .. }) = detect_call(call, self.source)
                {
                    self.found.push(module.value);
                }
                walk::walk_call_expression(self, call);
            }
        }

        let allocator = Allocator::default();
        let parsed = parse(&allocator, source, Path::new("t.js"), ParseOptions::default()).unwrap();
        let mut visitor = Calls {
            source,
            found: Vec::new(),
        };
        visitor.visit_program(&parsed.program);
        visitor.found
    }

    fn describe(pattern: &Pattern<'_>, source: &str) -> String {
        match pattern {
            Pattern::ExportAssignment { value, .. } => format!("export {}", slice(source, *value)),
            Pattern::TopLevelRequire {
                binding,
                module,
                rest,
                ..
            } => format!("require {:?} {} rest={}", binding, module.raw, rest.is_some()),
            Pattern::InlineRequireCall { module, .. } => format!("inline {}", module.raw),
        }
    }

    #[test]
    fn export_assignment() {
        assert_eq!(
            first_statement_pattern("module.exports = { foo: 42 };").as_deref(),
            Some("export { foo: 42 }")
        );
    }

    #[test]
    fn export_near_misses() {
        for source in [
            "module.exports.foo = 1;",
            "exports = 1;",
            "module['exports'] = 1;",
            "module.exports += 1;",
            "mod.exports = 1;",
            "module?.exports;",
        ] {
            assert_eq!(first_statement_pattern(source), None, "{source}");
        }
    }

    #[test]
    fn identifier_require() {
        assert_eq!(
            first_statement_pattern("const fs = require('fs');").as_deref(),
            Some("require Identifier(\"fs\") 'fs' rest=false")
        );
    }

    #[test]
    fn destructure_require() {
        assert_eq!(
            first_statement_pattern("let { foo, bar } = require(\"example\");").as_deref(),
            Some("require Destructure([\"foo\", \"bar\"]) \"example\" rest=false")
        );
    }

    #[test]
    fn only_first_declarator_inspected() {
        assert_eq!(
            first_statement_pattern("var a = require('a'), b = require('b');").as_deref(),
            Some("require Identifier(\"a\") 'a' rest=true")
        );
        assert_eq!(
            first_statement_pattern("var a = 1, b = require('b');"),
            None
        );
    }

    #[test]
    fn complex_bindings_fall_through() {
        for source in [
            "const { foo: renamed } = require('x');",
            "const { foo = 1 } = require('x');",
            "const { foo: { bar } } = require('x');",
            "const { ...all } = require('x');",
            "const [first] = require('x');",
        ] {
            assert_eq!(first_statement_pattern(source), None, "{source}");
        }
    }

    #[test]
    fn non_literal_or_wrong_arity_never_matches() {
        assert_eq!(first_statement_pattern("const a = require(name);"), None);
        assert_eq!(first_statement_pattern("const a = require('a', 'b');"), None);
        assert_eq!(first_statement_pattern("const a = require();"), None);
        assert_eq!(first_statement_pattern("const a = require(`a`);"), None);
        assert_eq!(first_statement_pattern("const a = load('a');"), None);
        assert!(calls("foo(require(x), require('a', 'b'), require?.('c'))").is_empty());
    }

    #[test]
    fn inline_calls_found_in_source_order() {
        assert_eq!(
            calls("foo(require('a'), { b: require('b') }, () => require(\"a\"))"),
            vec!["a", "b", "a"]
        );
    }

    fn export_parenthesize(source: &str) -> Option<bool> {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, source, Path::new("t.js"), ParseOptions::default()).unwrap();
        match detect_statement(parsed.program.body.first()?, source)? {
            Pattern::ExportAssignment { parenthesize, .. } => Some(parenthesize),
            _ => None,
        }
    }

    #[test]
    fn values_led_by_function_or_class_need_parens() {
        for source in [
            "module.exports = function () { return {}; }();",
            "module.exports = function () { return this; }.call(this);",
            "module.exports = class {}.name;",
            "module.exports = function () {}`tag`;",
            "module.exports = function () {} || fallback;",
            "module.exports = async function () {}();",
        ] {
            assert_eq!(export_parenthesize(source), Some(true), "{source}");
        }
    }

    #[test]
    fn plain_values_need_no_parens() {
        for source in [
            "module.exports = function () {};",
            "module.exports = class Foo {};",
            "module.exports = (function () {})();",
            "module.exports = factory(function () {});",
            "module.exports = () => {};",
            "module.exports = { f: function () {} };",
        ] {
            assert_eq!(export_parenthesize(source), Some(false), "{source}");
        }
    }
}
