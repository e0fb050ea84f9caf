//! The three rewrite passes, in the order the engine runs them

mod export;
mod inline;
mod require;

pub use export::ExportRewrite;
pub use inline::{ImportContext, ImportRecord, InlineRequireRewrite};
pub use require::TopLevelRequireRewrite;

use crate::detect::{Binding, ModulePath};

/// Render an import declaration for a binding shape (without terminator)
pub(crate) fn render_import(binding: &Binding<'_>, module: &ModulePath<'_>) -> String {
    match binding {
        Binding::Identifier(name) => format!("import {name} from {}", module.raw),
        Binding::Destructure(names) if names.is_empty() => {
            format!("import {{}} from {}", module.raw)
        }
        Binding::Destructure(names) => {
            format!("import {{ {} }} from {}", names.join(", "), module.raw)
        }
    }
}

/// Text between two nodes, split around its first bare token
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Gap<'s> {
    /// Offset of the token within the gap
    pub token: usize,
    /// Comments ahead of the token
    pub before: Vec<&'s str>,
    /// Comments after it
    pub after: Vec<&'s str>,
}

/// Find the first `token` outside comments in the text between two nodes
pub(crate) fn scan_gap(gap: &str, token: u8) -> Option<Gap<'_>> {
    let bytes = gap.as_bytes();
    let mut before = Vec::new();
    let mut after = Vec::new();
    let mut found = None;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = gap[i + 2..].find("*/").map(|n| i + 2 + n + 2)?;
                let comments = if found.is_some() { &mut after } else { &mut before };
                comments.push(&gap[i..end]);
                i = end;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                let end = gap[i..].find(['\n', '\r']).map_or(gap.len(), |n| i + n);
                let comments = if found.is_some() { &mut after } else { &mut before };
                comments.push(&gap[i..end]);
                i = end;
            }
            b if b == token && found.is_none() => {
                found = Some(i);
                i += 1;
            }
            _ => i += 1,
        }
    }
    found.map(|token| Gap {
        token,
        before,
        after,
    })
}

/// Comments laid out after generated text, each preceded by a space
///
/// A line comment is closed with a newline so following code stays live.
pub(crate) fn render_comments(comments: &[&str]) -> String {
    let mut out = String::new();
    for comment in comments {
        out.push(' ');
        out.push_str(comment);
        if comment.starts_with("//") {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(raw: &str) -> ModulePath<'_> {
        ModulePath {
            value: raw.trim_matches(|c| c == '\'' || c == '"').to_string(),
            raw,
        }
    }

    #[test]
    fn default_import() {
        assert_eq!(
            render_import(&Binding::Identifier("fs"), &module("'fs'")),
            "import fs from 'fs'"
        );
    }

    #[test]
    fn named_import_keeps_quote_style() {
        assert_eq!(
            render_import(
                &Binding::Destructure(vec!["foo", "bar"]),
                &module("\"example\"")
            ),
            "import { foo, bar } from \"example\""
        );
    }

    #[test]
    fn empty_destructure() {
        assert_eq!(
            render_import(&Binding::Destructure(vec![]), &module("'x'")),
            "import {} from 'x'"
        );
    }

    #[test]
    fn scan_gap_skips_comments() {
        let gap = scan_gap(" /* = */ // =\n = ", b'=').unwrap();
        assert_eq!(gap.token, 15);
        assert_eq!(gap.before, vec!["/* = */", "// ="]);
        assert!(gap.after.is_empty());
    }

    #[test]
    fn scan_gap_splits_comments_at_token() {
        let gap = scan_gap(" /* a, b */, /* c */ ", b',').unwrap();
        assert_eq!(gap.token, 11);
        assert_eq!(gap.before, vec!["/* a, b */"]);
        assert_eq!(gap.after, vec!["/* c */"]);
    }

    #[test]
    fn scan_gap_without_token() {
        assert_eq!(scan_gap(" /* , */ ", b','), None);
        assert_eq!(scan_gap(" /* unterminated ", b','), None);
    }

    #[test]
    fn line_comments_end_their_line() {
        assert_eq!(render_comments(&["/* a */", "// b"]), " /* a */ // b\n");
        assert_eq!(render_comments(&[]), "");
    }
}
