//! Re-emission of source text
//!
//! Rewrites are expressed as span edits against the text a pass parsed.
//! Everything outside an edit is copied through untouched, so comments,
//! whitespace and line endings of unaffected regions survive byte-for-byte.

use oxc_span::Span;

/// Replace the text covered by `span` with `text`
///
/// An empty span is a pure insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub span: Span,
    pub text: String,
}

impl Edit {
    pub fn replace(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }

    pub fn insert(at: u32, text: impl Into<String>) -> Self {
        Self::replace(Span::new(at, at), text)
    }
}

/// Apply non-overlapping edits to `source`
///
/// Edits are applied in position order; an insertion sorts ahead of a
/// replacement starting at the same offset.
pub fn print(source: &str, edits: &[Edit]) -> String {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by_key(|edit| (edit.span.start, edit.span.end));

    let extra: usize = ordered.iter().map(|edit| edit.text.len()).sum();
    let mut out = String::with_capacity(source.len() + extra);
    let mut cursor = 0usize;

    for edit in ordered {
        let start = edit.span.start as usize;
        let end = edit.span.end as usize;
        debug_assert!(start >= cursor, "overlapping edits at {start}");
        if start < cursor {
            tracing::warn!(start, end, "skipping overlapping edit");
            continue;
        }
        out.push_str(&source[cursor..start]);
        out.push_str(&edit.text);
        cursor = end;
    }
    out.push_str(&source[cursor..]);
    out
}
