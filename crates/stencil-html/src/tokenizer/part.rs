use core::fmt;
use core::ops::Range;

use serde::Serialize;
use strum_macros::Display;

/// Byte range of a part or node in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Offset of the first byte.
    pub start: usize,
    /// Offset one past the last byte.
    pub end: usize,
}

impl Span {
    /// Create a span covering `start..end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether the span covers nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a range, for slicing the source.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Classification of a part.
///
/// The display names match the token types linting rules were written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum PartKind {
    /// Literal content.
    #[strum(serialize = "text")]
    #[serde(rename = "text")]
    Text,
    /// Interpolation whose result is written into the document (`<%= ... %>`).
    #[strum(serialize = "expr_literal")]
    #[serde(rename = "expr_literal")]
    ExprOutput,
    /// Interpolation that runs code without output (`<% ... %>`).
    #[strum(serialize = "expr_code")]
    #[serde(rename = "expr_code")]
    ExprCode,
    /// Quote opening an attribute value.
    #[strum(serialize = "attribute_quoted_value_start")]
    #[serde(rename = "attribute_quoted_value_start")]
    QuotedValueStart,
    /// Quote closing an attribute value.
    #[strum(serialize = "attribute_quoted_value_end")]
    #[serde(rename = "attribute_quoted_value_end")]
    QuotedValueEnd,
}

/// A span of source text with its classification.
///
/// `text` is exactly the source it covers, delimiters and quotes included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Part {
    kind: PartKind,
    text: String,
    span: Span,
}

impl Part {
    pub(crate) fn new(kind: PartKind, text: &str, start: usize) -> Self {
        Self {
            kind,
            text: text.to_string(),
            span: Span::new(start, start + text.len()),
        }
    }

    /// What this part is.
    #[must_use]
    pub const fn kind(&self) -> PartKind {
        self.kind
    }

    /// The exact source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Where the part sits in the source.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Whether this part is an embedded expression.
    #[must_use]
    pub const fn is_interpolation(&self) -> bool {
        matches!(self.kind, PartKind::ExprOutput | PartKind::ExprCode)
    }
}

/// Concatenate the text of a part sequence.
#[must_use]
pub fn join_text(parts: &[Part]) -> String {
    parts.iter().map(Part::text).collect()
}
