//! Template tokenizer module.
//!
//! Walks the document once and produces a flat sequence of nodes, each
//! decomposed into literal and interpolation parts.

/// Tokenizer state and the document-level loop.
pub mod document;
/// Helper methods shared by the tokenizer stages.
pub mod helpers;
/// Interpolation splitter.
pub mod interpolation;
/// Node types produced by the tokenizer.
pub mod node;
/// Part types making up each node.
pub mod part;
/// Tag, comment and CDATA tokenization.
pub mod tag;

pub use document::{IssueKind, TokenizeIssue, Tokenizer};
pub use interpolation::Interpolations;
pub use node::{Attribute, Content, Element, Node, reconstruct};
pub use part::{Part, PartKind, Span};
