//! Template tokenizer for HTML documents with embedded interpolations.
//!
//! # Scope
//!
//! This crate implements:
//! - **Interpolation profiles** for ERB-in-HTML, ERB-in-JavaScript and lodash templates
//! - **Interpolation splitting** of any span into literal and expression parts
//! - **Tag tokenization**: elements, attributes, comments and CDATA blocks
//! - **Document tokenization** into a flat, lossless sequence of nodes
//!
//! # Not Implemented
//!
//! - Character reference decoding
//! - Implied tags, nesting, tag balancing
//! - Foreign content rules for SVG and `MathML`
//!
//! Tokenizing never fails. Unterminated constructs are consumed to end of
//! input and reported as [`TokenizeIssue`]s alongside the nodes.

/// Tree printer for debugging output.
pub mod printer;
/// Interpolation profile table and template language selector.
pub mod profile;
/// Cursor over the document text.
pub mod scanner;
/// Template tokenizer producing nodes and parts.
pub mod tokenizer;

pub use printer::{NodeTree, format_nodes, print_nodes};
pub use profile::{InterpolationProfile, StructuralMode, TemplateLanguage};
pub use stencil_common::ConfigError;
pub use tokenizer::{
    Attribute, Content, Element, IssueKind, Node, Part, PartKind, Span, TokenizeIssue, Tokenizer,
    reconstruct,
};

/// Tokenize `document` with the profile of `language`.
#[must_use]
pub fn parse(document: &str, language: TemplateLanguage) -> Vec<Node> {
    Tokenizer::new(document, language).run()
}

/// Tokenize `document`, resolving the template language by name first.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownTemplateLanguage`] when `language` names no
/// known profile. No tokenization happens in that case.
pub fn parse_with_language(document: &str, language: &str) -> Result<Vec<Node>, ConfigError> {
    let language = language.parse::<TemplateLanguage>()?;
    Ok(parse(document, language))
}
