use serde::Serialize;

use super::part::{Part, PartKind, Span, join_text};

/// Content of a text run, comment or CDATA block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    #[serde(rename = "content_parts")]
    parts: Vec<Part>,
    span: Span,
    source: String,
}

impl Content {
    pub(crate) fn new(parts: Vec<Part>, span: Span, source: &str) -> Self {
        Self {
            parts,
            span,
            source: source.to_string(),
        }
    }

    /// Parts between the opening and closing markers.
    #[must_use]
    pub fn content_parts(&self) -> &[Part] {
        &self.parts
    }

    /// Concatenated content text.
    #[must_use]
    pub fn text(&self) -> String {
        join_text(&self.parts)
    }
}

/// One attribute of an element.
///
/// `name_parts` is empty for a nameless attribute such as `<div 'thing'>`.
/// `value_parts` is empty for a valueless attribute such as `<input disabled>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    name_parts: Vec<Part>,
    value_parts: Vec<Part>,
    span: Span,
}

impl Attribute {
    pub(crate) const fn new(name_parts: Vec<Part>, value_parts: Vec<Part>, span: Span) -> Self {
        Self {
            name_parts,
            value_parts,
            span,
        }
    }

    /// Parts making up the name.
    #[must_use]
    pub fn name_parts(&self) -> &[Part] {
        &self.name_parts
    }

    /// Parts making up the value, quote markers included.
    #[must_use]
    pub fn value_parts(&self) -> &[Part] {
        &self.value_parts
    }

    /// Source range from the first name character to the end of the value.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Concatenated name text.
    #[must_use]
    pub fn name(&self) -> String {
        join_text(&self.name_parts)
    }

    /// Concatenated value text without the surrounding quotes.
    #[must_use]
    pub fn value(&self) -> String {
        self.value_parts
            .iter()
            .filter(|part| {
                !matches!(
                    part.kind(),
                    PartKind::QuotedValueStart | PartKind::QuotedValueEnd
                )
            })
            .map(Part::text)
            .collect()
    }

    /// Whether the value opened with a quote.
    #[must_use]
    pub fn is_quoted(&self) -> bool {
        self.value_parts
            .first()
            .is_some_and(|part| part.kind() == PartKind::QuotedValueStart)
    }

    /// Whether the attribute has no name.
    #[must_use]
    pub const fn is_nameless(&self) -> bool {
        self.name_parts.is_empty()
    }
}

/// A `<...>` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    name_parts: Vec<Part>,
    attributes: Vec<Attribute>,
    closing: bool,
    self_closing: bool,
    span: Span,
    source: String,
}

impl Element {
    pub(crate) fn new(
        name_parts: Vec<Part>,
        attributes: Vec<Attribute>,
        closing: bool,
        self_closing: bool,
        span: Span,
        source: &str,
    ) -> Self {
        Self {
            name_parts,
            attributes,
            closing,
            self_closing,
            span,
            source: source.to_string(),
        }
    }

    /// Parts making up the tag name.
    #[must_use]
    pub fn name_parts(&self) -> &[Part] {
        &self.name_parts
    }

    /// Attributes in source order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// `true` for `</name>`.
    #[must_use]
    pub const fn is_closing(&self) -> bool {
        self.closing
    }

    /// `true` when the tag ends with `/>`.
    #[must_use]
    pub const fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Concatenated tag name text.
    #[must_use]
    pub fn name(&self) -> String {
        join_text(&self.name_parts)
    }

    /// First attribute whose name matches, ignoring ASCII case.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name().eq_ignore_ascii_case(name))
    }
}

/// A node of the tokenized document.
///
/// Nodes are siblings; the tokenizer does not pair opening and closing tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// `<![CDATA[ ... ]]>`
    CData(Content),
    /// `<!-- ... -->`
    Comment(Content),
    /// Literal text and interpolations between markup.
    Text(Content),
    /// A tag.
    Element(Element),
}

impl Node {
    /// Source range of the whole construct.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::CData(content) | Self::Comment(content) | Self::Text(content) => content.span,
            Self::Element(element) => element.span,
        }
    }

    /// Exact source of the whole construct, markup characters included.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::CData(content) | Self::Comment(content) | Self::Text(content) => {
                &content.source
            }
            Self::Element(element) => &element.source,
        }
    }

    /// Every part of the node in document order.
    #[must_use]
    pub fn parts(&self) -> Vec<&Part> {
        match self {
            Self::CData(content) | Self::Comment(content) | Self::Text(content) => {
                content.parts.iter().collect()
            }
            Self::Element(element) => element
                .name_parts
                .iter()
                .chain(element.attributes.iter().flat_map(|attribute| {
                    attribute.name_parts.iter().chain(&attribute.value_parts)
                }))
                .collect(),
        }
    }

    /// The element, if this node is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Short lowercase name of the node variant.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::CData(_) => "cdata",
            Self::Comment(_) => "comment",
            Self::Text(_) => "text",
            Self::Element(_) => "element",
        }
    }
}

/// Rebuild the document from its nodes.
#[must_use]
pub fn reconstruct(nodes: &[Node]) -> String {
    nodes.iter().map(Node::source).collect()
}
