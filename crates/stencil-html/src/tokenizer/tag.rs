//! Tokenization of a single `<...>` construct.
//!
//! Entered with the scanner on `<`. Comments and CDATA blocks are checked
//! first; everything else is an element, however odd its name.

use crate::scanner::is_whitespace_char;

use super::document::{IssueKind, Tokenizer};
use super::node::{Attribute, Content, Element, Node};
use super::part::{Part, PartKind, Span};

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";
const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Comment,
    CData,
}

const fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'')
}

const fn is_tag_name_end(c: char) -> bool {
    is_whitespace_char(c) || matches!(c, '/' | '>')
}

const fn is_attribute_name_end(c: char) -> bool {
    is_whitespace_char(c) || is_quote(c) || matches!(c, '=' | '/' | '>')
}

const fn is_unquoted_value_end(c: char) -> bool {
    is_whitespace_char(c) || c == '>'
}

impl Tokenizer<'_> {
    /// Consume the comment, CDATA block or element at the cursor.
    pub(super) fn consume_markup(&mut self) -> Node {
        if self.scanner.next_few_characters_are(COMMENT_OPEN) {
            self.consume_block(BlockKind::Comment)
        } else if self.scanner.next_few_characters_are(CDATA_OPEN) {
            self.consume_block(BlockKind::CData)
        } else {
            self.consume_element()
        }
    }

    /// Comments and CDATA share one policy: content runs to the terminator,
    /// or to end of input when there is none.
    fn consume_block(&mut self, kind: BlockKind) -> Node {
        let (open, close, unterminated) = match kind {
            BlockKind::Comment => (COMMENT_OPEN, COMMENT_CLOSE, IssueKind::UnterminatedComment),
            BlockKind::CData => (CDATA_OPEN, CDATA_CLOSE, IssueKind::UnterminatedCData),
        };
        let start = self.scanner.position();
        let opened = self.scanner.consume_literal(open);
        debug_assert!(opened, "consume_block called without {open} at the cursor");

        let content_start = self.scanner.position();
        let terminated = self.scanner.consume_until(self.profile, close);
        let content_end = self.scanner.position();
        if terminated {
            let closed = self.scanner.consume_literal(close);
            debug_assert!(closed);
        } else {
            self.report(unterminated, start);
        }

        let parts = self.split_span(content_start, content_end);
        let end = self.scanner.position();
        let source = self.scanner.slice(start, end);
        let content = Content::new(parts, Span::new(start, end), source);
        match kind {
            BlockKind::Comment => Node::Comment(content),
            BlockKind::CData => Node::CData(content),
        }
    }

    fn consume_element(&mut self) -> Node {
        let start = self.scanner.position();
        self.scanner.advance_char();
        let closing = self.scanner.consume_literal("/");

        let (name_start, name_end) = self.scanner.consume_run(self.profile, is_tag_name_end);
        if name_start == name_end {
            self.report(IssueKind::EmptyTagName, start);
        }
        let name_parts = self.split_span(name_start, name_end);
        let attributes = self.consume_attributes();

        let self_closing = if self.scanner.consume_literal("/>") {
            true
        } else {
            if !self.scanner.consume_literal(">") {
                self.report(IssueKind::UnterminatedTag, start);
            }
            false
        };

        let end = self.scanner.position();
        Node::Element(Element::new(
            name_parts,
            attributes,
            closing,
            self_closing,
            Span::new(start, end),
            self.scanner.slice(start, end),
        ))
    }

    /// Collect attributes up to `>`, `/>` or end of input, leaving the
    /// tag end unconsumed.
    fn consume_attributes(&mut self) -> Vec<Attribute> {
        let mut attributes = Vec::new();
        loop {
            self.scanner.skip_whitespace();
            match self.scanner.peek() {
                None | Some('>') => break,
                Some('/') => {
                    if self.scanner.next_few_characters_are("/>") {
                        break;
                    }
                    self.report(IssueKind::UnexpectedSolidus, self.scanner.position());
                    self.scanner.advance_char();
                }
                Some(quote) if is_quote(quote) => {
                    // A quote before any name character: nameless attribute.
                    let start = self.scanner.position();
                    self.report(IssueKind::NamelessAttribute, start);
                    let value_parts = self.consume_quoted_value(quote);
                    let span = Span::new(start, self.scanner.position());
                    attributes.push(Attribute::new(Vec::new(), value_parts, span));
                }
                Some(_) => {
                    let attribute = self.consume_attribute();
                    attributes.push(attribute);
                }
            }
        }
        attributes
    }

    fn consume_attribute(&mut self) -> Attribute {
        let start = self.scanner.position();
        // `=` where a name should start is part of the name.
        let _ = self.scanner.consume_literal("=");
        let (_, name_end) = self.scanner.consume_run(self.profile, is_attribute_name_end);
        let name_parts = self.split_span(start, name_end);

        self.scanner.skip_whitespace();
        if !self.scanner.consume_literal("=") {
            return Attribute::new(name_parts, Vec::new(), Span::new(start, name_end));
        }

        self.scanner.skip_whitespace();
        let value_parts = match self.scanner.peek() {
            Some(quote) if is_quote(quote) => self.consume_quoted_value(quote),
            _ => {
                let (value_start, value_end) =
                    self.scanner.consume_run(self.profile, is_unquoted_value_end);
                self.split_span(value_start, value_end)
            }
        };
        Attribute::new(name_parts, value_parts, Span::new(start, self.scanner.position()))
    }

    /// Consume a quoted value with the scanner on its opening quote.
    ///
    /// The first matching quote outside an interpolation closes the value;
    /// there is no escaping. Without one the value runs to end of input and
    /// no end marker is emitted.
    fn consume_quoted_value(&mut self, quote: char) -> Vec<Part> {
        let quote_start = self.scanner.position();
        self.scanner.advance_char();
        let mut parts = vec![Part::new(
            PartKind::QuotedValueStart,
            self.scanner.slice(quote_start, self.scanner.position()),
            quote_start,
        )];

        let (content_start, content_end) = self.scanner.consume_run(self.profile, |c| c == quote);
        parts.extend(self.split_span(content_start, content_end));

        if self.scanner.peek() == Some(quote) {
            self.scanner.advance_char();
            parts.push(Part::new(
                PartKind::QuotedValueEnd,
                self.scanner.slice(content_end, self.scanner.position()),
                content_end,
            ));
        } else {
            self.report(IssueKind::UnterminatedQuotedValue, quote_start);
        }
        parts
    }
}
