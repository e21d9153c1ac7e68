use serde::Serialize;
use strum_macros::Display;

use crate::profile::{InterpolationProfile, TemplateLanguage};
use crate::scanner::Scanner;

use super::node::{Content, Node};
use super::part::Span;

/// A recoverable condition met while tokenizing.
///
/// None of these stop the tokenizer: the construct is still emitted with
/// whatever was collected. Templates under edit are routinely incomplete, so
/// strict consumers decide for themselves which of these matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum IssueKind {
    /// `<!--` without `-->`.
    #[strum(to_string = "unterminated comment")]
    UnterminatedComment,
    /// `<![CDATA[` without `]]>`.
    #[strum(to_string = "unterminated CDATA section")]
    UnterminatedCData,
    /// A tag reaching end of input before `>`.
    #[strum(to_string = "unterminated tag")]
    UnterminatedTag,
    /// A quoted attribute value without its closing quote.
    #[strum(to_string = "unterminated quoted attribute value")]
    UnterminatedQuotedValue,
    /// An interpolation without its end delimiter.
    #[strum(to_string = "unterminated interpolation")]
    UnterminatedInterpolation,
    /// A quoted value with no attribute name before it.
    #[strum(to_string = "attribute without name")]
    NamelessAttribute,
    /// `<` directly followed by whitespace, `/`, `>` or end of input.
    #[strum(to_string = "empty tag name")]
    EmptyTagName,
    /// A `/` inside a tag that does not end it.
    #[strum(to_string = "unexpected solidus in tag")]
    UnexpectedSolidus,
}

/// One recorded tokenizer issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenizeIssue {
    /// What happened.
    pub kind: IssueKind,
    /// Byte offset of the construct the issue belongs to.
    pub offset: usize,
    /// Human readable description.
    pub message: String,
}

/// Tokenizer for one document.
///
/// Owns the cursor and the nodes under construction; both are discarded or
/// handed over when [`Tokenizer::run`] consumes it.
pub struct Tokenizer<'a> {
    pub(super) scanner: Scanner<'a>,
    pub(super) profile: &'static InterpolationProfile,
    pub(super) nodes: Vec<Node>,
    pub(super) issues: Vec<TokenizeIssue>,
    pub(super) warnings: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer for `input` using the profile of `language`.
    #[must_use]
    pub const fn new(input: &'a str, language: TemplateLanguage) -> Self {
        Tokenizer {
            scanner: Scanner::new(input),
            profile: language.profile(),
            nodes: Vec::new(),
            issues: Vec::new(),
            warnings: false,
        }
    }

    /// Print issues through the warning system as they are found.
    #[must_use]
    pub const fn with_warnings(mut self, enabled: bool) -> Self {
        self.warnings = enabled;
        self
    }

    /// Tokenize the whole document and return its nodes.
    #[must_use]
    pub fn run(self) -> Vec<Node> {
        self.run_with_issues().0
    }

    /// Tokenize the whole document, returning nodes and recorded issues.
    #[must_use]
    pub fn run_with_issues(mut self) -> (Vec<Node>, Vec<TokenizeIssue>) {
        if self.profile.is_tag_aware() {
            while !self.scanner.is_eof() {
                if self.at_tag_open() {
                    let node = self.consume_markup();
                    self.nodes.push(node);
                } else {
                    self.consume_text();
                }
            }
        } else {
            // Text-only profiles never look at markup.
            let (start, end) = (0, self.scanner.remaining().len());
            self.emit_text(start, end);
        }
        (self.nodes, self.issues)
    }

    /// `<` opens markup unless it is the start of an interpolation.
    fn at_tag_open(&self) -> bool {
        self.scanner.peek() == Some('<')
            && !self.scanner.next_few_characters_are(self.profile.start)
    }

    fn consume_text(&mut self) {
        let (start, end) = self.scanner.consume_text_run(self.profile);
        self.emit_text(start, end);
    }

    fn emit_text(&mut self, start: usize, end: usize) {
        if start == end {
            return;
        }
        let parts = self.split_span(start, end);
        let source = self.scanner.slice(start, end);
        let content = Content::new(parts, Span::new(start, end), source);
        self.nodes.push(Node::Text(content));
    }
}
