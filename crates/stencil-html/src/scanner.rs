//! Cursor over the document text.
//!
//! The scanner never copies input; it hands out byte offsets and `&str`
//! slices borrowed from the document. Offsets always sit on a `char`
//! boundary. Runs are scanned interpolation-aware: an interpolation that
//! starts inside a run is stepped over as a unit, so a `>` or a quote inside
//! `<%= ... %>` never ends the run around it.

use memchr::{memchr2, memmem};

use crate::profile::InterpolationProfile;

/// Whitespace separating attributes inside a tag.
#[must_use]
pub const fn is_whitespace_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

/// Scanner over a borrowed document.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Whether the cursor reached the end of input.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The unconsumed input.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Slice of the input between two offsets previously reported by the scanner.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }

    /// Current character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Whether the input at the cursor starts with `literal`.
    #[must_use]
    pub fn next_few_characters_are(&self, literal: &str) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Consume one character.
    pub fn advance_char(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Consume `literal` if the input at the cursor starts with it.
    pub fn consume_literal(&mut self, literal: &str) -> bool {
        if self.next_few_characters_are(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Skip tag whitespace.
    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !is_whitespace_char(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Step over an interpolation starting at the cursor.
    ///
    /// Moves past the end delimiter, or to end of input when the
    /// interpolation is unterminated. Returns `false` without moving when no
    /// start delimiter is at the cursor.
    pub fn skip_interpolation(&mut self, profile: &InterpolationProfile) -> bool {
        if !self.next_few_characters_are(profile.start) {
            return false;
        }
        let body = self.pos + profile.start.len();
        self.pos = memmem::find(&self.input.as_bytes()[body..], profile.end.as_bytes())
            .map_or(self.input.len(), |i| body + i + profile.end.len());
        true
    }

    /// Consume characters until `stop` matches one outside an interpolation.
    ///
    /// Returns the `(start, end)` offsets of the consumed run, which may be empty.
    pub fn consume_run<F>(&mut self, profile: &InterpolationProfile, stop: F) -> (usize, usize)
    where
        F: Fn(char) -> bool,
    {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if self.skip_interpolation(profile) {
                continue;
            }
            if stop(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        (start, self.pos)
    }

    /// Consume characters until `terminator` appears outside an interpolation.
    ///
    /// Leaves the cursor on the terminator and returns `true`, or consumes
    /// the rest of the input and returns `false`.
    pub fn consume_until(&mut self, profile: &InterpolationProfile, terminator: &str) -> bool {
        while !self.is_eof() {
            if self.next_few_characters_are(terminator) {
                return true;
            }
            if !self.skip_interpolation(profile) {
                self.advance_char();
            }
        }
        false
    }

    /// Consume a run of document text up to the next `<` that is not the
    /// start of an interpolation.
    pub fn consume_text_run(&mut self, profile: &InterpolationProfile) -> (usize, usize) {
        let start = self.pos;
        let lead = profile.start.as_bytes()[0];
        // Both candidate bytes are ASCII, so every hit is a char boundary.
        while let Some(i) = memchr2(b'<', lead, &self.input.as_bytes()[self.pos..]) {
            self.pos += i;
            if self.skip_interpolation(profile) {
                continue;
            }
            if self.peek() == Some('<') {
                return (start, self.pos);
            }
            self.pos += 1;
        }
        self.pos = self.input.len();
        (start, self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::TemplateLanguage;

    #[test]
    fn test_consume_run_stops_at_predicate() {
        let profile = TemplateLanguage::Html.profile();
        let mut scanner = Scanner::new("div class");
        assert_eq!(scanner.consume_run(profile, is_whitespace_char), (0, 3));
        assert_eq!(scanner.peek(), Some(' '));
    }

    #[test]
    fn test_consume_run_steps_over_interpolation() {
        let profile = TemplateLanguage::Html.profile();
        let mut scanner = Scanner::new("ns:<%= a > b %>-thing>");
        let (start, end) = scanner.consume_run(profile, |c| c == '>' || is_whitespace_char(c));
        assert_eq!(scanner.slice(start, end), "ns:<%= a > b %>-thing");
    }

    #[test]
    fn test_unterminated_interpolation_runs_to_end() {
        let profile = TemplateLanguage::Html.profile();
        let mut scanner = Scanner::new("<%= open > ");
        assert!(scanner.skip_interpolation(profile));
        assert!(scanner.is_eof());
    }

    #[test]
    fn test_consume_until_terminator() {
        let profile = TemplateLanguage::Html.profile();
        let mut scanner = Scanner::new(" a <%= '-->' %> b -->tail");
        assert!(scanner.consume_until(profile, "-->"));
        assert_eq!(scanner.remaining(), "-->tail");

        let mut scanner = Scanner::new(" never closed");
        assert!(!scanner.consume_until(profile, "-->"));
        assert!(scanner.is_eof());
    }

    #[test]
    fn test_text_run_keeps_erb_tags() {
        let profile = TemplateLanguage::Html.profile();
        let mut scanner = Scanner::new("héllo <%= x %> wörld<p>");
        let (start, end) = scanner.consume_text_run(profile);
        assert_eq!(scanner.slice(start, end), "héllo <%= x %> wörld");
        assert_eq!(scanner.remaining(), "<p>");
    }

    #[test]
    fn test_text_run_with_lodash_delimiters() {
        let profile = TemplateLanguage::Lodash.profile();
        let mut scanner = Scanner::new("a [ b [%= '<' %] c");
        let (start, end) = scanner.consume_text_run(profile);
        assert_eq!(scanner.slice(start, end), "a [ b [%= '<' %] c");
        assert!(scanner.is_eof());
    }
}
