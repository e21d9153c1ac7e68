//! Splitting raw text into literal and interpolation parts.
//!
//! The same splitter serves tag names, attribute names and values, comment
//! and CDATA bodies and plain text; only the span and where the parts end up
//! differ between those callers.

use core::iter::FusedIterator;

use memchr::memmem;

use crate::profile::InterpolationProfile;

use super::part::{Part, PartKind};

/// Lazy iterator over the parts of one span of source.
///
/// Literal runs become [`PartKind::Text`] parts and are never empty. An
/// interpolation part runs from its start delimiter through its end
/// delimiter; without an end delimiter it takes the rest of the span and the
/// iterator finishes.
#[derive(Debug, Clone)]
pub struct Interpolations<'a> {
    source: &'a str,
    base: usize,
    pos: usize,
    profile: &'static InterpolationProfile,
    unterminated: Option<usize>,
}

impl<'a> Interpolations<'a> {
    /// Split `source`, which starts at byte offset `base` of the document.
    #[must_use]
    pub const fn new(source: &'a str, base: usize, profile: &'static InterpolationProfile) -> Self {
        Self {
            source,
            base,
            pos: 0,
            profile,
            unterminated: None,
        }
    }

    /// Document offset of an interpolation that reached the end of the span
    /// without its end delimiter, once the iterator has yielded it.
    #[must_use]
    pub const fn unterminated(&self) -> Option<usize> {
        self.unterminated
    }

    fn part(&self, kind: PartKind, start: usize, end: usize) -> Part {
        Part::new(kind, &self.source[start..end], self.base + start)
    }

    fn interpolation(&mut self) -> Part {
        let start = self.pos;
        let body = start + self.profile.start.len();
        let kind = self.profile.classify(&self.source[body..]);
        let found = memmem::find(&self.source.as_bytes()[body..], self.profile.end.as_bytes());
        let end = if let Some(i) = found {
            body + i + self.profile.end.len()
        } else {
            self.unterminated = Some(self.base + start);
            self.source.len()
        };
        self.pos = end;
        self.part(kind, start, end)
    }
}

impl Iterator for Interpolations<'_> {
    type Item = Part;

    fn next(&mut self) -> Option<Part> {
        if self.pos >= self.source.len() {
            return None;
        }
        let start = self.pos;
        let rest = &self.source[start..];
        let end = match memmem::find(rest.as_bytes(), self.profile.start.as_bytes()) {
            Some(0) => return Some(self.interpolation()),
            Some(i) => start + i,
            None => self.source.len(),
        };
        self.pos = end;
        Some(self.part(PartKind::Text, start, end))
    }
}

impl FusedIterator for Interpolations<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::TemplateLanguage;

    fn split(source: &str, language: TemplateLanguage) -> Vec<(PartKind, String)> {
        Interpolations::new(source, 0, language.profile())
            .map(|part| (part.kind(), part.text().to_string()))
            .collect()
    }

    #[test]
    fn test_literal_only() {
        assert_eq!(
            split("plain", TemplateLanguage::Html),
            vec![(PartKind::Text, "plain".to_string())]
        );
    }

    #[test]
    fn test_empty_span_yields_nothing() {
        assert!(split("", TemplateLanguage::Html).is_empty());
    }

    #[test]
    fn test_output_and_code_expressions() {
        assert_eq!(
            split("a<%= b %><% c %>d", TemplateLanguage::Html),
            vec![
                (PartKind::Text, "a".to_string()),
                (PartKind::ExprOutput, "<%= b %>".to_string()),
                (PartKind::ExprCode, "<% c %>".to_string()),
                (PartKind::Text, "d".to_string()),
            ]
        );
    }

    #[test]
    fn test_unterminated_interpolation_consumes_rest() {
        let mut parts = Interpolations::new("x <%= y", 10, TemplateLanguage::Html.profile());
        let first = parts.next().unwrap();
        assert_eq!(first.text(), "x ");
        assert_eq!(first.span().start, 10);
        let second = parts.next().unwrap();
        assert_eq!(second.kind(), PartKind::ExprOutput);
        assert_eq!(second.text(), "<%= y");
        assert_eq!(parts.unterminated(), Some(12));
        assert!(parts.next().is_none());
    }

    #[test]
    fn test_lodash_delimiters() {
        assert_eq!(
            split("<%= not %>[%= yes %]", TemplateLanguage::Lodash),
            vec![
                (PartKind::Text, "<%= not %>".to_string()),
                (PartKind::ExprOutput, "[%= yes %]".to_string()),
            ]
        );
    }
}
