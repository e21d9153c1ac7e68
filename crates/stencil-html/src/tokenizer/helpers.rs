//! Helper functions for the template tokenizer.
//!
//! - Splitting a span of the document into parts
//! - Issue reporting

use stencil_common::warning::warn_once;

use super::document::{IssueKind, TokenizeIssue, Tokenizer};
use super::interpolation::Interpolations;
use super::part::Part;

// =============================================================================
// Splitting Helpers
// =============================================================================

impl Tokenizer<'_> {
    /// Split `start..end` of the document into parts, reporting an
    /// interpolation left open at the end of the span.
    pub(super) fn split_span(&mut self, start: usize, end: usize) -> Vec<Part> {
        let mut splitter = Interpolations::new(self.scanner.slice(start, end), start, self.profile);
        let parts: Vec<Part> = splitter.by_ref().collect();
        if let Some(offset) = splitter.unterminated() {
            self.report(IssueKind::UnterminatedInterpolation, offset);
        }
        parts
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl Tokenizer<'_> {
    /// Record an issue, and print it when warnings are enabled.
    ///
    /// Issues never interrupt tokenization.
    pub(super) fn report(&mut self, kind: IssueKind, offset: usize) {
        let message = format!("{kind} at offset {offset}");
        if self.warnings {
            warn_once("Tokenizer", &message);
        }
        self.issues.push(TokenizeIssue {
            kind,
            offset,
            message,
        });
    }
}
