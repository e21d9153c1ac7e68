//! Errors reported before tokenization begins.
//!
//! Tokenizing itself never fails; the only rejected input is a template
//! language selector the tokenizer does not know.

use thiserror::Error;

/// A configuration value could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The requested template language has no interpolation profile.
    #[error("unknown template language '{name}' (expected one of: {expected})")]
    UnknownTemplateLanguage {
        /// The selector as given by the caller.
        name: String,
        /// Comma-separated list of accepted selectors.
        expected: String,
    },
}
