//! Interpolation profiles for the supported template languages.
//!
//! A profile decides three things: which delimiters surround an embedded
//! expression, which marker right after the start delimiter makes it an
//! output expression, and whether `<...>` markup is tokenized at all.

use core::str::FromStr;

use stencil_common::ConfigError;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::tokenizer::PartKind;

/// Whether the document tokenizer interprets `<` as the start of markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum StructuralMode {
    /// Tags, comments and CDATA blocks are recognized.
    TagAware,
    /// The whole document is text; only interpolations are split out.
    TextOnly,
}

/// One row of the profile table.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct InterpolationProfile {
    /// Delimiter opening an interpolation, e.g. `<%`.
    pub start: &'static str,
    /// Delimiter closing an interpolation, e.g. `%>`.
    pub end: &'static str,
    /// Marker directly after `start` that makes the interpolation an output expression.
    pub output_marker: char,
    /// Whether markup is tokenized.
    pub mode: StructuralMode,
}

impl InterpolationProfile {
    /// Classify an interpolation by the text directly following its start delimiter.
    #[must_use]
    pub fn classify(&self, after_start: &str) -> PartKind {
        if after_start.starts_with(self.output_marker) {
            PartKind::ExprOutput
        } else {
            PartKind::ExprCode
        }
    }

    /// Whether `<` can open markup under this profile.
    #[must_use]
    pub const fn is_tag_aware(&self) -> bool {
        matches!(self.mode, StructuralMode::TagAware)
    }
}

static HTML: InterpolationProfile = InterpolationProfile {
    start: "<%",
    end: "%>",
    output_marker: '=',
    mode: StructuralMode::TagAware,
};

static JAVASCRIPT: InterpolationProfile = InterpolationProfile {
    start: "<%",
    end: "%>",
    output_marker: '=',
    mode: StructuralMode::TextOnly,
};

static LODASH: InterpolationProfile = InterpolationProfile {
    start: "[%",
    end: "%]",
    output_marker: '=',
    mode: StructuralMode::TagAware,
};

/// Template language selector.
///
/// `Html` is the ERB-in-HTML default. `Javascript` uses the same delimiters
/// but never tokenizes markup, since `<` in a script is an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TemplateLanguage {
    /// ERB embedded in HTML.
    #[default]
    Html,
    /// ERB embedded in JavaScript.
    Javascript,
    /// Lodash-style `[% %]` templates in HTML.
    Lodash,
}

impl TemplateLanguage {
    /// The interpolation profile for this language.
    #[must_use]
    pub const fn profile(self) -> &'static InterpolationProfile {
        match self {
            Self::Html => &HTML,
            Self::Javascript => &JAVASCRIPT,
            Self::Lodash => &LODASH,
        }
    }

    /// Canonical selector names, comma separated.
    #[must_use]
    pub fn expected_names() -> String {
        Self::iter()
            .map(|language| language.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for TemplateLanguage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" | "erb" => Ok(Self::Html),
            "javascript" | "js" => Ok(Self::Javascript),
            "lodash" => Ok(Self::Lodash),
            _ => Err(ConfigError::UnknownTemplateLanguage {
                name: s.to_string(),
                expected: Self::expected_names(),
            }),
        }
    }
}
