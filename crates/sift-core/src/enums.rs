//! Verdict, source-credibility, and factor enums for sift.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Three-way classification of an analyzed article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Real,
    Fake,
    Uncertain,
}

impl Verdict {
    /// Return the string representation used in the persisted slot.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::Fake => "fake",
            Self::Uncertain => "uncertain",
        }
    }

    /// Human-facing headline shown above a result.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Real => "Likely Real News",
            Self::Fake => "Likely Fake News",
            Self::Uncertain => "Uncertain - Verify with Other Sources",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SourceCredibility
// ---------------------------------------------------------------------------

/// How the free-form source string matched against the credible domain list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceCredibility {
    /// No source was provided; contributes nothing to the score.
    Absent,
    Recognized,
    Unrecognized,
}

impl SourceCredibility {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Recognized => "recognized",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for SourceCredibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FactorKind
// ---------------------------------------------------------------------------

/// Rule that produced an explanatory factor.
///
/// Fake verdicts draw from the first five kinds, real verdicts from the next
/// three, and uncertain verdicts always carry `MixedSignals` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    SensationalLanguage,
    ExcessiveExclamation,
    ExcessiveCapitalization,
    UnrecognizedSource,
    MissingCitations,
    CredibleAppearance,
    RecognizedSource,
    HasCitations,
    MixedSignals,
}

impl FactorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SensationalLanguage => "sensational_language",
            Self::ExcessiveExclamation => "excessive_exclamation",
            Self::ExcessiveCapitalization => "excessive_capitalization",
            Self::UnrecognizedSource => "unrecognized_source",
            Self::MissingCitations => "missing_citations",
            Self::CredibleAppearance => "credible_appearance",
            Self::RecognizedSource => "recognized_source",
            Self::HasCitations => "has_citations",
            Self::MixedSignals => "mixed_signals",
        }
    }

    /// Stable icon tag for presentation layers.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::SensationalLanguage => "exclamation-triangle",
            Self::ExcessiveExclamation => "exclamation-circle",
            Self::ExcessiveCapitalization => "font",
            Self::UnrecognizedSource => "link",
            Self::MissingCitations => "quote-right",
            Self::CredibleAppearance => "check-circle",
            Self::RecognizedSource => "link",
            Self::HasCitations => "quote-right",
            Self::MixedSignals => "question-circle",
        }
    }

    /// Explanatory sentence for the factor.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::SensationalLanguage => "Contains sensational language and exaggerated claims",
            Self::ExcessiveExclamation => "Excessive use of exclamation points",
            Self::ExcessiveCapitalization => "Uses excessive capitalization for emphasis",
            Self::UnrecognizedSource => "Source is not a recognized credible news outlet",
            Self::MissingCitations => "Lacks citations or references to credible sources",
            Self::CredibleAppearance => "Appears to be from a credible source",
            Self::RecognizedSource => "Source is a recognized credible news outlet",
            Self::HasCitations => "Includes citations or references to sources",
            Self::MixedSignals => {
                "Mixed signals - some credible elements but also some concerns"
            }
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
