use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{FactorKind, SourceCredibility, Verdict};

/// The three free-text fields a caller submits for analysis.
///
/// Every field may be empty. An empty `source` means no source was given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalysisInput {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub source: String,
}

impl AnalysisInput {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            source: source.into(),
        }
    }
}

/// A human-readable justification attached to a result.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Factor {
    pub kind: FactorKind,
    pub icon: String,
    pub text: String,
}

impl From<FactorKind> for Factor {
    fn from(kind: FactorKind) -> Self {
        Self {
            kind,
            icon: kind.icon().to_string(),
            text: kind.text().to_string(),
        }
    }
}

/// Raw indicator tallies gathered from an input before weighting.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Signals {
    /// Sensational keywords found, in keyword-list order.
    pub keyword_hits: Vec<String>,
    pub exclamation_count: u32,
    /// Maximal runs of three or more ASCII uppercase letters.
    pub all_caps_runs: u32,
    pub source: SourceCredibility,
    /// Any of the four citation phrases used by scoring.
    pub has_citation: bool,
    /// "according to" or "study shows"; drives the citation factors.
    pub has_direct_citation: bool,
    /// Content length in UTF-16 code units, the unit web clients measure in.
    pub char_count: usize,
}

/// Outcome of scoring one article.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    /// Distance of `score` from 50, doubled. Always within `0..=100`.
    #[schemars(range(max = 100))]
    pub confidence: u8,
    /// Most salient first; never empty.
    pub factors: Vec<Factor>,
    /// Clamped score in `0..=100` the verdict was derived from.
    #[schemars(range(max = 100))]
    pub score: u8,
    pub signals: Signals,
}
