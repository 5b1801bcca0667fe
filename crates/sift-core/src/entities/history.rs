use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};

use crate::entities::{AnalysisInput, AnalysisResult};
use crate::enums::Verdict;

/// A saved analysis. Persisted as one element of the history slot array.
///
/// Reads also accept the `result` / `date` keys written by the web
/// front end. `createdAt` is always written as
/// `YYYY-MM-DDTHH:MM:SS.sssZ`, so the text sorts in time order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub source: String,
    #[serde(alias = "result")]
    pub verdict: Verdict,
    #[schemars(range(max = 100))]
    pub confidence: u8,
    #[serde(alias = "date", serialize_with = "serialize_millis")]
    #[schemars(with = "DateTime<Utc>")]
    pub created_at: DateTime<Utc>,
}

fn serialize_millis<S: Serializer>(
    at: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl HistoryRecord {
    #[must_use]
    pub fn new(
        id: i64,
        input: &AnalysisInput,
        result: &AnalysisResult,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: input.title.clone(),
            content: input.content.clone(),
            source: input.source.clone(),
            verdict: result.verdict,
            confidence: result.confidence,
            created_at: created_at.trunc_subsecs(3),
        }
    }

    /// Rebuild the input this record was created from, for re-analysis.
    #[must_use]
    pub fn input(&self) -> AnalysisInput {
        AnalysisInput::new(&self.title, &self.content, &self.source)
    }
}
