//! CLI response types returned as JSON by `sift` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AnalysisInput, AnalysisResult, HistoryRecord};

/// Response from `sift analyze` and `sift history reanalyze`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalyzeResponse {
    pub input: AnalysisInput,
    pub result: AnalysisResult,
    /// Record written to history, when saving was requested.
    pub saved: Option<HistoryRecord>,
}

/// Response from `sift history list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryListResponse {
    pub records: Vec<HistoryRecord>,
    pub total: u32,
}

/// Response from `sift history remove`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryRemoveResponse {
    pub id: i64,
    pub removed: bool,
    pub remaining: u32,
}

/// Response from `sift history clear`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryClearResponse {
    pub cleared: u32,
}
