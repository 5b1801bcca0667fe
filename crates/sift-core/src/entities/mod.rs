//! Entity structs for sift domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod analysis;
mod history;

pub use analysis::{AnalysisInput, AnalysisResult, Factor, Signals};
pub use history::HistoryRecord;
