//! Cross-cutting error types for sift.
//!
//! Domain-specific errors (`HistoryError`, `ConfigError`) are defined in
//! their respective crates. Everything converges into `anyhow` in `sift-cli`.

use thiserror::Error;

/// Errors that can be raised by any sift crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },
}

impl CoreError {
    /// Shorthand for a missing history record.
    #[must_use]
    pub fn record_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "history record".to_string(),
            id: id.to_string(),
        }
    }
}
