//! History and slot persistence error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from a [`SlotStore`](crate::SlotStore) backend.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Filesystem read or write failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Slot name cannot be mapped onto the backend.
    #[error("Invalid slot name '{0}': use letters, digits, '-' or '_'")]
    InvalidSlot(String),

    /// Backend refused the write (full, read-only, disconnected).
    #[error("Slot backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors from [`HistoryStore`](crate::HistoryStore) operations.
///
/// The in-memory sequence is already updated when one of these is reported.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The mutation could not be written to the durable slot.
    #[error("History slot '{slot}' could not be persisted: {source}")]
    PersistenceUnavailable {
        slot: String,
        #[source]
        source: PersistenceError,
    },

    /// The sequence could not be encoded as JSON.
    #[error("History could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}
