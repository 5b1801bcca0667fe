//! # sift-history
//!
//! Capped, newest-first history of analyses, persisted to one named slot of
//! a durable key-value store.
//!
//! - [`HistoryStore`] owns the sequence; callers only mutate it through
//!   `append`, `remove`, and `clear`.
//! - [`SlotStore`] is the persistence seam. [`FileSlotStore`] keeps each slot
//!   in `<dir>/<slot>.json`; [`MemorySlotStore`] keeps slots in memory.
//! - Loading never fails. Slot writes that fail are reported as
//!   [`HistoryError::PersistenceUnavailable`] while the in-memory change stands.

pub mod error;
pub mod file;
pub mod slot;
pub mod store;

pub use error::{HistoryError, PersistenceError};
pub use file::FileSlotStore;
pub use slot::{MemorySlotStore, SlotStore};
pub use store::{DEFAULT_SLOT, HISTORY_CAPACITY, HistoryStore, StoreWrite};
