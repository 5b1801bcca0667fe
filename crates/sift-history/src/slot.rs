//! Durable key-value slot abstraction and the in-memory backend.

use std::collections::BTreeMap;

use crate::error::PersistenceError;

/// A durable key-value store addressed by slot name.
///
/// Each slot holds one string value that is always rewritten in full.
pub trait SlotStore {
    /// Read a slot. `Ok(None)` means the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the backend cannot be read.
    fn read(&self, slot: &str) -> Result<Option<String>, PersistenceError>;

    /// Replace the value held by a slot.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the value could not be stored durably.
    fn write(&mut self, slot: &str, value: &str) -> Result<(), PersistenceError>;
}

/// Map-backed slot store. Can be told to reject writes to simulate a full
/// or unavailable backend.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStore {
    slots: BTreeMap<String, String>,
    fail_writes: bool,
}

impl MemorySlotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with a raw value.
    #[must_use]
    pub fn with_slot(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(slot.into(), value.into());
        self
    }

    pub const fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw value currently held by a slot.
    #[must_use]
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, slot: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.slots.get(slot).cloned())
    }

    fn write(&mut self, slot: &str, value: &str) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::Unavailable(format!(
                "writes to '{slot}' are disabled"
            )));
        }
        self.slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}
