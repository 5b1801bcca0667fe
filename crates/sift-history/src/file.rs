//! File-backed slot store: one JSON file per slot.
//!
//! Writes go to a temp file in the same directory and are renamed over the
//! slot file, so readers never observe a half-written slot.

use std::io::Write;
use std::path::{Path, PathBuf};

use sift_core::ids::is_valid_slot_name;

use crate::error::PersistenceError;
use crate::slot::SlotStore;

#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Store slots under `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `slot`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidSlot` if the name is empty or could
    /// escape the store directory.
    pub fn slot_path(&self, slot: &str) -> Result<PathBuf, PersistenceError> {
        if !is_valid_slot_name(slot) {
            return Err(PersistenceError::InvalidSlot(slot.to_string()));
        }
        Ok(self.dir.join(format!("{slot}.json")))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, slot: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.slot_path(slot)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistenceError::Io { path, source }),
        }
    }

    fn write(&mut self, slot: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.slot_path(slot)?;
        let io_err = |source: std::io::Error| PersistenceError::Io {
            path: path.clone(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(io_err)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(io_err)?;
        tmp.write_all(value.as_bytes()).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&path).map_err(|error| io_err(error.error))?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "wrote slot");
        Ok(())
    }
}
