//! History storage location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sift_core::ids::{DEFAULT_SLOT_NAME, is_valid_slot_name};

use crate::ConfigError;

fn default_slot() -> String {
    DEFAULT_SLOT_NAME.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding slot files. Empty means the platform data dir.
    #[serde(default)]
    pub dir: String,

    /// Slot holding the history array.
    #[serde(default = "default_slot")]
    pub slot: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            slot: default_slot(),
        }
    }
}

impl StorageConfig {
    /// Directory to store slots in: `dir` if set, else `<data_dir>/sift`,
    /// else `.sift` under the working directory.
    #[must_use]
    pub fn resolved_dir(&self) -> PathBuf {
        if !self.dir.is_empty() {
            return PathBuf::from(&self.dir);
        }
        dirs::data_dir().map_or_else(|| PathBuf::from(".sift"), |dir| dir.join("sift"))
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `slot` is not a usable slot name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_valid_slot_name(&self.slot) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "storage.slot".to_string(),
                reason: format!(
                    "'{}' must be non-empty and use only letters, digits, '-' or '_'",
                    self.slot
                ),
            })
        }
    }
}
