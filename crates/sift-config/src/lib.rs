//! # sift-config
//!
//! Layered configuration loading for sift using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SIFT_*` prefix, `__` as separator)
//! 2. Project-level `.sift/config.toml`
//! 3. User-level `~/.config/sift/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SIFT_STORAGE__DIR` -> `storage.dir`,
//! `SIFT_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sift_config::SiftConfig;
//!
//! let config = SiftConfig::load_with_dotenv().expect("config");
//! println!("history lives in {}", config.storage.resolved_dir().display());
//! ```

mod error;
mod general;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use sift_core::ids::DEFAULT_SLOT_NAME;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SiftConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SiftConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.storage.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".sift/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SIFT_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sift").join("config.toml"))
    }
}
