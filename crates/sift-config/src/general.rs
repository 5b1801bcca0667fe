//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default number of history rows shown by `sift history list`.
const fn default_limit() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for `history list`.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Save every analysis to history without passing `--save`.
    #[serde(default)]
    pub auto_save: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            auto_save: false,
        }
    }
}
