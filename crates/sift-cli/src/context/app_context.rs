use std::path::PathBuf;

use sift_config::SiftConfig;
use sift_history::{FileSlotStore, HistoryStore};

/// Loaded configuration plus the history store every command works against.
pub struct AppContext {
    pub config: SiftConfig,
    pub history: HistoryStore<FileSlotStore>,
}

impl AppContext {
    /// Open the history slot. `data_dir` overrides `storage.dir`.
    ///
    /// Never fails: an unreadable or corrupt slot loads as empty history.
    pub fn init(config: SiftConfig, data_dir: Option<PathBuf>) -> Self {
        let dir = data_dir.unwrap_or_else(|| config.storage.resolved_dir());
        tracing::debug!(dir = %dir.display(), slot = %config.storage.slot, "opening history");

        let history = HistoryStore::load(FileSlotStore::new(dir), config.storage.slot.clone());
        Self { config, history }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sift_config::SiftConfig;

    use super::AppContext;

    #[test]
    fn data_dir_override_wins_over_config() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut config = SiftConfig::default();
        config.storage.dir = "/nonexistent/sift".to_string();

        let ctx = AppContext::init(config, Some(temp.path().to_path_buf()));
        assert_eq!(ctx.history.slots().dir(), temp.path());
        assert_eq!(ctx.history.slot(), sift_history::DEFAULT_SLOT);
        assert!(ctx.history.is_empty());
    }

    #[test]
    fn configured_slot_is_used() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut config = SiftConfig::default();
        config.storage.slot = "review".to_string();

        let ctx = AppContext::init(config, Some(temp.path().to_path_buf()));
        assert_eq!(ctx.history.slot(), "review");
    }
}
