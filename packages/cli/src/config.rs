use anyhow::Context;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use wordsmith_store::{resolve_word_list_path, WordStore};

pub const DEFAULT_CONFIG_NAME: &str = "wordsmith.config.json";

/// Wordsmith configuration file format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Word list location, absolute or relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_list_file_path: Option<String>,

    /// Quiet period before re-annotating after an edit
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    200
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = Self::path(cwd);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Malformed config {}", config_path.display()))?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn path(cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME)
    }

    /// Get absolute path to the word list file
    pub fn word_list_path(&self, cwd: &str) -> PathBuf {
        resolve_word_list_path(&PathBuf::from(cwd), self.word_list_file_path.as_deref())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Open the configured word list, warning when it could not be read
    pub fn open_store(&self, cwd: &str) -> WordStore {
        let store = WordStore::open(Some(self.word_list_path(cwd)));
        warn_load_error(&store);
        store
    }
}

pub fn warn_load_error(store: &WordStore) {
    if let Some(e) = store.load_error() {
        eprintln!("{} {}", "⚠️ ".yellow(), e);
        eprintln!("   Continuing with an empty word list");
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_list_file_path: None,
            debounce_ms: default_debounce_ms(),
        }
    }
}
