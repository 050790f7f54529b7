use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("parley"))
        .unwrap_or_else(|| PathBuf::from(".parley"))
}

fn default_ignored_file() -> String {
    "ignored-words.json".to_string()
}

fn default_added_file() -> String {
    "added-words.json".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Consult the custom dictionary when spellchecking
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Directory holding the word list files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_ignored_file")]
    pub ignored_file: String,
    #[serde(default = "default_added_file")]
    pub added_file: String,
}

impl DictionaryConfig {
    pub fn ignored_path(&self) -> PathBuf {
        self.data_dir.join(&self.ignored_file)
    }

    pub fn added_path(&self) -> PathBuf {
        self.data_dir.join(&self.added_file)
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            data_dir: default_data_dir(),
            ignored_file: default_ignored_file(),
            added_file: default_added_file(),
        }
    }
}
