use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::menu::MenuConfig;
use self::page::PageSelectors;
use self::ui::UiConfig;

pub mod dictionary;
pub mod menu;
pub mod page;
pub mod ui;

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub menu: MenuConfig,
    pub page: PageSelectors,
    pub ui: UiConfig,

    /// Locale used when a request does not carry one
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Bound of the host <-> app channels
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            menu: MenuConfig::default(),
            page: PageSelectors::default(),
            ui: UiConfig::default(),
            locale: default_locale(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(dir) = env::var("PARLEY_DATA_DIR") {
            self.dictionary.data_dir = PathBuf::from(dir);
        }

        if let Ok(url) = env::var("PARLEY_SEARCH_URL") {
            self.menu.search_url = url;
        }

        if let Ok(locale) = env::var("PARLEY_LOCALE") {
            self.locale = locale;
        }

        self.channel_capacity = env::var("PARLEY_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.channel_capacity);

        self
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dictionary.data_dir.join(&self.ui.settings_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_profile_keeps_defaults() {
        let json = r#"{ "menu": { "suggestion_limit": 2 }, "locale": "de-DE" }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.menu.suggestion_limit, 2);
        assert_eq!(config.menu.selection_max_chars, 50);
        assert_eq!(config.locale, "de-DE");
        assert_eq!(config.dictionary.added_file, "added-words.json");
        assert_eq!(config.page.zoom_style_id, "zoomFactor");
    }

    #[test]
    fn test_paths_share_data_dir() {
        let mut config = Config::default();
        config.dictionary.data_dir = PathBuf::from("/tmp/parley-test");

        assert_eq!(
            config.dictionary.ignored_path(),
            PathBuf::from("/tmp/parley-test/ignored-words.json")
        );
        assert_eq!(
            config.settings_path(),
            PathBuf::from("/tmp/parley-test/settings.json")
        );
    }

    #[test]
    fn test_search_url_template() {
        let menu = MenuConfig::default();
        assert_eq!(
            menu.search_url_for("rust"),
            "https://www.google.ca/webhp#q=rust"
        );
        assert!(menu.look_up_enabled(parley_types::Platform::Macos));
        assert!(!menu.look_up_enabled(parley_types::Platform::Linux));
    }
}
