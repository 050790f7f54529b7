use parley_types::Platform;
use serde::{Deserialize, Serialize};

fn default_suggestion_limit() -> usize {
    4
}

fn default_selection_max_chars() -> usize {
    50
}

fn default_search_url() -> String {
    "https://www.google.ca/webhp#q={query}".to_string()
}

fn default_search_label() -> String {
    "Search with Google".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct MenuConfig {
    /// Maximum number of spelling corrections offered
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// Selection length after which the look-up label is truncated
    #[serde(default = "default_selection_max_chars")]
    pub selection_max_chars: usize,
    /// Show "Look up" for selections; unset means only on macOS
    #[serde(default)]
    pub look_up: Option<bool>,
    /// `{query}` is replaced by the selected text
    #[serde(default = "default_search_url")]
    pub search_url: String,
    #[serde(default = "default_search_label")]
    pub search_label: String,
}

impl MenuConfig {
    pub fn look_up_enabled(&self, platform: Platform) -> bool {
        self.look_up.unwrap_or(platform == Platform::Macos)
    }

    pub fn search_url_for(&self, query: &str) -> String {
        self.search_url.replace("{query}", query)
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: default_suggestion_limit(),
            selection_max_chars: default_selection_max_chars(),
            look_up: None,
            search_url: default_search_url(),
            search_label: default_search_label(),
        }
    }
}
