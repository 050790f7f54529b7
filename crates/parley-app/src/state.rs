use std::sync::Arc;

use parley_config::Config;
use parley_core::{ContextMenu, DictionaryStore, SettingsStore};
use parley_page::PageController;
use parley_types::MenuDescription;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Menu shown by the host and waiting for the user to pick an item
#[derive(Debug, Clone)]
pub struct PendingMenu {
    pub id: Uuid,
    pub locale: String,
    pub description: MenuDescription,
}

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Shared with the blocking tasks that touch the store files
    pub context_menu: Arc<ContextMenu>,
    pub page: Arc<PageController>,
    /// Only one native menu is open at a time, a newer one replaces it
    pub pending_menu: RwLock<Option<PendingMenu>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let dictionary = DictionaryStore::from_config(&config.dictionary);
        tracing::info!(
            "Custom dictionary: {} / {}",
            dictionary.ignored_path().display(),
            dictionary.added_path().display()
        );

        let context_menu = ContextMenu::new(dictionary, config.menu.clone());
        let settings = SettingsStore::new(config.settings_path());
        let page = PageController::new(config.page.clone(), config.ui.clone(), settings);

        Self {
            config: Arc::new(RwLock::new(config)),
            context_menu: Arc::new(context_menu),
            page: Arc::new(page),
            pending_menu: RwLock::new(None),
        }
    }
}
