pub mod context_menu;
pub mod custom_dictionary;
pub mod error;
pub mod json_file;
pub mod settings;
pub mod spellcheck;

pub use context_menu::ContextMenu;
pub use custom_dictionary::DictionaryStore;
pub use error::StoreError;
pub use settings::{Settings, SettingsStore};
pub use spellcheck::{HostVerdict, SpellCheckProvider, SpellChecker};
