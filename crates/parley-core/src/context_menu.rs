use parley_config::menu::MenuConfig;
use parley_types::{
    HostCommand, MenuAction, MenuDescription, MenuGroup, MenuItem, MenuRequest, Platform,
};

use crate::custom_dictionary::DictionaryStore;
use crate::error::StoreError;
use crate::spellcheck::SpellChecker;

pub const NO_GUESSES: &str = "No Guesses Found";
pub const IGNORE_SPELLING: &str = "Ignore Spelling";
pub const LEARN_SPELLING: &str = "Learn Spelling";
pub const UNLEARN_SPELLING: &str = "Unlearn Spelling";

/// Builds the right-click menu and runs the item the user picked
#[derive(Debug, Clone)]
pub struct ContextMenu {
    dictionary: DictionaryStore,
    config: MenuConfig,
    platform: Platform,
}

impl ContextMenu {
    pub fn new(dictionary: DictionaryStore, config: MenuConfig) -> Self {
        Self::for_platform(dictionary, config, Platform::current())
    }

    pub fn for_platform(dictionary: DictionaryStore, config: MenuConfig, platform: Platform) -> Self {
        Self {
            dictionary,
            config,
            platform,
        }
    }

    pub fn dictionary(&self) -> &DictionaryStore {
        &self.dictionary
    }

    /// Assemble the menu for one right-click.
    ///
    /// Groups are appended in a fixed order: spelling corrections, dictionary
    /// actions, look-up/search, undo/redo, then the edit group which is always
    /// present. Nothing is mutated here; that waits for [`ContextMenu::perform`].
    pub fn compose(&self, request: &MenuRequest, spellchecker: &dyn SpellChecker) -> MenuDescription {
        let mut menu = MenuBuilder::default();
        let misspelling = request.misspelled_word.as_str();
        let locale = request.locale.as_str();

        if request.is_over_misspelling() {
            let suggestions: Vec<String> = spellchecker
                .corrections(misspelling)
                .into_iter()
                .take(self.config.suggestion_limit)
                .collect();

            if suggestions.is_empty() {
                menu.push(NO_GUESSES, false, true, None);
            } else {
                for suggestion in suggestions {
                    let action = MenuAction::Replace {
                        text: suggestion.clone(),
                    };
                    menu.push(&suggestion, true, true, Some(action));
                }
            }
            menu.close_group();

            let word = misspelling.to_string();
            menu.push(
                IGNORE_SPELLING,
                true,
                true,
                Some(MenuAction::Ignore { word: word.clone() }),
            );
            menu.push(LEARN_SPELLING, true, true, Some(MenuAction::Learn { word }));
            menu.close_group();
        } else if self.dictionary.is_added(&request.selection_text, locale) {
            let word = request.selection_text.clone();
            menu.push(UNLEARN_SPELLING, true, true, Some(MenuAction::Unlearn { word }));
            menu.close_group();
        }

        if !request.selection_text.is_empty() {
            if self.config.look_up_enabled(self.platform) {
                let shown = truncate(&request.selection_text, self.config.selection_max_chars);
                menu.push(
                    &format!("Look up \"{shown}\""),
                    true,
                    true,
                    Some(MenuAction::LookUp),
                );
            }

            let url = self.config.search_url_for(&request.selection_text);
            menu.push(
                &self.config.search_label,
                true,
                true,
                Some(MenuAction::Search { url }),
            );
            menu.close_group();
        }

        let flags = request.edit_flags;
        if request.is_editable {
            menu.push("Undo", flags.can_undo, true, Some(MenuAction::Undo));
            menu.push("Redo", flags.can_redo, true, Some(MenuAction::Redo));
            menu.close_group();
        }

        let password = request.is_password_field();
        let editable = request.is_editable;
        menu.push("Cut", flags.can_cut && !password, editable, Some(MenuAction::Cut));
        menu.push("Copy", flags.can_copy && !password, true, Some(MenuAction::Copy));
        menu.push("Paste", flags.can_paste, editable, Some(MenuAction::Paste));
        menu.push(
            "Select All",
            flags.can_select_all,
            editable,
            Some(MenuAction::SelectAll),
        );

        menu.finish()
    }

    /// Run a picked action. Dictionary actions write to the store first and
    /// then put the original word back in place of the misspelling.
    pub fn perform(&self, action: &MenuAction, locale: &str) -> Result<Vec<HostCommand>, StoreError> {
        let command = match action {
            MenuAction::Replace { text } => HostCommand::ReplaceMisspelling { text: text.clone() },
            MenuAction::Ignore { word } => {
                self.dictionary.ignore(word, locale)?;
                HostCommand::ReplaceMisspelling { text: word.clone() }
            }
            MenuAction::Learn { word } => {
                self.dictionary.learn(word, locale)?;
                HostCommand::ReplaceMisspelling { text: word.clone() }
            }
            MenuAction::Unlearn { word } => {
                self.dictionary.unlearn(word, locale)?;
                HostCommand::ReplaceMisspelling { text: word.clone() }
            }
            MenuAction::LookUp => HostCommand::ShowDefinitionForSelection,
            MenuAction::Search { url } => HostCommand::OpenExternal { url: url.clone() },
            MenuAction::Undo => HostCommand::Undo,
            MenuAction::Redo => HostCommand::Redo,
            MenuAction::Cut => HostCommand::Cut,
            MenuAction::Copy => HostCommand::Copy,
            MenuAction::Paste => HostCommand::Paste,
            MenuAction::SelectAll => HostCommand::SelectAll,
        };

        Ok(vec![command])
    }
}

/// Cut `text` to `max` characters, marking the cut with "..."
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut cut: String = text.chars().take(max).collect();
        cut.push_str("...");
        cut
    } else {
        text.to_string()
    }
}

#[derive(Default)]
struct MenuBuilder {
    groups: Vec<MenuGroup>,
    current: Vec<MenuItem>,
    next_id: usize,
}

impl MenuBuilder {
    fn push(&mut self, label: &str, enabled: bool, visible: bool, action: Option<MenuAction>) {
        self.current.push(MenuItem {
            id: self.next_id,
            label: label.to_string(),
            enabled,
            visible,
            action,
        });
        self.next_id += 1;
    }

    fn close_group(&mut self) {
        if !self.current.is_empty() {
            let items = std::mem::take(&mut self.current);
            self.groups.push(MenuGroup { items });
        }
    }

    fn finish(mut self) -> MenuDescription {
        self.close_group();
        MenuDescription {
            groups: self.groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_types::EditFlags;
    use tempfile::TempDir;

    struct FixedCorrections(Vec<&'static str>);

    impl SpellChecker for FixedCorrections {
        fn is_misspelled(&self, _word: &str) -> bool {
            true
        }

        fn corrections(&self, _word: &str) -> Vec<String> {
            self.0.iter().map(|s| s.to_string()).collect()
        }
    }

    fn menu(dir: &TempDir, platform: Platform) -> ContextMenu {
        let store = DictionaryStore::new(
            dir.path().join("ignored-words.json"),
            dir.path().join("added-words.json"),
        );
        ContextMenu::for_platform(store, MenuConfig::default(), platform)
    }

    fn group_labels(menu: &MenuDescription) -> Vec<Vec<&str>> {
        menu.groups
            .iter()
            .map(|g| g.items.iter().map(|i| i.label.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_misspelled_word_in_editable_field() {
        let dir = TempDir::new().unwrap();
        let context_menu = menu(&dir, Platform::Linux);
        let request = MenuRequest {
            misspelled_word: "teh".to_string(),
            edit_flags: EditFlags::all(),
            is_editable: true,
            input_field_type: "text".to_string(),
            locale: "en-US".to_string(),
            ..Default::default()
        };

        let description = context_menu.compose(&request, &FixedCorrections(vec!["the", "ten"]));

        assert_eq!(
            group_labels(&description),
            vec![
                vec!["the", "ten"],
                vec![IGNORE_SPELLING, LEARN_SPELLING],
                vec!["Undo", "Redo"],
                vec!["Cut", "Copy", "Paste", "Select All"],
            ]
        );
        assert!(description.items().all(|i| i.enabled && i.visible));
        assert_eq!(
            description.item(0).and_then(|i| i.action.clone()),
            Some(MenuAction::Replace {
                text: "the".to_string()
            })
        );
        assert_eq!(
            description.item(3).and_then(|i| i.action.clone()),
            Some(MenuAction::Learn {
                word: "teh".to_string()
            })
        );
    }

    #[test]
    fn test_long_selection_is_truncated() {
        let dir = TempDir::new().unwrap();
        let context_menu = menu(&dir, Platform::Macos);
        let request = MenuRequest {
            selection_text: "a".repeat(60),
            edit_flags: EditFlags {
                can_copy: true,
                ..Default::default()
            },
            is_editable: false,
            locale: "en-US".to_string(),
            ..Default::default()
        };

        let description = context_menu.compose(&request, &FixedCorrections(vec![]));

        assert_eq!(description.groups.len(), 2);
        let look_up = &description.groups[0].items[0];
        assert_eq!(look_up.label, format!("Look up \"{}...\"", "a".repeat(50)));
        assert_eq!(description.groups[0].items[1].label, "Search with Google");

        let edit = &description.groups[1].items;
        assert_eq!(
            edit.iter().map(|i| i.label.as_str()).collect::<Vec<_>>(),
            vec!["Cut", "Copy", "Paste", "Select All"]
        );
        assert!(!edit[0].visible && !edit[2].visible && !edit[3].visible);
        assert!(edit[1].visible && edit[1].enabled);
        assert!(!description.labels().contains(&"Undo"));
    }

    #[test]
    fn test_no_look_up_off_macos() {
        let dir = TempDir::new().unwrap();
        let context_menu = menu(&dir, Platform::Windows);
        let request = MenuRequest {
            selection_text: "hello world".to_string(),
            locale: "en-US".to_string(),
            ..Default::default()
        };

        let description = context_menu.compose(&request, &FixedCorrections(vec![]));

        assert_eq!(
            group_labels(&description),
            vec![
                vec!["Search with Google"],
                vec!["Cut", "Copy", "Paste", "Select All"]
            ]
        );
        assert_eq!(
            description.items().next().and_then(|i| i.action.clone()),
            Some(MenuAction::Search {
                url: "https://www.google.ca/webhp#q=hello world".to_string()
            })
        );
    }

    #[test]
    fn test_no_guesses_item_is_disabled() {
        let dir = TempDir::new().unwrap();
        let context_menu = menu(&dir, Platform::Linux);
        let request = MenuRequest {
            misspelled_word: "xqzt".to_string(),
            is_editable: true,
            ..Default::default()
        };

        let description = context_menu.compose(&request, &FixedCorrections(vec![]));
        let first = description.item(0).unwrap();

        assert_eq!(first.label, NO_GUESSES);
        assert!(!first.enabled);
        assert!(first.action.is_none());
    }

    #[test]
    fn test_suggestions_capped_at_limit() {
        let dir = TempDir::new().unwrap();
        let context_menu = menu(&dir, Platform::Linux);
        let request = MenuRequest {
            misspelled_word: "wrod".to_string(),
            ..Default::default()
        };

        let checker = FixedCorrections(vec!["word", "wood", "rod", "prod", "wrong", "wad"]);
        let description = context_menu.compose(&request, &checker);

        assert_eq!(description.groups[0].items.len(), 4);
    }

    #[test]
    fn test_empty_context_yields_only_edit_group() {
        let dir = TempDir::new().unwrap();
        let context_menu = menu(&dir, Platform::Macos);

        let description =
            context_menu.compose(&MenuRequest::default(), &FixedCorrections(vec!["x"]));

        assert_eq!(
            group_labels(&description),
            vec![vec!["Cut", "Copy", "Paste", "Select All"]]
        );
    }

    #[test]
    fn test_learned_selection_offers_unlearn() {
        let dir = TempDir::new().unwrap();
        let context_menu = menu(&dir, Platform::Linux);
        context_menu.dictionary().learn("parley", "en-US").unwrap();
        let request = MenuRequest {
            selection_text: "parley".to_string(),
            locale: "en-US".to_string(),
            ..Default::default()
        };

        let description = context_menu.compose(&request, &FixedCorrections(vec![]));

        assert_eq!(description.groups[0].items[0].label, UNLEARN_SPELLING);
        assert_eq!(description.groups.len(), 3);
    }

    #[test]
    fn test_password_field_disables_cut_and_copy() {
        let dir = TempDir::new().unwrap();
        let context_menu = menu(&dir, Platform::Linux);
        let request = MenuRequest {
            edit_flags: EditFlags::all(),
            is_editable: true,
            input_field_type: "password".to_string(),
            ..Default::default()
        };

        let description = context_menu.compose(&request, &FixedCorrections(vec![]));
        let edit = &description.groups.last().unwrap().items;

        assert!(!edit[0].enabled);
        assert!(!edit[1].enabled);
        assert!(edit[2].enabled && edit[3].enabled);
    }

    #[test]
    fn test_undo_redo_follow_flags() {
        let dir = TempDir::new().unwrap();
        let context_menu = menu(&dir, Platform::Linux);
        let request = MenuRequest {
            edit_flags: EditFlags {
                can_undo: true,
                ..Default::default()
            },
            is_editable: true,
            ..Default::default()
        };

        let description = context_menu.compose(&request, &FixedCorrections(vec![]));
        let undo_redo = &description.groups[0].items;

        assert_eq!(undo_redo[0].label, "Undo");
        assert!(undo_redo[0].enabled);
        assert!(!undo_redo[1].enabled);
    }

    #[test]
    fn test_perform_learn_writes_store_and_restores_word() {
        let dir = TempDir::new().unwrap();
        let context_menu = menu(&dir, Platform::Linux);

        let commands = context_menu
            .perform(
                &MenuAction::Learn {
                    word: "teh".to_string(),
                },
                "en-US",
            )
            .unwrap();

        assert!(context_menu.dictionary().is_added("teh", "en-US"));
        assert_eq!(
            commands,
            vec![HostCommand::ReplaceMisspelling {
                text: "teh".to_string()
            }]
        );
    }

    #[test]
    fn test_perform_unlearn_and_ignore() {
        let dir = TempDir::new().unwrap();
        let context_menu = menu(&dir, Platform::Linux);
        let store = context_menu.dictionary();
        store.learn("foo", "en-US").unwrap();

        context_menu
            .perform(&MenuAction::Unlearn { word: "foo".to_string() }, "en-US")
            .unwrap();
        context_menu
            .perform(&MenuAction::Ignore { word: "bar".to_string() }, "en-US")
            .unwrap();

        assert!(!store.is_added("foo", "en-US"));
        assert!(store.is_ignored("bar", "en-US"));
    }

    #[test]
    fn test_perform_host_only_actions() {
        let dir = TempDir::new().unwrap();
        let context_menu = menu(&dir, Platform::Linux);

        assert_eq!(
            context_menu.perform(&MenuAction::LookUp, "en-US").unwrap(),
            vec![HostCommand::ShowDefinitionForSelection]
        );
        assert_eq!(
            context_menu
                .perform(&MenuAction::Search { url: "u".to_string() }, "en-US")
                .unwrap(),
            vec![HostCommand::OpenExternal { url: "u".to_string() }]
        );
        assert_eq!(
            context_menu.perform(&MenuAction::SelectAll, "en-US").unwrap(),
            vec![HostCommand::SelectAll]
        );
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("héllo", 3), "hél...");
        assert_eq!(truncate("short", 50), "short");
        assert_eq!(truncate(&"b".repeat(50), 50), "b".repeat(50));
    }
}
