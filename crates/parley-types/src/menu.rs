use serde::{Deserialize, Serialize};

/// Input field type the host reports for password inputs
pub const PASSWORD_FIELD: &str = "password";

/// Edit capabilities of the element under the cursor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditFlags {
    pub can_cut: bool,
    pub can_copy: bool,
    pub can_paste: bool,
    pub can_select_all: bool,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl EditFlags {
    pub fn all() -> Self {
        Self {
            can_cut: true,
            can_copy: true,
            can_paste: true,
            can_select_all: true,
            can_undo: true,
            can_redo: true,
        }
    }
}

/// Parameters of a single right-click, as reported by the host
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuRequest {
    pub selection_text: String,
    /// Empty when the cursor is not over a misspelled word
    pub misspelled_word: String,
    pub edit_flags: EditFlags,
    pub is_editable: bool,
    pub input_field_type: String,
    pub locale: String,
    /// Corrections from the host's spellcheck engine, most confident first
    pub dictionary_suggestions: Vec<String>,
    pub x: i32,
    pub y: i32,
}

impl MenuRequest {
    pub fn is_password_field(&self) -> bool {
        self.input_field_type == PASSWORD_FIELD
    }

    pub fn is_over_misspelling(&self) -> bool {
        !self.misspelled_word.is_empty()
    }
}

/// Deferred action attached to a menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuAction {
    Replace { text: String },
    Ignore { word: String },
    Learn { word: String },
    Unlearn { word: String },
    LookUp,
    Search { url: String },
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
}

/// Something the host webview has to do once an action ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostCommand {
    ReplaceMisspelling { text: String },
    ShowDefinitionForSelection,
    OpenExternal { url: String },
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Position in the flattened menu, used by the host to report a pick
    pub id: usize,
    pub label: String,
    pub enabled: bool,
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<MenuAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub items: Vec<MenuItem>,
}

/// Ordered groups of menu items, rendered with a separator between groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDescription {
    pub groups: Vec<MenuGroup>,
}

impl MenuDescription {
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    pub fn item(&self, id: usize) -> Option<&MenuItem> {
        self.items().find(|item| item.id == id)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.items().map(|item| item.label.as_str()).collect()
    }
}
