use serde::{Deserialize, Serialize};

/// Commands the host menu bar sends to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageCommand {
    ShowPreferences,
    NewConversation,
    LogOut,
    Find,
    NextConversation,
    PreviousConversation,
    MuteConversation,
    DeleteConversation,
    ArchiveConversation,
    ToggleDarkMode,
    ZoomReset,
    ZoomIn,
    ZoomOut,
}

/// What the host observed in the page when it sent a command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSnapshot {
    /// Index of the selected conversation among its siblings
    pub selected_conversation: Option<usize>,
    pub conversation_count: usize,
}

impl PageSnapshot {
    /// The selected index, if it points inside the conversation list
    pub fn selected(&self) -> Option<usize> {
        self.selected_conversation
            .filter(|&index| index < self.conversation_count)
    }
}

/// Which of the elements matching a selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Nth {
    First,
    Last,
    Index(usize),
    /// Counted from the end, `FromEnd(1)` is the last match
    FromEnd(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ChildStep {
    FirstChild,
    /// `ChildFromEnd(1)` is the last child node
    ChildFromEnd(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub selector: String,
    pub nth: Nth,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<ChildStep>,
}

impl Target {
    pub fn first(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            nth: Nth::First,
            path: Vec::new(),
        }
    }

    pub fn last(selector: impl Into<String>) -> Self {
        Self {
            nth: Nth::Last,
            ..Self::first(selector)
        }
    }

    pub fn nth(selector: impl Into<String>, index: usize) -> Self {
        Self {
            nth: Nth::Index(index),
            ..Self::first(selector)
        }
    }

    pub fn then(mut self, step: ChildStep) -> Self {
        self.path.push(step);
        self
    }
}

/// A single DOM manipulation executed by the host inside the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DomOp {
    Click { target: Target },
    Focus { target: Target },
    ToggleClass { class: String, on: bool },
    /// Append an empty `<style>` node with this id to the body
    InjectStyle { element_id: String },
    SetStyleText { element_id: String, css: String },
    SetBackground { color: String },
    After { delay_ms: u64, ops: Vec<DomOp> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Macos,
    Windows,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Macos
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

/// Key press forwarded from the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyEvent {
    pub key_code: u32,
    pub meta_key: bool,
    pub shift_key: bool,
    pub ctrl_key: bool,
    pub alt_key: bool,
}
