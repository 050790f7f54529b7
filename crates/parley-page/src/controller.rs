use parley_config::page::PageSelectors;
use parley_config::ui::UiConfig;
use parley_core::{SettingsStore, StoreError};
use parley_types::{ChildStep, DomOp, Nth, PageCommand, PageSnapshot, Target};

use crate::zoom;

/// Turns host commands into DOM operations on the chat page
pub struct PageController {
    selectors: PageSelectors,
    ui: UiConfig,
    settings: SettingsStore,
}

impl PageController {
    pub fn new(selectors: PageSelectors, ui: UiConfig, settings: SettingsStore) -> Self {
        tracing::debug!("Page selectors v{}", selectors.version);
        Self {
            selectors,
            ui,
            settings,
        }
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// Operations replayed once the page finished loading: restore dark mode
    /// and the saved zoom factor
    pub fn on_load(&self) -> Vec<DomOp> {
        let settings = self.settings.load();
        let mut ops = vec![DomOp::ToggleClass {
            class: self.selectors.dark_mode_class.clone(),
            on: settings.dark_mode,
        }];

        if settings.dark_mode {
            ops.push(DomOp::SetBackground {
                color: self.ui.dark_background.clone(),
            });
        }

        ops.push(DomOp::InjectStyle {
            element_id: self.selectors.zoom_style_id.clone(),
        });
        ops.push(self.zoom_style(zoom::saved_or_default(settings.zoom_factor)));
        ops
    }

    pub fn handle(
        &self,
        command: PageCommand,
        snapshot: &PageSnapshot,
    ) -> Result<Vec<DomOp>, StoreError> {
        let s = &self.selectors;
        let ops = match command {
            PageCommand::ShowPreferences => vec![
                click(Target::first(&s.settings_button)),
                click(Target::last(&s.preferences_item)),
            ],
            PageCommand::NewConversation => vec![click(Target::first(&s.new_conversation))],
            PageCommand::LogOut => vec![
                click(Target::first(&s.settings_button)),
                click(Target::last(&s.log_out_item)),
            ],
            PageCommand::Find => vec![DomOp::Focus {
                target: Target::first(&s.search_box),
            }],
            PageCommand::NextConversation => self.select_conversation(snapshot, true),
            PageCommand::PreviousConversation => self.select_conversation(snapshot, false),
            PageCommand::MuteConversation => self
                .open_conversation_menu(snapshot)
                .map(|mut ops| {
                    ops.push(click(Target::last(&s.mute_item)));
                    ops
                })
                .unwrap_or_default(),
            PageCommand::DeleteConversation => self.open_delete_modal(snapshot).unwrap_or_default(),
            PageCommand::ArchiveConversation => self
                .open_delete_modal(snapshot)
                .map(|mut ops| {
                    // The archive button only exists once the modal rendered
                    ops.push(DomOp::After {
                        delay_ms: 10,
                        ops: vec![click(Target::nth(&s.archive_button, 1))],
                    });
                    ops
                })
                .unwrap_or_default(),
            PageCommand::ToggleDarkMode => {
                let on = self.settings.toggle_dark_mode()?;
                tracing::info!("Dark mode {}", if on { "on" } else { "off" });
                vec![DomOp::ToggleClass {
                    class: s.dark_mode_class.clone(),
                    on,
                }]
            }
            PageCommand::ZoomReset => self.set_zoom(zoom::DEFAULT_ZOOM)?,
            PageCommand::ZoomIn => match zoom::zoom_in(self.current_zoom(), &self.ui) {
                Some(factor) => self.set_zoom(factor)?,
                None => Vec::new(),
            },
            PageCommand::ZoomOut => match zoom::zoom_out(self.current_zoom(), &self.ui) {
                Some(factor) => self.set_zoom(factor)?,
                None => Vec::new(),
            },
        };

        Ok(ops)
    }

    /// Index of the conversation after (or before) the selected one,
    /// wrapping around; 0 without a selection or with one outside the list
    pub fn next_index(snapshot: &PageSnapshot, forward: bool) -> usize {
        let count = snapshot.conversation_count;
        match snapshot.selected() {
            Some(selected) if forward => (selected + 1) % count,
            Some(0) => count - 1,
            Some(selected) => selected - 1,
            None => 0,
        }
    }

    fn select_conversation(&self, snapshot: &PageSnapshot, forward: bool) -> Vec<DomOp> {
        let index = Self::next_index(snapshot, forward);
        let target = Target::nth(&self.selectors.conversation_list, index)
            .then(ChildStep::FirstChild)
            .then(ChildStep::FirstChild);
        vec![click(target)]
    }

    /// Opening and closing the conversation popover makes the page render
    /// its menu entries, which the mute/delete recipes then click
    fn open_conversation_menu(&self, snapshot: &PageSnapshot) -> Option<Vec<DomOp>> {
        let index = snapshot.selected()?;
        let popover = Target::nth(&self.selectors.conversation_popover, index + 1)
            .then(ChildStep::FirstChild);
        Some(vec![click(popover.clone()), click(popover)])
    }

    fn open_delete_modal(&self, snapshot: &PageSnapshot) -> Option<Vec<DomOp>> {
        let mut ops = self.open_conversation_menu(snapshot)?;
        let delete = Target {
            selector: self.selectors.conversation_menu_list.clone(),
            nth: Nth::Last,
            path: vec![ChildStep::ChildFromEnd(4), ChildStep::FirstChild],
        };
        ops.push(click(delete));
        Some(ops)
    }

    fn current_zoom(&self) -> f64 {
        zoom::saved_or_default(self.settings.zoom_factor())
    }

    fn set_zoom(&self, factor: f64) -> Result<Vec<DomOp>, StoreError> {
        self.settings.set_zoom_factor(factor)?;
        tracing::debug!("Zoom factor set to {}", factor);
        Ok(vec![self.zoom_style(factor)])
    }

    fn zoom_style(&self, factor: f64) -> DomOp {
        DomOp::SetStyleText {
            element_id: self.selectors.zoom_style_id.clone(),
            css: format!(
                "{} {{zoom: {} !important}}",
                self.selectors.conversation_pane, factor
            ),
        }
    }
}

fn click(target: Target) -> DomOp {
    DomOp::Click { target }
}
