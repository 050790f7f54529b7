use parley_types::{KeyEvent, PageCommand, Platform};

const KEY_CLOSE_BRACKET: u32 = 221;
const KEY_OPEN_BRACKET: u32 = 219;

/// Shortcuts the host menu cannot register as a second accelerator.
///
/// On macOS Cmd+Shift+] and Cmd+Shift+[ switch conversations, mirroring
/// the browser tab shortcuts.
pub fn shortcut_for(key: &KeyEvent, platform: Platform) -> Option<PageCommand> {
    if platform != Platform::Macos || !(key.meta_key && key.shift_key) {
        return None;
    }

    match key.key_code {
        KEY_CLOSE_BRACKET => Some(PageCommand::NextConversation),
        KEY_OPEN_BRACKET => Some(PageCommand::PreviousConversation),
        _ => None,
    }
}
