use parley_types::ResponseBody;
use uuid::Uuid;

use crate::error::RequestError;
use crate::state::AppState;

/// The user picked `item_id` in the open menu.
///
/// The menu stays open when the pick is rejected, and closes once a valid
/// item was chosen.
pub async fn handle_menu_action(
    state: &AppState,
    menu_id: Uuid,
    item_id: usize,
) -> Result<ResponseBody, RequestError> {
    let (action, locale) = {
        let mut slot = state.pending_menu.write().await;
        let menu = slot
            .as_ref()
            .filter(|menu| menu.id == menu_id)
            .ok_or(RequestError::UnknownMenu(menu_id))?;

        let action = menu
            .description
            .item(item_id)
            .filter(|item| item.enabled && item.visible)
            .and_then(|item| item.action.clone())
            .ok_or(RequestError::InactiveItem(item_id))?;

        let locale = menu.locale.clone();
        slot.take();
        (action, locale)
    };

    tracing::info!("Menu action {:?} ({})", action, locale);
    let context_menu = state.context_menu.clone();
    let commands =
        tokio::task::spawn_blocking(move || context_menu.perform(&action, &locale)).await??;

    Ok(ResponseBody::HostCommands { commands })
}
