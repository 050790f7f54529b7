use parley_core::HostVerdict;
use parley_types::{MenuRequest, ResponseBody};
use uuid::Uuid;

use crate::error::RequestError;
use crate::state::{AppState, PendingMenu};

pub async fn handle_context_menu(
    state: &AppState,
    mut request: MenuRequest,
) -> Result<ResponseBody, RequestError> {
    if request.locale.is_empty() {
        request.locale = state.config.read().await.locale.clone();
    }

    let context_menu = state.context_menu.clone();
    let (request, description) = tokio::task::spawn_blocking(move || {
        // Suggestions come from the host's engine alongside the click
        let verdict = HostVerdict::from_request(&request);
        let description = context_menu.compose(&request, &verdict);
        (request, description)
    })
    .await?;
    tracing::debug!(
        "Composed menu for '{}' with {} groups",
        request.selection_text,
        description.groups.len()
    );

    let menu_id = Uuid::new_v4();
    let replaced = state.pending_menu.write().await.replace(PendingMenu {
        id: menu_id,
        locale: request.locale.clone(),
        description: description.clone(),
    });
    if let Some(stale) = replaced {
        tracing::debug!("Dropping unanswered menu {}", stale.id);
    }

    Ok(ResponseBody::Menu {
        menu_id,
        x: request.x,
        y: request.y,
        description,
    })
}
