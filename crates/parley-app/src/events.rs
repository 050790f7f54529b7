use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use parley_types::{HostRequest, HostResponse, RequestBody, ResponseBody};

use crate::error::RequestError;
use crate::state::AppState;

pub mod context_menu;
pub mod menu_action;
pub mod page_command;
pub mod spell_check;

use context_menu::handle_context_menu;
use menu_action::handle_menu_action;
use page_command::{handle_key_down, handle_page_command, handle_page_loaded};
use spell_check::handle_spell_check;

/// App's main loop, one host request at a time
pub async fn event_loop(
    state: Arc<AppState>,
    host_to_app_rx: AsyncReceiver<HostRequest>,
    app_to_host_tx: AsyncSender<HostResponse>,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for requests");
    while let Ok(request) = host_to_app_rx.recv().await {
        let response = handle_request(&state, request).await;
        app_to_host_tx.send(response).await?;
    }

    tracing::info!("[EVENT_LOOP] Host closed the request channel");
    Ok(())
}

pub async fn handle_request(state: &AppState, request: HostRequest) -> HostResponse {
    let HostRequest { id, body } = request;
    tracing::debug!(">>> HANDLING REQUEST {} <<<", id);

    match handle_body(state, body).await {
        Ok(body) => HostResponse::new(id, body),
        Err(e) => {
            tracing::warn!("Request {} failed: {}", id, e);
            HostResponse::error(id, e.code(), e.to_string())
        }
    }
}

async fn handle_body(state: &AppState, body: RequestBody) -> Result<ResponseBody, RequestError> {
    match body {
        RequestBody::ContextMenu { request } => handle_context_menu(state, request).await,
        RequestBody::MenuAction { menu_id, item_id } => {
            handle_menu_action(state, menu_id, item_id).await
        }
        RequestBody::SpellCheck {
            word,
            locale,
            misspelled,
        } => handle_spell_check(state, word, locale, misspelled).await,
        RequestBody::PageCommand { command, snapshot } => {
            handle_page_command(state, command, snapshot).await
        }
        RequestBody::KeyDown { key, snapshot } => handle_key_down(state, &key, snapshot).await,
        RequestBody::PageLoaded => handle_page_loaded(state).await,
        RequestBody::Ping => Ok(ResponseBody::Pong),
    }
}
