use parley_page::shortcut_for;
use parley_types::{KeyEvent, PageCommand, PageSnapshot, Platform, ResponseBody};

use crate::error::RequestError;
use crate::state::AppState;

pub async fn handle_page_command(
    state: &AppState,
    command: PageCommand,
    snapshot: PageSnapshot,
) -> Result<ResponseBody, RequestError> {
    tracing::debug!("Page command {:?}", command);
    let page = state.page.clone();
    let ops = tokio::task::spawn_blocking(move || page.handle(command, &snapshot)).await??;
    Ok(ResponseBody::DomOps { ops })
}

pub async fn handle_key_down(
    state: &AppState,
    key: &KeyEvent,
    snapshot: PageSnapshot,
) -> Result<ResponseBody, RequestError> {
    match shortcut_for(key, Platform::current()) {
        Some(command) => handle_page_command(state, command, snapshot).await,
        None => Ok(ResponseBody::DomOps { ops: Vec::new() }),
    }
}

pub async fn handle_page_loaded(state: &AppState) -> Result<ResponseBody, RequestError> {
    let page = state.page.clone();
    let ops = tokio::task::spawn_blocking(move || page.on_load()).await?;
    Ok(ResponseBody::DomOps { ops })
}
