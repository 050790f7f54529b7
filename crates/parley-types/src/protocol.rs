use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::menu::{HostCommand, MenuDescription, MenuRequest};
use crate::page::{DomOp, KeyEvent, PageCommand, PageSnapshot};

/// One line sent by the host shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostRequest {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub body: RequestBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestBody {
    ContextMenu {
        request: MenuRequest,
    },
    MenuAction {
        menu_id: Uuid,
        item_id: usize,
    },
    SpellCheck {
        word: String,
        locale: String,
        /// Verdict of the host's spellcheck engine
        #[serde(default)]
        misspelled: bool,
    },
    PageCommand {
        command: PageCommand,
        #[serde(default)]
        snapshot: PageSnapshot,
    },
    KeyDown {
        key: KeyEvent,
        #[serde(default)]
        snapshot: PageSnapshot,
    },
    PageLoaded,
    Ping,
}

/// One line sent back to the host shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostResponse {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub body: ResponseBody,
}

impl HostResponse {
    pub fn new(id: impl Into<String>, body: ResponseBody) -> Self {
        Self {
            id: id.into(),
            body,
        }
    }

    pub fn error(id: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(
            id,
            ResponseBody::Error(ErrorResponse {
                code,
                message: message.into(),
            }),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseBody {
    Menu {
        menu_id: Uuid,
        x: i32,
        y: i32,
        description: MenuDescription,
    },
    HostCommands {
        commands: Vec<HostCommand>,
    },
    SpellCheck {
        word: String,
        correct: bool,
    },
    DomOps {
        ops: Vec<DomOp>,
    },
    Pong,
    Error(ErrorResponse),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidRequest,
    UnknownMenu,
    Storage,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_command_request_parses() {
        let line = r#"{"id":"7","type":"page_command","command":"zoom-in"}"#;
        let request: HostRequest = serde_json::from_str(line).unwrap();

        assert_eq!(request.id, "7");
        match request.body {
            RequestBody::PageCommand { command, snapshot } => {
                assert_eq!(command, PageCommand::ZoomIn);
                assert_eq!(snapshot, PageSnapshot::default());
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_error_response_shape() {
        let response = HostResponse::error("3", ErrorCode::UnknownMenu, "stale menu");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["id"], "3");
        assert_eq!(value["type"], "error");
        assert_eq!(value["code"], "unknown_menu");
        assert_eq!(value["message"], "stale menu");
    }
}
