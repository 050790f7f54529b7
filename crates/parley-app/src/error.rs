use parley_core::StoreError;
use parley_types::ErrorCode;
use uuid::Uuid;

/// Request failures reported back to the host as `error` lines
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Menu {0} is not open")]
    UnknownMenu(Uuid),

    #[error("Menu item {0} has no action")]
    InactiveItem(usize),

    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error("Store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl RequestError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RequestError::InactiveItem(_) => ErrorCode::InvalidRequest,
            RequestError::UnknownMenu(_) => ErrorCode::UnknownMenu,
            RequestError::Storage(_) => ErrorCode::Storage,
            RequestError::Task(_) => ErrorCode::Internal,
        }
    }
}
