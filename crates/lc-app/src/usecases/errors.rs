use lc_core::ports::RecordStoreError;
use lc_core::EntryValidationError;
use thiserror::Error;

/// Errors surfaced to the HTTP layer.
///
/// Each variant maps onto exactly one status class: invalid input, missing
/// entity, or an internal failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClipboardServiceError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Storage(String),
}

impl From<RecordStoreError> for ClipboardServiceError {
    fn from(err: RecordStoreError) -> Self {
        match err {
            RecordStoreError::InvalidArgument(msg) => Self::InvalidArgument(msg),
            RecordStoreError::NotFound(id) => Self::NotFound(format!("entry {id} not found")),
            RecordStoreError::NoRows => Self::NotFound("clipboard is empty".to_string()),
            RecordStoreError::Storage(msg) => Self::Storage(msg),
        }
    }
}

impl From<EntryValidationError> for ClipboardServiceError {
    fn from(err: EntryValidationError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}
