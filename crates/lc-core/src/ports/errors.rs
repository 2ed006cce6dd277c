use std::time::Duration;

use thiserror::Error;

use crate::ids::EntryId;

/// Failures of the persisted history.
#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("entry {0} not found")]
    NotFound(EntryId),

    #[error("history is empty")]
    NoRows,

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<anyhow::Error> for RecordStoreError {
    fn from(err: anyhow::Error) -> Self {
        RecordStoreError::Storage(format!("{err:#}"))
    }
}

/// Failures of the local OS clipboard.
///
/// None of these are fatal to a running sync loop.
#[derive(Debug, Error)]
pub enum ClipboardAccessError {
    #[error("clipboard write command not configured")]
    NotConfigured,

    #[error("clipboard tool `{0}` not found")]
    ToolMissing(String),

    #[error("clipboard command `{command}` timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },

    #[error("clipboard command `{command}` failed: {message}")]
    CommandFailed { command: String, message: String },

    #[error("clipboard io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures talking to the sync server.
#[derive(Debug, Error)]
pub enum RemoteClipboardError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("server clipboard is empty")]
    Empty,

    #[error("invalid response body: {0}")]
    Decode(String),
}
