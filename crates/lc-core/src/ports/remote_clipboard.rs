use async_trait::async_trait;

use super::errors::RemoteClipboardError;
use crate::clipboard::ClipboardEntry;

/// Client-side view of the sync server.
#[async_trait]
pub trait RemoteClipboardPort: Send + Sync {
    /// Record `text` as the newest clipboard value, labelled with `source`.
    async fn submit(&self, text: &str, source: &str)
        -> Result<ClipboardEntry, RemoteClipboardError>;

    /// The server's current latest entry.
    async fn fetch_latest(&self) -> Result<ClipboardEntry, RemoteClipboardError>;
}
