//! Clipboard port - abstracts local OS clipboard access
//!
//! Both operations must return within a bounded time, either with a value
//! or a clean [`ClipboardAccessError`], so a hung tool never stalls the
//! sync loop.

use async_trait::async_trait;

use super::errors::ClipboardAccessError;

#[async_trait]
pub trait LocalClipboardPort: Send + Sync {
    /// Read the current clipboard text.
    async fn read_text(&self) -> Result<String, ClipboardAccessError>;

    /// Whether [`write_text`](Self::write_text) is available on this host.
    fn can_write(&self) -> bool;

    /// Replace the clipboard text.
    ///
    /// Fails with [`ClipboardAccessError::NotConfigured`] when
    /// [`can_write`](Self::can_write) is false.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError>;
}
