use std::sync::Arc;

use lc_core::clipboard::{ClipboardEntry, NewClipboardEntry};
use lc_core::ports::{LatestValuePort, RecordStorePort};
use tracing::info;

use crate::usecases::ClipboardServiceError;

/// The single write path for clipboard content.
/// 剪贴板内容的唯一写入路径。
///
/// ## Behavior / 行为
/// Validates and normalizes the submitted text, appends it to the history
/// and only then publishes it as the latest value. A failed insert leaves
/// the cache untouched.
pub struct SubmitClipboard {
    store: Arc<dyn RecordStorePort>,
    latest: Arc<dyn LatestValuePort>,
}

impl SubmitClipboard {
    pub fn from_ports(store: Arc<dyn RecordStorePort>, latest: Arc<dyn LatestValuePort>) -> Self {
        Self { store, latest }
    }

    #[tracing::instrument(
        name = "usecase.submit_clipboard.execute",
        skip(self, text),
        fields(source = %source, len = text.len())
    )]
    pub async fn execute(
        &self,
        text: &str,
        source: &str,
    ) -> Result<ClipboardEntry, ClipboardServiceError> {
        let new_entry = NewClipboardEntry::new(text, source)?;
        let entry = self.store.insert(&new_entry).await?;
        self.latest.set(entry.clone());

        info!(id = %entry.id, source = %entry.source, "Recorded clipboard value");
        Ok(entry)
    }
}
