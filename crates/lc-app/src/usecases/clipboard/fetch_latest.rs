use std::sync::Arc;

use lc_core::clipboard::ClipboardEntry;
use lc_core::ports::LatestValuePort;

use crate::usecases::ClipboardServiceError;

/// Reads the latest value from the cache only; the store is never consulted.
pub struct FetchLatestClipboard {
    latest: Arc<dyn LatestValuePort>,
}

impl FetchLatestClipboard {
    pub fn from_port(latest: Arc<dyn LatestValuePort>) -> Self {
        Self { latest }
    }

    pub fn execute(&self) -> Result<ClipboardEntry, ClipboardServiceError> {
        self.latest
            .get()
            .ok_or_else(|| ClipboardServiceError::NotFound("clipboard is empty".to_string()))
    }
}
