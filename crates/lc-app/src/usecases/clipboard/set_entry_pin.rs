use std::sync::Arc;

use lc_core::clipboard::ClipboardEntry;
use lc_core::ports::RecordStorePort;
use lc_core::EntryId;
use tracing::info;

use super::require_positive_id;
use crate::usecases::ClipboardServiceError;

/// Pins or unpins an entry and returns it as stored afterwards.
pub struct SetEntryPin {
    store: Arc<dyn RecordStorePort>,
}

impl SetEntryPin {
    pub fn from_port(store: Arc<dyn RecordStorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.set_entry_pin.execute", skip(self), fields(id = %id))]
    pub async fn execute(
        &self,
        id: EntryId,
        pinned: bool,
    ) -> Result<ClipboardEntry, ClipboardServiceError> {
        let id = require_positive_id(id)?;
        self.store.set_pinned(id, pinned).await?;
        let entry = self.store.get_by_id(id).await?;

        info!(id = %id, pinned, "Updated pin state");
        Ok(entry)
    }
}
