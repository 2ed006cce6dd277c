use std::sync::Arc;

use lc_core::ports::{LatestValuePort, RecordStoreError, RecordStorePort};
use tracing::{debug, info};

use crate::usecases::ClipboardServiceError;

/// Primes the latest-value cache from the store at startup.
pub struct SeedLatestValue {
    store: Arc<dyn RecordStorePort>,
    latest: Arc<dyn LatestValuePort>,
}

impl SeedLatestValue {
    pub fn from_ports(store: Arc<dyn RecordStorePort>, latest: Arc<dyn LatestValuePort>) -> Self {
        Self { store, latest }
    }

    /// An empty history is not an error; the cache just stays unset.
    pub async fn execute(&self) -> Result<(), ClipboardServiceError> {
        match self.store.latest().await {
            Ok(entry) => {
                info!(id = %entry.id, pinned = entry.pinned, "Seeded latest clipboard value");
                self.latest.set(entry);
                Ok(())
            }
            Err(RecordStoreError::NoRows) => {
                debug!("History is empty, latest value left unset");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
