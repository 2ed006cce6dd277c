use std::sync::Arc;

use lc_core::ports::RecordStorePort;
use lc_core::EntryId;
use tracing::info;

use super::require_positive_id;
use crate::usecases::ClipboardServiceError;

/// Permanently removes one history entry.
///
/// The latest-value cache is left as is: it keeps serving whatever was
/// submitted last until the next submit replaces it.
pub struct DeleteEntry {
    store: Arc<dyn RecordStorePort>,
}

impl DeleteEntry {
    pub fn from_port(store: Arc<dyn RecordStorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.delete_entry.execute", skip(self), fields(id = %id))]
    pub async fn execute(&self, id: EntryId) -> Result<(), ClipboardServiceError> {
        let id = require_positive_id(id)?;
        self.store.delete(id).await?;

        info!(id = %id, "Deleted history entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::clipboard::mocks::MockStore;
    use lc_core::ports::RecordStoreError;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn delegates_to_store() {
        let mut store = MockStore::new();
        store
            .expect_delete()
            .with(eq(EntryId::new(3)))
            .times(1)
            .returning(|_| Ok(()));

        DeleteEntry::from_port(Arc::new(store))
            .execute(EntryId::new(3))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn missing_entry_is_not_found() {
        let mut store = MockStore::new();
        store
            .expect_delete()
            .returning(|id| Err(RecordStoreError::NotFound(id)));

        let err = DeleteEntry::from_port(Arc::new(store))
            .execute(EntryId::new(42))
            .await
            .unwrap_err();

        assert!(matches!(err, ClipboardServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn zero_id_is_invalid() {
        let mut store = MockStore::new();
        store.expect_delete().never();

        let err = DeleteEntry::from_port(Arc::new(store))
            .execute(EntryId::new(0))
            .await
            .unwrap_err();

        assert!(matches!(err, ClipboardServiceError::InvalidArgument(_)));
    }
}
