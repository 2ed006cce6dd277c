use std::sync::Arc;

use lc_core::clipboard::{check_history_limit, ClipboardEntry, DEFAULT_HISTORY_LIMIT};
use lc_core::ports::RecordStorePort;

use crate::usecases::ClipboardServiceError;

/// Lists history pinned-first, then newest first.
pub struct ListHistory {
    store: Arc<dyn RecordStorePort>,
}

impl ListHistory {
    pub fn from_port(store: Arc<dyn RecordStorePort>) -> Self {
        Self { store }
    }

    /// `limit` defaults to [`DEFAULT_HISTORY_LIMIT`]; a blank `search` lists
    /// everything.
    pub async fn execute(
        &self,
        limit: Option<i64>,
        search: Option<&str>,
    ) -> Result<Vec<ClipboardEntry>, ClipboardServiceError> {
        let limit = check_history_limit(limit.unwrap_or(DEFAULT_HISTORY_LIMIT))?;
        let search = search.map(str::trim).unwrap_or_default();

        Ok(self.store.list(limit, search).await?)
    }
}
