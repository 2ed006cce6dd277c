use async_trait::async_trait;

use super::errors::RecordStoreError;
use crate::clipboard::{ClipboardEntry, NewClipboardEntry};
use crate::ids::EntryId;

/// Append-only clipboard history.
/// 只追加的剪贴板历史。
///
/// ## Contract / 约定
/// - `insert` assigns the next id and the current UTC time, `pinned = false`.
///   Ids are strictly increasing and never reused.
/// - Listing order is pinned first, then id descending. `latest` uses the same
///   order and fails with [`RecordStoreError::NoRows`] on an empty store.
/// - Every mutation is persisted before it returns; no partial write is
///   observable.
#[async_trait]
pub trait RecordStorePort: Send + Sync {
    async fn insert(&self, entry: &NewClipboardEntry) -> Result<ClipboardEntry, RecordStoreError>;

    async fn get_by_id(&self, id: EntryId) -> Result<ClipboardEntry, RecordStoreError>;

    /// List up to `limit` entries (1..=200). A non-empty `search` keeps only
    /// entries whose text contains it, ignoring case.
    async fn list(&self, limit: i64, search: &str) -> Result<Vec<ClipboardEntry>, RecordStoreError>;

    /// Idempotent; fails with `NotFound` when `id` is absent.
    async fn set_pinned(&self, id: EntryId, pinned: bool) -> Result<(), RecordStoreError>;

    /// Permanent; a second delete of the same id fails with `NotFound`.
    async fn delete(&self, id: EntryId) -> Result<(), RecordStoreError>;

    async fn latest(&self) -> Result<ClipboardEntry, RecordStoreError>;
}
