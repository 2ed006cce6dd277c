use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use lc_core::clipboard::{ClipboardEntry, NewClipboardEntry};
use lc_core::ports::{LatestValuePort, RecordStoreError, RecordStorePort};
use lc_core::EntryId;
use mockall::mock;

mock! {
    pub Store {}

    #[async_trait]
    impl RecordStorePort for Store {
        async fn insert(&self, entry: &NewClipboardEntry) -> Result<ClipboardEntry, RecordStoreError>;
        async fn get_by_id(&self, id: EntryId) -> Result<ClipboardEntry, RecordStoreError>;
        async fn list(&self, limit: i64, search: &str) -> Result<Vec<ClipboardEntry>, RecordStoreError>;
        async fn set_pinned(&self, id: EntryId, pinned: bool) -> Result<(), RecordStoreError>;
        async fn delete(&self, id: EntryId) -> Result<(), RecordStoreError>;
        async fn latest(&self) -> Result<ClipboardEntry, RecordStoreError>;
    }
}

mock! {
    pub Latest {}

    impl LatestValuePort for Latest {
        fn set(&self, entry: ClipboardEntry);
        fn get(&self) -> Option<ClipboardEntry>;
    }
}

pub fn entry(id: i64, text: &str, source: &str) -> ClipboardEntry {
    ClipboardEntry {
        id: EntryId::new(id),
        text: text.to_string(),
        source: source.to_string(),
        updated_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        pinned: false,
    }
}
