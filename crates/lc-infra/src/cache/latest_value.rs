use std::sync::{PoisonError, RwLock};

use lc_core::clipboard::ClipboardEntry;
use lc_core::ports::LatestValuePort;

/// Latest clipboard entry held behind a read-write lock.
///
/// Readers run concurrently with each other, never with the writer.
#[derive(Default)]
pub struct InMemoryLatestValue {
    slot: RwLock<Option<ClipboardEntry>>,
}

impl InMemoryLatestValue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LatestValuePort for InMemoryLatestValue {
    fn set(&self, entry: ClipboardEntry) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(entry);
    }

    fn get(&self) -> Option<ClipboardEntry> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lc_core::ids::EntryId;
    use std::sync::Arc;

    fn entry(id: i64, text: &str) -> ClipboardEntry {
        ClipboardEntry {
            id: EntryId::new(id),
            text: text.to_string(),
            source: "test".to_string(),
            updated_at: Utc::now(),
            pinned: true,
        }
    }

    #[test]
    fn get_is_none_until_set() {
        let cache = InMemoryLatestValue::new();
        assert!(cache.get().is_none());
    }

    #[test]
    fn set_replaces_unconditionally() {
        let cache = InMemoryLatestValue::new();
        cache.set(entry(5, "newer"));
        cache.set(entry(2, "older"));

        let latest = cache.get().unwrap();
        assert_eq!(latest.id, EntryId::new(2));
        assert_eq!(latest.text, "older");
        assert!(latest.pinned);
    }

    #[test]
    fn concurrent_readers_never_see_torn_values() {
        let cache = Arc::new(InMemoryLatestValue::new());
        cache.set(entry(0, "0"));

        let writer = {
            let cache = cache.clone();
            std::thread::spawn(move || {
                for i in 1..500 {
                    cache.set(entry(i, &i.to_string()));
                }
            })
        };
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    for _ in 0..500 {
                        let value = cache.get().unwrap();
                        assert_eq!(value.text, value.id.to_string());
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
