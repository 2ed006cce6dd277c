use crate::clipboard::ClipboardEntry;

/// Single-slot cache of the most recent history entry.
/// 最新一条历史记录的单槽缓存。
///
/// `set` replaces the value unconditionally; callers only call it after the
/// store accepted the entry. Readers never observe a partially written value.
pub trait LatestValuePort: Send + Sync {
    fn set(&self, entry: ClipboardEntry);

    /// `None` until the first `set`.
    fn get(&self) -> Option<ClipboardEntry>;
}
