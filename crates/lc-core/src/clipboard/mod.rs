//! Clipboard domain models.
mod entry;
mod history;
mod text;

pub use entry::{ClipboardEntry, EntryValidationError, NewClipboardEntry, DEFAULT_SOURCE};
pub use history::{
    check_history_limit, DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT, MIN_HISTORY_LIMIT,
};
pub use text::sanitize_for_storage;

#[cfg(test)]
mod tests;
