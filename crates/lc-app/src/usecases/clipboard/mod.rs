pub mod delete_entry;
pub mod fetch_latest;
pub mod list_history;
pub mod seed_latest_value;
pub mod set_entry_pin;
pub mod submit_clipboard;

#[cfg(test)]
pub(crate) mod mocks;

pub use delete_entry::DeleteEntry;
pub use fetch_latest::FetchLatestClipboard;
pub use list_history::ListHistory;
pub use seed_latest_value::SeedLatestValue;
pub use set_entry_pin::SetEntryPin;
pub use submit_clipboard::SubmitClipboard;

use lc_core::EntryId;

use super::ClipboardServiceError;

fn require_positive_id(id: EntryId) -> Result<EntryId, ClipboardServiceError> {
    if id.is_valid() {
        Ok(id)
    } else {
        Err(ClipboardServiceError::InvalidArgument(
            "id is required".to_string(),
        ))
    }
}
