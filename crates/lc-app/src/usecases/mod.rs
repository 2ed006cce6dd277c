//! Server-side use cases
//!
//! ```text
//! POST /clipboard  -> SubmitClipboard    -> store.insert -> latest.set
//! GET  /clipboard  -> FetchLatestClipboard (cache only)
//! GET  /history    -> ListHistory
//! POST /history/pin, /history/delete -> SetEntryPin / DeleteEntry
//! startup          -> SeedLatestValue
//! ```

pub mod clipboard;
mod errors;

pub use clipboard::{
    DeleteEntry, FetchLatestClipboard, ListHistory, SeedLatestValue, SetEntryPin,
    SubmitClipboard,
};
pub use errors::ClipboardServiceError;
