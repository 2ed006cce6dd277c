use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::text::sanitize_for_storage;
use crate::ids::EntryId;

/// Source label recorded when the submitter did not name itself.
pub const DEFAULT_SOURCE: &str = "unknown";

/// One recorded clipboard value.
///
/// `id`, `text`, `source` and `updated_at` never change after the store
/// assigns them; only `pinned` is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardEntry {
    pub id: EntryId,
    pub text: String,
    pub source: String,
    pub updated_at: DateTime<Utc>,
    pub pinned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryValidationError {
    #[error("text is required")]
    EmptyText,
}

/// A validated, normalized value ready to be inserted into the history.
///
/// Can only be built through [`NewClipboardEntry::new`], so a stored entry
/// never has empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClipboardEntry {
    text: String,
    source: String,
}

impl NewClipboardEntry {
    /// Trim and normalize raw submitter input.
    ///
    /// - `text` is trimmed, NUL bytes are stripped and line endings become `\n`;
    ///   an empty result is rejected.
    /// - A blank `source` becomes [`DEFAULT_SOURCE`].
    pub fn new(text: &str, source: &str) -> Result<Self, EntryValidationError> {
        let text = sanitize_for_storage(text.trim());
        let text = text.trim();
        if text.is_empty() {
            return Err(EntryValidationError::EmptyText);
        }

        let source = sanitize_for_storage(source.trim());
        let source = match source.trim() {
            "" => DEFAULT_SOURCE.to_string(),
            s => s.to_string(),
        };

        Ok(Self {
            text: text.to_string(),
            source,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}
