use crate::ports::RecordStoreError;

pub const MIN_HISTORY_LIMIT: i64 = 1;
pub const MAX_HISTORY_LIMIT: i64 = 200;

/// Page size used when a history request does not name one.
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;

/// Validate a requested history page size.
pub fn check_history_limit(limit: i64) -> Result<i64, RecordStoreError> {
    if (MIN_HISTORY_LIMIT..=MAX_HISTORY_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(RecordStoreError::InvalidArgument(format!(
            "limit must be between {MIN_HISTORY_LIMIT} and {MAX_HISTORY_LIMIT}, got {limit}"
        )))
    }
}
