use crate::db::models::{ClipboardHistoryRow, NewClipboardHistoryRow};
use crate::db::ports::{InsertMapper, RowMapper};
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use lc_core::clipboard::{ClipboardEntry, NewClipboardEntry};
use lc_core::ids::EntryId;

pub struct ClipboardHistoryRowMapper;

impl InsertMapper<(NewClipboardEntry, DateTime<Utc>), NewClipboardHistoryRow>
    for ClipboardHistoryRowMapper
{
    fn to_row(
        &self,
        (entry, updated_at): &(NewClipboardEntry, DateTime<Utc>),
    ) -> Result<NewClipboardHistoryRow> {
        Ok(NewClipboardHistoryRow {
            text: entry.text().to_string(),
            source: entry.source().to_string(),
            updated_at: updated_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            pinned: false,
        })
    }
}

impl RowMapper<ClipboardHistoryRow, ClipboardEntry> for ClipboardHistoryRowMapper {
    fn to_domain(&self, row: &ClipboardHistoryRow) -> Result<ClipboardEntry> {
        let updated_at = DateTime::parse_from_rfc3339(&row.updated_at)
            .with_context(|| {
                format!("invalid updated_at {:?} on history row {}", row.updated_at, row.id)
            })?
            .with_timezone(&Utc);

        Ok(ClipboardEntry {
            id: EntryId::new(row.id),
            text: row.text.clone(),
            source: row.source.clone(),
            updated_at,
            pinned: row.pinned,
        })
    }
}
