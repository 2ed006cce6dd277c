use std::sync::{Arc, Mutex, PoisonError};

use crate::db::models::{ClipboardHistoryRow, NewClipboardHistoryRow};
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::clipboard_history;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use lc_core::clipboard::{check_history_limit, ClipboardEntry, NewClipboardEntry};
use lc_core::ids::EntryId;
use lc_core::ports::{ClockPort, RecordStoreError, RecordStorePort};
use tracing::debug;

/// Clipboard history persisted in the `clipboard_history` table.
///
/// Mutations go through `write_lock` so at most one writer touches the
/// table at a time and ids are handed out in insertion order.
pub struct DieselClipboardHistoryRepository<E, M> {
    executor: E,
    mapper: M,
    clock: Arc<dyn ClockPort>,
    write_lock: Mutex<()>,
}

impl<E, M> DieselClipboardHistoryRepository<E, M> {
    pub fn new(executor: E, mapper: M, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            executor,
            mapper,
            clock,
            write_lock: Mutex::new(()),
        }
    }
}

/// `%` and `_` in user input are matched literally.
fn like_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[async_trait::async_trait]
impl<E, M> RecordStorePort for DieselClipboardHistoryRepository<E, M>
where
    E: DbExecutor,
    M: InsertMapper<(NewClipboardEntry, DateTime<Utc>), NewClipboardHistoryRow>
        + RowMapper<ClipboardHistoryRow, ClipboardEntry>,
{
    async fn insert(&self, entry: &NewClipboardEntry) -> Result<ClipboardEntry, RecordStoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let new_row = self.mapper.to_row(&(entry.clone(), self.clock.now()))?;

        let row = self.executor.run(|conn| {
            let row: ClipboardHistoryRow = diesel::insert_into(clipboard_history::table)
                .values(&new_row)
                .returning(ClipboardHistoryRow::as_returning())
                .get_result(conn)?;
            Ok(row)
        })?;

        debug!(entry_id = row.id, source = %row.source, "history entry inserted");
        Ok(self.mapper.to_domain(&row)?)
    }

    async fn get_by_id(&self, id: EntryId) -> Result<ClipboardEntry, RecordStoreError> {
        let row = self.executor.run(|conn| {
            let row: Option<ClipboardHistoryRow> = clipboard_history::table
                .filter(clipboard_history::id.eq(id.as_i64()))
                .select(ClipboardHistoryRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row)
        })?;

        match row {
            Some(row) => Ok(self.mapper.to_domain(&row)?),
            None => Err(RecordStoreError::NotFound(id)),
        }
    }

    async fn list(&self, limit: i64, search: &str) -> Result<Vec<ClipboardEntry>, RecordStoreError> {
        let limit = check_history_limit(limit)?;

        let rows = self.executor.run(|conn| {
            let mut query = clipboard_history::table
                .select(ClipboardHistoryRow::as_select())
                .into_boxed();
            if !search.is_empty() {
                query = query.filter(
                    clipboard_history::text
                        .like(like_pattern(search))
                        .escape('\\'),
                );
            }

            let rows: Vec<ClipboardHistoryRow> = query
                .order((clipboard_history::pinned.desc(), clipboard_history::id.desc()))
                .limit(limit)
                .load(conn)?;
            Ok(rows)
        })?;

        rows.iter()
            .map(|row| self.mapper.to_domain(row).map_err(RecordStoreError::from))
            .collect()
    }

    async fn set_pinned(&self, id: EntryId, pinned: bool) -> Result<(), RecordStoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let affected = self.executor.run(|conn| {
            let affected: usize = diesel::update(clipboard_history::table)
                .filter(clipboard_history::id.eq(id.as_i64()))
                .set(clipboard_history::pinned.eq(pinned))
                .execute(conn)?;
            Ok(affected)
        })?;

        if affected == 0 {
            return Err(RecordStoreError::NotFound(id));
        }
        debug!(entry_id = %id, pinned, "history entry pin updated");
        Ok(())
    }

    async fn delete(&self, id: EntryId) -> Result<(), RecordStoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let affected = self.executor.run(|conn| {
            let affected: usize = diesel::delete(clipboard_history::table)
                .filter(clipboard_history::id.eq(id.as_i64()))
                .execute(conn)?;
            Ok(affected)
        })?;

        if affected == 0 {
            return Err(RecordStoreError::NotFound(id));
        }
        debug!(entry_id = %id, "history entry deleted");
        Ok(())
    }

    async fn latest(&self) -> Result<ClipboardEntry, RecordStoreError> {
        let row = self.executor.run(|conn| {
            let row: Option<ClipboardHistoryRow> = clipboard_history::table
                .select(ClipboardHistoryRow::as_select())
                .order((clipboard_history::pinned.desc(), clipboard_history::id.desc()))
                .first(conn)
                .optional()?;
            Ok(row)
        })?;

        match row {
            Some(row) => Ok(self.mapper.to_domain(&row)?),
            None => Err(RecordStoreError::NoRows),
        }
    }
}
