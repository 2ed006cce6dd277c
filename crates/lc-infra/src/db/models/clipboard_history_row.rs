use crate::db::schema::clipboard_history;
use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = clipboard_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ClipboardHistoryRow {
    pub id: i64,
    pub text: String,
    pub source: String,
    /// RFC 3339, UTC
    pub updated_at: String,
    pub pinned: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = clipboard_history)]
pub struct NewClipboardHistoryRow {
    pub text: String,
    pub source: String,
    pub updated_at: String,
    pub pinned: bool,
}
