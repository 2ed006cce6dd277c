pub mod clipboard_history_row;

pub use clipboard_history_row::{ClipboardHistoryRow, NewClipboardHistoryRow};
