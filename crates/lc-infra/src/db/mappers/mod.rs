pub mod clipboard_history_mapper;

pub use clipboard_history_mapper::ClipboardHistoryRowMapper;
