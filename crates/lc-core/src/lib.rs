//! # lc-core
//!
//! Core domain models and port definitions for local-clipboard.
//!
//! This crate contains pure business rules without any infrastructure dependencies.

pub mod clipboard;
pub mod config;
pub mod ids;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipboardEntry, EntryValidationError, NewClipboardEntry};
pub use config::AppConfig;
pub use ids::EntryId;
