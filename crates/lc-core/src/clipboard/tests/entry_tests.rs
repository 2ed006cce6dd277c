//! Tests for [`NewClipboardEntry`], [`ClipboardEntry`] and history limits.

use crate::clipboard::*;
use crate::ids::EntryId;
use chrono::{TimeZone, Utc};

#[test]
fn test_new_entry_trims_text_and_source() {
    let entry = NewClipboardEntry::new("  hello \n", "  laptop ").unwrap();
    assert_eq!(entry.text(), "hello");
    assert_eq!(entry.source(), "laptop");
}

#[test]
fn test_new_entry_rejects_blank_text() {
    assert_eq!(
        NewClipboardEntry::new("", "laptop"),
        Err(EntryValidationError::EmptyText)
    );
    assert_eq!(
        NewClipboardEntry::new(" \t\r\n ", "laptop"),
        Err(EntryValidationError::EmptyText)
    );
}

#[test]
fn test_new_entry_rejects_text_that_is_only_nul() {
    assert_eq!(
        NewClipboardEntry::new("\0\0", "laptop"),
        Err(EntryValidationError::EmptyText)
    );
}

#[test]
fn test_blank_source_defaults_to_unknown() {
    let entry = NewClipboardEntry::new("x", "   ").unwrap();
    assert_eq!(entry.source(), DEFAULT_SOURCE);
    assert_eq!(entry.source(), "unknown");
}

#[test]
fn test_new_entry_keeps_inner_whitespace_and_quotes() {
    let raw = "line one\r\n\t\"quoted\" 'single'\rline three";
    let entry = NewClipboardEntry::new(raw, "web").unwrap();
    assert_eq!(entry.text(), "line one\n\t\"quoted\" 'single'\nline three");
}

#[test]
fn test_entry_json_shape() {
    let entry = ClipboardEntry {
        id: EntryId::new(7),
        text: "hello".to_string(),
        source: "phone".to_string(),
        updated_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        pinned: false,
    };

    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["id"], 7);
    assert_eq!(value["text"], "hello");
    assert_eq!(value["source"], "phone");
    assert_eq!(value["updated_at"], "2026-01-02T03:04:05Z");
    assert_eq!(value["pinned"], false);

    let back: ClipboardEntry = serde_json::from_value(value).unwrap();
    assert_eq!(back, entry);
}

#[test]
fn test_history_limit_bounds() {
    assert_eq!(check_history_limit(1).unwrap(), 1);
    assert_eq!(check_history_limit(200).unwrap(), 200);
    assert!(check_history_limit(0).is_err());
    assert!(check_history_limit(201).is_err());
    assert!(check_history_limit(-5).is_err());
}
