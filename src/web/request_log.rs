use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const MAX_REQUEST_LOGS: usize = 500;
/// Per-body cap on what a record keeps, in bytes.
pub const MAX_BODY_LOG_SIZE: usize = 64 * 1024;

/// One served HTTP request.
/// 一次已处理的 HTTP 请求。
///
/// Empty bodies are left out of the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestRecord {
    pub method: String,
    pub path: String,
    pub status: u16,
    pub remote_addr: String,
    pub timestamp: DateTime<Utc>,
    pub elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_body: Option<String>,
}

/// Body text as stored in a record: `None` when empty, otherwise at most
/// [`MAX_BODY_LOG_SIZE`] bytes cut on a char boundary.
pub fn body_for_log(body: &[u8]) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    let mut text = String::from_utf8_lossy(body).into_owned();
    if text.len() > MAX_BODY_LOG_SIZE {
        let mut end = MAX_BODY_LOG_SIZE;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    Some(text)
}

/// Bounded in-memory request history; the oldest record is dropped first.
pub struct RequestLog {
    capacity: usize,
    entries: RwLock<VecDeque<RequestRecord>>,
}

impl Default for RequestLog {
    fn default() -> Self {
        Self::with_capacity(MAX_REQUEST_LOGS)
    }
}

impl RequestLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn record(&self, record: RequestRecord) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(record);
    }

    /// Newest first.
    pub fn list(&self) -> Vec<RequestRecord> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
