//! # Configuration DTO
//!
//! Plain data mapped from the TOML config file. No validation and no
//! defaults live here: a missing key is recorded as an empty string or zero
//! and the bootstrap layer decides what that means.

use std::path::PathBuf;

/// Application configuration (pure data, no logic)
/// 应用配置（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Server listen address, e.g. `0.0.0.0:8080`
    pub server_addr: String,

    /// SQLite history database path
    pub database_path: PathBuf,

    /// Base URL the client talks to
    pub server_url: String,

    /// Client poll interval in milliseconds
    pub poll_interval_ms: u64,

    /// Client source label
    pub source: String,

    /// Per-request timeout for client calls in milliseconds
    pub request_timeout_ms: u64,
}

impl AppConfig {
    /// Create AppConfig from a parsed TOML document.
    ///
    /// Must not validate or invent defaults.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let get_str = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let get_u64 = |section: &str, key: &str| -> u64 {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(0)
        };

        Ok(Self {
            server_addr: get_str("server", "addr"),
            database_path: PathBuf::from(get_str("server", "database_path")),
            server_url: get_str("client", "server_url"),
            poll_interval_ms: get_u64("client", "poll_interval_ms"),
            source: get_str("client", "source"),
            request_timeout_ms: get_u64("client", "request_timeout_ms"),
        })
    }

    /// Create an empty AppConfig (all empty/zero values).
    pub fn empty() -> Self {
        Self {
            server_addr: String::new(),
            database_path: PathBuf::new(),
            server_url: String::new(),
            poll_interval_ms: 0,
            source: String::new(),
            request_timeout_ms: 0,
        }
    }
}
