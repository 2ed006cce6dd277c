//! # Settings resolution / 配置解析
//!
//! Every setting is taken from the first source that provides it:
//! command-line flag, then config file, then the built-in default.
//! The config file is `--config` when given, otherwise
//! `<config_dir>/local-clipboard/config.toml` if it exists.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use lc_core::config::AppConfig;
use lc_infra::load_config;
use tracing::{debug, info};

use crate::cli::{ClientArgs, ServerArgs};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DATABASE_PATH: &str = "clipboard.db";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 1000;
pub const FALLBACK_SOURCE: &str = "linux-client";

const CONFIG_DIR_NAME: &str = "local-clipboard";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Listen address as given; see [`ServerSettings::socket_addr`].
    pub addr: String,
    pub database_path: PathBuf,
}

impl ServerSettings {
    /// Resolve the listen address to the socket to bind.
    /// 将监听地址解析为要绑定的套接字地址。
    ///
    /// ## Behavior / 行为
    /// - A bare `:port` binds all interfaces.
    /// - Host names such as `localhost:8080` go through the resolver; the
    ///   first address wins.
    pub async fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = if self.addr.starts_with(':') {
            format!("0.0.0.0{}", self.addr)
        } else {
            self.addr.clone()
        };
        let resolved = tokio::net::lookup_host(addr.as_str())
            .await
            .with_context(|| format!("Invalid listen address: {}", self.addr))?
            .next()
            .with_context(|| format!("Listen address resolved to nothing: {}", self.addr));
        resolved
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_url: String,
    pub poll_interval: Duration,
    pub source: String,
    pub request_timeout: Duration,
}

/// Load the config file, or an empty config when there is none.
/// 加载配置文件；没有配置文件时返回空配置。
///
/// A missing explicit `--config` file is an error; a missing default file
/// is not.
pub fn load_file_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "Loading config file");
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            info!(path = %path.display(), "Loading config file");
            load_config(&path)
        }
        _ => {
            debug!("No config file, using flags and defaults");
            Ok(AppConfig::empty())
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn non_zero(value: u64) -> Option<u64> {
    (value != 0).then_some(value)
}

pub fn resolve_server_settings(args: &ServerArgs, file: &AppConfig) -> ServerSettings {
    let addr = args
        .addr
        .as_deref()
        .and_then(non_empty)
        .or_else(|| non_empty(&file.server_addr))
        .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

    let database_path = args
        .db
        .clone()
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| Some(file.database_path.clone()).filter(|p| !p.as_os_str().is_empty()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

    ServerSettings {
        addr,
        database_path,
    }
}

/// # Errors
///
/// A poll interval of zero given on the command line is rejected.
pub fn resolve_client_settings(
    args: &ClientArgs,
    file: &AppConfig,
) -> anyhow::Result<ClientSettings> {
    let server_url = args
        .server
        .as_deref()
        .and_then(non_empty)
        .or_else(|| non_empty(&file.server_url))
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

    let poll_interval = match args.interval {
        Some(interval) if interval.is_zero() => bail!("poll interval must be greater than zero"),
        Some(interval) => interval,
        None => Duration::from_millis(
            non_zero(file.poll_interval_ms).unwrap_or(DEFAULT_POLL_INTERVAL_MS),
        ),
    };

    let source = args
        .source
        .as_deref()
        .and_then(non_empty)
        .or_else(|| non_empty(&file.source))
        .unwrap_or_else(host_source_label);

    let timeout_ms = non_zero(file.request_timeout_ms).unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);

    Ok(ClientSettings {
        server_url,
        poll_interval,
        source,
        request_timeout: Duration::from_millis(timeout_ms),
    })
}

fn host_source_label() -> String {
    gethostname::gethostname()
        .into_string()
        .ok()
        .and_then(|name| non_empty(&name))
        .unwrap_or_else(|| FALLBACK_SOURCE.to_string())
}
