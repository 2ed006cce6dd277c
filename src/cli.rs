use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "local-clipboard", version, about = "LAN clipboard sync server and client")]
pub struct Cli {
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Debug, Subcommand)]
pub enum Mode {
    /// Serve the clipboard API and keep history.
    Server(ServerArgs),
    /// Sync this machine's clipboard with a server.
    Client(ClientArgs),
}

#[derive(Debug, Default, Args)]
pub struct ServerArgs {
    /// Listen address, e.g. `0.0.0.0:8080` or `:8080`
    #[arg(long)]
    pub addr: Option<String>,

    /// Path to the SQLite history database
    #[arg(long = "db")]
    pub db: Option<PathBuf>,

    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Default, Args)]
pub struct ClientArgs {
    /// Base URL of the clipboard server
    #[arg(long = "server")]
    pub server: Option<String>,

    /// Poll interval for the local clipboard, e.g. `1s`, `500ms` or `1m30s`.
    /// A bare number is milliseconds.
    #[arg(long, alias = "interval-ms", value_parser = parse_interval)]
    pub interval: Option<Duration>,

    /// Source label for this machine
    #[arg(long)]
    pub source: Option<String>,

    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Parse a duration such as `500ms`, `1.5s`, `2m` or `1h30m`.
/// 解析 `500ms`、`1.5s`、`2m`、`1h30m` 这类时长。
///
/// Units are `ms`, `s`, `m` and `h`; a bare integer counts as milliseconds.
pub fn parse_interval(raw: &str) -> Result<Duration, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("empty duration".to_string());
    }
    if let Ok(ms) = raw.parse::<u64>() {
        return Ok(Duration::from_millis(ms));
    }

    let invalid = || format!("invalid duration {raw:?}");
    let mut total = Duration::ZERO;
    let mut rest = raw;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(|| format!("missing unit in duration {raw:?}"))?;
        if number_len == 0 {
            return Err(invalid());
        }
        let value: f64 = rest[..number_len].parse().map_err(|_| invalid())?;

        let tail = &rest[number_len..];
        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let nanos_per_unit = match &tail[..unit_len] {
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 6e10,
            "h" => 3.6e12,
            unit => return Err(format!("unknown unit {unit:?} in duration {raw:?}")),
        };

        let nanos = (value * nanos_per_unit).round();
        if !nanos.is_finite() || nanos >= u64::MAX as f64 {
            return Err(invalid());
        }
        total = total
            .checked_add(Duration::from_nanos(nanos as u64))
            .ok_or_else(invalid)?;
        rest = &tail[unit_len..];
    }
    Ok(total)
}
