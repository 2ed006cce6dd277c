//! # Configuration loader
//!
//! Reads a TOML file into [`AppConfig`]. Pure data loading: whatever is in
//! the file is accepted as is, missing keys stay empty, and defaults are
//! decided by the caller.

use std::path::Path;

use anyhow::Context;
use lc_core::config::AppConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Fails when the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}
