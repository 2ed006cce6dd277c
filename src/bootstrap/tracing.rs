//! Tracing configuration for local-clipboard
//!
//! ## Output / 输出
//!
//! - **One layer**: stdout only, no log files
//! - **Format**: `2026-01-15 10:30:45.123 INFO [file.rs:42] [target] message`
//! - **Override**: `RUST_LOG` replaces the default directives

use std::io;

use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives.
///
/// ## Behavior / 行为
/// - **Development**: debug for everything ours
/// - **Production**: info
/// - `hyper` and `warp` internals stay at warn either way
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        "hyper=warn".to_string(),
        "warp=warn".to_string(),
        "reqwest=warn".to_string(),
        if is_dev {
            "lc_platform=debug"
        } else {
            "lc_platform=info"
        }
        .to_string(),
        if is_dev {
            "lc_infra=debug"
        } else {
            "lc_infra=info"
        }
        .to_string(),
    ]
}

/// Initialize the global tracing subscriber.
/// 初始化全局 tracing subscriber。
///
/// Call once from `main`, before anything logs.
///
/// # Errors
///
/// Fails if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stdout_writer: BoxMakeWriter = BoxMakeWriter::new(io::stdout);
    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stdout_writer);

    registry().with(env_filter).with(stdout_layer).try_init()?;

    Ok(())
}
