use std::future::Future;
use std::io;
use std::sync::Arc;

use anyhow::Context;
use lc_app::ClipboardSyncLoop;
use lc_core::ports::LocalClipboardPort;
use lc_platform::net_utils::{port_from_addr, server_urls};
use lc_platform::{CommandClipboard, HttpRemoteClipboard};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use super::config::{load_file_config, resolve_client_settings, resolve_server_settings};
use super::runtime::create_runtime;
use crate::cli::{ClientArgs, Cli, Mode, ServerArgs};
use crate::web;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.mode {
        Mode::Server(args) => run_server(args).await,
        Mode::Client(args) => run_client(args).await,
    }
}

/// Cancel `token` on Ctrl-C.
/// 收到 Ctrl-C 时取消 `token`。
fn cancel_on_ctrl_c(token: CancellationToken) {
    cancel_on_signal(tokio::signal::ctrl_c(), token);
}

/// Cancel `token` once `signal` resolves.
///
/// ## Behavior / 行为
/// - `Ok` cancels the token.
/// - `Err` means the handler never got installed; it is logged and the
///   token is left alone so the process keeps running.
fn cancel_on_signal<S>(signal: S, token: CancellationToken) -> JoinHandle<()>
where
    S: Future<Output = io::Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        match signal.await {
            Ok(()) => {
                info!("Shutdown requested");
                token.cancel();
            }
            Err(err) => error!(error = %err, "Failed to listen for Ctrl-C; running until killed"),
        }
    })
}

pub async fn run_server(args: ServerArgs) -> anyhow::Result<()> {
    let file_config = load_file_config(args.config.as_deref())?;
    let settings = resolve_server_settings(&args, &file_config);
    let socket_addr = settings.socket_addr().await?;

    let runtime = Arc::new(create_runtime(&settings.database_path)?);
    runtime
        .usecases()
        .seed_latest_value()
        .execute()
        .await
        .context("Failed to load latest clipboard value")?;

    let token = CancellationToken::new();
    cancel_on_ctrl_c(token.clone());

    let shutdown = token.clone();
    let (bound, server) = warp::serve(web::routes(runtime))
        .try_bind_with_graceful_shutdown(socket_addr, async move {
            shutdown.cancelled().await;
        })
        .with_context(|| format!("Failed to bind {socket_addr}"))?;

    info!(
        addr = %bound,
        db = %settings.database_path.display(),
        "Clipboard server listening"
    );
    for url in server_urls(port_from_addr(&settings.addr)) {
        info!("Reachable at {url}");
    }

    server.await;
    info!("Clipboard server stopped");
    Ok(())
}

pub async fn run_client(args: ClientArgs) -> anyhow::Result<()> {
    let file_config = load_file_config(args.config.as_deref())?;
    let settings = resolve_client_settings(&args, &file_config)?;

    let local = CommandClipboard::detect().context("Clipboard command setup failed")?;
    info!(read = %local.read_command().display(), "Using clipboard read command");
    match local.write_command() {
        Some(write) => info!(write = %write.display(), "Using clipboard write command"),
        None => warn!("No clipboard write command found; this client will only push local copies"),
    }
    let local: Arc<dyn LocalClipboardPort> = Arc::new(local);

    let remote = HttpRemoteClipboard::new(&settings.server_url, settings.request_timeout)
        .context("Failed to create HTTP client")?;

    info!(
        server = %settings.server_url,
        source = %settings.source,
        "Clipboard client starting"
    );

    let token = CancellationToken::new();
    cancel_on_ctrl_c(token.clone());

    ClipboardSyncLoop::new(local, Arc::new(remote), settings.source, settings.poll_interval)
        .run(token)
        .await;

    Ok(())
}
