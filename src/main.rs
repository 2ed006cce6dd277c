use clap::Parser;
use local_clipboard_lib::bootstrap::{self, tracing::init_tracing_subscriber};
use local_clipboard_lib::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing_subscriber()?;

    if let Err(err) = bootstrap::run(cli).await {
        tracing::error!(error = %format!("{err:#}"), "local-clipboard exited with error");
        return Err(err);
    }
    Ok(())
}
