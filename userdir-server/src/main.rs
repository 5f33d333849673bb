//! userdir - user directory HTTP service

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use userdir_core::config::Config;
use userdir_core::UserDirContext;
use userdir_server::AppState;

/// userdir - a user list over HTTP, stored in a flat file
#[derive(Parser)]
#[command(name = "userdir", version, about, long_about = None)]
struct Cli {
    /// Directory holding settings.json and the user store
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Write settings.json with every setting filled in, then exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    if cli.init {
        let path = Config::init(&cli.dir)?;
        tracing::info!("wrote settings to {}", path.display());
        return Ok(());
    }

    let ctx = UserDirContext::new(&cli.dir)
        .with_context(|| format!("Failed to initialize user directory in {:?}", cli.dir))?;

    let addr = SocketAddr::new(ctx.config.server.host, ctx.config.server.port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("server running on port: {}", addr.port());

    userdir_server::serve(listener, AppState::from(&ctx), shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
