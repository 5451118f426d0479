// ABOUTME: Entry point for the anonboard binary.
// ABOUTME: Parses CLI arguments, initializes tracing, loads the snapshot, and runs the server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anonboard_server::{AnonboardConfig, AppState, MessageService, lifecycle};
use anonboard_store::DurableStore;
use anyhow::Context;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "anonboard", about = "Anonymous message board daemon")]
struct Args {
    /// Socket address to bind, overrides ANONBOARD_BIND
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Message snapshot path, overrides ANONBOARD_DATA_FILE
    #[arg(long)]
    data_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anonboard=debug,tower_http=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();
    let mut config = AnonboardConfig::from_env()?;
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(data_file) = args.data_file {
        config.data_file = data_file;
    }

    tracing::info!("anonboard starting up");

    // The store must be hydrated before the listener accepts anything. A
    // corrupt snapshot aborts startup; history is never silently discarded.
    let store = DurableStore::load(&config.data_file)
        .with_context(|| format!("failed to load snapshot {}", config.data_file.display()))?;
    let service = MessageService::new(Arc::new(store));
    let state = Arc::new(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    lifecycle::serve(listener, state).await?;

    tracing::info!("anonboard shut down cleanly");
    Ok(())
}
