// ABOUTME: Startup/shutdown sequencing around the durable store.
// ABOUTME: Serves HTTP until SIGINT/SIGTERM, drains in-flight requests, then flushes the log exactly once.

use std::sync::Arc;

use anonboard_store::StoreError;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;

use crate::app_state::SharedState;
use crate::routes::create_router;

/// Errors that can end the serve loop uncleanly.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("server io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("final flush failed: {0}")]
    Flush(#[from] StoreError),
}

/// Resolves when the process receives SIGINT (ctrl-c) or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Serve the API on the given listener until a termination signal arrives.
/// Runs exactly one final flush after in-flight requests have drained; the
/// flush takes the store mutex, so it can never overlap an append that was
/// still completing.
pub async fn serve(listener: TcpListener, state: SharedState) -> Result<(), ServeError> {
    serve_with_shutdown(listener, state, shutdown_signal()).await
}

/// Like `serve`, but with a caller-supplied shutdown future. Lets tests drive
/// the shutdown path without delivering process signals.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    state: SharedState,
    shutdown: F,
) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(Arc::clone(&state));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("shutdown signal received, writing final snapshot");
    state.service.flush().await?;

    Ok(())
}
