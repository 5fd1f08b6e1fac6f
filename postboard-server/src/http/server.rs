//! Axum server setup
//!
//! Server skeleton with:
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use postboard_core::{BoardConfig, FilePostStore};

use super::routes;
use crate::state::AppState;

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::posts::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server against the configured posts file.
///
/// # Example
///
/// ```ignore
/// let config = BoardConfig { port: 8080, ..BoardConfig::default() };
/// run_server(config).await?;
/// ```
pub async fn run_server(config: BoardConfig) -> Result<(), ServerError> {
    tracing::info!(posts_file = %config.posts_file.display(), "Posts file configured");
    let state = AppState::new(FilePostStore::new(&config.posts_file));

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr.as_str())
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    serve(listener, state, &config).await
}

/// Serve on an already-bound listener until a shutdown signal arrives
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    config: &BoardConfig,
) -> Result<(), ServerError> {
    let app = build_router(state);
    tracing::info!("Server is running on {}", config.local_url());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
