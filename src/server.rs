//! Process-level server lifecycle: bind, serve, shut down.

use std::io;
use std::net::SocketAddr;

use items_store::{sample_items, InMemoryItemStore};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::{app, docs, AppState};

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Build the store described by `config`.
pub fn initial_state(config: &Config) -> AppState {
    if config.seed {
        AppState::new(InMemoryItemStore::with_items(sample_items()))
    } else {
        AppState::new(InMemoryItemStore::new())
    }
}

/// Bind to the configured address and serve until Ctrl-C or SIGTERM.
pub async fn serve(config: Config) -> Result<(), ServeError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    let local = listener.local_addr().map_err(ServeError::Serve)?;

    info!("Server started successfully");
    info!("Address: http://{local}/api/");
    info!("OpenAPI spec: http://{local}{}", docs::OPENAPI_JSON_PATH);
    #[cfg(feature = "swagger")]
    info!("Documentation: http://{local}{}", docs::SWAGGER_PATH);

    axum::serve(listener, app(initial_state(&config)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServeError::Serve)?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
