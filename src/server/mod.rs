//! HTTP server for the Trip Plan API.
//!
//! # Endpoints
//!
//! - `GET /health`  — Liveness probe
//! - `GET /api/v1/` — API root
//!
//! [`serve`] binds the configured address and runs until Ctrl+C or SIGTERM.
//! [`serve_with_shutdown`] runs over an already-bound listener and stops
//! when the supplied future resolves.

pub mod handlers;
pub mod routes;

use std::future::Future;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};

pub use routes::{app_router, with_middleware};

/// Bind `config.addr` and serve until a termination signal arrives.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address cannot be bound and
/// [`ServerError::Serve`] if the accept loop fails.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let listener = bind(&config).await?;
    serve_with_shutdown(listener, config, shutdown_signal()).await
}

/// Bind the listening socket for `config`.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr,
            source,
        })
}

/// Serve the Trip Plan routes on `listener` until `signal` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    config: ServerConfig,
    signal: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = app_router(&config);

    let local_addr = listener.local_addr()?;
    tracing::info!(addr = %local_addr, cors = config.cors, "trip-plan-api listening");
    for route in routes::ROUTES {
        tracing::debug!("  GET {route}");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
