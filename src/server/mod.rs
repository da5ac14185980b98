//! HTTP server for health endpoints
//!
//! Provides:
//! - `/health` - Liveness probe (process is running)
//! - `/ready` - Readiness probe (dependencies are available)
//! - `/metrics` - Request count and uptime
//!
//! Requests to `/health` and `/ready` pass through [`count_requests`] first.

mod health;
mod metrics;
mod uptime;

pub use health::{HealthResponse, ReadyResponse};
pub use metrics::{count_requests, create_metrics, MetricsResponse, ProcessMetrics, SharedMetrics};
pub use uptime::format_duration;

use axum::{middleware, routing::get, Router};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

use crate::readiness::{DependencyProbe, EnvDependencies};

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// State shared by every handler
///
/// Clone is cheap (Arc internally).
#[derive(Clone)]
pub struct AppState {
    pub metrics: SharedMetrics,
    pub dependencies: Arc<dyn DependencyProbe>,
}

impl AppState {
    pub fn new(metrics: SharedMetrics, dependencies: Arc<dyn DependencyProbe>) -> Self {
        Self {
            metrics,
            dependencies,
        }
    }

    /// Fresh counters, dependencies from `DB_DOWN` / `CACHE_DOWN`
    pub fn from_env() -> Self {
        Self::new(create_metrics(), Arc::new(EnvDependencies::new()))
    }
}

/// Build the router with all three endpoints
///
/// Only `/health` and `/ready` are counted, so `/metrics` reports the
/// traffic of the probes without observing itself. The counter is a
/// route layer: unmatched paths and rejected methods are not counted.
pub fn router(state: AppState) -> Router {
    let counted: Router<AppState> = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route_layer(middleware::from_fn_with_state(
            state.metrics.clone(),
            count_requests,
        ));

    Router::new()
        .route("/metrics", get(metrics::metrics))
        .merge(counted)
        .with_state(state)
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(address = %addr, "HTTP server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

/// Run the server on the specified port
///
/// Binds `0.0.0.0:<port>` and runs until Ctrl+C.
pub async fn run_server(port: u16, state: AppState) -> Result<(), ServerError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { port, source })?;

    serve(listener, state, shutdown_signal()).await
}

/// Wait for Ctrl+C
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            // Without a handler we can only run until killed
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_tests;

#[cfg(test)]
#[path = "uptime_test.rs"]
mod uptime_tests;
