//! Health check endpoints
//!
//! - `/health` - Liveness: Is the process alive?
//! - `/ready` - Readiness: Are the dependencies available?

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;

use super::uptime::format_duration;
use super::AppState;
use crate::readiness::{DependencyStatus, Readiness, ReadinessVerdict};

/// Body of `/health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Time since start, e.g. `1h2m3.4s`
    pub uptime: String,
}

/// Body of `/ready`
#[derive(Debug, Clone, Serialize)]
pub struct ReadyResponse {
    pub status: Readiness,
    pub dependencies: DependencyStatus,
}

impl From<ReadinessVerdict> for ReadyResponse {
    fn from(verdict: ReadinessVerdict) -> Self {
        Self {
            status: verdict.overall,
            dependencies: verdict.dependencies,
        }
    }
}

/// Liveness probe handler
///
/// Always returns 200 OK - if this responds, the process is alive.
pub(super) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime: format_duration(state.metrics.uptime()),
    })
}

/// Readiness probe handler
///
/// Re-evaluates the dependency probe on every call.
/// Returns 200 OK if ready, 503 Service Unavailable if not.
pub(super) async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let verdict = ReadinessVerdict::evaluate(state.dependencies.as_ref());

    let code = if verdict.is_ready() {
        StatusCode::OK
    } else {
        warn!(
            database = ?verdict.dependencies.database,
            cache = ?verdict.dependencies.cache,
            "Readiness check failed"
        );
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(verdict.into()))
}
