//! Process counters
//!
//! Tracks the two process-wide values exposed on `/metrics`:
//! - Requests served since start
//! - Uptime
//!
//! The request counter is the only shared mutable state in the server.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    Json,
};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

use super::AppState;

/// Process-lifetime counters
///
/// The start instant is fixed at construction and never changes.
/// The request counter only ever goes up.
#[derive(Debug)]
pub struct ProcessMetrics {
    start: Instant,
    requests: AtomicU64,
}

impl ProcessMetrics {
    /// Capture the start instant now, with zero requests
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    /// Use an explicit start instant
    pub fn started_at(start: Instant) -> Self {
        Self {
            start,
            requests: AtomicU64::new(0),
        }
    }

    /// Count one request, returning the new total
    pub fn record_request(&self) -> u64 {
        self.requests.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Requests counted so far
    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn start_time(&self) -> Instant {
        self.start
    }

    pub fn uptime(&self) -> Duration {
        self.start.elapsed()
    }

    /// Whole seconds since start (truncated)
    pub fn uptime_seconds(&self) -> u64 {
        self.uptime().as_secs()
    }
}

impl Default for ProcessMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared metrics handle for use across handlers
pub type SharedMetrics = Arc<ProcessMetrics>;

/// Create a new shared metrics instance
pub fn create_metrics() -> SharedMetrics {
    Arc::new(ProcessMetrics::new())
}

/// Counting middleware
///
/// Increments the request counter exactly once, then hands the request
/// to the wrapped handler untouched.
pub async fn count_requests(
    State(metrics): State<SharedMetrics>,
    request: Request,
    next: Next,
) -> Response {
    let count = metrics.record_request();
    debug!(
        method = %request.method(),
        path = %request.uri().path(),
        requests = count,
        "Request counted"
    );
    next.run(request).await
}

/// Body of `/metrics`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsResponse {
    pub requests: u64,
    pub uptime_seconds: u64,
}

impl MetricsResponse {
    pub fn snapshot(metrics: &ProcessMetrics) -> Self {
        Self {
            requests: metrics.requests(),
            uptime_seconds: metrics.uptime_seconds(),
        }
    }
}

/// Counters handler
///
/// Always 200. This route is not behind [`count_requests`], so reading
/// the counters never changes them.
pub(super) async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    Json(MetricsResponse::snapshot(&state.metrics))
}
