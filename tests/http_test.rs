//! End-to-end tests over a real socket

mod common;

use common::TestServer;
use futures::future::join_all;
use pulse::readiness::StaticDependencies;
use pulse::server::create_metrics;
use pulse::AppState;
use std::sync::Arc;

fn state(database_down: bool, cache_down: bool) -> AppState {
    AppState::new(
        create_metrics(),
        Arc::new(StaticDependencies::new(database_down, cache_down)),
    )
}

#[tokio::test]
async fn test_all_endpoints_respond() {
    let server = TestServer::start(state(false, false)).await;

    let (status, health) = server.get_json("/health").await;
    assert_eq!(status, 200);
    assert_eq!(health["status"], "ok");
    assert!(!health["uptime"].as_str().unwrap_or_default().is_empty());

    let (status, ready) = server.get_json("/ready").await;
    assert_eq!(status, 200);
    assert_eq!(
        ready,
        serde_json::json!({
            "status": "ready",
            "dependencies": {"database": "ok", "cache": "ok"}
        })
    );

    let (status, metrics) = server.get_json("/metrics").await;
    assert_eq!(status, 200);
    // /health and /ready only; /metrics is not counted
    assert_eq!(metrics["requests"], 2);
    assert!(metrics["uptime_seconds"].is_u64());

    server.stop().await;
}

#[tokio::test]
async fn test_not_ready_is_503() {
    let server = TestServer::start(state(true, false)).await;

    let (status, ready) = server.get_json("/ready").await;
    assert_eq!(status, 503);
    assert_eq!(ready["status"], "not ready");
    assert_eq!(ready["dependencies"]["database"], "down");
    assert_eq!(ready["dependencies"]["cache"], "ok");

    server.stop().await;
}

/// N parallel requests produce exactly N increments
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_are_all_counted() {
    let server = TestServer::start(state(false, true)).await;
    let n = 200;

    let paths = ["/health", "/ready", "/health", "/ready"];
    let requests = (0..n).map(|i| server.get(paths[i % paths.len()]));
    let responses = join_all(requests).await;
    assert_eq!(responses.len(), n);

    let (_, metrics) = server.get_json("/metrics").await;
    assert_eq!(metrics["requests"], n as u64);

    // Reading again does not move the counter
    let (_, metrics) = server.get_json("/metrics").await;
    assert_eq!(metrics["requests"], n as u64);

    server.stop().await;
}

#[tokio::test]
async fn test_request_count_is_non_decreasing() {
    let server = TestServer::start(state(false, false)).await;

    let mut last = 0;
    for round in 0..6 {
        // Every other round sends a counted request first
        if round % 2 == 0 {
            server.get("/health").await;
        }
        let (_, metrics) = server.get_json("/metrics").await;
        let requests = metrics["requests"].as_u64().expect("requests should be an integer");
        assert!(requests >= last, "{} should not drop below {}", requests, last);
        last = requests;
    }
    assert_eq!(last, 3);

    server.stop().await;
}
