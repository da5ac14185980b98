use pulse::server::{run_server, AppState};
use tracing::{error, info};

/// Fixed listening port
const HTTP_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting pulse health server");

    // Start time is captured here, before any request is served
    let state = AppState::from_env();

    if let Err(e) = run_server(HTTP_PORT, state).await {
        error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}
