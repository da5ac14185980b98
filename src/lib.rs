pub mod readiness;
pub mod server;

// Re-export for main.rs and integration tests
pub use crate::server::{router, run_server, serve, AppState, ServerError};
