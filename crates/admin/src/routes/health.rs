//! Health check handlers.

use axum::{Router, extract::State, http::StatusCode, routing::get};

use crate::state::AppState;

/// Build the health router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the customers file is still reachable.
/// Returns 503 Service Unavailable if it is not.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match tokio::fs::metadata(state.customers().store().path()).await {
        Ok(meta) if meta.is_file() => StatusCode::OK,
        Ok(_) => {
            tracing::warn!("Customers path is not a regular file");
            StatusCode::SERVICE_UNAVAILABLE
        }
        Err(e) => {
            tracing::warn!("Customers file unreachable: {e}");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
