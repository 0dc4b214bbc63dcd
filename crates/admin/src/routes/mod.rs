//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                      - Liveness check
//! GET    /health/ready                - Readiness check (customers file reachable)
//!
//! # Customers (JSON API)
//! GET    /api/getcustomers            - All customer records
//! POST   /api/createcustomers         - Append a record (201)
//! PUT    /api/updatecustomers/{id}    - Shallow-merge a partial record (200 / 404)
//! DELETE /api/deletecustomers/{id}    - Remove a record (204 / 404)
//! ```

pub mod api;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the complete route tree (without middleware layers).
pub fn routes() -> Router<AppState> {
    Router::new().merge(health::router()).merge(api::router())
}
