//! API route handlers for admin.
//!
//! JSON API endpoints consumed by the dashboard.

pub mod customers;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router.
pub fn router() -> Router<AppState> {
    Router::new().merge(customers::router())
}
