//! Customer order API handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use order_desk_core::{CustomerPatch, CustomerRecord, RecordId};

use crate::{error::Result, state::AppState};

/// Build the customers router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/getcustomers", get(list))
        .route("/api/createcustomers", post(create))
        .route("/api/updatecustomers/{id}", put(update))
        .route("/api/deletecustomers/{id}", delete(remove))
}

/// List every customer record.
///
/// GET /api/getcustomers
pub async fn list(State(state): State<AppState>) -> Json<Vec<CustomerRecord>> {
    Json(state.customers().list().await)
}

/// Create a customer record.
///
/// POST /api/createcustomers
///
/// # Errors
///
/// Returns 500 if the customers file cannot be written.
pub async fn create(
    State(state): State<AppState>,
    Json(record): Json<CustomerRecord>,
) -> Result<(StatusCode, Json<CustomerRecord>)> {
    let created = state.customers().create(record).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Merge a partial record over the record with the path id.
///
/// PUT /api/updatecustomers/{id}
///
/// # Errors
///
/// Returns 404 with `{customerId, error}` if the id is unknown, 500 if the
/// customers file cannot be written.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    Json(patch): Json<CustomerPatch>,
) -> Result<Json<CustomerRecord>> {
    let merged = state.customers().update(&id, patch).await?;
    Ok(Json(merged))
}

/// Delete the record with the path id.
///
/// DELETE /api/deletecustomers/{id}
///
/// # Errors
///
/// Returns 404 with `{customerId, error}` if the id is unknown, 500 if the
/// customers file cannot be written.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<StatusCode> {
    state.customers().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
