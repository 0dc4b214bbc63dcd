//! Unified error handling for admin.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use order_desk_core::{CustomerNotFound, RecordId};
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the admin API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading or persisting the customers file failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// No customer has the requested id.
    #[error("Customer not found: {0}")]
    CustomerNotFound(RecordId),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Store(_) => {
                let event_id = sentry::capture_error(&self);
                tracing::error!(
                    error = %self,
                    sentry_event_id = %event_id,
                    "Admin request error"
                );

                // Don't expose internal error details to clients
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
            Self::CustomerNotFound(id) => {
                (StatusCode::NOT_FOUND, Json(CustomerNotFound::new(id))).into_response()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
