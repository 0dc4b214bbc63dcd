//! JSON bodies exchanged by the admin API besides the record itself.

use serde::{Deserialize, Serialize};

use super::id::RecordId;

/// Body of a 404 response from the update and delete endpoints.
///
/// ```rust
/// # use order_desk_core::CustomerNotFound;
/// let body = CustomerNotFound::new("42");
/// let json = serde_json::to_string(&body).unwrap();
/// assert_eq!(json, r#"{"customerId":"42","error":"Customer not found"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerNotFound {
    /// The id that was requested.
    pub customer_id: RecordId,
    /// Human readable error message.
    pub error: String,
}

impl CustomerNotFound {
    /// Message carried by every not-found body.
    pub const MESSAGE: &'static str = "Customer not found";

    /// Build the body for a missing id.
    #[must_use]
    pub fn new(customer_id: impl Into<RecordId>) -> Self {
        Self {
            customer_id: customer_id.into(),
            error: Self::MESSAGE.to_string(),
        }
    }
}
