//! HTTP client for the admin customer API.
//!
//! [`CustomerApi`] is the seam the view-model talks through; [`ApiClient`] is
//! the `reqwest` implementation used against a running admin server.

use std::future::Future;

use order_desk_core::{CustomerNotFound, CustomerPatch, CustomerRecord, RecordId};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

/// Errors returned by the admin API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL cannot be used.
    #[error("invalid API URL {0}")]
    InvalidUrl(String),

    /// The request could not be sent or the response could not be decoded.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server has no customer with the requested id.
    #[error("customer {} not found", .0.customer_id)]
    NotFound(CustomerNotFound),

    /// The server answered with an unexpected status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },
}

/// The four customer operations exposed by the admin API.
pub trait CustomerApi {
    /// Fetch every customer record.
    fn list(&self) -> impl Future<Output = Result<Vec<CustomerRecord>, ClientError>> + Send;

    /// Create a record, returning the server's copy.
    fn create(
        &self,
        record: &CustomerRecord,
    ) -> impl Future<Output = Result<CustomerRecord, ClientError>> + Send;

    /// Merge `patch` over the record with id `id`, returning the merged record.
    fn update(
        &self,
        id: &RecordId,
        patch: &CustomerPatch,
    ) -> impl Future<Output = Result<CustomerRecord, ClientError>> + Send;

    /// Delete the record with id `id`.
    fn delete(&self, id: &RecordId) -> impl Future<Output = Result<(), ClientError>> + Send;
}

/// `reqwest` client for the admin API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the admin server at `base_url`
    /// (e.g. `http://localhost:5000`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is not an absolute
    /// http(s) URL.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    /// The server base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL from path segments, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Turn a non-success response into a [`ClientError`].
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    if status == StatusCode::NOT_FOUND {
        if let Ok(not_found) = serde_json::from_str::<CustomerNotFound>(&body) {
            return Err(ClientError::NotFound(not_found));
        }
    }
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

impl CustomerApi for ApiClient {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<CustomerRecord>, ClientError> {
        let url = self.endpoint(&["api", "getcustomers"])?;
        let response = check(self.http.get(url).send().await?).await?;
        let customers: Vec<CustomerRecord> = response.json().await?;
        debug!(count = customers.len(), "Fetched customers");
        Ok(customers)
    }

    #[instrument(skip(self, record), fields(customer_id = %record.id))]
    async fn create(&self, record: &CustomerRecord) -> Result<CustomerRecord, ClientError> {
        let url = self.endpoint(&["api", "createcustomers"])?;
        let response = check(self.http.post(url).json(record).send().await?).await?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self, patch))]
    async fn update(
        &self,
        id: &RecordId,
        patch: &CustomerPatch,
    ) -> Result<CustomerRecord, ClientError> {
        let url = self.endpoint(&["api", "updatecustomers", id.as_str()])?;
        let response = check(self.http.put(url).json(patch).send().await?).await?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &RecordId) -> Result<(), ClientError> {
        let url = self.endpoint(&["api", "deletecustomers", id.as_str()])?;
        check(self.http.delete(url).send().await?).await?;
        Ok(())
    }
}
