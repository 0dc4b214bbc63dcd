//! `od-cli` subcommands.
//!
//! # Environment Variables
//!
//! - `ORDER_DESK_API_URL` - Admin server base URL (default: `http://localhost:5000`)

pub mod customers;
pub mod seed;

use order_desk_dashboard::{ApiClient, ClientError, DashboardError};
use thiserror::Error;

const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The admin API request failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The dashboard rejected the action.
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    /// The seed file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a YAML list of customer records.
    #[error("Invalid seed file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An update was requested without any field to change.
    #[error("Nothing to update: pass at least one field")]
    EmptyUpdate,
}

/// Build the admin API client from `ORDER_DESK_API_URL`.
///
/// # Errors
///
/// Returns [`CliError::Client`] if the URL is invalid.
pub fn api_client() -> Result<ApiClient, CliError> {
    dotenvy::dotenv().ok();

    let base_url =
        std::env::var("ORDER_DESK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    tracing::debug!(%base_url, "Using admin API");
    Ok(ApiClient::new(&base_url)?)
}
