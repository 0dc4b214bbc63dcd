//! Integration tests for Order Desk.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p order-desk-integration-tests
//! ```
//!
//! Each test starts its own admin server on an ephemeral localhost port,
//! backed by a customers file in a fresh temporary directory. No external
//! services are needed.
//!
//! # Test Categories
//!
//! - `admin_customers` - HTTP API scenarios driven with `reqwest`
//! - `dashboard_view_model` - The dashboard view-model against a live server

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::NaiveDate;
use order_desk_admin::services::CustomerService;
use order_desk_admin::store::RecordStore;
use order_desk_admin::{AppState, build_router};
use order_desk_core::{CustomerRecord, OrderStatus, PaymentMode, ProductName, RecordId};
use order_desk_dashboard::ApiClient;
use rust_decimal::Decimal;
use tempfile::TempDir;

/// A running admin server and its data directory.
///
/// The server task stops when the test runtime shuts down; the directory is
/// removed when the context is dropped.
pub struct TestContext {
    pub client: reqwest::Client,
    pub base_url: String,
    pub data_file: PathBuf,
    _dir: TempDir,
}

impl TestContext {
    /// Start an admin server with an empty customers file.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory, the store, or the listener cannot
    /// be created.
    pub async fn start() -> Self {
        Self::start_with(&[]).await
    }

    /// Start an admin server whose customers file already holds `records`.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory, the store, or the listener cannot
    /// be created.
    pub async fn start_with(records: &[CustomerRecord]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_file = dir.path().join("customers.json");
        let contents = serde_json::to_string_pretty(records).expect("Failed to encode records");
        tokio::fs::write(&data_file, contents)
            .await
            .expect("Failed to write customers file");

        let store = RecordStore::load(&data_file)
            .await
            .expect("Failed to load customers file");
        let app = build_router(AppState::new(CustomerService::new(store)));

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to read local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            client: reqwest::Client::new(),
            base_url: format!("http://{addr}"),
            data_file,
            _dir: dir,
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// A dashboard API client pointed at this server.
    ///
    /// # Panics
    ///
    /// Panics if the base URL is rejected, which would be a bug here.
    #[must_use]
    pub fn api(&self) -> ApiClient {
        ApiClient::with_client(self.client.clone(), &self.base_url).expect("Invalid base URL")
    }

    /// The records currently in the customers file.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read or parsed.
    pub async fn stored(&self) -> Vec<CustomerRecord> {
        let contents = tokio::fs::read_to_string(&self.data_file)
            .await
            .expect("Failed to read customers file");
        serde_json::from_str(&contents).expect("Customers file is not valid JSON")
    }
}

/// A customer record with fixed product, date, amount and payment mode.
///
/// # Panics
///
/// Never: the fixed date is valid.
#[must_use]
pub fn sample_record(id: &str, customer_name: &str) -> CustomerRecord {
    CustomerRecord {
        id: RecordId::new(id),
        product_name: ProductName::Headset,
        customer_name: customer_name.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 4, 12).expect("valid date"),
        amount: Decimal::new(2_499, 0),
        payment_mode: PaymentMode::BankTransfer,
        status: OrderStatus::Process,
    }
}
