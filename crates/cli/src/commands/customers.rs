//! Customer order commands.
//!
//! # Usage
//!
//! ```bash
//! # Second page of orders by customers named "sam", newest first
//! od-cli customers list --search sam --sort date --desc --page 2
//!
//! # Create an order
//! od-cli customers create --id 17 --product Hat --name "Sam" \
//!     --date 2024-01-01 --amount 10 --payment "Cash on Delivery"
//!
//! # Mark an order delivered
//! od-cli customers update 17 --status Delivered
//!
//! # Delete an order
//! od-cli customers delete 17
//! ```

use chrono::NaiveDate;
use order_desk_core::{CustomerPatch, OrderStatus, PaymentMode, ProductName, RecordId};
use order_desk_dashboard::components::{DataTableConfig, customers_table_config};
use order_desk_dashboard::{CustomerApi, CustomerDashboard, FormField, SortColumn};
use rust_decimal::Decimal;
use tracing::info;

use super::CliError;

/// Options for `customers list`.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Search text (tracking id if numeric, customer name otherwise).
    pub search: Option<String>,
    /// Column to sort by.
    pub sort: Option<SortColumn>,
    /// Sort descending instead of ascending.
    pub descending: bool,
    /// One-based page number.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
}

/// Raw field values for `customers create`, validated by the dashboard form.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub id: String,
    pub product: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub payment: String,
    pub status: Option<String>,
}

/// Fields for `customers update`. Only the given fields are sent.
#[derive(Debug, Clone, Default)]
pub struct CustomerChanges {
    pub new_id: Option<String>,
    pub product: Option<ProductName>,
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub payment: Option<PaymentMode>,
    pub status: Option<OrderStatus>,
}

impl From<CustomerChanges> for CustomerPatch {
    fn from(changes: CustomerChanges) -> Self {
        Self {
            id: changes.new_id.map(RecordId::new),
            product_name: changes.product,
            customer_name: changes.name,
            date: changes.date,
            amount: changes.amount,
            payment_mode: changes.payment,
            status: changes.status,
        }
    }
}

/// Print one page of customer orders.
///
/// # Errors
///
/// Returns an error if the list cannot be fetched.
pub async fn list(api: impl CustomerApi, options: ListOptions) -> Result<(), CliError> {
    let mut dashboard = CustomerDashboard::new(api);
    dashboard.load().await?;

    if let Some(search) = &options.search {
        dashboard.set_query(search);
    }
    if let Some(column) = options.sort {
        dashboard.sort_by(column);
        if options.descending {
            dashboard.sort_by(column);
        }
    }
    dashboard.set_page_size(options.page_size);
    dashboard.set_page(options.page.saturating_sub(1));

    let config = customers_table_config();
    let total = dashboard.filtered().len();
    let pagination = dashboard.pagination();

    #[allow(clippy::print_stdout)]
    {
        if total == 0 {
            println!("{}", config.empty_title);
            if let Some(description) = &config.empty_description {
                println!("{description}");
            }
        } else {
            print!("{}", render_table(&config, dashboard.page_rows()));
            println!(
                "{} (page {} of {})",
                pagination.range_label(total),
                pagination.page() + 1,
                pagination.page_count(total)
            );
        }
    }
    Ok(())
}

/// Create a customer order through the dashboard form.
///
/// The current list is loaded first so a taken id is rejected before any
/// request is sent.
///
/// # Errors
///
/// Returns an error if a field is invalid, the id is taken, or a request
/// fails.
pub async fn create(api: impl CustomerApi, customer: NewCustomer) -> Result<(), CliError> {
    let mut dashboard = CustomerDashboard::new(api);
    dashboard.load().await?;

    dashboard.open_create();
    dashboard.set_field(FormField::Id, customer.id.as_str());
    dashboard.set_field(FormField::ProductName, customer.product);
    dashboard.set_field(FormField::CustomerName, customer.name);
    dashboard.set_field(FormField::Date, customer.date);
    dashboard.set_field(FormField::Amount, customer.amount);
    dashboard.set_field(FormField::PaymentMode, customer.payment);
    if let Some(status) = customer.status {
        dashboard.set_field(FormField::Status, status);
    }
    dashboard.submit().await?;
    Ok(())
}

/// Apply a partial update to the order with id `id`.
///
/// # Errors
///
/// Returns [`CliError::EmptyUpdate`] if no field was given, or an error if
/// the order does not exist or the request fails.
pub async fn update(
    api: impl CustomerApi,
    id: &str,
    changes: CustomerChanges,
) -> Result<(), CliError> {
    let patch = CustomerPatch::from(changes);
    if patch.is_empty() {
        return Err(CliError::EmptyUpdate);
    }

    let merged = api.update(&RecordId::new(id), &patch).await?;
    info!(customer_id = %id, "Customer updated");

    #[allow(clippy::print_stdout)]
    {
        print!("{}", render_table(&customers_table_config(), &[merged]));
    }
    Ok(())
}

/// Delete the order with id `id`.
///
/// # Errors
///
/// Returns an error if the order does not exist or the request fails.
pub async fn delete(api: impl CustomerApi, id: &str) -> Result<(), CliError> {
    api.delete(&RecordId::new(id)).await?;
    info!(customer_id = %id, "Customer deleted");
    Ok(())
}

/// Render rows as a plain-text table with aligned columns.
fn render_table(config: &DataTableConfig, rows: &[order_desk_core::CustomerRecord]) -> String {
    let headers: Vec<String> = config.headers().into_iter().map(str::to_string).collect();
    let cells: Vec<Vec<String>> = rows.iter().map(|record| config.row(record)).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in std::iter::once(&headers).chain(&cells) {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect();
        out.push_str(padded.join("  ").trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use order_desk_core::CustomerRecord;
    use order_desk_dashboard::ClientError;

    use super::*;

    #[derive(Default)]
    struct FakeApi {
        records: Mutex<Vec<CustomerRecord>>,
    }

    impl CustomerApi for &FakeApi {
        async fn list(&self) -> Result<Vec<CustomerRecord>, ClientError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn create(&self, record: &CustomerRecord) -> Result<CustomerRecord, ClientError> {
            self.records.lock().unwrap().push(record.clone());
            Ok(record.clone())
        }

        async fn update(
            &self,
            id: &RecordId,
            patch: &CustomerPatch,
        ) -> Result<CustomerRecord, ClientError> {
            let mut records = self.records.lock().unwrap();
            let record = records.iter_mut().find(|r| &r.id == id).unwrap();
            patch.clone().apply(record);
            Ok(record.clone())
        }

        async fn delete(&self, id: &RecordId) -> Result<(), ClientError> {
            self.records.lock().unwrap().retain(|r| &r.id != id);
            Ok(())
        }
    }

    /// Log sink shared between a test and its subscriber.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn record(id: &str, name: &str) -> CustomerRecord {
        CustomerRecord {
            id: RecordId::new(id),
            product_name: ProductName::Keyboard,
            customer_name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            amount: Decimal::new(10, 0),
            payment_mode: PaymentMode::CashOnDelivery,
            status: OrderStatus::Process,
        }
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let table = render_table(
            &customers_table_config(),
            &[record("1", "A"), record("100", "Bartholomew")],
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Tracking ID  Product Name  Customer Name"));
        assert!(lines[1].starts_with("1            Keyboard      A            "));
        assert!(lines[2].starts_with("100          Keyboard      Bartholomew  "));
        assert!(lines[1].contains("₹10"));
        assert!(lines[2].ends_with("Process"));
    }

    #[tokio::test]
    async fn test_create_stores_record_and_logs_once() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let api = FakeApi::default();
        create(
            &api,
            NewCustomer {
                id: "17".to_string(),
                product: "Hat".to_string(),
                name: "Sam".to_string(),
                date: "2024-01-01".to_string(),
                amount: "10".to_string(),
                payment: "Cash on Delivery".to_string(),
                status: None,
            },
        )
        .await
        .unwrap();

        let stored = api.records.lock().unwrap().clone();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, "17");
        assert_eq!(stored[0].status, OrderStatus::Process);
        assert_eq!(logs.contents().matches("Customer created").count(), 1);
    }

    #[test]
    fn test_changes_become_sparse_patch() {
        let patch = CustomerPatch::from(CustomerChanges {
            status: Some(OrderStatus::Delivered),
            ..CustomerChanges::default()
        });

        assert_eq!(patch.status, Some(OrderStatus::Delivered));
        assert!(patch.id.is_none());
        assert!(patch.customer_name.is_none());
        assert!(CustomerPatch::from(CustomerChanges::default()).is_empty());
    }
}
