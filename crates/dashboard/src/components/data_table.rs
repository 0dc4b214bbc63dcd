//! Data table component types.
//!
//! These types define the layout of the customers table: which columns
//! exist, which of them sort, and how each cell renders.

use order_desk_core::CustomerRecord;

use crate::pagination::PAGE_SIZE_OPTIONS;
use crate::sort::SortColumn;

/// Columns of the customers table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Id,
    ProductName,
    CustomerName,
    Date,
    Amount,
    PaymentMode,
    Status,
}

impl ColumnKey {
    /// Render the cell for `record` in this column.
    #[must_use]
    pub fn cell(self, record: &CustomerRecord) -> String {
        match self {
            Self::Id => record.id.to_string(),
            Self::ProductName => record.product_name.to_string(),
            Self::CustomerName => record.customer_name.clone(),
            Self::Date => record.date.format("%Y-%m-%d").to_string(),
            Self::Amount => format!("₹{}", record.amount.normalize()),
            Self::PaymentMode => record.payment_mode.to_string(),
            Self::Status => record.status.to_string(),
        }
    }

    /// The sort column behind this table column, if it sorts.
    #[must_use]
    pub const fn sort_column(self) -> Option<SortColumn> {
        match self {
            Self::Id => Some(SortColumn::Id),
            Self::ProductName => Some(SortColumn::ProductName),
            Self::CustomerName => Some(SortColumn::CustomerName),
            Self::Date => Some(SortColumn::Date),
            Self::Amount | Self::PaymentMode | Self::Status => None,
        }
    }
}

/// Column definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    /// Which record field the column shows.
    pub key: ColumnKey,
    /// Display label for the column header.
    pub label: String,
    /// Whether the column header toggles sorting.
    pub sortable: bool,
}

impl TableColumn {
    /// Create a new sortable column.
    ///
    /// Columns without a [`SortColumn`] stay non-sortable.
    #[must_use]
    pub fn sortable(key: ColumnKey, label: &str) -> Self {
        Self {
            key,
            label: label.to_string(),
            sortable: key.sort_column().is_some(),
        }
    }

    /// Create a new non-sortable column.
    #[must_use]
    pub fn new(key: ColumnKey, label: &str) -> Self {
        Self {
            key,
            label: label.to_string(),
            sortable: false,
        }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTableConfig {
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Title for empty state.
    pub empty_title: String,
    /// Description for empty state.
    pub empty_description: Option<String>,
    /// Page sizes offered in the footer.
    pub rows_per_page_options: Vec<usize>,
}

impl Default for DataTableConfig {
    fn default() -> Self {
        Self {
            columns: vec![],
            empty_title: "No items found".to_string(),
            empty_description: None,
            rows_per_page_options: PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

impl DataTableConfig {

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Set empty state configuration.
    #[must_use]
    pub fn empty_state(mut self, title: &str, description: Option<&str>) -> Self {
        self.empty_title = title.to_string();
        self.empty_description = description.map(ToString::to_string);
        self
    }

    /// Header labels, in column order.
    #[must_use]
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    /// Cell text for `record`, in column order.
    #[must_use]
    pub fn row(&self, record: &CustomerRecord) -> Vec<String> {
        self.columns.iter().map(|c| c.key.cell(record)).collect()
    }
}

/// Build the customers table configuration.
#[must_use]
pub fn customers_table_config() -> DataTableConfig {
    DataTableConfig::default()
        .column(TableColumn::sortable(ColumnKey::Id, "Tracking ID"))
        .column(TableColumn::sortable(ColumnKey::ProductName, "Product Name"))
        .column(TableColumn::sortable(ColumnKey::CustomerName, "Customer Name"))
        .column(TableColumn::sortable(ColumnKey::Date, "Date"))
        .column(TableColumn::new(ColumnKey::Amount, "Amount"))
        .column(TableColumn::new(ColumnKey::PaymentMode, "Payment Mode"))
        .column(TableColumn::new(ColumnKey::Status, "Status"))
        .empty_state(
            "No customers found",
            Some("Try a different name or tracking id"),
        )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use order_desk_core::{OrderStatus, PaymentMode, ProductName, RecordId};
    use rust_decimal::Decimal;

    use super::*;

    fn record() -> CustomerRecord {
        CustomerRecord {
            id: RecordId::new("42"),
            product_name: ProductName::TShirt,
            customer_name: "Priya".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 7, 9).unwrap(),
            amount: Decimal::new(199_900, 2),
            payment_mode: PaymentMode::BankTransfer,
            status: OrderStatus::Canceled,
        }
    }

    #[test]
    fn test_customers_table_layout() {
        let config = customers_table_config();

        assert_eq!(
            config.headers(),
            vec![
                "Tracking ID",
                "Product Name",
                "Customer Name",
                "Date",
                "Amount",
                "Payment Mode",
                "Status",
            ]
        );
        let sortable: Vec<ColumnKey> = config
            .columns
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.key)
            .collect();
        assert_eq!(
            sortable,
            vec![
                ColumnKey::Id,
                ColumnKey::ProductName,
                ColumnKey::CustomerName,
                ColumnKey::Date,
            ]
        );
        assert_eq!(config.rows_per_page_options, vec![5, 10, 25]);
    }

    #[test]
    fn test_row_cells() {
        let row = customers_table_config().row(&record());
        assert_eq!(
            row,
            vec![
                "42",
                "T-Shirt",
                "Priya",
                "2024-07-09",
                "₹1999",
                "Bank Transfer",
                "Canceled",
            ]
        );
    }

    #[test]
    fn test_amount_column_cannot_be_made_sortable() {
        assert!(!TableColumn::sortable(ColumnKey::Amount, "Amount").sortable);
    }

    #[test]
    fn test_empty_state_text() {
        let config = customers_table_config();
        assert_eq!(config.empty_title, "No customers found");
        assert_eq!(
            config.empty_description.as_deref(),
            Some("Try a different name or tracking id")
        );
        assert_eq!(DataTableConfig::default().empty_title, "No items found");
    }
}
