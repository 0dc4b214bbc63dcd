//! Column sorting for the customers table.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use order_desk_core::{CustomerRecord, RecordId};
use thiserror::Error;
use tracing::warn;

/// Root-locale collator at tertiary strength, used for every text column.
static COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(CollatorPreferences::default(), options)
        .inspect_err(|e| warn!(error = %e, "Collation data unavailable, sorting text by code point"))
        .ok()
});

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Id,
    ProductName,
    CustomerName,
    Date,
}

impl SortColumn {
    /// All sortable columns, in table order.
    pub const ALL: [Self; 4] = [Self::Id, Self::ProductName, Self::CustomerName, Self::Date];

    /// Wire name of the column (the record field it sorts on).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::ProductName => "productName",
            Self::CustomerName => "customerName",
            Self::Date => "date",
        }
    }

    /// Ascending comparison of two records on this column.
    #[must_use]
    pub fn compare(self, a: &CustomerRecord, b: &CustomerRecord) -> Ordering {
        match self {
            Self::Id => compare_ids(&a.id, &b.id),
            Self::Date => a.date.cmp(&b.date),
            Self::ProductName => compare_text(a.product_name.as_str(), b.product_name.as_str()),
            Self::CustomerName => compare_text(&a.customer_name, &b.customer_name),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized column name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort column: {0}")]
pub struct UnknownColumn(pub String);

impl FromStr for SortColumn {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "id" => Ok(Self::Id),
            "productname" | "product" => Ok(Self::ProductName),
            "customername" | "customer" | "name" => Ok(Self::CustomerName),
            "date" => Ok(Self::Date),
            _ => Err(UnknownColumn(s.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The other direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// The column and direction the table is currently sorted by.
///
/// A fresh state has no column; the table then shows records in filter order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl SortState {
    /// The state after the header of `column` is clicked.
    ///
    /// Reselecting the current column flips the direction; any other column
    /// starts ascending.
    #[must_use]
    pub fn toggled(self, column: SortColumn) -> Self {
        let direction = if self.column == Some(column) {
            self.direction.flipped()
        } else {
            SortDirection::Ascending
        };
        Self {
            column: Some(column),
            direction,
        }
    }

    /// Sort `records` in place. Does nothing when no column is selected.
    ///
    /// Descending order is the exact reverse of ascending order, ties included.
    pub fn apply(&self, records: &mut [CustomerRecord]) {
        let Some(column) = self.column else {
            return;
        };
        records.sort_by(|a, b| column.compare(a, b));
        if self.direction == SortDirection::Descending {
            records.reverse();
        }
    }
}

/// Ids that both parse as numbers compare numerically, numeric ids sort
/// before other ids, and the rest compare as plain strings.
fn compare_ids(a: &RecordId, b: &RecordId) -> Ordering {
    let parse = |id: &RecordId| id.as_str().trim().parse::<f64>().ok().filter(|n| n.is_finite());
    match (parse(a), parse(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Collation order: accents and case only break ties, and lower case comes
/// ahead of upper case.
fn compare_text(a: &str, b: &str) -> Ordering {
    COLLATOR.as_ref().map_or_else(
        || a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a)),
        |collator| collator.compare(a, b).then_with(|| a.cmp(b)),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use order_desk_core::{OrderStatus, PaymentMode, ProductName};
    use rust_decimal::Decimal;

    use super::*;

    fn record(id: &str, name: &str, product: ProductName, date: (i32, u32, u32)) -> CustomerRecord {
        CustomerRecord {
            id: RecordId::new(id),
            product_name: product,
            customer_name: name.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            amount: Decimal::ZERO,
            payment_mode: PaymentMode::CashOnDelivery,
            status: OrderStatus::Delivered,
        }
    }

    fn ids(records: &[CustomerRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn sample() -> Vec<CustomerRecord> {
        vec![
            record("10", "bob", ProductName::Laptop, (2024, 3, 1)),
            record("2", "Alice", ProductName::Hat, (2023, 12, 31)),
            record("1", "carol", ProductName::TShirt, (2024, 3, 1)),
            record("x7", "Bob", ProductName::Bag, (2022, 6, 15)),
        ]
    }

    #[test]
    fn test_toggle_same_column_flips_direction() {
        let state = SortState::default().toggled(SortColumn::Date);
        assert_eq!(state.direction, SortDirection::Ascending);

        let state = state.toggled(SortColumn::Date);
        assert_eq!(state.direction, SortDirection::Descending);

        let state = state.toggled(SortColumn::Date);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_new_column_starts_ascending() {
        let state = SortState::default()
            .toggled(SortColumn::Id)
            .toggled(SortColumn::Id)
            .toggled(SortColumn::CustomerName);

        assert_eq!(state.column, Some(SortColumn::CustomerName));
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_date_toggle_gives_exact_reverse() {
        let mut ascending = sample();
        let state = SortState::default().toggled(SortColumn::Date);
        state.apply(&mut ascending);
        assert_eq!(ids(&ascending), vec!["x7", "2", "10", "1"]);

        let mut descending = ascending.clone();
        state.toggled(SortColumn::Date).apply(&mut descending);

        let mut reversed = ascending;
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn test_ids_sort_numerically() {
        let mut records = sample();
        SortState::default().toggled(SortColumn::Id).apply(&mut records);
        assert_eq!(ids(&records), vec!["1", "2", "10", "x7"]);
    }

    #[test]
    fn test_names_sort_case_insensitively() {
        let mut records = sample();
        SortState::default()
            .toggled(SortColumn::CustomerName)
            .apply(&mut records);
        assert_eq!(ids(&records), vec!["2", "10", "x7", "1"]);
    }

    #[test]
    fn test_accented_names_sort_with_their_base_letter() {
        let mut records = vec![
            record("1", "Zoe", ProductName::Hat, (2024, 1, 1)),
            record("2", "Émile", ProductName::Hat, (2024, 1, 1)),
            record("3", "Anna", ProductName::Hat, (2024, 1, 1)),
            record("4", "Emile", ProductName::Hat, (2024, 1, 1)),
        ];
        SortState::default()
            .toggled(SortColumn::CustomerName)
            .apply(&mut records);

        let names: Vec<&str> = records.iter().map(|r| r.customer_name.as_str()).collect();
        assert_eq!(names, vec!["Anna", "Emile", "Émile", "Zoe"]);
    }

    #[test]
    fn test_products_sort_by_display_name() {
        let mut records = sample();
        SortState::default()
            .toggled(SortColumn::ProductName)
            .apply(&mut records);
        assert_eq!(ids(&records), vec!["x7", "2", "10", "1"]);
    }

    #[test]
    fn test_no_column_keeps_order() {
        let mut records = sample();
        SortState::default().apply(&mut records);
        assert_eq!(records, sample());
    }

    #[test]
    fn test_column_from_str() {
        assert_eq!("date".parse::<SortColumn>().unwrap(), SortColumn::Date);
        assert_eq!(
            "customer_name".parse::<SortColumn>().unwrap(),
            SortColumn::CustomerName
        );
        assert_eq!(
            "productName".parse::<SortColumn>().unwrap(),
            SortColumn::ProductName
        );
        assert!("amount".parse::<SortColumn>().is_err());
        for column in SortColumn::ALL {
            assert_eq!(column.to_string().parse::<SortColumn>().unwrap(), column);
        }
    }
}
