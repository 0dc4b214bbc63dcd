//! Free-text search over the customer list.
//!
//! The query is trimmed and lower-cased. A query that parses entirely as a
//! (finite) number is matched as a substring of the record id; anything else
//! is matched case-insensitively as a substring of the customer name. The
//! empty query matches everything.
//!
//! Only decimal notation counts as numeric: `"infinity"`, `"nan"` and hex
//! literals such as `"0x1f"` are searched as names, since no tracking id
//! could contain them as a number.

use order_desk_core::CustomerRecord;

/// A normalized search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    numeric: bool,
}

impl SearchQuery {
    /// Normalize raw user input.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim().to_lowercase();
        let numeric = !text.is_empty() && text.parse::<f64>().is_ok_and(f64::is_finite);
        Self { text, numeric }
    }

    /// The normalized query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` for the empty query.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `true` if the query is matched against ids.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.numeric
    }

    /// Whether `record` matches this query.
    #[must_use]
    pub fn matches(&self, record: &CustomerRecord) -> bool {
        if self.text.is_empty() {
            true
        } else if self.numeric {
            record.id.as_str().contains(&self.text)
        } else {
            record.customer_name.to_lowercase().contains(&self.text)
        }
    }

    /// The records of `records` matching this query, in their original order.
    #[must_use]
    pub fn filter(&self, records: &[CustomerRecord]) -> Vec<CustomerRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}
