//! The customer order record and its partial-update counterpart.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::RecordId;
use super::status::{OrderStatus, PaymentMode, ProductName};

/// One customer order row, as stored in the JSON file and returned by the API.
///
/// Field names use camelCase on the wire. `amount` is written as a JSON number
/// carrying every digit of the decimal, and accepted as either a number or a
/// numeric string, since form inputs submit strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    /// Caller-supplied tracking id.
    pub id: RecordId,
    /// Ordered product.
    pub product_name: ProductName,
    /// Free-text customer name.
    pub customer_name: String,
    /// Order date.
    pub date: NaiveDate,
    /// Order amount.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    /// Payment mode.
    pub payment_mode: PaymentMode,
    /// Processing status, `Process` when omitted.
    #[serde(default)]
    pub status: OrderStatus,
}

/// A partial [`CustomerRecord`] used by the update operation.
///
/// Fields that are absent (or `null`) leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<ProductName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<PaymentMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl CustomerPatch {
    /// Returns `true` if the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.product_name.is_none()
            && self.customer_name.is_none()
            && self.date.is_none()
            && self.amount.is_none()
            && self.payment_mode.is_none()
            && self.status.is_none()
    }

    /// Shallow-merge this patch over `record`.
    ///
    /// Present fields overwrite, absent fields are retained. A present `id`
    /// rewrites the stored id.
    pub fn apply(self, record: &mut CustomerRecord) {
        if let Some(id) = self.id {
            record.id = id;
        }
        if let Some(product_name) = self.product_name {
            record.product_name = product_name;
        }
        if let Some(customer_name) = self.customer_name {
            record.customer_name = customer_name;
        }
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(amount) = self.amount {
            record.amount = amount;
        }
        if let Some(payment_mode) = self.payment_mode {
            record.payment_mode = payment_mode;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
    }
}

impl From<CustomerRecord> for CustomerPatch {
    fn from(record: CustomerRecord) -> Self {
        Self {
            id: Some(record.id),
            product_name: Some(record.product_name),
            customer_name: Some(record.customer_name),
            date: Some(record.date),
            amount: Some(record.amount),
            payment_mode: Some(record.payment_mode),
            status: Some(record.status),
        }
    }
}
