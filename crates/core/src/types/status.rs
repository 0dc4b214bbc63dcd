//! Enumerated fields of a customer order.
//!
//! Each enum serializes to the exact label the dashboard shows (and that is
//! stored in the JSON file), e.g. `"Cash on Delivery"` or `"T-Shirt"`.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an enumerated field from a string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {value}")]
pub struct UnknownVariant {
    /// Name of the field being parsed.
    pub field: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Order processing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Process,
    Delivered,
    Canceled,
}

impl OrderStatus {
    /// All statuses, in the order the status picker lists them.
    pub const ALL: [Self; 3] = [Self::Process, Self::Delivered, Self::Canceled];

    /// Display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Process => "Process",
            Self::Delivered => "Delivered",
            Self::Canceled => "Canceled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                field: "status",
                value: s.to_owned(),
            })
    }
}

/// How the customer pays for the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMode {
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
}

impl PaymentMode {
    /// All payment modes.
    pub const ALL: [Self; 2] = [Self::BankTransfer, Self::CashOnDelivery];

    /// Display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BankTransfer => "Bank Transfer",
            Self::CashOnDelivery => "Cash on Delivery",
        }
    }
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| {
                mode.as_str().eq_ignore_ascii_case(wanted)
                    || format!("{mode:?}").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownVariant {
                field: "payment mode",
                value: s.to_owned(),
            })
    }
}

/// Product catalogue offered in the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductName {
    Hat,
    Laptop,
    Phone,
    Bag,
    Headset,
    Mouse,
    Clock,
    #[serde(rename = "T-Shirt")]
    TShirt,
    Monitor,
    Keyboard,
}

impl ProductName {
    /// All products, in catalogue order.
    pub const ALL: [Self; 10] = [
        Self::Hat,
        Self::Laptop,
        Self::Phone,
        Self::Bag,
        Self::Headset,
        Self::Mouse,
        Self::Clock,
        Self::TShirt,
        Self::Monitor,
        Self::Keyboard,
    ];

    /// Display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hat => "Hat",
            Self::Laptop => "Laptop",
            Self::Phone => "Phone",
            Self::Bag => "Bag",
            Self::Headset => "Headset",
            Self::Mouse => "Mouse",
            Self::Clock => "Clock",
            Self::TShirt => "T-Shirt",
            Self::Monitor => "Monitor",
            Self::Keyboard => "Keyboard",
        }
    }
}

impl std::fmt::Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProductName {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|product| product.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                field: "product name",
                value: s.to_owned(),
            })
    }
}
