//! Add/Edit customer form state.
//!
//! One [`CustomerDraft`] backs both flows. The draft holds raw text as typed;
//! it is only turned into a [`CustomerRecord`] on submit. In edit mode the
//! target id is captured when the form is opened, so editing the id field
//! renames the record instead of retargeting the update.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use order_desk_core::{
    CustomerPatch, CustomerRecord, OrderStatus, PaymentMode, ProductName, RecordId,
};
use rust_decimal::Decimal;
use thiserror::Error;

/// Editable fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Id,
    ProductName,
    CustomerName,
    Date,
    Amount,
    PaymentMode,
    Status,
}

impl FormField {
    /// All fields, in form order.
    pub const ALL: [Self; 7] = [
        Self::Id,
        Self::ProductName,
        Self::CustomerName,
        Self::Date,
        Self::Amount,
        Self::PaymentMode,
        Self::Status,
    ];

    /// Input label shown next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "Tracking ID",
            Self::ProductName => "Product Name",
            Self::CustomerName => "Customer Name",
            Self::Date => "Date",
            Self::Amount => "Amount",
            Self::PaymentMode => "Payment Mode",
            Self::Status => "Status",
        }
    }

    /// Choices offered by select inputs, `None` for free-text inputs.
    #[must_use]
    pub fn options(self) -> Option<Vec<&'static str>> {
        match self {
            Self::ProductName => Some(ProductName::ALL.iter().map(|p| p.as_str()).collect()),
            Self::PaymentMode => Some(PaymentMode::ALL.iter().map(|p| p.as_str()).collect()),
            Self::Status => Some(OrderStatus::ALL.iter().map(|s| s.as_str()).collect()),
            Self::Id | Self::CustomerName | Self::Date | Self::Amount => None,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reasons a draft cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(FormField),

    #[error("{field} must be one of the listed options, got `{value}`")]
    InvalidChoice { field: FormField, value: String },

    #[error("date must be YYYY-MM-DD, got `{0}`")]
    InvalidDate(String),

    #[error("amount must be a non-negative number, got `{0}`")]
    InvalidAmount(String),

    #[error("a customer with id {0} already exists")]
    DuplicateId(RecordId),
}

/// Raw form input, one string per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    pub id: String,
    pub product_name: String,
    pub customer_name: String,
    pub date: String,
    pub amount: String,
    pub payment_mode: String,
    pub status: String,
}

impl Default for CustomerDraft {
    fn default() -> Self {
        Self {
            id: String::new(),
            product_name: String::new(),
            customer_name: String::new(),
            date: String::new(),
            amount: String::new(),
            payment_mode: String::new(),
            status: OrderStatus::default().as_str().to_string(),
        }
    }
}

impl From<&CustomerRecord> for CustomerDraft {
    fn from(record: &CustomerRecord) -> Self {
        Self {
            id: record.id.to_string(),
            product_name: record.product_name.as_str().to_string(),
            customer_name: record.customer_name.clone(),
            date: record.date.format("%Y-%m-%d").to_string(),
            amount: record.amount.normalize().to_string(),
            payment_mode: record.payment_mode.as_str().to_string(),
            status: record.status.as_str().to_string(),
        }
    }
}

impl CustomerDraft {
    /// Current text of `field`.
    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::ProductName => &self.product_name,
            FormField::CustomerName => &self.customer_name,
            FormField::Date => &self.date,
            FormField::Amount => &self.amount,
            FormField::PaymentMode => &self.payment_mode,
            FormField::Status => &self.status,
        }
    }

    /// Replace the text of `field`.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Id => &mut self.id,
            FormField::ProductName => &mut self.product_name,
            FormField::CustomerName => &mut self.customer_name,
            FormField::Date => &mut self.date,
            FormField::Amount => &mut self.amount,
            FormField::PaymentMode => &mut self.payment_mode,
            FormField::Status => &mut self.status,
        };
        *slot = value.into();
    }

    /// Validate the draft and build the record it describes.
    ///
    /// Every field except status is required. An empty status falls back to
    /// `Process`.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormError`] found, checking fields in form order.
    pub fn to_record(&self) -> Result<CustomerRecord, FormError> {
        let id = required(FormField::Id, &self.id)?;
        let product_name: ProductName = choice(FormField::ProductName, &self.product_name)?;
        let customer_name = required(FormField::CustomerName, &self.customer_name)?;

        let date = required(FormField::Date, &self.date)?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(date.to_string()))?;

        let amount = required(FormField::Amount, &self.amount)?;
        let amount = Decimal::from_str(amount)
            .or_else(|_| Decimal::from_scientific(amount))
            .ok()
            .filter(|amount| !amount.is_sign_negative())
            .ok_or_else(|| FormError::InvalidAmount(amount.to_string()))?;

        let payment_mode: PaymentMode = choice(FormField::PaymentMode, &self.payment_mode)?;
        let status = if self.status.trim().is_empty() {
            OrderStatus::default()
        } else {
            choice(FormField::Status, &self.status)?
        };

        Ok(CustomerRecord {
            id: RecordId::new(id),
            product_name,
            customer_name: customer_name.to_string(),
            date,
            amount,
            payment_mode,
            status,
        })
    }
}

fn required(field: FormField, value: &str) -> Result<&str, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(value)
    }
}

fn choice<T: FromStr>(field: FormField, value: &str) -> Result<T, FormError> {
    required(field, value)?
        .parse()
        .map_err(|_| FormError::InvalidChoice {
            field,
            value: value.to_string(),
        })
}

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    /// Editing the record whose id was `original_id` when the form opened.
    Edit { original_id: RecordId },
}

/// What a valid submission asks the server to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(CustomerRecord),
    Update { id: RecordId, patch: CustomerPatch },
}

/// The modal form: visibility, mode, and draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    open: bool,
    mode: FormMode,
    draft: CustomerDraft,
}

impl CustomerForm {
    /// Whether the form is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Current draft.
    #[must_use]
    pub const fn draft(&self) -> &CustomerDraft {
        &self.draft
    }

    /// Open an empty form for a new record.
    pub fn open_create(&mut self) {
        self.open = true;
        self.mode = FormMode::Create;
        self.draft = CustomerDraft::default();
    }

    /// Open the form pre-filled with `record`, targeting its current id.
    pub fn open_edit(&mut self, record: &CustomerRecord) {
        self.open = true;
        self.mode = FormMode::Edit {
            original_id: record.id.clone(),
        };
        self.draft = CustomerDraft::from(record);
    }

    /// Hide the form and reset it to an empty create form.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Replace the text of one draft field.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    /// Modal heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Customer",
            FormMode::Edit { .. } => "Edit Customer",
        }
    }

    /// Submit button text.
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Submit",
            FormMode::Edit { .. } => "Update",
        }
    }

    /// Validate the draft against the currently loaded records.
    ///
    /// Creating checks that no loaded record already has the draft's id.
    /// Editing sends every field, including the id, to the record that was
    /// opened.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] if the draft is invalid or the id is taken.
    pub fn prepare(&self, existing: &[CustomerRecord]) -> Result<Submission, FormError> {
        let record = self.draft.to_record()?;
        match &self.mode {
            FormMode::Create => {
                if existing.iter().any(|r| r.id == record.id) {
                    return Err(FormError::DuplicateId(record.id));
                }
                Ok(Submission::Create(record))
            }
            FormMode::Edit { original_id } => Ok(Submission::Update {
                id: original_id.clone(),
                patch: CustomerPatch::from(record),
            }),
        }
    }
}
