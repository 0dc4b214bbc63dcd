//! The customers dashboard view-model.
//!
//! [`CustomerDashboard`] owns a local copy of the server's list and derives
//! everything the table shows from it: the filtered rows, their sort order,
//! and the visible page. Only loads and mutations talk to the server.
//!
//! Failed requests are logged and returned; they never leave the view-model
//! half-updated.

use order_desk_core::{CustomerRecord, RecordId};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::client::{ClientError, CustomerApi};
use crate::form::{CustomerForm, FormError, FormField, Submission};
use crate::pagination::Pagination;
use crate::search::SearchQuery;
use crate::sort::{SortColumn, SortState};

/// Errors surfaced by dashboard actions.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid form: {0}")]
    Form(#[from] FormError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("no loaded customer has id {0}")]
    UnknownCustomer(RecordId),
}

/// Client-side state of the customers page.
#[derive(Debug)]
pub struct CustomerDashboard<A> {
    api: A,
    customers: Vec<CustomerRecord>,
    filtered: Vec<CustomerRecord>,
    query: SearchQuery,
    sort: SortState,
    pagination: Pagination,
    form: CustomerForm,
}

impl<A: CustomerApi> CustomerDashboard<A> {
    /// Create an empty dashboard. Call [`load`](Self::load) to fetch records.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            customers: Vec::new(),
            filtered: Vec::new(),
            query: SearchQuery::default(),
            sort: SortState::default(),
            pagination: Pagination::default(),
            form: CustomerForm::default(),
        }
    }

    /// The API the dashboard talks to.
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Every loaded record, in server order.
    #[must_use]
    pub fn customers(&self) -> &[CustomerRecord] {
        &self.customers
    }

    /// Records matching the search, in display order.
    #[must_use]
    pub fn filtered(&self) -> &[CustomerRecord] {
        &self.filtered
    }

    /// The records on the current page.
    #[must_use]
    pub fn page_rows(&self) -> &[CustomerRecord] {
        self.pagination.window(&self.filtered)
    }

    /// Current search query.
    #[must_use]
    pub const fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Current sort column and direction.
    #[must_use]
    pub const fn sort(&self) -> SortState {
        self.sort
    }

    /// Current page and page size.
    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// The add/edit form.
    #[must_use]
    pub const fn form(&self) -> &CustomerForm {
        &self.form
    }

    /// Fetch the full list from the server and re-derive the table.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Client`] if the request fails; the previous
    /// list is kept.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), DashboardError> {
        match self.api.list().await {
            Ok(customers) => {
                debug!(count = customers.len(), "Loaded customers");
                self.customers = customers;
                self.refilter();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch customers");
                Err(e.into())
            }
        }
    }

    /// Replace the search query and re-filter.
    pub fn set_query(&mut self, raw: &str) {
        self.query = SearchQuery::parse(raw);
        self.refilter();
    }

    /// Recompute the filtered rows from the loaded list and the query.
    ///
    /// The result is in server order: any previous sort has to be applied
    /// again by the user.
    fn refilter(&mut self) {
        self.filtered = self.query.filter(&self.customers);
    }

    /// Handle a click on the header of `column`.
    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort = self.sort.toggled(column);
        self.sort.apply(&mut self.filtered);
    }

    /// Jump to a zero-based page.
    pub const fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    /// Change the page size, returning to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
    }

    /// Open an empty add form.
    pub fn open_create(&mut self) {
        self.form.open_create();
    }

    /// Open the edit form for the loaded record with id `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::UnknownCustomer`] and leaves the form closed
    /// if no loaded record has that id.
    pub fn open_edit(&mut self, id: &RecordId) -> Result<(), DashboardError> {
        let Some(record) = self.customers.iter().find(|r| &r.id == id) else {
            warn!(customer_id = %id, "Customer not found for editing");
            return Err(DashboardError::UnknownCustomer(id.clone()));
        };
        self.form.open_edit(record);
        Ok(())
    }

    /// Close the form, discarding the draft.
    pub fn close_form(&mut self) {
        self.form.close();
    }

    /// Edit one field of the draft.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Submit the form: create or update on the server, then reload.
    ///
    /// On success the form is closed. On failure the form stays open with its
    /// draft intact.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Form`] if the draft is invalid or the id is
    /// already taken, [`DashboardError::Client`] if a request fails.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<(), DashboardError> {
        let submission = self.form.prepare(&self.customers).inspect_err(|e| {
            warn!(error = %e, "Form rejected");
        })?;

        let result = match &submission {
            Submission::Create(record) => self.api.create(record).await.map(|_| ()),
            Submission::Update { id, patch } => self.api.update(id, patch).await.map(|_| ()),
        };
        if let Err(e) = result {
            warn!(error = %e, "Failed to save customer");
            return Err(e.into());
        }

        match submission {
            Submission::Create(record) => info!(customer_id = %record.id, "Customer created"),
            Submission::Update { id, .. } => info!(customer_id = %id, "Customer updated"),
        }
        self.form.close();
        self.load().await
    }

    /// Delete `id` on the server, then drop the first local record with that
    /// id without re-fetching.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Client`] if the request fails; the local list
    /// is left untouched.
    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: &RecordId) -> Result<(), DashboardError> {
        if let Err(e) = self.api.delete(id).await {
            warn!(error = %e, "Failed to delete customer");
            return Err(e.into());
        }

        if let Some(index) = self.customers.iter().position(|r| &r.id == id) {
            self.customers.remove(index);
        }
        info!(customer_id = %id, "Customer deleted");
        self.refilter();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Mutex;

    use chrono::NaiveDate;
    use order_desk_core::{
        CustomerNotFound, CustomerPatch, OrderStatus, PaymentMode, ProductName,
    };
    use rust_decimal::Decimal;

    use crate::sort::SortDirection;

    use super::*;

    /// In-memory stand-in for the admin API.
    #[derive(Default)]
    struct FakeApi {
        records: Mutex<Vec<CustomerRecord>>,
        offline: Mutex<bool>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn with(records: Vec<CustomerRecord>) -> Self {
            Self {
                records: Mutex::new(records),
                ..Self::default()
            }
        }

        fn go_offline(&self) {
            *self.offline.lock().unwrap() = true;
        }

        fn call(&self, name: String) -> Result<(), ClientError> {
            self.calls.lock().unwrap().push(name);
            if *self.offline.lock().unwrap() {
                return Err(ClientError::Status {
                    status: 500,
                    body: "Internal Server Error".to_string(),
                });
            }
            Ok(())
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn stored(&self) -> Vec<CustomerRecord> {
            self.records.lock().unwrap().clone()
        }
    }

    impl CustomerApi for FakeApi {
        async fn list(&self) -> Result<Vec<CustomerRecord>, ClientError> {
            self.call("list".to_string())?;
            Ok(self.stored())
        }

        async fn create(&self, record: &CustomerRecord) -> Result<CustomerRecord, ClientError> {
            self.call(format!("create {}", record.id))?;
            self.records.lock().unwrap().push(record.clone());
            Ok(record.clone())
        }

        async fn update(
            &self,
            id: &RecordId,
            patch: &CustomerPatch,
        ) -> Result<CustomerRecord, ClientError> {
            self.call(format!("update {id}"))?;
            let mut records = self.records.lock().unwrap();
            let record = records
                .iter_mut()
                .find(|r| &r.id == id)
                .ok_or_else(|| ClientError::NotFound(CustomerNotFound::new(id.clone())))?;
            patch.clone().apply(record);
            Ok(record.clone())
        }

        async fn delete(&self, id: &RecordId) -> Result<(), ClientError> {
            self.call(format!("delete {id}"))?;
            let mut records = self.records.lock().unwrap();
            let index = records
                .iter()
                .position(|r| &r.id == id)
                .ok_or_else(|| ClientError::NotFound(CustomerNotFound::new(id.clone())))?;
            records.remove(index);
            Ok(())
        }
    }

    fn record(id: &str, name: &str, day: u32) -> CustomerRecord {
        CustomerRecord {
            id: RecordId::new(id),
            product_name: ProductName::Mouse,
            customer_name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            amount: Decimal::new(25, 0),
            payment_mode: PaymentMode::BankTransfer,
            status: OrderStatus::Process,
        }
    }

    fn ids(records: &[CustomerRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    async fn loaded(records: Vec<CustomerRecord>) -> CustomerDashboard<FakeApi> {
        let mut dashboard = CustomerDashboard::new(FakeApi::with(records));
        dashboard.load().await.unwrap();
        dashboard
    }

    fn fill_form(dashboard: &mut CustomerDashboard<FakeApi>, id: &str, name: &str) {
        dashboard.set_field(FormField::Id, id);
        dashboard.set_field(FormField::ProductName, "Clock");
        dashboard.set_field(FormField::CustomerName, name);
        dashboard.set_field(FormField::Date, "2024-06-01");
        dashboard.set_field(FormField::Amount, "12.50");
        dashboard.set_field(FormField::PaymentMode, "Bank Transfer");
    }

    #[tokio::test]
    async fn test_load_shows_everything() {
        let dashboard = loaded(vec![record("1", "Ann", 1), record("2", "Ben", 2)]).await;

        assert_eq!(ids(dashboard.customers()), vec!["1", "2"]);
        assert_eq!(ids(dashboard.filtered()), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_numeric_search_matches_ids() {
        let mut dashboard = loaded(vec![
            record("5", "Sam", 1),
            record("15", "Jo", 2),
            record("7", "Alex", 3),
        ])
        .await;

        dashboard.set_query("5");

        assert_eq!(ids(dashboard.filtered()), vec!["5", "15"]);
    }

    #[tokio::test]
    async fn test_refilter_drops_sort_order() {
        let mut dashboard = loaded(vec![
            record("1", "Cy", 3),
            record("2", "Al", 1),
            record("3", "Bo", 2),
        ])
        .await;

        dashboard.sort_by(SortColumn::Date);
        assert_eq!(ids(dashboard.filtered()), vec!["2", "3", "1"]);

        dashboard.set_query("");
        assert_eq!(ids(dashboard.filtered()), vec!["1", "2", "3"]);
        assert_eq!(dashboard.sort().column, Some(SortColumn::Date));
    }

    #[tokio::test]
    async fn test_sort_toggle_reverses() {
        let mut dashboard = loaded(vec![
            record("1", "Cy", 3),
            record("2", "Al", 1),
            record("3", "Bo", 2),
        ])
        .await;

        dashboard.sort_by(SortColumn::CustomerName);
        assert_eq!(ids(dashboard.filtered()), vec!["2", "3", "1"]);

        dashboard.sort_by(SortColumn::CustomerName);
        assert_eq!(dashboard.sort().direction, SortDirection::Descending);
        assert_eq!(ids(dashboard.filtered()), vec!["1", "3", "2"]);
    }

    #[tokio::test]
    async fn test_pagination_over_filtered_rows() {
        let records = (1..=12).map(|n| record(&n.to_string(), "Kim", 1)).collect();
        let mut dashboard = loaded(records).await;

        dashboard.set_page(2);
        assert_eq!(ids(dashboard.page_rows()), vec!["11", "12"]);

        dashboard.set_page_size(10);
        assert_eq!(dashboard.pagination().page(), 0);
        assert_eq!(dashboard.page_rows().len(), 10);
    }

    #[tokio::test]
    async fn test_create_submits_and_reloads() {
        let mut dashboard = loaded(vec![record("1", "Ann", 1)]).await;

        dashboard.open_create();
        fill_form(&mut dashboard, "2", "Ben");
        dashboard.submit().await.unwrap();

        assert!(!dashboard.form().is_open());
        assert_eq!(ids(dashboard.customers()), vec!["1", "2"]);
        assert_eq!(dashboard.customers()[1].amount, Decimal::new(1250, 2));
        assert_eq!(dashboard.api().calls(), vec!["list", "create 2", "list"]);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_without_request() {
        let mut dashboard = loaded(vec![record("1", "Ann", 1)]).await;

        dashboard.open_create();
        fill_form(&mut dashboard, "1", "Impostor");
        let err = dashboard.submit().await.unwrap_err();

        assert!(matches!(err, DashboardError::Form(FormError::DuplicateId(_))));
        assert!(dashboard.form().is_open());
        assert_eq!(dashboard.api().calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn test_edit_targets_opened_record() {
        let mut dashboard = loaded(vec![record("1", "Ann", 1), record("2", "Ben", 2)]).await;

        dashboard.open_edit(&RecordId::new("1")).unwrap();
        dashboard.set_field(FormField::Id, "10");
        dashboard.set_field(FormField::Status, "Delivered");
        dashboard.submit().await.unwrap();

        assert_eq!(dashboard.api().calls()[1], "update 1");
        let stored = dashboard.api().stored();
        assert_eq!(ids(&stored), vec!["10", "2"]);
        assert_eq!(stored[0].status, OrderStatus::Delivered);
        assert_eq!(stored[0].customer_name, "Ann");
        assert_eq!(ids(dashboard.customers()), vec!["10", "2"]);
    }

    #[tokio::test]
    async fn test_open_edit_unknown_id() {
        let mut dashboard = loaded(vec![record("1", "Ann", 1)]).await;

        let err = dashboard.open_edit(&RecordId::new("9")).unwrap_err();

        assert!(matches!(err, DashboardError::UnknownCustomer(ref id) if id == "9"));
        assert!(!dashboard.form().is_open());
    }

    #[tokio::test]
    async fn test_delete_removes_first_local_match_without_reload() {
        let mut dashboard = loaded(vec![
            record("1", "Ann", 1),
            record("2", "Ben", 2),
            record("3", "Cy", 3),
        ])
        .await;
        dashboard.set_query("Ben");

        dashboard.delete(&RecordId::new("2")).await.unwrap();

        assert_eq!(ids(dashboard.customers()), vec!["1", "3"]);
        assert!(dashboard.filtered().is_empty());
        assert_eq!(dashboard.api().calls(), vec!["list", "delete 2"]);
    }

    #[tokio::test]
    async fn test_failed_requests_leave_state_unchanged() {
        let mut dashboard = loaded(vec![record("1", "Ann", 1)]).await;
        dashboard.api().go_offline();

        assert!(dashboard.load().await.is_err());
        assert!(dashboard.delete(&RecordId::new("1")).await.is_err());
        assert_eq!(ids(dashboard.customers()), vec!["1"]);

        dashboard.open_create();
        fill_form(&mut dashboard, "2", "Ben");
        let err = dashboard.submit().await.unwrap_err();
        assert!(matches!(err, DashboardError::Client(_)));
        assert!(dashboard.form().is_open());
        assert_eq!(dashboard.form().draft().id, "2");
    }
}
