//! Customer order CRUD service.
//!
//! Every mutating operation persists the full collection before it returns.
//! Lookups are a linear scan on id equality; when ids are duplicated the first
//! match wins. Id uniqueness is not enforced here.

use order_desk_core::{CustomerPatch, CustomerRecord, RecordId};
use tracing::{info, instrument, warn};

use crate::error::AppError;
use crate::store::RecordStore;

/// CRUD operations over the [`RecordStore`].
#[derive(Debug)]
pub struct CustomerService {
    store: RecordStore,
}

impl CustomerService {
    /// Create a new customer service owning `store`.
    #[must_use]
    pub const fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// All records, unfiltered.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Vec<CustomerRecord> {
        self.store.snapshot().await
    }

    /// Append `record` and persist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if persisting fails. The record stays in
    /// memory in that case.
    #[instrument(skip(self, record), fields(customer_id = %record.id))]
    pub async fn create(&self, record: CustomerRecord) -> Result<CustomerRecord, AppError> {
        let mut records = self.store.write().await;
        records.push(record.clone());
        records.commit().await?;

        info!("Customer created");
        Ok(record)
    }

    /// Shallow-merge `patch` over the first record with id `id` and persist.
    ///
    /// The record is located by `id`, not by the id in the patch; a patch
    /// carrying a different id renames the record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CustomerNotFound`] if no record has id `id`, or
    /// [`AppError::Store`] if persisting fails.
    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: &RecordId,
        patch: CustomerPatch,
    ) -> Result<CustomerRecord, AppError> {
        let mut records = self.store.write().await;
        let Some(record) = records.iter_mut().find(|r| r.id == *id) else {
            warn!("Customer not found for update");
            return Err(AppError::CustomerNotFound(id.clone()));
        };

        patch.apply(record);
        let merged = record.clone();
        records.commit().await?;

        info!("Customer updated");
        Ok(merged)
    }

    /// Remove the first record with id `id` and persist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CustomerNotFound`] if no record has id `id`, or
    /// [`AppError::Store`] if persisting fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &RecordId) -> Result<(), AppError> {
        let mut records = self.store.write().await;
        let Some(index) = records.iter().position(|r| r.id == *id) else {
            warn!("Customer not found for delete");
            return Err(AppError::CustomerNotFound(id.clone()));
        };

        records.remove(index);
        records.commit().await?;

        info!("Customer deleted");
        Ok(())
    }
}
