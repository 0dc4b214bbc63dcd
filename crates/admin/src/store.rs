//! JSON file record store.
//!
//! # Storage: one file, one JSON array
//!
//! The whole customer collection lives in a single pretty-printed JSON array.
//! It is read once at startup into an in-memory working set and rewritten in
//! full after every mutation. There is no indexing and no partial write; the
//! file is small and written rarely.
//!
//! # Writes
//!
//! Mutations go through [`RecordStore::write`], which hands out a
//! [`WriteGuard`] holding the store lock. The caller edits the working set and
//! calls [`WriteGuard::commit`] to persist it; the lock is held until the file
//! has been replaced, so each read-modify-persist sequence is atomic with
//! respect to other requests.
//!
//! A failed commit does not roll back the in-memory change. Dropping a guard
//! without committing keeps whatever was changed in memory only.

use std::ffi::OsString;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use order_desk_core::CustomerRecord;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, instrument};

/// Errors that can occur while loading or persisting the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of customer records.
    #[error("corrupt customers file {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be serialized.
    #[error("failed to serialize customers: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Writing the file failed.
    #[error("failed to write {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The canonical customer collection and the file backing it.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Mutex<Vec<CustomerRecord>>,
}

impl RecordStore {
    /// Load the store from `path`.
    ///
    /// A missing file (and any missing parent directory) is created holding an
    /// empty array.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read,
    /// [`StoreError::Corrupt`] if it does not parse, or
    /// [`StoreError::Persist`] if a missing file cannot be created.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let records = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Vec<CustomerRecord>>(&bytes).map_err(
                |source| StoreError::Corrupt {
                    path: path.clone(),
                    source,
                },
            )?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .map_err(|source| StoreError::Persist {
                            path: parent.to_path_buf(),
                            source,
                        })?;
                }
                persist(&path, &[]).await?;
                info!("Customers file created");
                Vec::new()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        info!(count = records.len(), "Customers loaded");

        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of the current working set.
    pub async fn snapshot(&self) -> Vec<CustomerRecord> {
        self.records.lock().await.clone()
    }

    /// Lock the working set for a read-modify-persist sequence.
    pub async fn write(&self) -> WriteGuard<'_> {
        WriteGuard {
            path: &self.path,
            records: self.records.lock().await,
        }
    }
}

/// Exclusive access to the working set, see [`RecordStore::write`].
#[derive(Debug)]
pub struct WriteGuard<'a> {
    path: &'a Path,
    records: MutexGuard<'a, Vec<CustomerRecord>>,
}

impl WriteGuard<'_> {
    /// Persist the working set and release the lock.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persist`] if the file cannot be replaced. The
    /// in-memory state is kept either way.
    pub async fn commit(self) -> Result<(), StoreError> {
        persist(self.path, &self.records).await
    }
}

impl Deref for WriteGuard<'_> {
    type Target = Vec<CustomerRecord>;

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl DerefMut for WriteGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.records
    }
}

/// Replace the file at `path` with `records`, pretty-printed.
///
/// Writes a sibling `.tmp` file first and renames it over the target.
async fn persist(path: &Path, records: &[CustomerRecord]) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(records).map_err(StoreError::Serialize)?;
    let tmp = temp_path(path);

    tokio::fs::write(&tmp, &json)
        .await
        .map_err(|source| StoreError::Persist {
            path: tmp.clone(),
            source,
        })?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|source| StoreError::Persist {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(count = records.len(), bytes = json.len(), "Customers persisted");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("customers.json"), OsString::from);
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::NaiveDate;
    use order_desk_core::{OrderStatus, PaymentMode, ProductName, RecordId};
    use rust_decimal::Decimal;

    use super::*;

    fn record(id: &str, name: &str) -> CustomerRecord {
        CustomerRecord {
            id: RecordId::new(id),
            product_name: ProductName::Laptop,
            customer_name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            amount: Decimal::new(129_999, 2),
            payment_mode: PaymentMode::BankTransfer,
            status: OrderStatus::Delivered,
        }
    }

    #[tokio::test]
    async fn test_load_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.json");

        let store = RecordStore::load(&path).await.unwrap();

        assert!(store.snapshot().await.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        assert_eq!(store.path(), path);
    }

    #[tokio::test]
    async fn test_load_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("customers.json");

        RecordStore::load(&path).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_load_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = RecordStore::load(&path).await.unwrap_err();

        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert!(err.to_string().contains("customers.json"));
    }

    #[tokio::test]
    async fn test_load_rejects_wrong_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.json");
        std::fs::write(&path, r#"[{"id": "1"}]"#).unwrap();

        let err = RecordStore::load(&path).await.unwrap_err();

        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn test_commit_then_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.json");
        let store = RecordStore::load(&path).await.unwrap();

        let mut guard = store.write().await;
        guard.push(record("1", "Alex"));
        guard.push(record("2", "Sam"));
        guard.commit().await.unwrap();
        let before = store.snapshot().await;

        let reloaded = RecordStore::load(&path).await.unwrap();

        assert_eq!(reloaded.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_high_precision_amount_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.json");
        let store = RecordStore::load(&path).await.unwrap();

        let mut guard = store.write().await;
        guard.push(CustomerRecord {
            amount: "12345678901234567.89".parse().unwrap(),
            ..record("1", "Alex")
        });
        guard.commit().await.unwrap();
        let before = store.snapshot().await;

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"amount\": 12345678901234567.89"));

        let reloaded = RecordStore::load(&path).await.unwrap();
        assert_eq!(reloaded.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_commit_writes_pretty_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.json");
        let store = RecordStore::load(&path).await.unwrap();

        let mut guard = store.write().await;
        guard.push(record("1", "Alex"));
        guard.commit().await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\": \"1\""));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["customerName"], "Alex");
        assert!(!temp_path(&path).exists());
    }

    #[tokio::test]
    async fn test_failed_commit_keeps_memory_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.json");
        let store = RecordStore::load(&path).await.unwrap();

        // A directory in place of the file makes the final rename fail.
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let mut guard = store.write().await;
        guard.push(record("1", "Alex"));
        let err = guard.commit().await.unwrap_err();

        assert!(matches!(err, StoreError::Persist { .. }));
        assert_eq!(store.snapshot().await.len(), 1);
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let tmp = temp_path(Path::new("/var/lib/order-desk/customers.json"));
        assert_eq!(tmp, Path::new("/var/lib/order-desk/customers.json.tmp"));
    }
}
