//! Seed the admin server with customer orders from a YAML file.
//!
//! The file is a list of records using the same field names as the API:
//!
//! ```yaml
//! - id: "1"
//!   productName: Hat
//!   customerName: Asha
//!   date: 2024-01-01
//!   amount: 10
//!   paymentMode: Cash on Delivery
//!   status: Process
//! ```
//!
//! Records whose id is already on the server (or earlier in the file) are
//! skipped, since the server does not reject duplicate ids.

use std::collections::HashSet;
use std::path::Path;

use order_desk_core::{CustomerRecord, RecordId};
use order_desk_dashboard::CustomerApi;
use tracing::{error, info, warn};

use super::CliError;

/// Outcome of a seeding run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub inserted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Parse a YAML list of customer records.
///
/// # Errors
///
/// Returns [`CliError::Yaml`] if the document is not a list of valid records.
pub fn parse_records(content: &str) -> Result<Vec<CustomerRecord>, CliError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Create every record of `file_path` that is not already present.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the current
/// list cannot be fetched. Individual create failures are logged and counted.
pub async fn customers(api: impl CustomerApi, file_path: &Path) -> Result<SeedSummary, CliError> {
    info!(path = %file_path.display(), "Loading customers from file");

    let content = tokio::fs::read_to_string(file_path)
        .await
        .map_err(|source| CliError::Io {
            path: file_path.display().to_string(),
            source,
        })?;
    let records = parse_records(&content)?;
    info!(records = records.len(), "Parsed seed file");

    let summary = seed(&api, records).await?;

    info!("Seeding complete!");
    info!("  Inserted: {}", summary.inserted);
    info!("  Skipped (id already exists): {}", summary.skipped);
    if summary.failed > 0 {
        error!("  Failed: {}", summary.failed);
    }
    Ok(summary)
}

async fn seed(api: &impl CustomerApi, records: Vec<CustomerRecord>) -> Result<SeedSummary, CliError> {
    let mut known: HashSet<RecordId> = api.list().await?.into_iter().map(|r| r.id).collect();
    let mut summary = SeedSummary::default();

    for record in records {
        if known.contains(&record.id) {
            warn!(customer_id = %record.id, "Skipping existing id");
            summary.skipped += 1;
            continue;
        }
        match api.create(&record).await {
            Ok(created) => {
                known.insert(created.id);
                summary.inserted += 1;
            }
            Err(e) => {
                error!(customer_id = %record.id, error = %e, "Failed to create customer");
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}
