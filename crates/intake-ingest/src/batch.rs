//! Batch ingestion: validate every row, then apply the commit policy.

use chrono::{Local, NaiveDate};
use intake_dates::DateOrder;
use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};
use crate::record::ValidatedRecord;
use crate::table::{LoadedTable, load_table};
use crate::validate::{RowError, validate_row};

/// Default cap for upload size (10 MB).
///
/// The core does not enforce it; callers pass it to [`check_upload_size`].
pub const MAX_UPLOAD_SIZE: u64 = 10 * 1024 * 1024;

/// What to commit when some rows fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommitPolicy {
    /// Any row error rejects the whole batch.
    #[default]
    AllOrNothing,
    /// Valid rows are committed, failed rows are reported alongside.
    ValidSubset,
}

impl CommitPolicy {
    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AllOrNothing => "all-or-nothing",
            Self::ValidSubset => "valid-subset",
        }
    }
}

/// Options for one ingestion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Day/month precedence for ambiguous dates.
    pub order: DateOrder,
    /// Commit policy when rows fail.
    pub policy: CommitPolicy,
    /// Reference date for the century correction; one instant for the whole batch.
    pub today: NaiveDate,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self::new(DateOrder::default(), CommitPolicy::default())
    }
}

impl IngestOptions {
    /// Options pinned to today's local date.
    #[must_use]
    pub fn new(order: DateOrder, policy: CommitPolicy) -> Self {
        Self {
            order,
            policy,
            today: Local::now().date_naive(),
        }
    }

    /// Set the reference date.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

/// Records to commit plus the rows that were rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub records: Vec<ValidatedRecord>,
    /// Always empty under [`CommitPolicy::AllOrNothing`].
    pub rejected: Vec<RowError>,
}

impl BatchOutcome {
    /// Returns true when some rows were committed and others rejected.
    pub fn is_partial(&self) -> bool {
        !self.records.is_empty() && !self.rejected.is_empty()
    }
}

/// Rejects uploads larger than `max_size` bytes.
///
/// # Errors
///
/// [`IngestError::UploadTooLarge`] when `size` exceeds `max_size`.
pub fn check_upload_size(size: u64, max_size: u64) -> Result<()> {
    if size > max_size {
        return Err(IngestError::UploadTooLarge { size, max_size });
    }
    Ok(())
}

/// Validates every row of `table` and applies the commit policy.
///
/// Each date is normalized once; the validated date is carried into the
/// committed record.
///
/// # Errors
///
/// - [`IngestError::NoValidRows`] when the table has no body rows.
/// - [`IngestError::RowValidationFailed`] when any row fails under
///   [`CommitPolicy::AllOrNothing`], or every row fails under
///   [`CommitPolicy::ValidSubset`].
pub fn ingest_table(table: &LoadedTable, options: &IngestOptions) -> Result<BatchOutcome> {
    let mut records = Vec::with_capacity(table.len());
    let mut rejected = Vec::new();

    for (index, record) in table.records.iter().enumerate() {
        let row = table.row_number(index);
        let validation = validate_row(record, options.order, options.today);
        match validation.date_iso {
            Some(date_iso) if validation.messages.is_empty() => records.push(ValidatedRecord {
                row,
                record: record.clone(),
                date_iso,
            }),
            _ => rejected.push(RowError {
                row,
                messages: validation.messages,
            }),
        }
    }

    if records.is_empty() && rejected.is_empty() {
        return Err(IngestError::NoValidRows);
    }

    match options.policy {
        CommitPolicy::AllOrNothing if !rejected.is_empty() => {
            Err(IngestError::RowValidationFailed { errors: rejected })
        }
        CommitPolicy::ValidSubset if records.is_empty() => {
            Err(IngestError::RowValidationFailed { errors: rejected })
        }
        _ => Ok(BatchOutcome { records, rejected }),
    }
}

/// Loads `bytes` as a roster and ingests it.
///
/// # Errors
///
/// Any error from [`load_table`] or [`ingest_table`].
pub fn ingest_bytes(bytes: &[u8], encoding: &str, options: &IngestOptions) -> Result<BatchOutcome> {
    let table = load_table(bytes, encoding)?;
    ingest_table(&table, options)
}
