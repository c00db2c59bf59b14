//! Error types for roster ingestion.

use thiserror::Error;

use crate::validate::RowError;

/// Errors that can occur while loading or ingesting a roster.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Table Errors ===
    /// The CSV reader rejected the input.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Neither header aliases nor positional columns supplied all three fields.
    #[error("expected FirstName, LastName and DateOfBirth columns, found {found} column(s)")]
    MissingColumns { found: usize },

    // === Batch Errors ===
    /// One or more rows failed validation.
    #[error("{} row(s) failed validation", .errors.len())]
    RowValidationFailed { errors: Vec<RowError> },

    /// The batch had no errors but also no rows.
    #[error("no participant rows to import")]
    NoValidRows,

    // === Upload Errors ===
    /// Upload exceeds the caller's size cap.
    #[error("upload is {size} bytes, exceeding the {max_size} byte limit")]
    UploadTooLarge { size: u64, max_size: u64 },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
