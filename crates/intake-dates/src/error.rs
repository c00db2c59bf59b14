//! Error types for date normalization.

use thiserror::Error;

/// Errors that can occur when normalizing a date string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The value was blank after trimming.
    #[error("date value is empty")]
    EmptyInput,

    /// No parsing strategy produced a valid calendar date.
    #[error("unrecognised date format: '{input}'")]
    InvalidFormat { input: String },
}

/// Result type for date normalization.
pub type Result<T> = std::result::Result<T, DateError>;
