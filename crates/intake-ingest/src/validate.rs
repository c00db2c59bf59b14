//! Field-level validation of canonical records.

use std::fmt;

use chrono::NaiveDate;
use intake_dates::{DateOrder, normalize_date_on};
use serde::Serialize;

use crate::record::{CanonicalRecord, Field};

/// Outcome of validating one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowValidation {
    /// Normalized date of birth, when it parsed.
    pub date_iso: Option<NaiveDate>,
    /// Human-readable problems, in field order.
    pub messages: Vec<String>,
}

impl RowValidation {
    /// Returns true when the record produced no messages.
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty() && self.date_iso.is_some()
    }
}

/// Validation messages for one source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowError {
    /// 1-based source row, counting the header line when present.
    pub row: usize,
    pub messages: Vec<String>,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.messages.join("; "))
    }
}

/// Validates every field of `record`.
///
/// All checks run; a blank first name does not hide a blank last name. The
/// date is only normalized when present, and the normalizer's message is
/// reported verbatim.
pub fn validate_row(record: &CanonicalRecord, order: DateOrder, today: NaiveDate) -> RowValidation {
    let mut messages: Vec<String> = Field::ALL
        .into_iter()
        .filter(|field| record.get(*field).trim().is_empty())
        .map(|field| format!("{field} is required"))
        .collect();

    let mut date_iso = None;
    if !record.date_of_birth.trim().is_empty() {
        match normalize_date_on(&record.date_of_birth, order, today) {
            Ok(date) => date_iso = Some(date),
            Err(err) => messages.push(err.to_string()),
        }
    }

    RowValidation { date_iso, messages }
}
