//! Record types flowing through ingestion.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The three canonical participant fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    FirstName,
    LastName,
    DateOfBirth,
}

impl Field {
    /// All fields in canonical (positional fallback) order.
    pub const ALL: [Field; 3] = [Field::FirstName, Field::LastName, Field::DateOfBirth];

    /// Canonical field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "FirstName",
            Self::LastName => "LastName",
            Self::DateOfBirth => "DateOfBirth",
        }
    }

    /// Position of the field in [`Field::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::DateOfBirth => 2,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name given to column `idx` when the source has no header.
pub(crate) fn positional_name(idx: usize) -> String {
    format!("column_{}", idx + 1)
}

/// A row projected onto the canonical schema, before date normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CanonicalRecord {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
}

impl CanonicalRecord {
    /// Creates a record, trimming every value.
    pub fn new(
        first_name: impl AsRef<str>,
        last_name: impl AsRef<str>,
        date_of_birth: impl AsRef<str>,
    ) -> Self {
        Self {
            first_name: first_name.as_ref().trim().to_string(),
            last_name: last_name.as_ref().trim().to_string(),
            date_of_birth: date_of_birth.as_ref().trim().to_string(),
        }
    }

    /// Value of a canonical field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::DateOfBirth => &self.date_of_birth,
        }
    }
}

/// A record whose every field passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedRecord {
    /// 1-based source row, counting the header line when present.
    #[serde(rename = "Row")]
    pub row: usize,
    #[serde(flatten)]
    pub record: CanonicalRecord,
    /// Normalized date of birth.
    #[serde(rename = "DateISO")]
    pub date_iso: NaiveDate,
}
