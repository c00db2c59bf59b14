//! Renderable results for the CLI commands.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use intake_dates::{DateOrder, normalize_date_on, to_iso};
use intake_ingest::{
    BatchOutcome, ColumnResolution, CommitPolicy, Decoding, IngestError, IngestOptions,
    LoadedTable, RowError, ValidatedRecord,
};
use serde::Serialize;

use crate::logging::redact_value;

/// Outcome of normalizing one command-line value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedValue {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_iso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NormalizedValue {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Normalizes each value independently.
pub fn normalize_values(
    values: &[String],
    order: DateOrder,
    today: NaiveDate,
) -> Vec<NormalizedValue> {
    values
        .iter()
        .map(|input| {
            let result = normalize_date_on(input, order, today);
            tracing::trace!(input = redact_value(input), ok = result.is_ok(), "normalized value");
            match result {
                Ok(date) => NormalizedValue {
                    input: input.clone(),
                    date_iso: Some(to_iso(date)),
                    error: None,
                },
                Err(err) => NormalizedValue {
                    input: input.clone(),
                    date_iso: None,
                    error: Some(err.to_string()),
                },
            }
        })
        .collect()
}

/// Result of one ingestion run.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub file: PathBuf,
    pub date_order: DateOrder,
    pub policy: CommitPolicy,
    pub decoding: Decoding,
    pub resolution: ColumnResolution,
    /// Source column names, or positional names for a headerless file.
    pub columns: Vec<String>,
    /// Body rows read from the file.
    pub total_rows: usize,
    /// False when the policy rejected the whole batch.
    pub committed: bool,
    pub records: Vec<ValidatedRecord>,
    pub rejected: Vec<RowError>,
}

impl IngestReport {
    /// Builds a report from a batch result.
    ///
    /// A rejected batch is a reportable outcome; every other error is passed through.
    ///
    /// # Errors
    ///
    /// Any [`IngestError`] other than [`IngestError::RowValidationFailed`].
    pub fn from_batch(
        file: &Path,
        table: &LoadedTable,
        options: &IngestOptions,
        result: intake_ingest::Result<BatchOutcome>,
    ) -> intake_ingest::Result<Self> {
        let (committed, records, rejected) = match result {
            Ok(outcome) => (true, outcome.records, outcome.rejected),
            Err(IngestError::RowValidationFailed { errors }) => (false, Vec::new(), errors),
            Err(err) => return Err(err),
        };
        Ok(Self {
            file: file.to_path_buf(),
            date_order: options.order,
            policy: options.policy,
            decoding: table.decoding,
            resolution: table.resolution,
            columns: table.columns.clone(),
            total_rows: table.len(),
            committed,
            records,
            rejected,
        })
    }

    /// Returns true when any row was rejected.
    pub fn has_errors(&self) -> bool {
        !self.rejected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_ingest::{CanonicalRecord, ingest_table};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_normalize_values_reports_each_value() {
        let values = vec!["14022013".to_string(), String::new(), "soon".to_string()];
        let results = normalize_values(&values, DateOrder::DayFirst, today());

        assert_eq!(results[0].date_iso.as_deref(), Some("2013-02-14"));
        assert!(results[0].is_ok());
        assert_eq!(results[1].error.as_deref(), Some("date value is empty"));
        assert_eq!(
            results[2].error.as_deref(),
            Some("unrecognised date format: 'soon'")
        );
    }

    #[test]
    fn test_rejected_batch_is_reported_not_raised() {
        let table = LoadedTable {
            decoding: Decoding::default(),
            resolution: ColumnResolution::Positional,
            columns: Vec::new(),
            records: vec![
                CanonicalRecord::new("Jane", "Doe", "14/02/2013"),
                CanonicalRecord::new("John", "", "01/01/1990"),
            ],
        };
        let options = IngestOptions::new(DateOrder::DayFirst, CommitPolicy::AllOrNothing)
            .with_today(today());
        let result = ingest_table(&table, &options);

        let report =
            IngestReport::from_batch(Path::new("roster.csv"), &table, &options, result).unwrap();
        assert!(!report.committed);
        assert!(report.records.is_empty());
        assert_eq!(report.rejected[0].row, 2);
        assert_eq!(report.total_rows, 2);
        assert!(report.has_errors());
    }

    #[test]
    fn test_other_errors_pass_through() {
        let table = LoadedTable {
            decoding: Decoding::default(),
            resolution: ColumnResolution::Header,
            columns: Vec::new(),
            records: Vec::new(),
        };
        let options = IngestOptions::default();
        let result = IngestReport::from_batch(
            Path::new("roster.csv"),
            &table,
            &options,
            Err(IngestError::NoValidRows),
        );
        assert!(matches!(result, Err(IngestError::NoValidRows)));
    }
}
