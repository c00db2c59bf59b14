//! Roster loading with header-alias and positional column resolution.

use csv::{ReaderBuilder, Trim};
use serde::Serialize;

use crate::decode::{Decoding, decode_bytes};
use crate::error::{IngestError, Result};
use crate::record::{CanonicalRecord, Field, positional_name};

use super::header::resolve_header;

/// How the canonical columns were located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnResolution {
    /// The first row named all three fields.
    Header,
    /// No usable header; the first three columns were taken in order.
    Positional,
}

/// Source column indexes for the canonical fields, in [`Field::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMapping {
    indexes: [usize; 3],
    resolution: ColumnResolution,
}

impl ColumnMapping {
    /// Absent cells of short rows read as empty.
    fn project(&self, row: &[String]) -> CanonicalRecord {
        let value = |field: Field| {
            row.get(self.indexes[field.index()])
                .map_or("", String::as_str)
        };
        CanonicalRecord::new(
            value(Field::FirstName),
            value(Field::LastName),
            value(Field::DateOfBirth),
        )
    }
}

/// Rows of a roster projected onto the canonical schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTable {
    /// How the upload bytes were decoded.
    pub decoding: Decoding,
    /// How the columns were resolved.
    pub resolution: ColumnResolution,
    /// Source column names (positional names when headerless).
    pub columns: Vec<String>,
    /// Body rows in source order.
    pub records: Vec<CanonicalRecord>,
}

impl LoadedTable {
    /// Returns true when the first source row was consumed as a header.
    pub fn has_header(&self) -> bool {
        self.resolution == ColumnResolution::Header
    }

    /// 1-based source row number of the record at `index`, header included.
    pub fn row_number(&self, index: usize) -> usize {
        index + 1 + usize::from(self.has_header())
    }

    /// Number of body rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no body rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Decodes and parses a roster, resolving its columns.
///
/// The first row is used as a header when its cells alias all three fields;
/// otherwise the file is read as headerless and the first three columns are
/// taken positionally. Extra columns are ignored and short rows yield empty
/// values.
///
/// # Errors
///
/// [`IngestError::MissingColumns`] when the headerless reading has fewer than
/// three columns; [`IngestError::Csv`] for malformed CSV.
pub fn load_table(bytes: &[u8], encoding: &str) -> Result<LoadedTable> {
    let decoded = decode_bytes(bytes, encoding);
    let rows = read_rows(&decoded.text)?;
    let mapping = resolve_columns(&rows)?;

    let mut rows = rows.into_iter();
    let columns = match mapping.resolution {
        ColumnResolution::Header => rows.next().unwrap_or_default(),
        ColumnResolution::Positional => (0..3).map(positional_name).collect(),
    };

    let records = rows.map(|row| mapping.project(&row)).collect();

    Ok(LoadedTable {
        decoding: decoded.decoding,
        resolution: mapping.resolution,
        columns,
        records,
    })
}

/// Parses CSV text into trimmed cells; row widths may vary.
fn read_rows(text: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

fn resolve_columns(rows: &[Vec<String>]) -> Result<ColumnMapping> {
    let Some(first_row) = rows.first() else {
        return Err(IngestError::MissingColumns { found: 0 });
    };

    let mut slots: [Option<usize>; 3] = [None; 3];
    for (idx, name) in first_row.iter().enumerate() {
        let Some(field) = resolve_header(name) else {
            continue;
        };
        // The first column naming a field wins.
        slots[field.index()].get_or_insert(idx);
    }

    if let [Some(first_name), Some(last_name), Some(date_of_birth)] = slots {
        return Ok(ColumnMapping {
            indexes: [first_name, last_name, date_of_birth],
            resolution: ColumnResolution::Header,
        });
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or_default();
    if width < Field::ALL.len() {
        return Err(IngestError::MissingColumns { found: width });
    }

    Ok(ColumnMapping {
        indexes: [0, 1, 2],
        resolution: ColumnResolution::Positional,
    })
}
