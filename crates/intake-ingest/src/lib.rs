//! Participant roster ingestion.
//!
//! This crate turns raw upload bytes into validated participant records with
//! a normalized date of birth.
//!
//! # Features
//!
//! - **Best-effort decoding**: any `encoding_rs` label, BOM sniffing, and
//!   replacement of undecodable bytes
//! - **Header aliasing**: `DOB`, `Date of Birth`, `birth_date`, `Surname`,
//!   `Given Name`, … map onto `FirstName`, `LastName`, `DateOfBirth`
//! - **Headerless fallback**: the first three columns are taken positionally
//! - **Row validation**: every field checked, no short-circuiting
//! - **Batch policy**: all-or-nothing (default) or commit the valid subset
//!
//! Nothing here logs. Encoding fallbacks, replaced bytes and column
//! resolution are reported on [`LoadedTable`] for the caller to present.
//!
//! # Example
//!
//! ```
//! use intake_ingest::{IngestOptions, ingest_bytes};
//!
//! let csv = b"Surname,Given Name,DOB\nDoe,Jane,14/02/2013\n";
//! let outcome = ingest_bytes(csv, "utf-8", &IngestOptions::default()).unwrap();
//! assert_eq!(outcome.records[0].date_iso.to_string(), "2013-02-14");
//! ```

mod batch;
mod decode;
mod error;
mod record;
mod table;
mod validate;

// === Error Types ===
pub use error::{IngestError, Result};

// === Decoding ===
pub use decode::{DEFAULT_ENCODING, DecodedText, Decoding, decode_bytes};

// === Table Loading ===
pub use table::{ColumnResolution, LoadedTable, canonicalize_header, load_table, resolve_header};

// === Records ===
pub use record::{CanonicalRecord, Field, ValidatedRecord};

// === Validation ===
pub use validate::{RowError, RowValidation, validate_row};

// === Batch Ingestion ===
pub use batch::{
    BatchOutcome, CommitPolicy, IngestOptions, MAX_UPLOAD_SIZE, check_upload_size, ingest_bytes,
    ingest_table,
};
