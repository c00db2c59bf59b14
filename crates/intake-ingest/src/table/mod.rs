//! Tolerant CSV table loading.

mod header;
mod reader;

pub use header::{canonicalize_header, resolve_header};
pub use reader::{ColumnResolution, LoadedTable, load_table};
