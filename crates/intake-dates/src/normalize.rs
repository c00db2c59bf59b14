//! Staged date normalization.

use chrono::{Local, NaiveDate};

use crate::calendar::correct_future_date;
use crate::compact::{digit_candidate, is_compact_candidate, parse_compact};
use crate::error::{DateError, Result};
use crate::lenient::parse_lenient;
use crate::order::DateOrder;

/// Normalizes `raw` against today's local date.
///
/// # Errors
///
/// [`DateError::EmptyInput`] for blank input, [`DateError::InvalidFormat`]
/// when no interpretation forms a valid calendar date.
pub fn normalize_date(raw: &str, order: DateOrder) -> Result<NaiveDate> {
    normalize_date_on(raw, order, Local::now().date_naive())
}

/// Normalizes `raw`, treating `today` as the latest acceptable date.
///
/// Compact digit-only readings are tried before lenient parsing; the lenient
/// stage honors `order` first and then the opposite convention. The result
/// passes through [`correct_future_date`].
///
/// # Errors
///
/// Same as [`normalize_date`].
pub fn normalize_date_on(raw: &str, order: DateOrder, today: NaiveDate) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DateError::EmptyInput);
    }

    let parsed = compact_reading(trimmed, order)
        .or_else(|| parse_lenient(trimmed, order))
        .or_else(|| parse_lenient(trimmed, order.opposite()))
        .ok_or_else(|| DateError::InvalidFormat {
            input: trimmed.to_string(),
        })?;

    Ok(correct_future_date(parsed, today))
}

/// Normalizes `raw` and formats the result as `YYYY-MM-DD`.
///
/// # Errors
///
/// Same as [`normalize_date`].
pub fn normalize_to_iso(raw: &str, order: DateOrder) -> Result<String> {
    normalize_date(raw, order).map(to_iso)
}

/// Formats a date as ISO 8601 extended format.
#[must_use]
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn compact_reading(value: &str, order: DateOrder) -> Option<NaiveDate> {
    if !is_compact_candidate(value) {
        return None;
    }
    parse_compact(&digit_candidate(value), order)
}
