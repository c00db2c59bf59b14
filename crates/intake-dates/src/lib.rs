//! Birth-date normalization for participant intake.
//!
//! Converts human-entered or spreadsheet-exported date strings into a single
//! unambiguous calendar date, serialized as ISO 8601 extended format
//! (`YYYY-MM-DD`).
//!
//! # Strategy
//!
//! Interpretations are attempted from cheapest and least ambiguous to most
//! lenient:
//!
//! 1. **Compact 8-digit** (`14022013`, `2013-02-14`): DMY, YMD and MDY
//!    decompositions in preference order.
//! 2. **Compact 6-digit** (`140213`): DMY and MDY with a pivoted two-digit year.
//! 3. **Lenient**: separated numeric components and month names
//!    (`14 Feb 2013`, `February 14th, 2013`, `1/2/2013`), found anywhere in
//!    the input, honoring the preference first and the opposite order second.
//!
//! Every successful parse then passes the century-sanity correction: a date
//! later than the reference date moves back one hundred years.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use intake_dates::{DateOrder, normalize_date_on, to_iso};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let date = normalize_date_on("14022013", DateOrder::DayFirst, today).unwrap();
//! assert_eq!(to_iso(date), "2013-02-14");
//! ```

mod calendar;
mod compact;
mod error;
mod lenient;
mod normalize;
mod order;

// === Error Types ===
pub use error::{DateError, Result};

// === Preference ===
pub use order::DateOrder;

// === Normalization ===
pub use normalize::{normalize_date, normalize_date_on, normalize_to_iso, to_iso};

// === Calendar Rules ===
pub use calendar::{CENTURY_PIVOT, EARLIEST_YEAR, correct_future_date, expand_two_digit_year};
