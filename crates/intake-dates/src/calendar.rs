//! Calendar rules shared by every parsing stage.

use chrono::{Datelike, NaiveDate};

/// Two-digit years at or below the pivot belong to the 2000s, the rest to the 1900s.
pub const CENTURY_PIVOT: u32 = 30;

/// Four-digit years before this are rejected as implausible for a birth date.
///
/// Also keeps `YYYYMMDD` from being re-read as `DDMMYYYY` (`20101205` would
/// otherwise be 20 October 1205).
pub const EARLIEST_YEAR: i32 = 1800;

/// Expands a two-digit year around [`CENTURY_PIVOT`].
#[must_use]
pub fn expand_two_digit_year(yy: u32) -> i32 {
    let yy = (yy % 100) as i32;
    if yy <= CENTURY_PIVOT as i32 {
        2000 + yy
    } else {
        1900 + yy
    }
}

/// Builds a date when the components form a real, plausible calendar date.
pub(crate) fn calendar_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if year < EARLIEST_YEAR {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Moves a date later than `today` back by whole centuries.
///
/// 29 February clamps to 28 February when the shifted year is not a leap year.
#[must_use]
pub fn correct_future_date(date: NaiveDate, today: NaiveDate) -> NaiveDate {
    let mut corrected = date;
    while corrected > today {
        let year = corrected.year() - 100;
        let Some(shifted) = NaiveDate::from_ymd_opt(year, corrected.month(), corrected.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, corrected.month(), 28))
        else {
            break;
        };
        corrected = shifted;
    }
    corrected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_expand_two_digit_year_pivot() {
        assert_eq!(expand_two_digit_year(0), 2000);
        assert_eq!(expand_two_digit_year(30), 2030);
        assert_eq!(expand_two_digit_year(31), 1931);
        assert_eq!(expand_two_digit_year(95), 1995);
    }

    #[test]
    fn test_calendar_date_rules() {
        assert_eq!(calendar_date(2012, 2, 29), Some(ymd(2012, 2, 29)));
        assert_eq!(calendar_date(1995, 2, 29), None);
        assert_eq!(calendar_date(2000, 13, 1), None);
        assert_eq!(calendar_date(1205, 10, 20), None);
    }

    #[test]
    fn test_correct_future_date_past_is_untouched() {
        let today = ymd(2024, 6, 1);
        assert_eq!(correct_future_date(ymd(2024, 6, 1), today), ymd(2024, 6, 1));
        assert_eq!(correct_future_date(ymd(1980, 1, 1), today), ymd(1980, 1, 1));
    }

    #[test]
    fn test_correct_future_date_subtracts_century() {
        let today = ymd(2024, 6, 1);
        assert_eq!(correct_future_date(ymd(2030, 5, 17), today), ymd(1930, 5, 17));
    }

    #[test]
    fn test_correct_future_date_clamps_leap_day() {
        // 2000 is a leap year, 1900 is not.
        let today = ymd(1999, 1, 1);
        assert_eq!(correct_future_date(ymd(2000, 2, 29), today), ymd(1900, 2, 28));
    }
}
