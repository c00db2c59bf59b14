//! Compact (digit-only) date interpretation.
//!
//! Separators are stripped and the remaining run of 6 or 8 digits is split
//! into day, month and year according to the caller's preference.

use chrono::NaiveDate;

use crate::calendar::{calendar_date, expand_two_digit_year};
use crate::lenient::contains_month_name;
use crate::order::DateOrder;

/// How a digit-only candidate splits into components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    DayMonthYear,
    YearMonthDay,
    MonthDayYear,
}

const DAY_FIRST_LAYOUTS: [Layout; 3] = [
    Layout::DayMonthYear,
    Layout::YearMonthDay,
    Layout::MonthDayYear,
];

const MONTH_FIRST_LAYOUTS: [Layout; 3] = [
    Layout::MonthDayYear,
    Layout::YearMonthDay,
    Layout::DayMonthYear,
];

const DAY_FIRST_SHORT_LAYOUTS: [Layout; 2] = [Layout::DayMonthYear, Layout::MonthDayYear];

const MONTH_FIRST_SHORT_LAYOUTS: [Layout; 2] = [Layout::MonthDayYear, Layout::DayMonthYear];

/// Returns the digits of `value` with every other character removed.
pub(crate) fn digit_candidate(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Returns true when the digit-only reading of `value` is trustworthy.
///
/// Month names and odd-width digit runs (`1/2/2013`) are left to the lenient
/// stage, where component boundaries survive.
pub(crate) fn is_compact_candidate(value: &str) -> bool {
    if contains_month_name(value) {
        return false;
    }
    let mut runs = value
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .peekable();
    runs.peek().is_some() && runs.all(|run| matches!(run.len(), 2 | 4 | 6 | 8))
}

/// Interprets a 6- or 8-digit candidate, returning the first valid layout.
pub(crate) fn parse_compact(digits: &str, order: DateOrder) -> Option<NaiveDate> {
    match digits.len() {
        8 => {
            let layouts = match order {
                DateOrder::DayFirst => &DAY_FIRST_LAYOUTS,
                DateOrder::MonthFirst => &MONTH_FIRST_LAYOUTS,
            };
            layouts.iter().find_map(|layout| parse_eight(digits, *layout))
        }
        6 => {
            let layouts = match order {
                DateOrder::DayFirst => &DAY_FIRST_SHORT_LAYOUTS,
                DateOrder::MonthFirst => &MONTH_FIRST_SHORT_LAYOUTS,
            };
            layouts.iter().find_map(|layout| parse_six(digits, *layout))
        }
        _ => None,
    }
}

fn parse_eight(digits: &str, layout: Layout) -> Option<NaiveDate> {
    let (day, month, year) = match layout {
        Layout::DayMonthYear => (slice(digits, 0, 2)?, slice(digits, 2, 4)?, slice(digits, 4, 8)?),
        Layout::YearMonthDay => (slice(digits, 6, 8)?, slice(digits, 4, 6)?, slice(digits, 0, 4)?),
        Layout::MonthDayYear => (slice(digits, 2, 4)?, slice(digits, 0, 2)?, slice(digits, 4, 8)?),
    };
    calendar_date(i32::try_from(year).ok()?, month, day)
}

fn parse_six(digits: &str, layout: Layout) -> Option<NaiveDate> {
    let (day, month) = match layout {
        Layout::DayMonthYear => (slice(digits, 0, 2)?, slice(digits, 2, 4)?),
        Layout::MonthDayYear => (slice(digits, 2, 4)?, slice(digits, 0, 2)?),
        Layout::YearMonthDay => return None,
    };
    let year = expand_two_digit_year(slice(digits, 4, 6)?);
    calendar_date(year, month, day)
}

fn slice(digits: &str, start: usize, end: usize) -> Option<u32> {
    digits.get(start..end)?.parse().ok()
}
