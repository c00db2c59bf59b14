//! Lenient parsing of separated and named-month dates.
//!
//! The input is tokenized into numbers and month names. Separators, ordinal
//! suffixes and clock times are dropped; any other word splits the tokens
//! into separate segments. The first window of three consecutive tokens
//! within one segment that forms a valid date wins, which lets a date sit
//! anywhere inside longer text.

use chrono::NaiveDate;

use crate::calendar::{calendar_date, expand_two_digit_year};
use crate::order::DateOrder;

/// English month names and abbreviations, lower-case.
const MONTH_NAMES: &[(&str, u32)] = &[
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

/// A run of digits as typed, keeping its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Number {
    value: u32,
    width: usize,
}

impl Number {
    /// Day and month components are at most two digits wide.
    fn component(self) -> Option<u32> {
        (self.width <= 2).then_some(self.value)
    }

    /// Years are either four digits or a pivoted two-digit year.
    fn year(self) -> Option<i32> {
        match self.width {
            4 => i32::try_from(self.value).ok(),
            2 => Some(expand_two_digit_year(self.value)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Number(Number),
    Month(u32),
}

/// Looks up a month by full or abbreviated English name.
pub(crate) fn month_from_name(word: &str) -> Option<u32> {
    let lower = word.to_lowercase();
    MONTH_NAMES
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, month)| *month)
}

/// Returns true when any word of `value` is a month name.
pub(crate) fn contains_month_name(value: &str) -> bool {
    value
        .split(|c: char| !c.is_alphabetic())
        .any(|word| month_from_name(word).is_some())
}

/// Suffixes accepted directly after a day number (`14th`).
const ORDINAL_SUFFIXES: &[&str] = &["st", "nd", "rd", "th"];

/// Parses `value` using `order` for ambiguous all-numeric dates.
///
/// Windows never span a dropped word, and windows holding a four-digit year
/// are tried before the rest.
pub(crate) fn parse_lenient(value: &str, order: DateOrder) -> Option<NaiveDate> {
    let segments = tokenize(value);
    let windows = || segments.iter().flat_map(|segment| segment.windows(3));

    windows()
        .filter(|window| has_full_year(window))
        .find_map(|window| interpret(window, order))
        .or_else(|| windows().find_map(|window| interpret(window, order)))
}

fn has_full_year(window: &[Token]) -> bool {
    window
        .iter()
        .any(|token| matches!(token, Token::Number(number) if number.width == 4))
}

/// Splits `value` into runs of date tokens.
///
/// A word that is neither a month, an ordinal suffix nor `of` ends the
/// current run.
fn tokenize(value: &str) -> Vec<Vec<Token>> {
    let chars: Vec<char> = value.chars().collect();
    let mut segments = Vec::new();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            let start = i;
            while chars.get(i).is_some_and(char::is_ascii_digit) {
                i += 1;
            }
            if is_clock_separator(&chars, i) {
                i = skip_clock_time(&chars, i);
                continue;
            }
            let run: String = chars[start..i].iter().collect();
            // Runs too long for u32 cannot be date components.
            if let Ok(value) = run.parse::<u32>() {
                tokens.push(Token::Number(Number {
                    value,
                    width: i - start,
                }));
            }
        } else if c.is_alphabetic() {
            let start = i;
            while chars.get(i).is_some_and(|c| c.is_alphabetic()) {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let after_digit = start > 0 && chars[start - 1].is_ascii_digit();
            if let Some(month) = month_from_name(&word) {
                tokens.push(Token::Month(month));
            } else if !is_connective(&word, after_digit) && !tokens.is_empty() {
                segments.push(std::mem::take(&mut tokens));
            }
        } else {
            i += 1;
        }
    }

    if !tokens.is_empty() {
        segments.push(tokens);
    }
    segments
}

/// Words that may sit inside a date: `of`, and ordinal suffixes on a number.
fn is_connective(word: &str, after_digit: bool) -> bool {
    let lower = word.to_lowercase();
    lower == "of" || (after_digit && ORDINAL_SUFFIXES.contains(&lower.as_str()))
}

fn is_clock_separator(chars: &[char], i: usize) -> bool {
    chars.get(i) == Some(&':') && chars.get(i + 1).is_some_and(char::is_ascii_digit)
}

/// Consumes the `:mm` and `:ss` groups of a clock time starting at `i`.
fn skip_clock_time(chars: &[char], mut i: usize) -> usize {
    while is_clock_separator(chars, i) {
        i += 1;
        while chars.get(i).is_some_and(char::is_ascii_digit) {
            i += 1;
        }
    }
    i
}

fn interpret(window: &[Token], order: DateOrder) -> Option<NaiveDate> {
    match window {
        // Feb 14 2013, February 14th, 2013
        [Token::Month(month), Token::Number(first), Token::Number(second)] => {
            named_month(*month, *first, *second)
        }
        // 14 Feb 2013, 2013-Feb-14
        [Token::Number(first), Token::Month(month), Token::Number(second)] => {
            named_month(*month, *first, *second)
        }
        [Token::Number(a), Token::Number(b), Token::Number(c)] => numeric(*a, *b, *c, order),
        _ => None,
    }
}

/// Resolves day and year around a named month; a four-digit number leads as the year.
fn named_month(month: u32, first: Number, second: Number) -> Option<NaiveDate> {
    let (day, year) = if first.width == 4 {
        (second, first)
    } else {
        (first, second)
    };
    calendar_date(year.year()?, month, day.component()?)
}

fn numeric(a: Number, b: Number, c: Number, order: DateOrder) -> Option<NaiveDate> {
    if a.width == 4 {
        return calendar_date(a.year()?, b.component()?, c.component()?);
    }
    let (day, month) = match order {
        DateOrder::DayFirst => (a, b),
        DateOrder::MonthFirst => (b, a),
    };
    calendar_date(c.year()?, month.component()?, day.component()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_month_from_name() {
        assert_eq!(month_from_name("Feb"), Some(2));
        assert_eq!(month_from_name("SEPT"), Some(9));
        assert_eq!(month_from_name("december"), Some(12));
        assert_eq!(month_from_name("Mon"), None);
    }

    #[test]
    fn test_numeric_respects_order() {
        assert_eq!(parse_lenient("1/2/2013", DateOrder::DayFirst), Some(ymd(2013, 2, 1)));
        assert_eq!(parse_lenient("1/2/2013", DateOrder::MonthFirst), Some(ymd(2013, 1, 2)));
    }

    #[test]
    fn test_numeric_year_first() {
        assert_eq!(parse_lenient("2013-2-14", DateOrder::MonthFirst), Some(ymd(2013, 2, 14)));
    }

    #[test]
    fn test_named_month_forms() {
        let expected = Some(ymd(2013, 2, 14));
        assert_eq!(parse_lenient("14 Feb 2013", DateOrder::DayFirst), expected);
        assert_eq!(parse_lenient("14-FEB-13", DateOrder::DayFirst), expected);
        assert_eq!(parse_lenient("February 14th, 2013", DateOrder::DayFirst), expected);
        assert_eq!(parse_lenient("2013-Feb-14", DateOrder::DayFirst), expected);
        assert_eq!(parse_lenient("Feb. 14, 2013", DateOrder::MonthFirst), expected);
    }

    #[test]
    fn test_noise_and_clock_times_are_skipped() {
        assert_eq!(
            parse_lenient("born on Thursday 14 February 2013 at 10:30pm", DateOrder::DayFirst),
            Some(ymd(2013, 2, 14))
        );
        assert_eq!(
            parse_lenient("ref 7 14/02/2013", DateOrder::DayFirst),
            Some(ymd(2013, 2, 14))
        );
        assert_eq!(
            parse_lenient("the 14th of February 2013", DateOrder::DayFirst),
            Some(ymd(2013, 2, 14))
        );
    }

    #[test]
    fn test_month_word_in_noise_does_not_capture_later_numbers() {
        assert_eq!(
            parse_lenient("may be 14/02/2013", DateOrder::DayFirst),
            Some(ymd(2013, 2, 14))
        );
        assert_eq!(
            parse_lenient("seen in May, born 14/02/2013", DateOrder::DayFirst),
            Some(ymd(2013, 2, 14))
        );
    }

    #[test]
    fn test_four_digit_year_window_preferred() {
        assert_eq!(
            parse_lenient("ref 12 03 14/02/2013", DateOrder::DayFirst),
            Some(ymd(2013, 2, 14))
        );
        assert_eq!(parse_lenient("12 03 14", DateOrder::DayFirst), Some(ymd(2014, 3, 12)));
    }

    #[test]
    fn test_tokenize_splits_at_dropped_words() {
        let segments = tokenize("may be 14/02/2013");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], vec![Token::Month(5)]);
        assert_eq!(segments[1].len(), 3);
    }

    #[test]
    fn test_invalid_components_yield_none() {
        assert_eq!(parse_lenient("not a date", DateOrder::DayFirst), None);
        assert_eq!(parse_lenient("31/31/2013", DateOrder::DayFirst), None);
        assert_eq!(parse_lenient("30 Feb 2013", DateOrder::DayFirst), None);
        assert_eq!(parse_lenient("290295", DateOrder::DayFirst), None);
    }
}
