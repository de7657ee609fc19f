//! Date-range phrases as they appear in event newsletters.
//!
//! Accepted shapes (case-insensitive, any whitespace):
//!
//! - `January 31` — a single day
//! - `January 5–7` / `January 5-7` — a range within one month
//! - `January 31–February 1` — a range across months
//!
//! Every day is resolved against the caller's base year. There is no year
//! rollover: `December 31–January 1` yields an end date *before* the start,
//! and callers importing cross-year ranges must adjust the year themselves.
//!
//! Days are bounded to `1..=31` only. A day past the end of its month rolls
//! forward into the next month (`February 30` in 2025 is March 2).

use chrono::{Days, NaiveDate};

use crate::error::{ParseError, Result};
use crate::model::ParsedDateRange;

/// Parse a date-range phrase into UTC-midnight start and end instants.
///
/// # Errors
///
/// - [`ParseError::UnparseableStart`] if the part before the dash is not `<month> <day>`
/// - [`ParseError::UnknownMonth`] if either month name is not a full English month name
/// - [`ParseError::InvalidDay`] if the start day is outside `1..=31`
/// - [`ParseError::InvalidEndDay`] if the end day is outside `1..=31` or not a number
/// - [`ParseError::UnparseableEnd`] if the part after the dash has more than two words
/// - [`ParseError::YearOutOfRange`] if `base_year` is beyond what `chrono` can represent
///
/// # Examples
///
/// ```
/// use event_dates::range::parse_date_range;
///
/// let range = parse_date_range("January 31–February 1", 2025).unwrap();
/// assert_eq!(range.starts_at_iso(), "2025-01-31T00:00:00.000Z");
/// assert_eq!(range.ends_at_iso(), "2025-02-01T00:00:00.000Z");
/// ```
pub fn parse_date_range(text: &str, base_year: i32) -> Result<ParsedDateRange> {
    let (start_part, end_part) = split_on_dash(text);

    let (month, start_token) = split_month_day(start_part)
        .ok_or_else(|| ParseError::UnparseableStart(text.to_string()))?;
    let month = lookup_month(month)?;
    let start_day = parse_day(start_token).map_err(ParseError::InvalidDay)?;
    let start = resolve_date(base_year, month, start_day)?;

    let Some(end_part) = end_part else {
        return Ok(ParsedDateRange::single_day(start));
    };

    let words: Vec<&str> = end_part.split_whitespace().collect();
    let end = match words.as_slice() {
        [] => return Err(ParseError::InvalidEndDay(String::new())),
        [day] => {
            let day = parse_day(day).map_err(ParseError::InvalidEndDay)?;
            resolve_date(base_year, month, day)?
        }
        [end_month, day] => {
            let end_month = lookup_month(end_month)?;
            let day = parse_day(day).map_err(ParseError::InvalidEndDay)?;
            resolve_date(base_year, end_month, day)?
        }
        _ => return Err(ParseError::UnparseableEnd(text.to_string())),
    };

    Ok(ParsedDateRange::between(start, end))
}

/// Month number (1-12) for a full English month name, case-insensitive.
pub fn parse_month(name: &str) -> Option<u32> {
    match name.to_lowercase().as_str() {
        "january" => Some(1),
        "february" => Some(2),
        "march" => Some(3),
        "april" => Some(4),
        "may" => Some(5),
        "june" => Some(6),
        "july" => Some(7),
        "august" => Some(8),
        "september" => Some(9),
        "october" => Some(10),
        "november" => Some(11),
        "december" => Some(12),
        _ => None,
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn is_range_separator(c: char) -> bool {
    c == '-' || c == '\u{2013}'
}

/// Split at the first hyphen or en dash.
fn split_on_dash(text: &str) -> (&str, Option<&str>) {
    match text.char_indices().find(|&(_, c)| is_range_separator(c)) {
        Some((idx, sep)) => (&text[..idx], Some(&text[idx + sep.len_utf8()..])),
        None => (text, None),
    }
}

/// `"<letters> <digits>"` → `(letters, digits)`.
fn split_month_day(s: &str) -> Option<(&str, &str)> {
    let mut words = s.split_whitespace();
    let month = words.next()?;
    let day = words.next()?;
    if words.next().is_some() {
        return None;
    }
    if !month.chars().all(char::is_alphabetic) || !day.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some((month, day))
}

fn lookup_month(name: &str) -> Result<u32> {
    parse_month(name).ok_or_else(|| ParseError::UnknownMonth(name.to_lowercase()))
}

/// Parse a day of month in `1..=31`. On failure, returns the text to report.
fn parse_day(token: &str) -> std::result::Result<u32, String> {
    match token.parse::<u32>() {
        Ok(day) if (1..=31).contains(&day) => Ok(day),
        Ok(day) => Err(day.to_string()),
        Err(_) => Err(token.to_string()),
    }
}

/// Day `day` counted from the first of the month, rolling past the month's end.
fn resolve_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(day - 1))))
        .ok_or(ParseError::YearOutOfRange(year))
}

// ── Tests ───────────────────────────────────────────────────────────────────
