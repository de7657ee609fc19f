//! Recurring weekday phrases: `Every Saturday`, `every tuesday:`.
//!
//! A recurring phrase resolves to the next occurrence of the weekday strictly
//! after the anchor's calendar day. When the anchor already falls on that
//! weekday the result is one week out, never today.
//!
//! The anchor's own time zone decides what "today" is. Pass `Utc::now()` for
//! UTC discipline, or a local/`chrono_tz` anchor to follow the wall clock of
//! wherever the events are held.

use chrono::{DateTime, Datelike, Days, TimeZone, Weekday};

use crate::error::{ParseError, Result};
use crate::model::ParsedDateRange;

/// Resolve `Every <Weekday>` to the next occurrence after `anchor`'s calendar day.
///
/// The returned range is a single day at UTC midnight of the resolved date.
///
/// # Errors
///
/// Returns [`ParseError::InvalidRecurringPattern`] if the text is not
/// `Every <word>` with an optional trailing colon, or
/// [`ParseError::UnknownWeekday`] if the word is not a full English weekday name.
/// [`ParseError::YearOutOfRange`] is returned only when the next occurrence
/// falls past the last date `chrono` can represent.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use event_dates::recurrence::parse_recurring_event;
///
/// // Wednesday, January 15, 2025
/// let anchor = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
/// let range = parse_recurring_event(&anchor, "Every Saturday").unwrap();
/// assert_eq!(range.starts_at_iso(), "2025-01-18T00:00:00.000Z");
/// ```
pub fn parse_recurring_event<Tz: TimeZone>(
    anchor: &DateTime<Tz>,
    text: &str,
) -> Result<ParsedDateRange> {
    let word = recurring_weekday_word(text)
        .ok_or_else(|| ParseError::InvalidRecurringPattern(text.to_string()))?;
    let target =
        parse_weekday(word).ok_or_else(|| ParseError::UnknownWeekday(word.to_lowercase()))?;

    let today = anchor.date_naive();
    let days_ahead = days_until_next(today.weekday(), target);
    let date = today
        .checked_add_days(Days::new(days_ahead))
        .ok_or(ParseError::YearOutOfRange(today.year()))?;

    Ok(ParsedDateRange::single_day(date))
}

/// Whether `text` opens with `every` followed by whitespace and a letter.
///
/// This is the sniff used to route a phrase to recurrence parsing before
/// date-range parsing is attempted.
pub fn looks_recurring(text: &str) -> bool {
    let trimmed = text.trim_start();
    let Some(prefix) = trimmed.get(..5) else {
        return false;
    };
    if !prefix.eq_ignore_ascii_case("every") {
        return false;
    }
    let rest = &trimmed[5..];
    let after_space = rest.trim_start();
    after_space.len() < rest.len()
        && after_space
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
}

/// Weekday for a full English weekday name, case-insensitive.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.to_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Days from `current` to the next `target`, in `1..=7`.
fn days_until_next(current: Weekday, target: Weekday) -> u64 {
    let diff = (target.num_days_from_sunday() + 7 - current.num_days_from_sunday()) % 7;
    if diff == 0 {
        7
    } else {
        u64::from(diff)
    }
}

/// Extract `<word>` from `Every <word>` or `Every <word>:`.
fn recurring_weekday_word(text: &str) -> Option<&str> {
    let mut words = text.split_whitespace();
    let every = words.next()?;
    let word = words.next()?;
    if words.next().is_some() || !every.eq_ignore_ascii_case("every") {
        return None;
    }
    let word = word.strip_suffix(':').unwrap_or(word);
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(word)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};

    /// Wednesday, January 15, 2025 at 10:00 UTC.
    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap()
    }

    fn resolved(text: &str) -> String {
        parse_recurring_event(&anchor(), text)
            .unwrap()
            .starts_at_iso()
    }

    #[test]
    fn test_next_saturday_from_wednesday() {
        assert_eq!(resolved("Every Saturday"), "2025-01-18T00:00:00.000Z");
    }

    #[test]
    fn test_same_weekday_is_seven_days_out() {
        assert_eq!(resolved("Every Wednesday"), "2025-01-22T00:00:00.000Z");
    }

    #[test]
    fn test_earlier_weekday_wraps_to_next_week() {
        assert_eq!(resolved("Every Monday"), "2025-01-20T00:00:00.000Z");
        assert_eq!(resolved("Every Tuesday"), "2025-01-21T00:00:00.000Z");
    }

    #[test]
    fn test_start_equals_end() {
        let range = parse_recurring_event(&anchor(), "Every Friday").unwrap();
        assert_eq!(range.starts_at, range.ends_at);
    }

    #[test]
    fn test_case_and_trailing_colon() {
        let expected = resolved("Every Saturday");
        assert_eq!(resolved("Every SATURDAY"), expected);
        assert_eq!(resolved("every saturday"), expected);
        assert_eq!(resolved("Every Saturday:"), expected);
        assert_eq!(resolved("  EVERY   saturday:  "), expected);
    }

    #[test]
    fn test_anchor_zone_decides_today() {
        // 2025-01-15T02:00Z is still Tuesday the 14th in UTC-5.
        let utc = Utc.with_ymd_and_hms(2025, 1, 15, 2, 0, 0).unwrap();
        let eastern = utc.with_timezone(&FixedOffset::west_opt(5 * 3600).unwrap());

        let from_utc = parse_recurring_event(&utc, "Every Wednesday").unwrap();
        let from_eastern = parse_recurring_event(&eastern, "Every Wednesday").unwrap();

        assert_eq!(from_utc.starts_at_iso(), "2025-01-22T00:00:00.000Z");
        assert_eq!(from_eastern.starts_at_iso(), "2025-01-15T00:00:00.000Z");
    }

    #[test]
    fn test_crosses_month_and_year() {
        // Tuesday, December 30, 2025
        let anchor = Utc.with_ymd_and_hms(2025, 12, 30, 0, 0, 0).unwrap();
        let range = parse_recurring_event(&anchor, "Every Sunday").unwrap();
        assert_eq!(
            range,
            ParsedDateRange::single_day(NaiveDate::from_ymd_opt(2026, 1, 4).unwrap())
        );
    }

    #[test]
    fn test_last_representable_day_overflows() {
        let err = parse_recurring_event(&DateTime::<Utc>::MAX_UTC, "Every Monday").unwrap_err();
        assert!(matches!(err, ParseError::YearOutOfRange(_)));
    }

    #[test]
    fn test_unknown_weekday() {
        let err = parse_recurring_event(&anchor(), "Every Funday").unwrap_err();
        assert_eq!(err.to_string(), "Unknown day: funday");
    }

    #[test]
    fn test_abbreviated_weekday_is_unknown() {
        let err = parse_recurring_event(&anchor(), "Every Sat").unwrap_err();
        assert_eq!(err, ParseError::UnknownWeekday("sat".to_string()));
    }

    #[test]
    fn test_invalid_patterns() {
        for text in [
            "Saturday",
            "Every",
            "Every Saturday at 5pm",
            "Every other Saturday",
            "Every 3rd",
            "Each Saturday",
        ] {
            let err = parse_recurring_event(&anchor(), text).unwrap_err();
            assert_eq!(
                err,
                ParseError::InvalidRecurringPattern(text.to_string()),
                "{text}"
            );
        }
    }

    #[test]
    fn test_days_until_next_range() {
        let week = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        for current in week {
            for target in week {
                let n = days_until_next(current, target);
                assert!((1..=7).contains(&n));
                assert_eq!(n == 7, current == target);
            }
        }
    }

    #[test]
    fn test_looks_recurring() {
        assert!(looks_recurring("Every Saturday"));
        assert!(looks_recurring("every   tuesday:"));
        assert!(looks_recurring("  EVERY Funday"));
        assert!(looks_recurring("Every Saturday at 5pm"));
        assert!(!looks_recurring("Every"));
        assert!(!looks_recurring("Every 3rd"));
        assert!(!looks_recurring("Everyday 5"));
        assert!(!looks_recurring("January 5"));
        assert!(!looks_recurring("Eve"));
    }
}
