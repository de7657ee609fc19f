//! Single entry point for event date text.
//!
//! A phrase that opens with `Every <letters>` is always treated as a
//! recurring weekday, even if it would also fail or succeed as a date range.
//! Everything else goes to the date-range parser.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use tracing::debug;

use crate::error::Result;
use crate::model::ParsedDateRange;
use crate::range::parse_date_range;
use crate::recurrence::{looks_recurring, parse_recurring_event};

/// Options for [`parse_event_date_with_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Year applied to date-range phrases. Defaults to the anchor's UTC year.
    pub base_year: Option<i32>,
}

impl ParseOptions {
    pub fn with_base_year(year: i32) -> Self {
        Self {
            base_year: Some(year),
        }
    }
}

/// Which grammar a phrase was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateShape {
    Recurring,
    Range,
}

/// Classify a phrase without parsing it.
pub fn classify(text: &str) -> DateShape {
    if looks_recurring(text) {
        DateShape::Recurring
    } else {
        DateShape::Range
    }
}

/// Parse event date text with default options.
///
/// See [`parse_event_date_with_options`].
pub fn parse_event_date<Tz: TimeZone>(anchor: &DateTime<Tz>, text: &str) -> Result<ParsedDateRange> {
    parse_event_date_with_options(anchor, text, &ParseOptions::default())
}

/// Parse event date text, routing to recurrence or date-range parsing.
///
/// # Arguments
///
/// * `anchor` — The reference "now". Its time zone decides "today" for
///   recurring phrases; its UTC year is the default base year for ranges.
/// * `text` — A phrase like `"January 31–February 1"` or `"Every Saturday"`
/// * `options` — Parse options (base year)
///
/// # Errors
///
/// Errors from either parser are returned unchanged.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use event_dates::parse::{parse_event_date_with_options, ParseOptions};
///
/// let anchor = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
/// let opts = ParseOptions::with_base_year(2026);
/// let range = parse_event_date_with_options(&anchor, "March 3-5", &opts).unwrap();
/// assert_eq!(range.ends_at_iso(), "2026-03-05T00:00:00.000Z");
/// ```
pub fn parse_event_date_with_options<Tz: TimeZone>(
    anchor: &DateTime<Tz>,
    text: &str,
    options: &ParseOptions,
) -> Result<ParsedDateRange> {
    match classify(text) {
        DateShape::Recurring => {
            debug!(text, "parsing as recurring weekday");
            parse_recurring_event(anchor, text)
        }
        DateShape::Range => {
            let year = options
                .base_year
                .unwrap_or_else(|| anchor.with_timezone(&Utc).year());
            debug!(text, year, "parsing as date range");
            parse_date_range(text, year)
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
