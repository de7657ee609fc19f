//! Event records and parsed date ranges.
//!
//! Instants are held as `DateTime<Utc>` and rendered in the
//! `YYYY-MM-DDTHH:MM:SS.sssZ` shape that the events store and the listing
//! page exchange.

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Render an instant as an ISO-8601 string with millisecond precision and a `Z` suffix.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use event_dates::model::to_iso;
///
/// let dt = Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap();
/// assert_eq!(to_iso(&dt), "2025-01-31T00:00:00.000Z");
/// ```
pub fn to_iso(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// UTC midnight of a calendar day.
pub fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn serialize_iso<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_iso(dt))
}

/// An event as stored in the events table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    #[serde(serialize_with = "serialize_iso")]
    pub starts_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_iso")]
    pub ends_at: DateTime<Utc>,
}

/// Start and end instants produced from a date phrase, both at UTC midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedDateRange {
    #[serde(serialize_with = "serialize_iso")]
    pub starts_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_iso")]
    pub ends_at: DateTime<Utc>,
}

impl ParsedDateRange {
    /// A range starting and ending on the same calendar day.
    pub fn single_day(date: NaiveDate) -> Self {
        let at = utc_midnight(date);
        Self {
            starts_at: at,
            ends_at: at,
        }
    }

    /// A range from the start of `start` to the start of `end`. No ordering is enforced.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            starts_at: utc_midnight(start),
            ends_at: utc_midnight(end),
        }
    }

    pub fn starts_at_iso(&self) -> String {
        to_iso(&self.starts_at)
    }

    pub fn ends_at_iso(&self) -> String {
        to_iso(&self.ends_at)
    }
}
