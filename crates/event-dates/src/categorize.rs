//! Bucket events into the windows shown on the events page.
//!
//! All arithmetic uses UTC calendar days. Windows are checked in a fixed
//! order and the first match wins, so a date inside the next seven days is
//! always "this week" even when it also falls in this month or next month.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::Serialize;

use crate::model::Event;

/// A time window relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Today through seven days from today, inclusive.
    ThisWeek,
    /// After this week, through the last day of the current month.
    ThisMonth,
    /// The whole of the following calendar month, minus anything in this week.
    NextMonth,
    /// Anything later.
    Upcoming,
}

/// Events split into windows, each ascending by `starts_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedEvents {
    pub this_week: Vec<Event>,
    pub this_month: Vec<Event>,
    pub next_month: Vec<Event>,
    pub upcoming: Vec<Event>,
}

impl CategorizedEvents {
    pub fn bucket(&self, category: Category) -> &[Event] {
        match category {
            Category::ThisWeek => &self.this_week,
            Category::ThisMonth => &self.this_month,
            Category::NextMonth => &self.next_month,
            Category::Upcoming => &self.upcoming,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<Event> {
        match category {
            Category::ThisWeek => &mut self.this_week,
            Category::ThisMonth => &mut self.this_month,
            Category::NextMonth => &mut self.next_month,
            Category::Upcoming => &mut self.upcoming,
        }
    }

    /// Total number of categorized events.
    pub fn len(&self) -> usize {
        self.this_week.len() + self.this_month.len() + self.next_month.len() + self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All events in display order, tagged with their window.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Event)> + '_ {
        Window::ORDER
            .into_iter()
            .flat_map(move |c| self.bucket(c).iter().map(move |e| (c, e)))
    }
}

/// Window boundaries computed once per call from "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub today: NaiveDate,
    pub end_of_week: NaiveDate,
    pub end_of_month: NaiveDate,
    pub start_of_next_month: NaiveDate,
    pub end_of_next_month: NaiveDate,
}

impl Window {
    const ORDER: [Category; 4] = [
        Category::ThisWeek,
        Category::ThisMonth,
        Category::NextMonth,
        Category::Upcoming,
    ];

    /// Boundaries for the UTC calendar day containing `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let start_of_next_month = first_of_following_month(today);
        let start_of_month_after = first_of_following_month(start_of_next_month);

        Self {
            today,
            end_of_week: today
                .checked_add_days(Days::new(7))
                .unwrap_or(NaiveDate::MAX),
            end_of_month: start_of_next_month.pred_opt().unwrap_or(today),
            start_of_next_month,
            end_of_next_month: start_of_month_after
                .pred_opt()
                .unwrap_or(start_of_next_month),
        }
    }

    /// The window a calendar day falls in, or `None` for days before today.
    pub fn categorize_date(&self, date: NaiveDate) -> Option<Category> {
        if date < self.today {
            None
        } else if date <= self.end_of_week {
            Some(Category::ThisWeek)
        } else if date <= self.end_of_month {
            Some(Category::ThisMonth)
        } else if date >= self.start_of_next_month && date <= self.end_of_next_month {
            Some(Category::NextMonth)
        } else {
            Some(Category::Upcoming)
        }
    }
}

/// Split events into this week, this month, next month, and upcoming.
///
/// Events whose UTC start day is before `now`'s UTC day are dropped. Each
/// bucket is sorted ascending by `starts_at`; events with equal start times
/// keep their input order.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use event_dates::categorize::categorize_events;
///
/// let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
/// let result = categorize_events(now, Vec::new());
/// assert!(result.is_empty());
/// ```
pub fn categorize_events<I>(now: DateTime<Utc>, events: I) -> CategorizedEvents
where
    I: IntoIterator<Item = Event>,
{
    let window = Window::at(now);
    let mut out = CategorizedEvents::default();

    for event in events {
        if let Some(category) = window.categorize_date(event.starts_at.date_naive()) {
            out.bucket_mut(category).push(event);
        }
    }

    for category in Window::ORDER {
        out.bucket_mut(category).sort_by_key(|e| e.starts_at);
    }

    out
}

fn first_of_following_month(date: NaiveDate) -> NaiveDate {
    let (y, m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).unwrap_or(NaiveDate::MAX)
}

// ── Tests ───────────────────────────────────────────────────────────────────
