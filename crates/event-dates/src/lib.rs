//! # event-dates
//!
//! Deterministic parsing of event date text and categorization of event feeds.
//!
//! Nothing here reads the system clock: every function that depends on "now"
//! takes it as an argument, so results are reproducible and callers decide
//! which time zone "today" lives in.
//!
//! ## Modules
//!
//! - [`range`] — `"January 31–February 1"` → start/end instants
//! - [`recurrence`] — `"Every Saturday"` → next occurrence
//! - [`parse`] — Routes a phrase to the right parser
//! - [`categorize`] — Bucket events into this week / this month / next month / upcoming
//! - [`import`] — Parse a batch of drafts, collecting per-item failures
//! - [`model`] — Event records and parsed ranges
//! - [`error`] — Error types

pub mod categorize;
pub mod error;
pub mod import;
pub mod model;
pub mod parse;
pub mod range;
pub mod recurrence;

pub use categorize::{categorize_events, CategorizedEvents, Category, Window};
pub use error::ParseError;
pub use import::{import_events, EventDraft, ImportFailure, ImportReport};
pub use model::{Event, ParsedDateRange};
pub use parse::{classify, parse_event_date, parse_event_date_with_options, DateShape, ParseOptions};
pub use range::parse_date_range;
pub use recurrence::parse_recurring_event;
