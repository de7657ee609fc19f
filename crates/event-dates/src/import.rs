//! Batch import of event drafts whose dates are still free text.
//!
//! Each draft is parsed on its own. A draft that fails is reported with its
//! reason and the rest of the batch continues.

use std::fmt;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::Event;
use crate::parse::{parse_event_date_with_options, ParseOptions};

/// An event as extracted from a newsletter, before its date is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    pub date_text: String,
}

/// A draft that could not be imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportFailure {
    /// Position of the draft in the input batch.
    pub index: usize,
    pub name: String,
    pub date_text: String,
    pub reason: String,
}

/// Outcome of importing a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub imported: Vec<Event>,
    pub failed: Vec<ImportFailure>,
}

impl ImportReport {
    /// `"N succeeded, M failed"`.
    pub fn summary(&self) -> String {
        self.to_string()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} succeeded, {} failed",
            self.imported.len(),
            self.failed.len()
        )
    }
}

/// Parse every draft's date text and build events from the ones that parse.
///
/// Order is preserved in both `imported` and `failed`.
pub fn import_events<Tz, I>(anchor: &DateTime<Tz>, drafts: I, options: &ParseOptions) -> ImportReport
where
    Tz: TimeZone,
    I: IntoIterator<Item = EventDraft>,
{
    let mut report = ImportReport::default();

    for (index, draft) in drafts.into_iter().enumerate() {
        match parse_event_date_with_options(anchor, &draft.date_text, options) {
            Ok(range) => {
                debug!(index, name = %draft.name, "imported event");
                report.imported.push(Event {
                    name: draft.name,
                    description: draft.description,
                    url: draft.url,
                    starts_at: range.starts_at,
                    ends_at: range.ends_at,
                });
            }
            Err(e) => {
                warn!(index, name = %draft.name, error = %e, "skipping event with unparseable date");
                report.failed.push(ImportFailure {
                    index,
                    name: draft.name,
                    date_text: draft.date_text,
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}

// ── Tests ───────────────────────────────────────────────────────────────────
