use std::path::PathBuf;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};

/// Parse event date text and categorize event feeds.
#[derive(Debug, Parser)]
#[command(name = "events", version, about)]
pub struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a date phrase like "January 31–February 1" or "Every Saturday"
    Parse {
        /// The date phrase
        text: String,

        #[command(flatten)]
        anchor: AnchorArgs,

        /// Year for date-range phrases [default: current UTC year]
        #[arg(long)]
        year: Option<i32>,
    },

    /// Bucket a JSON array of events into thisWeek/thisMonth/nextMonth/upcoming
    Categorize {
        /// Input file, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Reference instant (RFC 3339) [default: now]
        #[arg(long, value_parser = parse_instant)]
        now: Option<DateTime<Utc>>,
    },

    /// Resolve the date text of a JSON array of event drafts
    Import {
        /// Input file, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        #[command(flatten)]
        anchor: AnchorArgs,

        /// Year for date-range phrases [default: current UTC year]
        #[arg(long)]
        year: Option<i32>,
    },
}

#[derive(Debug, Args)]
pub struct AnchorArgs {
    /// Reference instant (RFC 3339) [default: now]
    #[arg(long, value_parser = parse_instant)]
    pub now: Option<DateTime<Utc>>,

    /// IANA time zone deciding "today" for recurring phrases [default: system local zone]
    #[arg(long, value_parser = parse_tz)]
    pub tz: Option<Tz>,
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 datetime '{s}': {e}"))
}

fn parse_tz(s: &str) -> Result<Tz, String> {
    s.parse::<Tz>()
        .map_err(|_| format!("invalid IANA time zone '{s}'"))
}
