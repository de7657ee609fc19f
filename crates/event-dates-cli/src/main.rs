mod cli;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local, Utc};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use event_dates::{
    categorize_events, import_events, parse_event_date_with_options, Event, EventDraft,
    ParseOptions,
};

use cli::{AnchorArgs, Cli, Command};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { text, anchor, year } => {
            let options = ParseOptions { base_year: year };
            let range = parse_event_date_with_options(&anchor_instant(&anchor), &text, &options)?;
            emit(&range, cli.pretty)
        }

        Command::Categorize { input, now } => {
            let events: Vec<Event> = read_json(&input)?;
            let now = now.unwrap_or_else(Utc::now);
            info!(count = events.len(), %now, "categorizing events");
            emit(&categorize_events(now, events), cli.pretty)
        }

        Command::Import {
            input,
            anchor,
            year,
        } => {
            let drafts: Vec<EventDraft> = read_json(&input)?;
            let options = ParseOptions { base_year: year };
            let now = anchor_instant(&anchor);
            info!(count = drafts.len(), %now, "importing event drafts");
            let report = import_events(&now, drafts, &options);
            if !report.is_clean() {
                warn!(failed = report.failed.len(), "some drafts were not imported");
            }
            eprintln!("{}", report.summary());
            emit(&report, cli.pretty)
        }
    }
}

/// Logs go to stderr so stdout stays valid JSON. Level comes from `RUST_LOG`, default `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// The reference instant, expressed in the zone that decides "today".
///
/// Without `--tz` this is the system local zone.
fn anchor_instant(args: &AnchorArgs) -> DateTime<FixedOffset> {
    let now = args.now.unwrap_or_else(Utc::now);
    match args.tz {
        Some(tz) => now.with_timezone(&tz).fixed_offset(),
        None => now.with_timezone(&Local).fixed_offset(),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(input: &Path) -> Result<T> {
    let from_stdin = input == Path::new("-");
    let raw = if from_stdin {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?
    };
    serde_json::from_str(&raw).with_context(|| {
        if from_stdin {
            "invalid JSON in stdin".to_string()
        } else {
            format!("invalid JSON in {}", input.display())
        }
    })
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
