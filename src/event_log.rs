//! Event log loading and case grouping
//!
//! Parses a helpdesk CSV export into typed events and groups them into
//! per-ticket cases sorted by timestamp. Validation is fail-fast: a missing
//! column or an unparseable timestamp aborts the run before any analysis,
//! naming the offending row and column.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Required header columns, in canonical order
pub const REQUIRED_COLUMNS: [&str; 5] =
    ["Case_ID", "Activity", "Timestamp", "Priority", "Category"];

/// Timestamp formats accepted by the loader
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Errors raised while loading an event log
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("empty input: no header row")]
    EmptyInput,

    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("row {row}: expected at least {expected} fields, got {actual}")]
    ShortRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("row {row}, column Timestamp: cannot parse {value:?} as a date-time")]
    BadTimestamp { row: usize, value: String },
}

/// A single helpdesk event, immutable once loaded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Ticket identifier the event belongs to
    pub case_id: String,
    /// Lifecycle stage name (e.g. "Opened", "Investigation Started")
    pub activity: String,
    /// Wall-clock instant of the event
    pub timestamp: NaiveDateTime,
    /// Ticket priority at this event
    pub priority: String,
    /// Ticket category at this event
    pub category: String,
}

/// One ticket's events, sorted by timestamp ascending
#[derive(Debug, Clone, Serialize)]
pub struct Case {
    pub case_id: String,
    pub events: Vec<Event>,
}

impl Case {
    /// Chronologically first event. Cases are never empty by construction.
    pub fn first_event(&self) -> &Event {
        &self.events[0]
    }

    /// Chronologically last event
    pub fn last_event(&self) -> &Event {
        &self.events[self.events.len() - 1]
    }
}

/// The full event log, grouped into cases
///
/// Cases appear in first-appearance order of their `Case_ID` in the input,
/// which keeps every downstream ordering deterministic.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    cases: Vec<Case>,
    event_count: usize,
}

impl EventLog {
    /// Group a flat event list into cases and sort each case by timestamp.
    ///
    /// The sort is stable: events with identical timestamps keep their
    /// input order.
    pub fn from_events(events: Vec<Event>) -> Self {
        let event_count = events.len();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut cases: Vec<Case> = Vec::new();

        for event in events {
            match index.get(&event.case_id) {
                Some(&i) => cases[i].events.push(event),
                None => {
                    index.insert(event.case_id.clone(), cases.len());
                    cases.push(Case {
                        case_id: event.case_id.clone(),
                        events: vec![event],
                    });
                }
            }
        }

        for case in &mut cases {
            case.events.sort_by_key(|e| e.timestamp);
        }

        Self { cases, event_count }
    }

    /// Load and validate an event log from a CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        let data = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_csv_str(&data)
    }

    /// Load and validate an event log from CSV text
    pub fn from_csv_str(data: &str) -> Result<Self, LoadError> {
        let records = parse_records(data);
        let mut records = records.into_iter();

        let header = records.next().ok_or(LoadError::EmptyInput)?;
        let columns = resolve_columns(&header)?;

        let max_index = columns.iter().copied().max().unwrap_or(0);
        let mut events = Vec::new();
        for (i, record) in records.enumerate() {
            // Trailing blank line from a final newline is not a data row
            if record.len() == 1 && record[0].is_empty() {
                continue;
            }
            let row = i + 1;
            if record.len() <= max_index {
                return Err(LoadError::ShortRow {
                    row,
                    expected: max_index + 1,
                    actual: record.len(),
                });
            }

            let raw_timestamp = record[columns[2]].trim();
            let timestamp = parse_timestamp(raw_timestamp).ok_or_else(|| {
                LoadError::BadTimestamp {
                    row,
                    value: raw_timestamp.to_string(),
                }
            })?;

            events.push(Event {
                case_id: record[columns[0]].trim().to_string(),
                activity: record[columns[1]].trim().to_string(),
                timestamp,
                priority: record[columns[3]].trim().to_string(),
                category: record[columns[4]].trim().to_string(),
            });
        }

        Ok(Self::from_events(events))
    }

    /// Cases in first-appearance order
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    pub fn event_count(&self) -> usize {
        self.event_count
    }
}

/// Map each required column name to its index in the header row
fn resolve_columns(header: &[String]) -> Result<[usize; 5], LoadError> {
    let mut indices = [0usize; 5];
    for (slot, name) in REQUIRED_COLUMNS.into_iter().enumerate() {
        let position = header
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(LoadError::MissingColumn(name))?;
        indices[slot] = position;
    }
    Ok(indices)
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|&fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Parse CSV text into records, honoring RFC-4180 quoting
///
/// Quoted fields may contain commas, doubled quotes, and newlines.
fn parse_records(data: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = data.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }

    // Final record without a trailing newline
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records
}
