//! Export events for a month as JSON or CSV

use crate::application::event_store::EventStore;
use crate::domain::{Event, MonthCursor};
use crate::error::{EventifyError, Result};
use crate::infrastructure::EventStorage;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CSV_HEADER: &str = "id,title,type,startTimestamp,endTimestamp,description,date";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn default_filename(&self) -> &'static str {
        match self {
            ExportFormat::Json => "events.json",
            ExportFormat::Csv => "events.csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = EventifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(EventifyError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Render the events as a pretty-printed JSON array in the stored
/// record shape
pub fn render_json(events: &[Event]) -> Result<String> {
    serde_json::to_string_pretty(events)
        .map_err(|e| EventifyError::Storage(format!("failed to serialize events: {}", e)))
}

/// Render the events as CSV: a fixed header row, then one row per
/// event with every field double-quoted. Embedded quotes are doubled.
pub fn render_csv(events: &[Event]) -> String {
    let mut output = String::from(CSV_HEADER);
    output.push('\n');

    for event in events {
        let fields = [
            event.id.to_string(),
            event.title.clone(),
            event.category.to_string(),
            event.start.to_string(),
            event.end.to_string(),
            event.description.clone(),
            event.date.format("%Y-%m-%d").to_string(),
        ];
        let row: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
        output.push_str(&row.join(","));
        output.push('\n');
    }

    output
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Project a month of events into the requested format and write the
/// result to `out` (or the format's default filename)
pub fn export<S: EventStorage>(
    store: &EventStore<S>,
    cursor: MonthCursor,
    format: ExportFormat,
    out: Option<&Path>,
) -> Result<(PathBuf, usize)> {
    let events = store.list_by_month(cursor)?;

    let body = match format {
        ExportFormat::Json => render_json(&events)?,
        ExportFormat::Csv => render_csv(&events),
    };

    let path = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format.default_filename()));
    fs::write(&path, body)?;

    Ok((path, events.len()))
}
