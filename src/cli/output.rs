//! Output formatting utilities

use crate::application::MonthView;
use crate::domain::{Event, GridCell};

/// Format one event on a single line, id last
pub fn format_event_line(event: &Event) -> String {
    format!(
        "{}  {}  [{}] {}  {}",
        event.date.format("%Y-%m-%d"),
        event.interval(),
        event.category,
        event.title,
        event.id
    )
}

/// Format a list of events for display
pub fn format_event_list(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events found".to_string();
    }

    let mut output = String::new();
    for event in events {
        output.push_str(&format_event_line(event));
        output.push('\n');
    }
    output
}

/// Format a month grid: a title, a Sun..Sat header, then one row per
/// week. Days carrying events are marked with '*'.
pub fn format_month(view: &MonthView) -> String {
    let cursor = view.grid.cursor();

    let mut output = String::new();
    output.push_str(
        format!("{:^27}", format!("{} {}", cursor.name(), cursor.year())).trim_end(),
    );
    output.push('\n');
    output.push_str("Sun Mon Tue Wed Thu Fri Sat\n");

    for week in view.grid.cells().chunks(7) {
        let mut row = String::new();
        for cell in week {
            match cell {
                GridCell::Blank => row.push_str("    "),
                GridCell::Day(day) => {
                    let marker = if view.event_days.contains(day) { '*' } else { ' ' };
                    row.push_str(&format!("{:>3}{}", day, marker));
                }
            }
        }
        output.push_str(row.trim_end());
        output.push('\n');
    }

    output
}
