//! Month view use case

use crate::application::event_store::EventStore;
use crate::domain::{CalendarGrid, Event, MonthCursor};
use crate::error::Result;
use crate::infrastructure::EventStorage;
use chrono::Datelike;
use std::collections::BTreeSet;

/// A month's grid together with the events scheduled in it
#[derive(Debug, Clone)]
pub struct MonthView {
    pub grid: CalendarGrid,
    pub event_days: BTreeSet<u32>,
    pub events: Vec<Event>,
}

/// Build the view for the cursor's month: the day grid plus the
/// month's events sorted by date and start time
pub fn month_view<S: EventStorage>(
    store: &EventStore<S>,
    cursor: MonthCursor,
) -> Result<MonthView> {
    let events = store.list_by_month(cursor)?;
    let event_days = events.iter().map(|e| e.date.day()).collect();

    Ok(MonthView {
        grid: CalendarGrid::for_month(cursor),
        event_days,
        events,
    })
}
