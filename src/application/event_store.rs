//! Event store - CRUD over the persisted collection

use crate::domain::{validate, Event, EventDraft, MonthCursor};
use crate::error::{EventifyError, Result};
use crate::infrastructure::EventStorage;
use chrono::NaiveDate;
use uuid::Uuid;

/// The authoritative owner of the event collection.
///
/// Storage is injected; every operation reads the collection fresh and
/// mutating operations rewrite it in full, so no state survives outside
/// the storage backend. Validation runs before any write.
pub struct EventStore<S: EventStorage> {
    storage: S,
}

impl<S: EventStorage> EventStore<S> {
    pub fn new(storage: S) -> Self {
        EventStore { storage }
    }

    /// The full collection, in storage order
    pub fn list(&self) -> Result<Vec<Event>> {
        self.storage.load_events()
    }

    /// Events on exactly this calendar date, sorted by start time
    pub fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Event>> {
        let mut events: Vec<Event> = self
            .list()?
            .into_iter()
            .filter(|e| e.date == date)
            .collect();
        events.sort_by_key(|e| e.start);
        Ok(events)
    }

    /// Events falling in the cursor's month, sorted by date then start
    pub fn list_by_month(&self, cursor: MonthCursor) -> Result<Vec<Event>> {
        let mut events: Vec<Event> = self
            .list()?
            .into_iter()
            .filter(|e| cursor.contains(e.date))
            .collect();
        events.sort_by_key(|e| (e.date, e.start));
        Ok(events)
    }

    /// Look up a single event by id
    pub fn get(&self, id: Uuid) -> Result<Event> {
        self.list()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| EventifyError::EventNotFound(id.to_string()))
    }

    /// Validate and commit a new event, assigning an id when the draft
    /// carries none
    pub fn create(&self, draft: EventDraft) -> Result<Event> {
        let candidate = draft.into_event();

        let others = self.list_by_date(candidate.date)?;
        validate::validate(&candidate, &others)?;

        let mut events = self.list()?;
        events.push(candidate.clone());
        self.storage.save_events(&events)?;

        Ok(candidate)
    }

    /// Replace the stored event with the same id wholesale
    pub fn update(&self, event: Event) -> Result<Event> {
        let mut events = self.list()?;

        let index = events
            .iter()
            .position(|e| e.id == event.id)
            .ok_or_else(|| EventifyError::EventNotFound(event.id.to_string()))?;

        // The edited record is excluded from its own overlap check
        let others = self.list_by_date(event.date)?;
        validate::validate(&event, &others)?;

        events[index] = event.clone();
        self.storage.save_events(&events)?;

        Ok(event)
    }

    /// Remove exactly the event with this id
    pub fn delete(&self, id: Uuid) -> Result<Event> {
        let mut events = self.list()?;

        let index = events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| EventifyError::EventNotFound(id.to_string()))?;

        let removed = events.remove(index);
        self.storage.save_events(&events)?;

        Ok(removed)
    }
}
