//! Event entity and category definitions

use crate::domain::time::{Interval, TimeOfDay};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Categories an event can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    #[default]
    Personal,
    Work,
    Casual,
}

impl FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "personal" => Ok(EventCategory::Personal),
            "work" => Ok(EventCategory::Work),
            "casual" => Ok(EventCategory::Casual),
            _ => Err(format!(
                "Invalid category: '{}'. Valid categories are: personal, work, casual",
                s
            )),
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventCategory::Personal => "personal",
            EventCategory::Work => "work",
            EventCategory::Casual => "casual",
        };
        write!(f, "{}", name)
    }
}

/// A time-boxed calendar event
///
/// The serialized form matches the stored collection: camelCase keys,
/// `type` for the category, `HH:MM` strings for the times, and an
/// ISO-8601 string for the date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub category: EventCategory,
    #[serde(rename = "startTimestamp")]
    pub start: TimeOfDay,
    #[serde(rename = "endTimestamp")]
    pub end: TimeOfDay,
    #[serde(default)]
    pub description: String,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
}

impl Event {
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }
}

/// A submission that has not been committed yet; the store assigns an
/// id when the draft carries none
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub id: Option<Uuid>,
    pub title: String,
    pub category: EventCategory,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub description: String,
    pub date: NaiveDate,
}

impl EventDraft {
    pub fn into_event(self) -> Event {
        Event {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            title: self.title,
            category: self.category,
            start: self.start,
            end: self.end,
            description: self.description,
            date: self.date,
        }
    }
}

/// Date (de)serialization for stored event records.
///
/// Dates are written as plain `YYYY-MM-DD`. Older revisions of the
/// stored format wrote full RFC 3339 timestamps, so reading accepts
/// both and normalizes to the UTC calendar date.
mod iso_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &NaiveDate,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;

        if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            return Ok(date);
        }

        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.naive_utc().date())
            .map_err(|_| {
                serde::de::Error::custom(format!("invalid date: '{}' (expected ISO-8601)", s))
            })
    }
}
