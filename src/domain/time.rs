//! Time-of-day and interval model

use crate::error::{EventifyError, Result};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Regex for 24-hour clock times: H:MM or HH:MM, no seconds, no AM/PM
fn time_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([01]?\d|2[0-3]):([0-5]\d)$").unwrap())
}

/// A time of day with minute granularity, stored as minutes since midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from an hour and minute pair
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(TimeOfDay(hour * 60 + minute))
    }

    /// Minutes since midnight
    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = EventifyError;

    fn from_str(s: &str) -> Result<Self> {
        let captures = time_regex()
            .captures(s)
            .ok_or_else(|| EventifyError::InvalidTime(s.to_string()))?;

        // The pattern already bounds both components, so these parses cannot fail
        let hour: u16 = captures[1].parse().unwrap_or(0);
        let minute: u16 = captures[2].parse().unwrap_or(0);

        Ok(TimeOfDay(hour * 60 + minute))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A half-open time-of-day range [start, end)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Interval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Interval { start, end }
    }

    /// A structurally invalid range: the start does not precede the end
    pub fn is_inverted(&self) -> bool {
        self.start >= self.end
    }

    /// Half-open intersection test: an event ending at 09:00 does not
    /// overlap one starting at 09:00
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
