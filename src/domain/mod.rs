//! Domain layer - Business logic and domain models

pub mod calendar;
pub mod event;
pub mod time;
pub mod validate;

pub use calendar::{CalendarGrid, GridCell, MonthCursor};
pub use event::{Event, EventCategory, EventDraft};
pub use time::{Interval, TimeOfDay};
