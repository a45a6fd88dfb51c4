//! eventify - Terminal calendar event manager
//!
//! A command-line application for recording time-boxed events on a
//! monthly calendar, with conflict validation against overlapping
//! events and JSON/CSV export.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::EventifyError;
