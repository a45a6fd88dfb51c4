//! Error types for eventify

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the eventify application
#[derive(Debug, Error)]
pub enum EventifyError {
    #[error("Not an eventify calendar: {0}")]
    NotEventifyDirectory(PathBuf),

    #[error("Invalid time: '{0}'")]
    InvalidTime(String),

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Unsupported export format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl EventifyError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            EventifyError::NotEventifyDirectory(_) => 2,
            EventifyError::InvalidTime(_) => 3,
            EventifyError::Validation { .. } => 4,
            EventifyError::EventNotFound(_) => 5,
            EventifyError::UnsupportedFormat(_) => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            EventifyError::NotEventifyDirectory(path) => {
                format!(
                    "Not an eventify calendar: {}\n\n\
                    Suggestions:\n\
                    • Run 'eventify init' in this directory to create a new calendar\n\
                    • Navigate to an existing eventify directory\n\
                    • Set EVENTIFY_ROOT environment variable to your calendar path",
                    path.display()
                )
            }
            EventifyError::InvalidTime(token) => {
                format!(
                    "Invalid time: '{}'\n\n\
                    Times use the 24-hour HH:MM format:\n\
                    • 09:15, 14:00, 23:59\n\
                    • No seconds, no AM/PM\n\n\
                    Example:\n\
                    eventify add --date 2025-01-17 --start 09:00 --end 10:30 --title 'Standup'",
                    token
                )
            }
            EventifyError::EventNotFound(id) => {
                format!(
                    "Event not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'eventify list' to see event ids\n\
                    • The id must match exactly (edits and deletes are keyed on id)",
                    id
                )
            }
            EventifyError::UnsupportedFormat(token) => {
                format!(
                    "Unsupported export format: '{}'\n\n\
                    Valid formats: json, csv\n\
                    Example: eventify export csv --month 12 --year 2024",
                    token
                )
            }
            EventifyError::Config(msg) => {
                if msg.contains("date") {
                    format!(
                        "{}\n\n\
                        Expected format: YYYY-MM-DD\n\
                        Example: eventify add --date 2025-01-17 ...",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using EventifyError
pub type Result<T> = std::result::Result<T, EventifyError>;
