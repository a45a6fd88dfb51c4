//! Structural and overlap validation for candidate events

use crate::domain::event::Event;
use crate::error::{EventifyError, Result};

pub const TITLE_MIN_CHARS: usize = 2;
pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Check a candidate event against the other events on its date.
///
/// Pure: the outcome depends only on the candidate and `others`.
/// Callers pass the events already filtered to the candidate's date;
/// events sharing the candidate's id are skipped either way, so an
/// edit never conflicts with its own stored slot.
pub fn validate(candidate: &Event, others: &[Event]) -> Result<()> {
    let interval = candidate.interval();

    if interval.is_inverted() {
        return Err(EventifyError::Validation {
            field: "start",
            reason: "start time must be earlier than end time".to_string(),
        });
    }

    let title_chars = candidate.title.chars().count();
    if title_chars < TITLE_MIN_CHARS {
        return Err(EventifyError::Validation {
            field: "title",
            reason: format!("must be at least {} characters long", TITLE_MIN_CHARS),
        });
    }
    if title_chars > TITLE_MAX_CHARS {
        return Err(EventifyError::Validation {
            field: "title",
            reason: format!("must be at most {} characters long", TITLE_MAX_CHARS),
        });
    }

    if candidate.description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(EventifyError::Validation {
            field: "description",
            reason: format!("must be at most {} characters long", DESCRIPTION_MAX_CHARS),
        });
    }

    for other in others {
        if other.id == candidate.id || other.date != candidate.date {
            continue;
        }
        if other.interval().overlaps(&interval) {
            return Err(EventifyError::Validation {
                field: "start",
                reason: format!(
                    "overlaps existing event '{}' ({})",
                    other.title,
                    other.interval()
                ),
            });
        }
    }

    Ok(())
}
