//! Event domain model.
//!
//! # Responsibility
//! - Define the canonical event record shared by the store and frontends.
//! - Enforce presence of required fields before persistence.
//!
//! # Invariants
//! - `id` uniquely identifies an event within one collection.
//! - `title` and `category` are never blank in persisted events.
//! - The serialized form keeps `date` as a `YYYY-MM-DD` string.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable integer identifier for an event.
///
/// Ids are allocated by the store's monotonic counter and appear in the
/// persisted wire form as plain JSON numbers.
pub type EventId = i64;

/// A single calendar entry as captured from the form collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned identifier, unique within one collection.
    pub id: EventId,
    /// Display title. Required, otherwise free text.
    pub title: String,
    /// Calendar day the event takes place on.
    pub date: NaiveDate,
    /// Free-text label. Frontends offer a fixed set of choices, but the
    /// data layer does not enforce one.
    pub category: String,
    /// Longer free text. May be empty.
    pub description: String,
}

/// Presence-validation failure for event fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventValidationError {
    /// `title` is empty or whitespace-only.
    BlankTitle,
    /// `category` is empty or whitespace-only.
    BlankCategory,
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "event title must not be blank"),
            Self::BlankCategory => write!(f, "event category must not be blank"),
        }
    }
}

impl Error for EventValidationError {}

impl Event {
    /// Creates an event from form-collaborator input.
    ///
    /// # Invariants
    /// - The provided `id` stays stable for this event's lifetime; fresh
    ///   ids come from the owning store's counter.
    /// - This constructor does not validate field presence; write paths do.
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            date,
            category: category.into(),
            description: description.into(),
        }
    }

    /// Checks required fields for presence.
    ///
    /// Presence is the only data-layer validation: `title` and `category`
    /// must contain a non-whitespace character, `description` may be empty
    /// and `date` presence is already enforced by its type.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::BlankTitle);
        }
        if self.category.trim().is_empty() {
            return Err(EventValidationError::BlankCategory);
        }
        Ok(())
    }
}
