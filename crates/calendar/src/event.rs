use serde::{Deserialize, Serialize};

use eventcal_core::{DomainError, DomainResult, EventDate, EventId, UserId};

/// A calendar entry owned by a user, uniquely identified by `(user_id, id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub user_id: UserId,
    pub id: EventId,
    pub date: EventDate,
    pub title: String,
    pub description: String,
}

/// The mutable part of an event. `user_id` and `id` are keys and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventChanges {
    pub date: EventDate,
    pub title: String,
    pub description: String,
}

impl Event {
    pub fn new(
        user_id: UserId,
        id: EventId,
        date: EventDate,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            id,
            date,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Check that every required field is present before the event reaches the store.
    /// Text fields only need to be non-empty; whitespace is kept as the caller sent it.
    pub fn validate(&self) -> DomainResult<()> {
        self.user_id.ensure_positive()?;
        self.id.ensure_positive()?;
        if self.title.is_empty() {
            return Err(DomainError::validation("title must not be empty"));
        }
        if self.description.is_empty() {
            return Err(DomainError::validation("description must not be empty"));
        }
        Ok(())
    }

    /// Split off the fields an update is allowed to overwrite.
    pub fn changes(&self) -> EventChanges {
        EventChanges {
            date: self.date,
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }

    /// Overwrite the mutable fields in place; identity is untouched.
    pub fn apply(&mut self, changes: EventChanges) {
        self.date = changes.date;
        self.title = changes.title;
        self.description = changes.description;
    }
}
