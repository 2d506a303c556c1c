//! Calendar application service (validation, uniqueness, range queries).
//!
//! `CalendarService` sits between the transport adapter and the repository:
//!
//! ```text
//! adapter → CalendarService → EventRepository
//! ```
//!
//! It owns every business rule (required fields, positive ids, no duplicate
//! `(user_id, id)`) and the day/week/month query semantics. It never touches the
//! repository's lock directly: the one compound operation that must be atomic,
//! check-then-insert on create, is delegated to `EventRepository::put_if_absent`.

use thiserror::Error;

use eventcal_calendar::{Event, RangeQuery};
use eventcal_core::{DomainError, EventDate, EventId, UserId};

use crate::repository::{EventRepository, RepositoryError};

/// Coarse classification of a failure, used by adapters to pick a status code.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input.
    BadInput,
    /// A business rule rejected the request (duplicate, not found, unknown user).
    Business,
    /// Anything else (storage failure).
    Internal,
}

/// Error returned by every calendar operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("repository failure: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for CalendarError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound { user_id, id } => CalendarError::Domain(
                DomainError::not_found(format!("event {id} not found for user {user_id}")),
            ),
            other => CalendarError::Repository(other),
        }
    }
}

impl CalendarError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalendarError::Domain(DomainError::Validation(_)) => ErrorKind::BadInput,
            CalendarError::Domain(
                DomainError::Duplicate(_) | DomainError::NotFound(_) | DomainError::UnknownUser(_),
            ) => ErrorKind::Business,
            CalendarError::Repository(_) => ErrorKind::Internal,
        }
    }
}

pub type CalendarResult<T> = Result<T, CalendarError>;

/// Business-rule layer over an [`EventRepository`].
#[derive(Debug)]
pub struct CalendarService<R> {
    repository: R,
}

impl<R> CalendarService<R>
where
    R: EventRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Validate and store a new event.
    ///
    /// Fails with `Validation` on missing fields or non-positive ids, and with
    /// `Duplicate` if the user already has an event with this id.
    pub fn create_event(&self, event: Event) -> CalendarResult<Event> {
        event.validate()?;

        if !self.repository.put_if_absent(event.clone())? {
            return Err(DomainError::duplicate(format!(
                "event {} already exists for user {}",
                event.id, event.user_id
            ))
            .into());
        }

        tracing::debug!(
            user_id = %event.user_id,
            id = %event.id,
            date = %event.date,
            "event created"
        );
        Ok(event)
    }

    /// Overwrite title, description and date of an existing event.
    ///
    /// `user_id` and `id` select the target and are never changed.
    pub fn update_event(&self, event: Event) -> CalendarResult<Event> {
        event.validate()?;

        let updated = self
            .repository
            .replace(event.user_id, event.id, event.changes())?;

        tracing::debug!(user_id = %updated.user_id, id = %updated.id, "event updated");
        Ok(updated)
    }

    /// Remove one event and return it.
    pub fn delete_event(&self, user_id: UserId, id: EventId) -> CalendarResult<Event> {
        user_id.ensure_positive()?;
        id.ensure_positive()?;

        let removed = self.repository.remove(user_id, id)?;

        tracing::debug!(user_id = %user_id, id = %id, "event deleted");
        Ok(removed)
    }

    pub fn events_for_day(&self, user_id: UserId, date: EventDate) -> CalendarResult<Vec<Event>> {
        self.events_in_range(RangeQuery::Day, user_id, date)
    }

    pub fn events_for_week(&self, user_id: UserId, date: EventDate) -> CalendarResult<Vec<Event>> {
        self.events_in_range(RangeQuery::Week, user_id, date)
    }

    pub fn events_for_month(&self, user_id: UserId, date: EventDate) -> CalendarResult<Vec<Event>> {
        self.events_in_range(RangeQuery::Month, user_id, date)
    }

    /// Filter a user's events by `query` around `anchor`, in insertion order.
    ///
    /// A user without any stored events is reported as `UnknownUser`; the store
    /// cannot tell "never existed" from "everything deleted".
    pub fn events_in_range(
        &self,
        query: RangeQuery,
        user_id: UserId,
        anchor: EventDate,
    ) -> CalendarResult<Vec<Event>> {
        let events = self.repository.find_all(user_id)?;
        if events.is_empty() {
            return Err(DomainError::unknown_user(format!(
                "no events recorded for user {user_id}"
            ))
            .into());
        }

        let selected = query.select(&anchor, events);
        tracing::debug!(
            user_id = %user_id,
            range = %query,
            anchor = %anchor,
            found = selected.len(),
            "range query"
        );
        Ok(selected)
    }
}
