use std::sync::Arc;

use thiserror::Error;

use eventcal_calendar::{Event, EventChanges};
use eventcal_core::{EventId, UserId};

/// Repository operation error.
///
/// These are **storage errors** as opposed to domain errors (validation,
/// uniqueness). `NotFound` is lifted into the domain model by the service layer;
/// `LockPoisoned` is an internal failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("event {id} not found for user {user_id}")]
    NotFound { user_id: UserId, id: EventId },

    #[error("repository lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Concurrency-safe, user-keyed event storage.
///
/// Implementations own the locking discipline: every mutation holds an exclusive lock
/// for its whole check+mutate sequence, every read holds a shared lock. They never
/// validate events; that is the calendar service's job.
///
/// Events are kept per user in insertion order, and reads return them in that order.
pub trait EventRepository: Send + Sync {
    /// Append an event to its user's slot. No uniqueness check.
    fn put(&self, event: Event) -> Result<(), RepositoryError>;

    /// Append an event unless one with the same `(user_id, id)` exists.
    ///
    /// The existence check and the insert happen under one exclusive lock, so two
    /// concurrent calls with the same key cannot both succeed. Returns `false` and
    /// stores nothing when the key is taken.
    fn put_if_absent(&self, event: Event) -> Result<bool, RepositoryError>;

    /// All events of a user, in insertion order. Empty when the user has none.
    fn find_all(&self, user_id: UserId) -> Result<Vec<Event>, RepositoryError>;

    /// Overwrite the mutable fields of an event in place and return the result.
    fn replace(
        &self,
        user_id: UserId,
        id: EventId,
        changes: EventChanges,
    ) -> Result<Event, RepositoryError>;

    /// Remove an event and return it. The order of the remaining events is kept.
    fn remove(&self, user_id: UserId, id: EventId) -> Result<Event, RepositoryError>;

    fn contains(&self, user_id: UserId, id: EventId) -> Result<bool, RepositoryError>;
}

impl<R> EventRepository for Arc<R>
where
    R: EventRepository + ?Sized,
{
    fn put(&self, event: Event) -> Result<(), RepositoryError> {
        (**self).put(event)
    }

    fn put_if_absent(&self, event: Event) -> Result<bool, RepositoryError> {
        (**self).put_if_absent(event)
    }

    fn find_all(&self, user_id: UserId) -> Result<Vec<Event>, RepositoryError> {
        (**self).find_all(user_id)
    }

    fn replace(
        &self,
        user_id: UserId,
        id: EventId,
        changes: EventChanges,
    ) -> Result<Event, RepositoryError> {
        (**self).replace(user_id, id, changes)
    }

    fn remove(&self, user_id: UserId, id: EventId) -> Result<Event, RepositoryError> {
        (**self).remove(user_id, id)
    }

    fn contains(&self, user_id: UserId, id: EventId) -> Result<bool, RepositoryError> {
        (**self).contains(user_id, id)
    }
}
