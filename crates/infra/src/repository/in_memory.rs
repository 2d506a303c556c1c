use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use eventcal_calendar::{Event, EventChanges};
use eventcal_core::{EventId, UserId};

use super::r#trait::{EventRepository, RepositoryError};

type Slots = HashMap<UserId, Vec<Event>>;

/// In-memory event repository.
///
/// One `RwLock` guards the whole user → events mapping. Lock hold time is bounded by a
/// linear scan over one user's events, and nothing under the lock performs IO.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    slots: RwLock<Slots>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Slots>, RepositoryError> {
        self.slots.read().map_err(|_| {
            tracing::warn!("event repository lock poisoned (read)");
            RepositoryError::LockPoisoned("read".to_string())
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Slots>, RepositoryError> {
        self.slots.write().map_err(|_| {
            tracing::warn!("event repository lock poisoned (write)");
            RepositoryError::LockPoisoned("write".to_string())
        })
    }

    fn position(slot: &[Event], id: EventId) -> Option<usize> {
        slot.iter().position(|e| e.id == id)
    }

    fn slot_contains(slots: &Slots, user_id: UserId, id: EventId) -> bool {
        slots
            .get(&user_id)
            .is_some_and(|slot| Self::position(slot, id).is_some())
    }
}

impl EventRepository for InMemoryEventRepository {
    fn put(&self, event: Event) -> Result<(), RepositoryError> {
        let mut slots = self.write()?;
        tracing::debug!(user_id = %event.user_id, id = %event.id, "event appended");
        slots.entry(event.user_id).or_default().push(event);
        Ok(())
    }

    fn put_if_absent(&self, event: Event) -> Result<bool, RepositoryError> {
        let mut slots = self.write()?;
        if Self::slot_contains(&slots, event.user_id, event.id) {
            return Ok(false);
        }
        tracing::debug!(user_id = %event.user_id, id = %event.id, "event stored");
        slots.entry(event.user_id).or_default().push(event);
        Ok(true)
    }

    fn find_all(&self, user_id: UserId) -> Result<Vec<Event>, RepositoryError> {
        let slots = self.read()?;
        Ok(slots.get(&user_id).cloned().unwrap_or_default())
    }

    fn replace(
        &self,
        user_id: UserId,
        id: EventId,
        changes: EventChanges,
    ) -> Result<Event, RepositoryError> {
        let mut slots = self.write()?;
        let event = slots
            .get_mut(&user_id)
            .and_then(|slot| slot.iter_mut().find(|e| e.id == id))
            .ok_or(RepositoryError::NotFound { user_id, id })?;

        event.apply(changes);
        tracing::debug!(user_id = %user_id, id = %id, "event replaced");
        Ok(event.clone())
    }

    fn remove(&self, user_id: UserId, id: EventId) -> Result<Event, RepositoryError> {
        let mut slots = self.write()?;
        let slot = slots
            .get_mut(&user_id)
            .ok_or(RepositoryError::NotFound { user_id, id })?;
        let idx = Self::position(slot, id).ok_or(RepositoryError::NotFound { user_id, id })?;

        let removed = slot.remove(idx);
        // An emptied slot reads the same as a user that never existed.
        if slot.is_empty() {
            slots.remove(&user_id);
        }
        tracing::debug!(user_id = %user_id, id = %id, "event removed");
        Ok(removed)
    }

    fn contains(&self, user_id: UserId, id: EventId) -> Result<bool, RepositoryError> {
        let slots = self.read()?;
        Ok(Self::slot_contains(&slots, user_id, id))
    }
}
