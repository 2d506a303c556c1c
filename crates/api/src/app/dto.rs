use serde::{Deserialize, Serialize};

use eventcal_calendar::Event;
use eventcal_core::{DomainError, DomainResult, EventDate, EventId, UserId};

// -------------------------
// Request DTOs
// -------------------------
//
// Every field arrives as an optional raw string so that a missing or malformed value
// becomes a validation error with our own envelope rather than an extractor rejection.

/// Body of `/create_event` and `/update_event`.
#[derive(Debug, Default, Deserialize)]
pub struct EventForm {
    pub user_id: Option<String>,
    pub id: Option<String>,
    pub date: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Body of `/delete_event`.
#[derive(Debug, Default, Deserialize)]
pub struct EventKeyForm {
    pub user_id: Option<String>,
    pub id: Option<String>,
}

/// Query string of the `/events_for_*` endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct RangeParams {
    pub user_id: Option<String>,
    pub date: Option<String>,
}

/// The raw value of a present, non-blank field. The value is returned untrimmed so the
/// parsers downstream apply their own rules.
fn required<'a>(field: &str, value: &'a Option<String>) -> DomainResult<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::validation(format!("missing {field}"))),
    }
}

impl EventForm {
    /// Decode the form into an event. Text fields are passed through as given; the
    /// calendar service decides whether they are acceptable.
    pub fn into_event(self) -> DomainResult<Event> {
        let user_id: UserId = required("user_id", &self.user_id)?.parse()?;
        let id: EventId = required("id", &self.id)?.parse()?;
        let date = EventDate::parse(required("date", &self.date)?)?;

        Ok(Event::new(
            user_id,
            id,
            date,
            self.title.unwrap_or_default(),
            self.description.unwrap_or_default(),
        ))
    }
}

impl EventKeyForm {
    pub fn into_key(self) -> DomainResult<(UserId, EventId)> {
        let user_id: UserId = required("user_id", &self.user_id)?.parse()?;
        let id: EventId = required("id", &self.id)?.parse()?;
        Ok((user_id, id))
    }
}

impl RangeParams {
    pub fn into_query(self) -> DomainResult<(UserId, EventDate)> {
        let user_id: UserId = required("user_id", &self.user_id)?.parse()?;
        let date = EventDate::parse(required("date", &self.date)?)?;
        Ok((user_id, date))
    }
}

// -------------------------
// Response envelopes
// -------------------------

/// `{"result": ...}` on success.
#[derive(Debug, Serialize)]
pub struct ResultEnvelope<T> {
    pub result: T,
}

/// `{"error": "..."}` on failure.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
}
