//! Calendar domain module.
//!
//! This crate contains the business rules for calendar events, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage): the event model, field
//! validation, and the day/week/month range predicates.

pub mod event;
pub mod range;

pub use event::{Event, EventChanges};
pub use range::{RangeQuery, WEEK_WINDOW_DAYS};
