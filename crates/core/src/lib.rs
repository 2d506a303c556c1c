//! `eventcal-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the calendar date value object and the domain error model.

pub mod date;
pub mod error;
pub mod id;
pub mod value_object;

pub use date::EventDate;
pub use error::{DomainError, DomainResult};
pub use id::{EventId, UserId};
pub use value_object::ValueObject;
