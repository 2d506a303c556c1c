//! Event repository boundary.
//!
//! This module defines the storage abstraction the calendar service is built on and
//! the in-memory implementation used by the server.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryEventRepository;
pub use r#trait::{EventRepository, RepositoryError};
