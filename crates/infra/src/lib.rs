//! Infrastructure layer: event storage, the calendar service, and configuration.

pub mod config;
pub mod repository;
pub mod service;

pub use config::{ConfigError, ServerConfig};
pub use repository::{EventRepository, InMemoryEventRepository, RepositoryError};
pub use service::{CalendarError, CalendarResult, CalendarService, ErrorKind};
