use std::sync::Arc;

use eventcal_infra::{CalendarService, InMemoryEventRepository};

/// Calendar service as wired for the server: one in-memory repository for the
/// process lifetime.
pub type AppCalendar = CalendarService<Arc<InMemoryEventRepository>>;

/// Everything the handlers need, shared behind an `Arc`.
#[derive(Debug)]
pub struct AppServices {
    calendar: AppCalendar,
}

impl AppServices {
    pub fn new() -> Self {
        Self::with_repository(Arc::new(InMemoryEventRepository::new()))
    }

    pub fn with_repository(repository: Arc<InMemoryEventRepository>) -> Self {
        Self {
            calendar: CalendarService::new(repository),
        }
    }

    pub fn calendar(&self) -> &AppCalendar {
        &self.calendar
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new()
    }
}
