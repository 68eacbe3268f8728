//! Date/time-range form field core, plus the event store demo that
//! exercises it.
//!
//! The `range` module is the reusable component: one text input holding
//! `"<start> - <end>"`, split, parsed, validated and bound onto a record
//! with two timestamp attributes. Everything else is the demo collaborator
//! set: an `Event` model, its SQLite repository and a thin use-case
//! service.

pub mod db;
pub mod logging;
pub mod model;
pub mod range;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{Event, EventId, EventValidationError, EVENT_TITLE_MAX_CHARS};
pub use range::field::{FieldError, TimeRangeField};
pub use range::form::{TimeRanged, TimeRangedForm};
pub use range::format::{RangeValue, TimeCountError, DISPLAY_SEPARATOR, RANGE_SEPARATOR};
pub use range::parse::ParseError;
pub use range::validate::Violation;
pub use range::{RangeConfig, TimeRange, DATETIME_DISPLAY_FORMAT, DATETIME_INPUT_FORMAT};
pub use repo::event_repo::{
    EventListQuery, EventRepository, RepoError, RepoResult, SqliteEventRepository,
};
pub use service::event_service::{EventFormData, EventService, EventServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
