//! Event domain model.
//!
//! # Responsibility
//! - Define the canonical event record with its two timestamp attributes.
//! - Enforce record-level invariants on every write path.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another event.
//! - `time_end` must not be earlier than `time_start`.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::range::form::TimeRanged;
use crate::range::TimeRange;

/// Stable identifier for persisted events.
pub type EventId = Uuid;

/// Upper bound on the stored title length, in characters.
pub const EVENT_TITLE_MAX_CHARS: usize = 100;

/// A scheduled event with a title and a start/end pair.
///
/// The range field never persists itself; it decomposes into
/// `time_start`/`time_end` on save and is rebuilt from them on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Stable global ID used for linking and updates.
    pub uuid: EventId,
    pub title: String,
    pub time_start: DateTime<Utc>,
    pub time_end: DateTime<Utc>,
}

/// Record-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventValidationError {
    EmptyTitle,
    TitleTooLong { chars: usize },
    EndBeforeStart,
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "event title must not be empty"),
            Self::TitleTooLong { chars } => write!(
                f,
                "event title exceeds {EVENT_TITLE_MAX_CHARS} characters: {chars}"
            ),
            Self::EndBeforeStart => write!(f, "event end is before event start"),
        }
    }
}

impl Error for EventValidationError {}

impl Event {
    /// Creates an event with a generated stable ID.
    pub fn new(
        title: impl Into<String>,
        time_start: DateTime<Utc>,
        time_end: DateTime<Utc>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, time_start, time_end)
    }

    /// Creates an event with a caller-provided stable ID.
    ///
    /// Used by load paths where identity already exists in storage.
    pub fn with_id(
        uuid: EventId,
        title: impl Into<String>,
        time_start: DateTime<Utc>,
        time_end: DateTime<Utc>,
    ) -> Self {
        Self {
            uuid,
            title: title.into(),
            time_start,
            time_end,
        }
    }

    /// Checks record invariants.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is blank after trimming.
    /// - `TitleTooLong` past [`EVENT_TITLE_MAX_CHARS`] characters.
    /// - `EndBeforeStart` when the stored pair is out of order.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }

        let chars = self.title.chars().count();
        if chars > EVENT_TITLE_MAX_CHARS {
            return Err(EventValidationError::TitleTooLong { chars });
        }

        if self.time_end < self.time_start {
            return Err(EventValidationError::EndBeforeStart);
        }

        Ok(())
    }
}

impl TimeRanged for Event {
    fn time_range(&self) -> Option<TimeRange> {
        Some(TimeRange::new(self.time_start, self.time_end))
    }

    fn set_time_range(&mut self, range: TimeRange) {
        self.time_start = range.start;
        self.time_end = range.end;
    }
}
