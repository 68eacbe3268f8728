//! Binder between the range field and a persisted record.
//!
//! # Responsibility
//! - Build a field whose initial value mirrors an existing record.
//! - Write a cleaned range back onto the record's two timestamp
//!   attributes.
//!
//! # Invariants
//! - The combined range string itself is never persisted; only the two
//!   component attributes are.
//! - A failed submission leaves the record untouched.

use chrono::{DateTime, Utc};

use crate::range::field::{FieldError, TimeRangeField};
use crate::range::{RangeConfig, TimeRange};

/// A record exposing a start/end timestamp pair.
///
/// This is the entire contract the range core needs from a stored record:
/// two attributes read on load and written on save.
pub trait TimeRanged {
    /// Current pair, or `None` when the record has no times yet.
    fn time_range(&self) -> Option<TimeRange>;
    /// Overwrites both timestamp attributes from a validated range.
    fn set_time_range(&mut self, range: TimeRange);
}

/// Form wrapper wiring a [`TimeRangeField`] to a [`TimeRanged`] record.
#[derive(Debug, Clone)]
pub struct TimeRangedForm {
    pub field: TimeRangeField,
}

impl TimeRangedForm {
    /// Form for creating a new record; the field pre-fills with the
    /// next-full-hour default when rendered.
    pub fn for_new(config: RangeConfig) -> Self {
        Self {
            field: TimeRangeField::new(config),
        }
    }

    /// Form for editing an existing record; the field's initial value is
    /// the record's current pair.
    pub fn for_instance(record: &impl TimeRanged, config: RangeConfig) -> Self {
        let mut field = TimeRangeField::new(config);
        if let Some(range) = record.time_range() {
            field = field.with_initial(range);
        }
        Self { field }
    }

    /// Returns the form with past starts permitted or rejected.
    pub fn allow_past(mut self, allow: bool) -> Self {
        self.field = self.field.allow_past(allow);
        self
    }

    /// Parses and validates a submission without touching any record.
    pub fn clean(&self, raw: &str, now: DateTime<Utc>) -> Result<TimeRange, FieldError> {
        self.field.clean(raw, now)
    }

    /// Cleans a submission and writes the result onto the record.
    ///
    /// The caller persists the record afterwards; on failure the record is
    /// returned to the caller unchanged.
    pub fn bind(
        &self,
        record: &mut impl TimeRanged,
        raw: &str,
        now: DateTime<Utc>,
    ) -> Result<TimeRange, FieldError> {
        let range = self.field.clean(raw, now)?;
        record.set_time_range(range);
        Ok(range)
    }

    /// Redisplay value: submitted text passes through unchanged, otherwise
    /// the initial pair (or the default) is formatted.
    pub fn render_value(&self, submitted: Option<&str>, now: DateTime<Utc>) -> String {
        match submitted {
            Some(text) => text.to_string(),
            None => self.field.render_initial(now),
        }
    }
}
