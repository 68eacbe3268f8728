//! Date/time-range form field core.
//!
//! # Responsibility
//! - Define the `TimeRange` value and the shared `RangeConfig` carried by
//!   every formatting/parsing/validation entry point.
//! - Compose the formatter, parser, validator and binder into one reusable
//!   form-field component.
//!
//! # Invariants
//! - `TimeRange` ordering (`end >= start`) is enforced by validation, never
//!   by construction.
//! - All stored instants are UTC; the display offset only applies at the
//!   string boundary.

pub mod field;
pub mod form;
pub mod format;
pub mod parse;
pub mod validate;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Input pattern for each half of a submitted range string,
/// e.g. `12/28/2017 03:30 AM`.
pub const DATETIME_INPUT_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// Long pattern used for read-only display,
/// e.g. `Dec. 28, 2017, 3:30 AM`.
pub const DATETIME_DISPLAY_FORMAT: &str = "%b. %-d, %Y, %-I:%M %p";

/// An interval between two UTC instants.
///
/// Used as the transient form-level view over a record's two timestamp
/// attributes. A range that has not been provided yet is represented as
/// `Option<TimeRange>::None` at the field level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Pairs two instants without checking their order.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

/// Format and timezone configuration injected into every range component.
///
/// One value replaces the per-module format constants of earlier designs:
/// the same config instance must feed the formatter and the parser so a
/// rendered value always parses back.
#[derive(Debug, Clone)]
pub struct RangeConfig {
    /// Pattern each submitted token is parsed with and editable values are
    /// rendered with.
    pub input_format: String,
    /// Pattern for read-only display strings.
    pub display_format: String,
    /// Offset submitted tokens are interpreted in and rendered back to.
    pub display_offset: FixedOffset,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            input_format: DATETIME_INPUT_FORMAT.to_string(),
            display_format: DATETIME_DISPLAY_FORMAT.to_string(),
            display_offset: Utc.fix(),
        }
    }
}

impl RangeConfig {
    /// Returns the config with a different display offset.
    pub fn with_display_offset(mut self, offset: FixedOffset) -> Self {
        self.display_offset = offset;
        self
    }
}
