//! The date/time-range form field.
//!
//! # Responsibility
//! - Compose parser and validator into a single `clean` entry point.
//! - Render initial/default values through the formatter.
//!
//! # Invariants
//! - `clean` reads `now` exactly once per call.
//! - A failed `clean` reports the first broken rule with its user-facing
//!   message; the submission is never partially applied.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};

use crate::range::format::{self, RangeValue, TimeCountError};
use crate::range::parse::{self, ParseError};
use crate::range::validate::{self, Violation};
use crate::range::{RangeConfig, TimeRange};

/// User-facing failure produced by [`TimeRangeField::clean`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The submission could not be split or parsed.
    Parse(ParseError),
    /// The parsed pair broke a range rule.
    Range(Violation),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Range(violation) => write!(f, "{violation}"),
        }
    }
}

impl Error for FieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Range(violation) => Some(violation),
        }
    }
}

impl From<ParseError> for FieldError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<Violation> for FieldError {
    fn from(value: Violation) -> Self {
        Self::Range(value)
    }
}

/// A single text input holding a `"<start> - <end>"` range.
#[derive(Debug, Clone)]
pub struct TimeRangeField {
    config: RangeConfig,
    /// Permits ranges starting before `now`.
    pub allow_past: bool,
    /// Pre-filled range, typically loaded from an existing record.
    pub initial: Option<TimeRange>,
}

impl TimeRangeField {
    pub fn new(config: RangeConfig) -> Self {
        Self {
            config,
            allow_past: false,
            initial: None,
        }
    }

    /// Returns the field with past starts permitted or rejected.
    pub fn allow_past(mut self, allow: bool) -> Self {
        self.allow_past = allow;
        self
    }

    /// Returns the field pre-filled with the given range.
    pub fn with_initial(mut self, range: TimeRange) -> Self {
        self.initial = Some(range);
        self
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    /// Parses and validates one submission.
    ///
    /// The single failure mode aborts the whole submission: either the
    /// string does not yield two parseable tokens, or the first broken
    /// range rule is returned.
    pub fn clean(&self, raw: &str, now: DateTime<Utc>) -> Result<TimeRange, FieldError> {
        let range = parse::parse_range(raw, &self.config)?;

        if let Some(violation) = validate::check_time_range(&range, now, self.allow_past)
            .into_iter()
            .next()
        {
            return Err(violation.into());
        }

        Ok(range)
    }

    /// Renders a value for redisplay. See [`format::format_value`].
    pub fn format_value(
        &self,
        value: &RangeValue,
        now: DateTime<Utc>,
    ) -> Result<String, TimeCountError> {
        format::format_value(value, &self.config, now)
    }

    /// Renders the initial range, or the next-full-hour default when the
    /// field has none.
    pub fn render_initial(&self, now: DateTime<Utc>) -> String {
        match &self.initial {
            Some(range) => format::input_range_str(range, &self.config),
            None => {
                let default = format::next_full_hour(now, &self.config);
                format::input_range_str(&TimeRange::new(default, default), &self.config)
            }
        }
    }

    /// Assembles a range from exactly two already-parsed instants.
    ///
    /// Any other arity is a caller contract violation, not a validation
    /// failure.
    pub fn compress(&self, times: &[DateTime<Utc>]) -> Result<TimeRange, TimeCountError> {
        match times {
            [start, end] => Ok(TimeRange::new(*start, *end)),
            other => Err(TimeCountError {
                actual: other.len(),
            }),
        }
    }
}
