//! Range parser: raw string -> `TimeRange`.
//!
//! Splitting and token parsing only; logical validation of the resulting
//! pair lives in [`crate::range::validate`].

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::range::format::RANGE_SEPARATOR;
use crate::range::{RangeConfig, TimeRange};

/// User-facing failure while turning a submitted string into a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The string split into a single token.
    ExpectedMoreDates,
    /// The string split into three or more tokens.
    ExpectedTwoDates,
    /// A token did not match the configured input pattern.
    InvalidDateTime(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedMoreDates => write!(f, "Expected more than one date."),
            Self::ExpectedTwoDates => write!(f, "Expected exactly two dates."),
            Self::InvalidDateTime(_) => write!(f, "Enter a valid date/time."),
        }
    }
}

impl Error for ParseError {}

/// Splits a raw submission into exactly two trimmed tokens.
pub fn split_range(raw: &str) -> Result<(&str, &str), ParseError> {
    let tokens: Vec<&str> = raw.trim().split(RANGE_SEPARATOR).collect();
    match tokens.as_slice() {
        [start, end] => Ok((start.trim(), end.trim())),
        [_] => Err(ParseError::ExpectedMoreDates),
        _ => Err(ParseError::ExpectedTwoDates),
    }
}

/// Parses one token in the display timezone and converts it to UTC.
pub fn parse_instant(token: &str, config: &RangeConfig) -> Result<DateTime<Utc>, ParseError> {
    let naive = NaiveDateTime::parse_from_str(token, &config.input_format)
        .map_err(|_| ParseError::InvalidDateTime(token.to_string()))?;
    let local = naive
        .and_local_timezone(config.display_offset)
        .single()
        .ok_or_else(|| ParseError::InvalidDateTime(token.to_string()))?;
    Ok(local.with_timezone(&Utc))
}

/// Parses a full `"<start> - <end>"` submission into an unvalidated range.
pub fn parse_range(raw: &str, config: &RangeConfig) -> Result<TimeRange, ParseError> {
    let (start_token, end_token) = split_range(raw)?;
    Ok(TimeRange::new(
        parse_instant(start_token, config)?,
        parse_instant(end_token, config)?,
    ))
}
