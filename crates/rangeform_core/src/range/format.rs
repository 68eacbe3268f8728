//! Range formatter: value -> single display string.
//!
//! # Responsibility
//! - Render a range value into the `"<start> - <end>"` input string.
//! - Provide the `&ndash;` read-only variant for listings.
//! - Default an empty value to the next full hour in the display timezone.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Duration, Timelike, Utc};

use crate::range::{RangeConfig, TimeRange};

/// Literal separator between the two halves of an editable range string.
pub const RANGE_SEPARATOR: &str = " - ";

/// Separator used in read-only HTML display strings.
pub const DISPLAY_SEPARATOR: &str = " &ndash; ";

/// Value handed to the formatter when rendering a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeValue {
    /// Nothing submitted or stored yet.
    Empty,
    /// Raw submitted text, redisplayed unchanged.
    Text(String),
    /// Concrete instants; must contain exactly two entries.
    Times(Vec<DateTime<Utc>>),
}

/// Caller contract violation: a `RangeValue::Times` with an entry count
/// other than two. Not a user-facing validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeCountError {
    pub actual: usize,
}

impl Display for TimeCountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "range value must contain exactly two date/times, got {}",
            self.actual
        )
    }
}

impl Error for TimeCountError {}

/// Returns the current time truncated to the hour plus one hour, in UTC.
///
/// The truncation happens in the display timezone, so the rendered default
/// lands on a full local hour rather than a full UTC hour.
pub fn next_full_hour(now: DateTime<Utc>, config: &RangeConfig) -> DateTime<Utc> {
    let local = now.with_timezone(&config.display_offset);
    let floored = local
        .with_minute(0)
        .and_then(|value| value.with_second(0))
        .and_then(|value| value.with_nanosecond(0))
        .expect("zeroing sub-hour fields keeps a fixed-offset time valid");
    (floored + Duration::hours(1)).with_timezone(&Utc)
}

/// Renders one instant with the editable input pattern.
pub fn input_str(instant: DateTime<Utc>, config: &RangeConfig) -> String {
    instant
        .with_timezone(&config.display_offset)
        .format(&config.input_format)
        .to_string()
}

/// Renders a range with the editable input pattern, `"<start> - <end>"`.
pub fn input_range_str(range: &TimeRange, config: &RangeConfig) -> String {
    format!(
        "{}{RANGE_SEPARATOR}{}",
        input_str(range.start, config),
        input_str(range.end, config)
    )
}

/// Renders a range with the read-only display pattern,
/// `"<start> &ndash; <end>"`.
pub fn display_range_str(range: &TimeRange, config: &RangeConfig) -> String {
    let start = range
        .start
        .with_timezone(&config.display_offset)
        .format(&config.display_format);
    let end = range
        .end
        .with_timezone(&config.display_offset)
        .format(&config.display_format);
    format!("{start}{DISPLAY_SEPARATOR}{end}")
}

/// Renders a field value into a single editable string.
///
/// - `Empty` defaults both halves to the next full hour.
/// - `Text` passes through unchanged, so a rejected submission redisplays
///   exactly as typed.
/// - `Times` requires exactly two entries; anything else is a
///   [`TimeCountError`].
pub fn format_value(
    value: &RangeValue,
    config: &RangeConfig,
    now: DateTime<Utc>,
) -> Result<String, TimeCountError> {
    match value {
        RangeValue::Empty => {
            let default = next_full_hour(now, config);
            Ok(input_range_str(&TimeRange::new(default, default), config))
        }
        RangeValue::Text(text) => Ok(text.clone()),
        RangeValue::Times(times) => match times.as_slice() {
            [start, end] => Ok(input_range_str(&TimeRange::new(*start, *end), config)),
            other => Err(TimeCountError {
                actual: other.len(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn next_full_hour_rounds_up_mid_hour() {
        let config = RangeConfig::default();
        let now = Utc.with_ymd_and_hms(2030, 1, 15, 9, 26, 59).unwrap();
        let rounded = next_full_hour(now, &config);
        assert_eq!(rounded, Utc.with_ymd_and_hms(2030, 1, 15, 10, 0, 0).unwrap());
    }

    #[test]
    fn next_full_hour_on_the_hour_still_moves_forward() {
        let config = RangeConfig::default();
        let now = Utc.with_ymd_and_hms(2030, 1, 15, 9, 0, 0).unwrap();
        let rounded = next_full_hour(now, &config);
        assert_eq!(rounded, Utc.with_ymd_and_hms(2030, 1, 15, 10, 0, 0).unwrap());
    }

    #[test]
    fn input_range_str_uses_separator_and_pattern() {
        let config = RangeConfig::default();
        let start = Utc.with_ymd_and_hms(2030, 1, 15, 15, 30, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2030, 1, 16, 9, 0, 0).unwrap();
        let rendered = input_range_str(&TimeRange::new(start, end), &config);
        assert_eq!(rendered, "01/15/2030 03:30 PM - 01/16/2030 09:00 AM");
    }

    #[test]
    fn display_range_str_uses_html_separator() {
        let config = RangeConfig::default();
        let start = Utc.with_ymd_and_hms(2030, 1, 15, 15, 30, 0).unwrap();
        let rendered = display_range_str(&TimeRange::new(start, start), &config);
        assert!(rendered.contains(" &ndash; "));
        assert!(rendered.contains("Jan. 15, 2030, 3:30 PM"));
    }
}
