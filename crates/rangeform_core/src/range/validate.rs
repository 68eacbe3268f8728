//! Range validation rules.
//!
//! # Invariants
//! - `end < start` always fails, independent of `allow_past`.
//! - `start < now` fails only when past ranges are disallowed.
//! - `now` is truncated to minute precision before the past-check, so a
//!   value rendered and resubmitted within the same minute never fails on
//!   clock skew alone.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Timelike, Utc};

use crate::range::TimeRange;

/// One broken range rule, named for the caller to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    EndBeforeStart,
    StartInPast,
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndBeforeStart => write!(f, "End date is before start date."),
            Self::StartInPast => write!(f, "Start date is in the past."),
        }
    }
}

impl Error for Violation {}

/// Zeroes seconds and sub-second components.
pub fn truncate_to_minute(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant
        .with_second(0)
        .and_then(|value| value.with_nanosecond(0))
        .expect("zeroing sub-minute fields keeps a UTC time valid")
}

/// Checks a parsed range against the ordering and non-past rules.
///
/// Pure: returns every broken rule instead of failing on the first one;
/// the field decides how to surface them. `now` is read once by the caller
/// so a single validation pass compares against a single reference time.
pub fn check_time_range(
    range: &TimeRange,
    now: DateTime<Utc>,
    allow_past: bool,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if range.end < range.start {
        violations.push(Violation::EndBeforeStart);
    }

    if !allow_past && range.start < truncate_to_minute(now) {
        violations.push(Violation::StartInPast);
    }

    violations
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 6, 1, hour, minute, second).unwrap()
    }

    #[test]
    fn ordered_future_range_passes() {
        let range = TimeRange::new(at(10, 0, 0), at(12, 0, 0));
        assert!(check_time_range(&range, at(9, 0, 0), false).is_empty());
    }

    #[test]
    fn end_before_start_fails_even_with_allow_past() {
        let range = TimeRange::new(at(12, 0, 0), at(10, 0, 0));
        assert_eq!(
            check_time_range(&range, at(9, 0, 0), true),
            vec![Violation::EndBeforeStart]
        );
    }

    #[test]
    fn past_start_fails_unless_allowed() {
        let range = TimeRange::new(at(8, 0, 0), at(10, 0, 0));
        assert_eq!(
            check_time_range(&range, at(9, 0, 0), false),
            vec![Violation::StartInPast]
        );
        assert!(check_time_range(&range, at(9, 0, 0), true).is_empty());
    }

    #[test]
    fn start_within_current_minute_is_not_past() {
        // now carries seconds; the start rendered a moment earlier does not.
        let start = at(9, 30, 0);
        let range = TimeRange::new(start, start);
        assert!(check_time_range(&range, at(9, 30, 41), false).is_empty());
    }

    #[test]
    fn past_end_with_future_start_is_only_an_ordering_problem() {
        // An end in the past on its own is not a rule; it always comes with
        // EndBeforeStart when the start is in the future.
        let range = TimeRange::new(at(12, 0, 0), at(8, 0, 0));
        assert_eq!(
            check_time_range(&range, at(9, 0, 0), false),
            vec![Violation::EndBeforeStart]
        );
    }

    #[test]
    fn reversed_past_range_reports_both_rules() {
        let now = at(12, 0, 0);
        let range = TimeRange::new(now - Duration::hours(2), now - Duration::hours(4));
        assert_eq!(
            check_time_range(&range, now, false),
            vec![Violation::EndBeforeStart, Violation::StartInPast]
        );
    }
}
