use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarDay, OPEN_BOUND, ParseError, RANGE_SEPARATOR};

/// Represents a closed range of days where either side may be open.
/// A missing start is unbounded below, a missing end unbounded above.
///
/// The start is expected to be on or before the end, but this is not
/// enforced: ranges usually come from host configuration, and an inverted
/// range simply contains nothing. Use [`DateRange::checked`] to reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    start: Option<CalendarDay>,
    end:   Option<CalendarDay>,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDay, end: CalendarDay },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a range without validating the bound order.
    pub const fn new(start: Option<CalendarDay>, end: Option<CalendarDay>) -> Self {
        Self { start, end }
    }

    /// Creates a range, rejecting an inverted one.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if both bounds are set and start > end.
    pub fn checked(start: Option<CalendarDay>, end: Option<CalendarDay>) -> Result<Self, RangeError> {
        let range = Self::new(start, end);
        match (start, end) {
            (Some(start), Some(end)) if range.is_inverted() => Err(RangeError::InvalidRange { start, end }),
            _ => Ok(range),
        }
    }

    /// Range containing every day
    pub const fn unbounded() -> Self {
        Self::new(None, None)
    }

    /// Range from `start` onwards
    pub const fn starting(start: CalendarDay) -> Self {
        Self::new(Some(start), None)
    }

    /// Range up to and including `end`
    pub const fn until(end: CalendarDay) -> Self {
        Self::new(None, Some(end))
    }

    /// Range containing only `day`
    pub const fn single(day: CalendarDay) -> Self {
        Self::new(Some(day), Some(day))
    }

    /// Returns the start of the range, if bounded below
    pub const fn start(&self) -> Option<CalendarDay> {
        self.start
    }

    /// Returns the end of the range, if bounded above
    pub const fn end(&self) -> Option<CalendarDay> {
        self.end
    }

    /// True when both bounds are set and the start comes after the end
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start > end)
    }

    /// True when both bounds are set
    pub const fn is_bounded(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Checks if the range contains a given day (both bounds inclusive).
    /// An inverted range contains nothing.
    pub fn contains(&self, day: CalendarDay) -> bool {
        if self.is_inverted() {
            return false;
        }
        let after_start = self.start.is_none_or(|start| start <= day);
        let before_end = self.end.is_none_or(|end| day <= end);
        after_start && before_end
    }

    /// Checks if this range has any day in common with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_inverted() || other.is_inverted() {
            return false;
        }
        // Missing bounds compare as infinitely far out
        let starts_before_other_ends = match (self.start, other.end) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        };
        let other_starts_before_end = match (other.start, self.end) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        };
        starts_before_other_ends && other_starts_before_end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(start) => write!(f, "{start}")?,
            None => f.write_str(OPEN_BOUND)?,
        }
        write!(f, "{RANGE_SEPARATOR}")?;
        match self.end {
            Some(end) => write!(f, "{end}"),
            None => f.write_str(OPEN_BOUND),
        }
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();
        if separator_count != 1 {
            return Err(RangeError::InvalidFormat(format!(
                "expected one '{RANGE_SEPARATOR}' separator, found {separator_count}: {s}"
            )));
        }

        let (start_str, end_str) = trimmed
            .split_once(RANGE_SEPARATOR)
            .ok_or_else(|| RangeError::InvalidFormat(trimmed.to_owned()))?;

        Ok(Self::new(parse_bound(start_str)?, parse_bound(end_str)?))
    }
}

fn parse_bound(s: &str) -> Result<Option<CalendarDay>, RangeError> {
    let trimmed = s.trim();
    if trimmed == OPEN_BOUND || trimmed.is_empty() {
        return Ok(None);
    }
    Ok(Some(trimmed.parse::<CalendarDay>()?))
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{day, range};

    #[test]
    fn test_checked_range_cases() {
        struct TestCase {
            start:          Option<CalendarDay>,
            end:            Option<CalendarDay>,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                start:          Some(day(2024, 2, 10)),
                end:            Some(day(2024, 2, 20)),
                should_succeed: true,
                description:    "valid range (start < end)",
            },
            TestCase {
                start:          Some(day(2024, 2, 20)),
                end:            Some(day(2024, 2, 10)),
                should_succeed: false,
                description:    "invalid range (start > end)",
            },
            TestCase {
                start:          Some(day(2024, 2, 10)),
                end:            Some(day(2024, 2, 10)),
                should_succeed: true,
                description:    "equal dates (start == end)",
            },
            TestCase {
                start:          None,
                end:            Some(day(2024, 2, 10)),
                should_succeed: true,
                description:    "open start",
            },
            TestCase {
                start:          None,
                end:            None,
                should_succeed: true,
                description:    "fully open",
            },
        ];

        for case in &cases {
            let result = DateRange::checked(case.start, case.end);
            assert_eq!(result.is_ok(), case.should_succeed, "{}", case.description);
        }
    }

    #[test]
    fn test_checked_reports_bounds() {
        let result = DateRange::checked(Some(day(2024, 2, 20)), Some(day(2024, 2, 10)));
        assert_eq!(
            result,
            Err(RangeError::InvalidRange {
                start: day(2024, 2, 20),
                end:   day(2024, 2, 10),
            })
        );
    }

    #[test]
    fn test_accessors() {
        let bounded = range(day(2024, 2, 10), day(2024, 2, 20));
        assert_eq!(bounded.start(), Some(day(2024, 2, 10)));
        assert_eq!(bounded.end(), Some(day(2024, 2, 20)));
        assert!(bounded.is_bounded());
        assert!(!DateRange::starting(day(2024, 2, 10)).is_bounded());
    }

    #[test]
    fn test_contains_inclusive_bounds() {
        let bounded = range(day(2024, 2, 10), day(2024, 2, 20));

        assert!(bounded.contains(day(2024, 2, 10)));
        assert!(bounded.contains(day(2024, 2, 15)));
        assert!(bounded.contains(day(2024, 2, 20)));
        assert!(!bounded.contains(day(2024, 2, 9)));
        assert!(!bounded.contains(day(2024, 2, 21)));
    }

    #[test]
    fn test_contains_open_bounds() {
        let anchor = day(2024, 2, 10);

        assert!(DateRange::starting(anchor).contains(day(2999, 1, 1)));
        assert!(!DateRange::starting(anchor).contains(day(2024, 2, 9)));
        assert!(DateRange::until(anchor).contains(day(1900, 1, 1)));
        assert!(!DateRange::until(anchor).contains(day(2024, 2, 11)));
        assert!(DateRange::unbounded().contains(anchor));
        assert!(DateRange::single(anchor).contains(anchor));
        assert!(!DateRange::single(anchor).contains(day(2024, 2, 11)));
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let inverted = DateRange::new(Some(day(2024, 2, 20)), Some(day(2024, 2, 10)));
        assert!(inverted.is_inverted());
        for probe in [day(2024, 2, 9), day(2024, 2, 10), day(2024, 2, 15), day(2024, 2, 20)] {
            assert!(!inverted.contains(probe), "inverted range contained {probe}");
        }
    }

    #[test]
    fn test_contains_is_monotonic_when_widening() {
        let narrow = range(day(2024, 2, 10), day(2024, 2, 20));
        let widened = [
            range(day(2024, 2, 1), day(2024, 2, 20)),
            range(day(2024, 2, 10), day(2024, 3, 1)),
            DateRange::new(None, Some(day(2024, 2, 20))),
            DateRange::new(Some(day(2024, 2, 10)), None),
            DateRange::unbounded(),
        ];

        let mut probe = day(2024, 1, 25);
        while probe <= day(2024, 3, 5) {
            if narrow.contains(probe) {
                for wide in &widened {
                    assert!(wide.contains(probe), "{wide} lost {probe}");
                }
            }
            probe = probe
                .date()
                .succ_opt()
                .map(CalendarDay::from)
                .expect("next day exists");
        }
    }

    #[test]
    fn test_overlaps() {
        let february = range(day(2024, 2, 1), day(2024, 2, 29));
        let late_feb = range(day(2024, 2, 20), day(2024, 3, 10));
        let march = range(day(2024, 3, 1), day(2024, 3, 31));

        assert!(february.overlaps(&late_feb));
        assert!(late_feb.overlaps(&february));
        assert!(!february.overlaps(&march));
        assert!(DateRange::starting(day(2024, 3, 31)).overlaps(&march));
        assert!(DateRange::unbounded().overlaps(&march));
        assert!(!DateRange::until(day(2024, 2, 29)).overlaps(&march));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            range(day(2024, 2, 10), day(2024, 2, 20)).to_string(),
            "2024-02-10/2024-02-20"
        );
        assert_eq!(DateRange::starting(day(2024, 2, 10)).to_string(), "2024-02-10/..");
        assert_eq!(DateRange::until(day(2024, 2, 20)).to_string(), "../2024-02-20");
        assert_eq!(DateRange::unbounded().to_string(), "../..");
    }

    #[test]
    fn test_from_str() {
        let parsed = "2024-02-10/2024-02-20"
            .parse::<DateRange>()
            .expect("failed to parse bounded range");
        assert_eq!(parsed, range(day(2024, 2, 10), day(2024, 2, 20)));

        let parsed = " ../2024-02-20 ".parse::<DateRange>().expect("failed to parse open start");
        assert_eq!(parsed, DateRange::until(day(2024, 2, 20)));

        let parsed = "2024-02-10/".parse::<DateRange>().expect("failed to parse empty end");
        assert_eq!(parsed, DateRange::starting(day(2024, 2, 10)));
    }

    #[test]
    fn test_from_str_keeps_inverted_ranges() {
        let parsed = "2024-02-20/2024-02-10"
            .parse::<DateRange>()
            .expect("inverted ranges are representable");
        assert!(parsed.is_inverted());
    }

    #[test]
    fn test_from_str_errors() {
        let err = "2024-02-10".parse::<DateRange>().expect_err("missing separator");
        assert!(err.to_string().contains("found 0"));

        let err = "2024-02-10/2024-02-11/2024-02-12"
            .parse::<DateRange>()
            .expect_err("too many separators");
        assert!(err.to_string().contains("found 2"));

        let err = "2024-02-30/..".parse::<DateRange>().expect_err("invalid day");
        assert!(matches!(err, RangeError::ParseError(ParseError::InvalidDate { .. })));
    }

    #[test]
    fn test_serde_string_format() {
        let value = range(day(2024, 2, 10), day(2024, 2, 20));
        let json = serde_json::to_string(&value).expect("failed to serialize range to JSON");
        assert_eq!(json, r#""2024-02-10/2024-02-20""#);

        let parsed: DateRange = serde_json::from_str(&json).expect("failed to deserialize range from JSON");
        assert_eq!(parsed, value);

        let open: DateRange = serde_json::from_str(r#""../2024-02-20""#).expect("open range from JSON");
        assert_eq!(open, DateRange::until(day(2024, 2, 20)));
    }
}
