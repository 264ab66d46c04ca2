//! Month calendar grids with day activation rules and date selection.
//!
//! The crate decides, for every day shown in a month view, whether it belongs
//! to the displayed month, whether it can be picked, and how successive picks
//! build up a date range. Drawing is left to the host through
//! [`TitleRenderer`], [`HeaderRenderer`] and [`CellRenderer`]; date arithmetic
//! is delegated to a [`Calendar`].
//!
//! ```
//! use calendar_grid::{
//!     CalendarConfig, CalendarDay, CalendarLayout, CellRenderer, DayCell, FixedClock, Gregorian,
//!     HeaderRenderer, MonthTitle, RenderedMonth, TitleRenderer, Weekday,
//! };
//!
//! struct Plain;
//!
//! impl TitleRenderer for Plain {
//!     type Title = String;
//!     fn title(&mut self, title: &MonthTitle) -> String {
//!         title.month.to_string()
//!     }
//! }
//!
//! impl HeaderRenderer for Plain {
//!     type Header = Weekday;
//!     fn header(&mut self, weekday: Weekday, _day: CalendarDay) -> Weekday {
//!         weekday
//!     }
//! }
//!
//! impl CellRenderer for Plain {
//!     type Cell = Option<u32>;
//!     fn active_cell(&mut self, cell: &DayCell) -> Option<u32> {
//!         Some(cell.day.day())
//!     }
//!     fn disabled_cell(&mut self, _cell: &DayCell) -> Option<u32> {
//!         None
//!     }
//! }
//!
//! let february = CalendarDay::new(2024, 2, 14).unwrap();
//! let layout = CalendarLayout::new_single(
//!     february,
//!     CalendarConfig::default(),
//!     Gregorian::default(),
//!     &FixedClock(february),
//! );
//! let rendered: RenderedMonth<String, Weekday, Option<u32>> = layout.render(&mut Plain);
//! assert_eq!(rendered.title, "2024-02-01");
//! assert_eq!(rendered.headers[0], Weekday::Sunday);
//! assert_eq!(rendered.cells.iter().flatten().count(), 29);
//! ```

mod activation;
mod calendar;
mod config;
mod consts;
mod grid;
mod layout;
mod prelude;
mod range;
mod selection;
#[cfg(test)]
mod test_utils;
mod types;

pub use activation::{Activation, ActivationPolicy, DisabledReason};
pub use calendar::{Calendar, CalendarError, Clock, FixedClock, Gregorian, SystemClock};
pub use config::CalendarConfig;
pub use consts::*;
pub use grid::MonthGrid;
pub use layout::{
    CalendarLayout, CellRenderer, DayCell, HeaderRenderer, MonthTitle, Navigation, PickOutcome, RenderedMonth,
    SelectionMode, TitleRenderer,
};
pub use range::{DateRange, RangeError};
pub use selection::RangeSelection;
pub use types::{DayInterval, Weekday};

use crate::prelude::*;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};
use std::str::FromStr;

/// A calendar date with no time-of-day component.
///
/// Values built from date-times are truncated to their day, so two days
/// compare equal whenever they fall on the same calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display(fmt = "{}", "_0.format(DAY_FORMAT)")]
pub struct CalendarDay(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDay {
    /// Creates a day from its components.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDate` if the components do not name a real date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ParseError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(ParseError::InvalidDate { year, month, day })
    }

    /// Truncates a zoned date-time to the calendar day it falls on in its own zone.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self(datetime.date_naive())
    }

    /// Returns the year
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1-12)
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day of the month (1-31)
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the underlying chrono date
    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDateTime> for CalendarDay {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime.date())
    }
}

impl FromStr for CalendarDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Years outside 0000-9999 display with a sign, e.g. -0001-01-01
        let (negative, unsigned) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        // Strictly YYYY-MM-DD
        let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            )));
        };

        let year = Some(*year)
            .filter(|year| !year.is_empty() && year.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|year| year.parse::<i32>().ok())
            .map(|year| if negative { -year } else { year })
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let day = day
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
