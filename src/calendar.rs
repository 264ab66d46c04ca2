//! Calendar arithmetic the rest of the crate delegates to.
//!
//! Nothing outside this module adds days or months. A host with a different
//! calendar system implements [`Calendar`] and hands it to the layout.

use chrono::{Datelike, Days, Local, Months};

use crate::{CalendarDay, DayInterval, Weekday, prelude::*};

/// Error type for calendar arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The result of an operation falls outside the supported date range.
    #[error("Date out of range: {operation} from {day}")]
    OutOfRange { day: CalendarDay, operation: String },

    /// The calendar returned results that cannot form a month grid.
    #[error("Inconsistent calendar result near {day}: {reason}")]
    Inconsistent { day: CalendarDay, reason: String },
}

impl CalendarError {
    fn out_of_range(day: CalendarDay, operation: impl Into<String>) -> Self {
        Self::OutOfRange {
            day,
            operation: operation.into(),
        }
    }

    pub(crate) fn inconsistent(day: CalendarDay, reason: impl Into<String>) -> Self {
        Self::Inconsistent {
            day,
            reason: reason.into(),
        }
    }
}

/// Day, week and month arithmetic consumed by the grid and the layout.
pub trait Calendar {
    /// The day a week starts on in this calendar
    fn first_weekday(&self) -> Weekday;

    /// First day of the month containing `day`
    fn start_of_month(&self, day: CalendarDay) -> CalendarDay;

    /// First and last day of the month containing `day`
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the month cannot be represented.
    fn month_interval(&self, day: CalendarDay) -> Result<DayInterval, CalendarError>;

    /// First and last day of the week containing `day`
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the week cannot be represented.
    fn week_interval(&self, day: CalendarDay) -> Result<DayInterval, CalendarError>;

    /// Moves `day` by `months` months (negative moves backwards)
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the result cannot be represented.
    fn add_months(&self, day: CalendarDay, months: i32) -> Result<CalendarDay, CalendarError>;

    /// Moves `day` by `days` days (negative moves backwards)
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the result cannot be represented.
    fn add_days(&self, day: CalendarDay, days: i64) -> Result<CalendarDay, CalendarError>;

    /// Day of the week `day` falls on
    fn weekday_of(&self, day: CalendarDay) -> Weekday;

    fn is_same_day(&self, a: CalendarDay, b: CalendarDay) -> bool {
        a == b
    }

    fn is_same_month(&self, a: CalendarDay, b: CalendarDay) -> bool {
        self.start_of_month(a) == self.start_of_month(b)
    }
}

/// The proleptic Gregorian calendar, backed by `chrono`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "gregorian ({first_weekday}-first)")]
pub struct Gregorian {
    first_weekday: Weekday,
}

impl Gregorian {
    /// Gregorian calendar with weeks starting on `first_weekday`
    pub const fn with_first_weekday(first_weekday: Weekday) -> Self {
        Self { first_weekday }
    }

    /// Gregorian calendar with weeks starting on Sunday
    pub const fn sunday_first() -> Self {
        Self::with_first_weekday(Weekday::Sunday)
    }

    /// Gregorian calendar with weeks starting on Monday (ISO 8601)
    pub const fn monday_first() -> Self {
        Self::with_first_weekday(Weekday::Monday)
    }
}

impl Default for Gregorian {
    fn default() -> Self {
        Self::sunday_first()
    }
}

impl Calendar for Gregorian {
    fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    fn start_of_month(&self, day: CalendarDay) -> CalendarDay {
        // Day 1 exists in every month chrono can represent
        day.date().with_day(1).map_or(day, CalendarDay::from)
    }

    fn month_interval(&self, day: CalendarDay) -> Result<DayInterval, CalendarError> {
        let start = self.start_of_month(day).date();
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| CalendarError::out_of_range(day, "month interval"))?;
        Ok(DayInterval::new(start.into(), end.into()))
    }

    fn week_interval(&self, day: CalendarDay) -> Result<DayInterval, CalendarError> {
        let offset = self.weekday_of(day).days_since(self.first_weekday);
        let start = self
            .add_days(day, -i64::from(offset))
            .map_err(|_| CalendarError::out_of_range(day, "week interval"))?;
        let end = self
            .add_days(start, 6)
            .map_err(|_| CalendarError::out_of_range(day, "week interval"))?;
        Ok(DayInterval::new(start, end))
    }

    fn add_months(&self, day: CalendarDay, months: i32) -> Result<CalendarDay, CalendarError> {
        let date = day.date();
        let step = Months::new(months.unsigned_abs());
        let moved = if months >= 0 {
            date.checked_add_months(step)
        } else {
            date.checked_sub_months(step)
        };
        moved
            .map(CalendarDay::from)
            .ok_or_else(|| CalendarError::out_of_range(day, format!("add {months} months")))
    }

    fn add_days(&self, day: CalendarDay, days: i64) -> Result<CalendarDay, CalendarError> {
        let date = day.date();
        let step = Days::new(days.unsigned_abs());
        let moved = if days >= 0 {
            date.checked_add_days(step)
        } else {
            date.checked_sub_days(step)
        };
        moved
            .map(CalendarDay::from)
            .ok_or_else(|| CalendarError::out_of_range(day, format!("add {days} days")))
    }

    fn weekday_of(&self, day: CalendarDay) -> Weekday {
        day.date().weekday().into()
    }
}

/// Source of "today" for highlighting the current day.
pub trait Clock {
    fn today(&self) -> CalendarDay;
}

/// Reads the local date from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDay {
        CalendarDay::from_datetime(&Local::now())
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub struct FixedClock(pub CalendarDay);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDay {
        self.0
    }
}
