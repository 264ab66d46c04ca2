//! Day grid covering a month in whole weeks.

use std::slice::{ChunksExact, Iter};

use crate::{Calendar, CalendarDay, CalendarError, DAYS_IN_WEEK, MAX_GRID_DAYS};

/// The days shown for one month: every day of the month plus the leading and
/// trailing days of adjacent months needed to fill whole weeks.
///
/// The length is always a multiple of seven. A grid is never edited after it
/// is built; moving to another month builds a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthGrid {
    month: CalendarDay,
    days:  Vec<CalendarDay>,
}

impl MonthGrid {
    /// Builds the grid for the month containing `day`.
    ///
    /// If the calendar cannot produce the month or its boundary weeks the grid
    /// is empty, which callers should treat as nothing to render.
    pub fn generate<C: Calendar + ?Sized>(day: CalendarDay, calendar: &C) -> Self {
        Self::try_generate(day, calendar).unwrap_or_else(|error| {
            let month = calendar.start_of_month(day);
            tracing::debug!(%month, %error, "month grid unavailable; rendering nothing");
            Self {
                month,
                days: Vec::new(),
            }
        })
    }

    /// Builds the grid for the month containing `day`, reporting why it
    /// cannot be laid out.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the calendar cannot represent the
    /// month or its boundary weeks, and `CalendarError::Inconsistent` if its
    /// answers do not make up at most six whole weeks of ascending days.
    pub fn try_generate<C: Calendar + ?Sized>(day: CalendarDay, calendar: &C) -> Result<Self, CalendarError> {
        let month = calendar.start_of_month(day);
        let days = Self::collect_days(day, calendar)?;
        tracing::debug!(%month, days = days.len(), "generated month grid");
        Ok(Self { month, days })
    }

    fn collect_days<C: Calendar + ?Sized>(
        day: CalendarDay,
        calendar: &C,
    ) -> Result<Vec<CalendarDay>, CalendarError> {
        let month = calendar.month_interval(day)?;
        let first_week = calendar.week_interval(month.start)?;
        let last_week = calendar.week_interval(month.end)?;

        let mut days = Vec::with_capacity(MAX_GRID_DAYS);
        let mut current = first_week.start;
        days.push(current);
        while current < last_week.end {
            if days.len() == MAX_GRID_DAYS {
                return Err(CalendarError::inconsistent(
                    month.start,
                    format!("grid runs past {MAX_GRID_DAYS} days"),
                ));
            }
            let next = calendar.add_days(current, 1)?;
            if next <= current {
                return Err(CalendarError::inconsistent(current, "adding a day did not advance"));
            }
            days.push(next);
            current = next;
        }

        if days.len() % DAYS_IN_WEEK != 0 {
            return Err(CalendarError::inconsistent(
                month.start,
                format!("{} days is not a whole number of weeks", days.len()),
            ));
        }
        Ok(days)
    }

    /// First day of the month this grid covers
    pub const fn month(&self) -> CalendarDay {
        self.month
    }

    /// Every day in display order
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub fn iter(&self) -> Iter<'_, CalendarDay> {
        self.days.iter()
    }

    /// The grid split into rows of seven days
    pub fn weeks(&self) -> ChunksExact<'_, CalendarDay> {
        self.days.chunks_exact(DAYS_IN_WEEK)
    }

    /// The first row, used to label the weekday columns
    pub fn first_week(&self) -> &[CalendarDay] {
        self.days.get(..DAYS_IN_WEEK).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Checks if a day appears anywhere in the grid, including filler days
    pub fn contains(&self, day: CalendarDay) -> bool {
        self.days.binary_search(&day).is_ok()
    }
}

impl<'a> IntoIterator for &'a MonthGrid {
    type Item = &'a CalendarDay;
    type IntoIter = Iter<'a, CalendarDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
