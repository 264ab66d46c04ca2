//! Decides which days of a month grid can be picked.

use serde::{Deserialize, Serialize};

use crate::{Calendar, CalendarDay, DateRange, Weekday, prelude::*};

/// Why a day is not selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DisabledReason {
    /// The day is filler from an adjacent month.
    #[display(fmt = "outside displayed month")]
    OutsideMonth,
    /// The day is listed in the disabled dates.
    #[display(fmt = "disabled date")]
    DisabledDate,
    /// The day falls on an inactive weekday.
    #[display(fmt = "inactive weekday")]
    InactiveWeekday,
    /// No active range contains the day.
    #[display(fmt = "outside active ranges")]
    OutsideActiveRanges,
}

/// Outcome of classifying a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    Active,
    Disabled(DisabledReason),
}

impl Activation {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn disabled_reason(self) -> Option<DisabledReason> {
        match self {
            Self::Active => None,
            Self::Disabled(reason) => Some(reason),
        }
    }
}

/// Rules deciding whether a day is active.
///
/// Without active ranges every day of the displayed month is active and the
/// other lists are ignored. With active ranges (OR-combined), disabled dates
/// and inactive weekdays are carved out of them before range membership is
/// checked, so a host can block holidays or weekends without splitting its
/// ranges.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivationPolicy {
    active_ranges:     Option<Vec<DateRange>>,
    disabled_dates:    Vec<CalendarDay>,
    inactive_weekdays: Vec<Weekday>,
}

impl ActivationPolicy {
    pub const fn new(
        active_ranges: Option<Vec<DateRange>>,
        disabled_dates: Vec<CalendarDay>,
        inactive_weekdays: Vec<Weekday>,
    ) -> Self {
        Self {
            active_ranges,
            disabled_dates,
            inactive_weekdays,
        }
    }

    /// Plain month calendar: every day of the displayed month is active
    pub const fn month_only() -> Self {
        Self::new(None, Vec::new(), Vec::new())
    }

    pub fn active_ranges(&self) -> Option<&[DateRange]> {
        self.active_ranges.as_deref()
    }

    pub fn disabled_dates(&self) -> &[CalendarDay] {
        &self.disabled_dates
    }

    pub fn inactive_weekdays(&self) -> &[Weekday] {
        &self.inactive_weekdays
    }

    /// Classifies `day` for the month containing `displayed_month`.
    pub fn classify<C: Calendar + ?Sized>(
        &self,
        day: CalendarDay,
        displayed_month: CalendarDay,
        calendar: &C,
    ) -> Activation {
        let in_month = calendar.is_same_month(day, displayed_month);

        let Some(ranges) = &self.active_ranges else {
            return if in_month {
                Activation::Active
            } else {
                Activation::Disabled(DisabledReason::OutsideMonth)
            };
        };

        if self
            .disabled_dates
            .iter()
            .any(|&disabled| calendar.is_same_day(disabled, day))
        {
            return Activation::Disabled(DisabledReason::DisabledDate);
        }

        if self.inactive_weekdays.contains(&calendar.weekday_of(day)) {
            return Activation::Disabled(DisabledReason::InactiveWeekday);
        }

        if !in_month {
            return Activation::Disabled(DisabledReason::OutsideMonth);
        }

        if ranges.iter().any(|range| range.contains(day)) {
            Activation::Active
        } else {
            Activation::Disabled(DisabledReason::OutsideActiveRanges)
        }
    }

    pub fn is_active<C: Calendar + ?Sized>(
        &self,
        day: CalendarDay,
        displayed_month: CalendarDay,
        calendar: &C,
    ) -> bool {
        self.classify(day, displayed_month, calendar).is_active()
    }

    /// Checks if any configured active range contains `day`, ignoring the
    /// displayed month and carve-outs.
    pub fn in_active_range(&self, day: CalendarDay) -> bool {
        self.active_ranges
            .as_deref()
            .is_some_and(|ranges| ranges.iter().any(|range| range.contains(day)))
    }
}
