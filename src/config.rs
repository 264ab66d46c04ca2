use serde::{Deserialize, Serialize};

use crate::{ActivationPolicy, CalendarDay, DateRange, Weekday};

/// Construction options for a [`CalendarLayout`](crate::CalendarLayout).
///
/// Deserializes from a host's own configuration; every field is optional.
/// Ranges and days use their text forms (`2024-02-10/2024-02-20`,
/// `2024-02-15`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Days that may be active, OR-combined. `None` makes every day of the
    /// displayed month active and ignores the two carve-out lists.
    pub active_ranges:     Option<Vec<DateRange>>,
    /// Days carved out of the active ranges.
    pub disabled_dates:    Vec<CalendarDay>,
    /// Weekdays carved out of the active ranges.
    pub inactive_weekdays: Vec<Weekday>,
    /// `false` carves Saturday and Sunday out as well.
    pub weekends_active:   bool,
    /// Month shown first; defaults to the selected date or today.
    pub initial_month:     Option<CalendarDay>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            active_ranges:     None,
            disabled_dates:    Vec::new(),
            inactive_weekdays: Vec::new(),
            weekends_active:   true,
            initial_month:     None,
        }
    }
}

impl CalendarConfig {
    #[must_use]
    pub fn with_active_ranges(mut self, ranges: impl IntoIterator<Item = DateRange>) -> Self {
        self.active_ranges = Some(ranges.into_iter().collect());
        self
    }

    /// Adds one range to the active ranges
    #[must_use]
    pub fn with_active_range(mut self, range: DateRange) -> Self {
        self.active_ranges.get_or_insert_with(Vec::new).push(range);
        self
    }

    #[must_use]
    pub fn with_disabled_dates(mut self, days: impl IntoIterator<Item = CalendarDay>) -> Self {
        self.disabled_dates = days.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_inactive_weekdays(mut self, weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        self.inactive_weekdays = weekdays.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_weekends_active(mut self, weekends_active: bool) -> Self {
        self.weekends_active = weekends_active;
        self
    }

    #[must_use]
    pub fn with_initial_month(mut self, month: CalendarDay) -> Self {
        self.initial_month = Some(month);
        self
    }

    /// Weekdays that are inactive once the weekend switch is applied
    pub fn effective_inactive_weekdays(&self) -> Vec<Weekday> {
        let mut weekdays = self.inactive_weekdays.clone();
        if !self.weekends_active {
            for weekend in Weekday::WEEKEND {
                if !weekdays.contains(&weekend) {
                    weekdays.push(weekend);
                }
            }
        }
        weekdays
    }

    /// Builds the activation policy described by this configuration
    pub fn policy(&self) -> ActivationPolicy {
        ActivationPolicy::new(
            self.active_ranges.clone(),
            self.disabled_dates.clone(),
            self.effective_inactive_weekdays(),
        )
    }
}
