//! Fixture helpers shared by the unit tests.

use crate::{CalendarDay, DateRange, FixedClock, Gregorian};

pub fn day(year: i32, month: u32, day: u32) -> CalendarDay {
    CalendarDay::new(year, month, day).expect("test fixture day must be a real date")
}

pub fn range(start: CalendarDay, end: CalendarDay) -> DateRange {
    DateRange::checked(Some(start), Some(end)).expect("test fixture range must not be inverted")
}

pub fn days(year: i32, month: u32, day_numbers: &[u32]) -> Vec<CalendarDay> {
    day_numbers.iter().map(|&d| day(year, month, d)).collect()
}

pub const fn sunday_first() -> Gregorian {
    Gregorian::sunday_first()
}

pub fn clock(year: i32, month: u32, d: u32) -> FixedClock {
    FixedClock(day(year, month, d))
}
