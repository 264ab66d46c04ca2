use crate::consts::{DAYS_IN_WEEK, FIRST_WEEKDAY_NUMBER, LAST_WEEKDAY_NUMBER};
use crate::prelude::*;
use crate::CalendarDay;
use serde::{Deserialize, Serialize};

/// A day of the week.
///
/// Numbering is fixed at Sunday = 1 through Saturday = 7 no matter which day a
/// calendar treats as the start of its week; the start of the week is a
/// [`Calendar`](crate::Calendar) setting instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays in numbering order, Sunday first
    pub const ALL: [Self; DAYS_IN_WEEK] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Saturday and Sunday
    pub const WEEKEND: [Self; 2] = [Self::Saturday, Self::Sunday];

    /// Returns the weekday number, Sunday = 1 through Saturday = 7
    pub const fn number(self) -> u8 {
        match self {
            Self::Sunday => 1,
            Self::Monday => 2,
            Self::Tuesday => 3,
            Self::Wednesday => 4,
            Self::Thursday => 5,
            Self::Friday => 6,
            Self::Saturday => 7,
        }
    }

    /// Looks up a weekday by its number (Sunday = 1 through Saturday = 7)
    pub const fn from_number(number: u8) -> Option<Self> {
        if number < FIRST_WEEKDAY_NUMBER || number > LAST_WEEKDAY_NUMBER {
            return None;
        }
        Some(Self::ALL[(number - FIRST_WEEKDAY_NUMBER) as usize])
    }

    /// True for Saturday and Sunday, independent of the first day of the week
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    /// Number of days from `first` forward to `self` (0..=6).
    ///
    /// This is the column of `self` in a week that starts on `first`.
    pub const fn days_since(self, first: Self) -> u8 {
        (self.number() + DAYS_IN_WEEK as u8 - first.number()) % DAYS_IN_WEEK as u8
    }

    /// The following day of the week
    pub const fn succ(self) -> Self {
        Self::ALL[(self.number() as usize) % DAYS_IN_WEEK]
    }

    /// The seven weekdays in display order for a week starting on `first`
    pub fn week_starting(first: Self) -> [Self; DAYS_IN_WEEK] {
        let mut days = [first; DAYS_IN_WEEK];
        let mut current = first;
        for slot in &mut days {
            *slot = current;
            current = current.succ();
        }
        days
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

/// A closed interval of days, both ends inclusive.
///
/// Produced by a [`Calendar`](crate::Calendar) for week and month lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}..={end}")]
pub struct DayInterval {
    pub start: CalendarDay,
    pub end:   CalendarDay,
}

impl DayInterval {
    pub const fn new(start: CalendarDay, end: CalendarDay) -> Self {
        Self { start, end }
    }

    /// Checks if the interval contains a given day
    pub fn contains(&self, day: CalendarDay) -> bool {
        self.start <= day && day <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::day;

    #[test]
    fn test_weekday_numbering() {
        for (index, weekday) in Weekday::ALL.iter().enumerate() {
            let number = u8::try_from(index).expect("index fits in u8") + 1;
            assert_eq!(weekday.number(), number);
            assert_eq!(Weekday::from_number(number), Some(*weekday));
        }
        assert_eq!(Weekday::Sunday.number(), 1);
        assert_eq!(Weekday::Saturday.number(), 7);
    }

    #[test]
    fn test_from_number_out_of_range() {
        assert_eq!(Weekday::from_number(0), None);
        assert_eq!(Weekday::from_number(8), None);
    }

    #[test]
    fn test_is_weekend() {
        struct TestCase {
            weekday:    Weekday,
            is_weekend: bool,
        }

        let cases = [
            TestCase {
                weekday:    Weekday::Sunday,
                is_weekend: true,
            },
            TestCase {
                weekday:    Weekday::Monday,
                is_weekend: false,
            },
            TestCase {
                weekday:    Weekday::Friday,
                is_weekend: false,
            },
            TestCase {
                weekday:    Weekday::Saturday,
                is_weekend: true,
            },
        ];

        for case in &cases {
            assert_eq!(
                case.weekday.is_weekend(),
                case.is_weekend,
                "{} weekend flag",
                case.weekday
            );
        }
    }

    #[test]
    fn test_days_since() {
        assert_eq!(Weekday::Sunday.days_since(Weekday::Sunday), 0);
        assert_eq!(Weekday::Saturday.days_since(Weekday::Sunday), 6);
        assert_eq!(Weekday::Sunday.days_since(Weekday::Monday), 6);
        assert_eq!(Weekday::Monday.days_since(Weekday::Monday), 0);
        assert_eq!(Weekday::Thursday.days_since(Weekday::Monday), 3);
    }

    #[test]
    fn test_week_starting() {
        let sunday_first = Weekday::week_starting(Weekday::Sunday);
        assert_eq!(sunday_first, Weekday::ALL);

        let monday_first = Weekday::week_starting(Weekday::Monday);
        assert_eq!(monday_first[0], Weekday::Monday);
        assert_eq!(monday_first[5], Weekday::Saturday);
        assert_eq!(monday_first[6], Weekday::Sunday);
    }

    #[test]
    fn test_from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
        assert_eq!(Weekday::from(chrono::Weekday::Thu), Weekday::Thursday);
    }

    #[test]
    fn test_weekday_serde() {
        let json = serde_json::to_string(&Weekday::Tuesday).expect("serialize weekday");
        assert_eq!(json, r#""tuesday""#);

        let parsed: Vec<Weekday> =
            serde_json::from_str(r#"["saturday", "sunday"]"#).expect("deserialize weekdays");
        assert_eq!(parsed, Weekday::WEEKEND);
    }

    #[test]
    fn test_weekday_display() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
    }

    #[test]
    fn test_interval_contains_is_inclusive() {
        let interval = DayInterval::new(day(2024, 1, 28), day(2024, 2, 3));
        assert!(interval.contains(day(2024, 1, 28)));
        assert!(interval.contains(day(2024, 2, 1)));
        assert!(interval.contains(day(2024, 2, 3)));
        assert!(!interval.contains(day(2024, 2, 4)));
        assert_eq!(interval.to_string(), "2024-01-28..=2024-02-03");
    }
}
