/// Number of days in a calendar week (and columns in a month grid)
pub const DAYS_IN_WEEK: usize = 7;

/// Longest possible month grid: six weeks
pub const MAX_GRID_DAYS: usize = DAYS_IN_WEEK * 6;

/// Shortest possible month grid: a 28-day February starting on the first weekday
pub const MIN_GRID_DAYS: usize = DAYS_IN_WEEK * 4;

/// Day format used for display and parsing (ISO 8601 calendar date)
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
/// Marker for an unbounded side of a range (ISO 8601-2 open interval)
pub const OPEN_BOUND: &str = "..";

/// Weekday numbers run from Sunday (1) to Saturday (7)
pub const FIRST_WEEKDAY_NUMBER: u8 = 1;
/// Highest weekday number (Saturday)
pub const LAST_WEEKDAY_NUMBER: u8 = 7;
