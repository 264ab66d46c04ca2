use crate::{CalendarDay, DateRange};

/// A start/end selection built from successive picks.
///
/// A pick on or after a pending start completes the range; a pick before it
/// replaces the start, so the selection is never inverted. Any pick after a
/// completed range starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeSelection {
    #[default]
    Empty,
    PartialStart {
        start: CalendarDay,
    },
    Complete {
        start: CalendarDay,
        end:   CalendarDay,
    },
}

impl RangeSelection {
    /// Returns the selection after picking `day`.
    #[must_use]
    pub fn pick(self, day: CalendarDay) -> Self {
        match self {
            Self::PartialStart { start } if day >= start => Self::Complete { start, end: day },
            Self::Empty | Self::PartialStart { .. } | Self::Complete { .. } => Self::PartialStart { start: day },
        }
    }

    /// Checks if `day` is part of the selection as drawn: the whole range once
    /// complete, only the start while pending.
    pub fn contains(&self, day: CalendarDay) -> bool {
        match *self {
            Self::Empty => false,
            Self::PartialStart { start } => start == day,
            Self::Complete { start, end } => start <= day && day <= end,
        }
    }

    pub const fn start(&self) -> Option<CalendarDay> {
        match *self {
            Self::Empty => None,
            Self::PartialStart { start } | Self::Complete { start, .. } => Some(start),
        }
    }

    pub const fn end(&self) -> Option<CalendarDay> {
        match *self {
            Self::Complete { end, .. } => Some(end),
            Self::Empty | Self::PartialStart { .. } => None,
        }
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The selection as a range of days; a pending start is a single day.
    pub const fn as_date_range(&self) -> Option<DateRange> {
        match *self {
            Self::Empty => None,
            Self::PartialStart { start } => Some(DateRange::single(start)),
            Self::Complete { start, end } => Some(DateRange::new(Some(start), Some(end))),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::Empty;
    }
}
