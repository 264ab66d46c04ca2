//! The month view controller and the renderer traits it draws through.
//!
//! A [`CalendarLayout`] owns the displayed month, its [`MonthGrid`] and the
//! selection. Each render pass classifies every grid day and hands it to a
//! host renderer: active days to [`CellRenderer::active_cell`], everything
//! else to [`CellRenderer::disabled_cell`], plus one title and a row of
//! weekday headers.
//!
//! ```
//! use calendar_grid::{CalendarConfig, CalendarDay, CalendarLayout, DateRange, FixedClock, Gregorian};
//!
//! let today = CalendarDay::new(2024, 2, 12).unwrap();
//! let config = CalendarConfig::default().with_active_range(DateRange::new(
//!     CalendarDay::new(2024, 2, 10).ok(),
//!     CalendarDay::new(2024, 2, 20).ok(),
//! ));
//! let mut layout = CalendarLayout::new_range(config, Gregorian::default(), &FixedClock(today));
//!
//! layout.pick(CalendarDay::new(2024, 2, 11).unwrap());
//! layout.pick(CalendarDay::new(2024, 2, 14).unwrap());
//! let selected = layout.cells().iter().filter(|cell| cell.is_selected).count();
//! assert_eq!(selected, 4);
//! ```

use crate::{
    Activation, ActivationPolicy, Calendar, CalendarConfig, CalendarDay, CalendarError, Clock, Gregorian, MonthGrid,
    RangeSelection, SystemClock, Weekday, prelude::*,
};

/// How picks are interpreted. Fixed when the layout is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// One selected day, bound to the host.
    Single { selected: CalendarDay },
    /// Two picks make a start/end range.
    Range(RangeSelection),
}

impl SelectionMode {
    fn contains<C: Calendar + ?Sized>(&self, day: CalendarDay, calendar: &C) -> bool {
        match self {
            Self::Single { selected } => calendar.is_same_day(*selected, day),
            Self::Range(selection) => selection.contains(day),
        }
    }
}

/// Month navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Navigation {
    Previous,
    Next,
}

impl Navigation {
    const fn months(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Result of a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickOutcome {
    /// The day is not active in the displayed month; nothing changed.
    Ignored,
    /// Single mode: the new selected day.
    Selected(CalendarDay),
    /// Range mode: the selection after the pick.
    Range(RangeSelection),
}

/// Everything a cell renderer needs to draw one grid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayCell {
    pub day:                CalendarDay,
    pub activation:         Activation,
    pub is_active:          bool,
    pub is_selected:        bool,
    pub is_today:           bool,
    pub in_displayed_month: bool,
    /// Some configured active range contains the day, whether or not it is
    /// carved out or outside the month.
    pub in_active_range:    bool,
}

/// Title row contents: the displayed month and which navigation commands are
/// available.
///
/// A direction is available when the adjacent month can be reached and laid
/// out; [`CalendarLayout::navigate`] succeeds exactly when it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthTitle {
    /// First day of the displayed month
    pub month:        CalendarDay,
    pub has_previous: bool,
    pub has_next:     bool,
}

/// Draws the title row of a month.
pub trait TitleRenderer {
    type Title;

    fn title(&mut self, title: &MonthTitle) -> Self::Title;
}

/// Draws one weekday column header. Called once per column with the day of
/// the first grid row in that column.
pub trait HeaderRenderer {
    type Header;

    fn header(&mut self, weekday: Weekday, day: CalendarDay) -> Self::Header;
}

/// Draws grid days.
pub trait CellRenderer {
    type Cell;

    fn active_cell(&mut self, cell: &DayCell) -> Self::Cell;

    fn disabled_cell(&mut self, cell: &DayCell) -> Self::Cell;
}

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMonth<T, H, C> {
    pub title:   T,
    pub headers: Vec<H>,
    pub cells:   Vec<C>,
}

/// Month calendar controller.
///
/// Holds the displayed month, the grid for it and the selection, and performs
/// no date arithmetic of its own: everything goes through the calendar `C`.
/// "Today" is read from the clock once, when the layout is created.
#[derive(Debug, Clone)]
pub struct CalendarLayout<C: Calendar = Gregorian> {
    calendar:        C,
    policy:          ActivationPolicy,
    selection:       SelectionMode,
    displayed_month: CalendarDay,
    grid:            MonthGrid,
    today:           CalendarDay,
}

impl CalendarLayout<Gregorian> {
    /// Single-date layout on the default Gregorian calendar and the system clock
    pub fn single(selected: CalendarDay, config: CalendarConfig) -> Self {
        Self::new_single(selected, config, Gregorian::default(), &SystemClock)
    }

    /// Range layout on the default Gregorian calendar and the system clock
    pub fn range(config: CalendarConfig) -> Self {
        Self::new_range(config, Gregorian::default(), &SystemClock)
    }
}

impl<C: Calendar> CalendarLayout<C> {
    /// Creates a layout in the given selection mode.
    ///
    /// The first displayed month is `config.initial_month` when set, else the
    /// selected day (single mode), else the range start or today (range mode).
    pub fn new<K: Clock + ?Sized>(selection: SelectionMode, config: CalendarConfig, calendar: C, clock: &K) -> Self {
        let today = clock.today();
        let initial = config.initial_month.unwrap_or(match selection {
            SelectionMode::Single { selected } => selected,
            SelectionMode::Range(range) => range.start().unwrap_or(today),
        });
        let displayed_month = calendar.start_of_month(initial);
        let grid = MonthGrid::generate(displayed_month, &calendar);

        Self {
            calendar,
            policy: config.policy(),
            selection,
            displayed_month,
            grid,
            today,
        }
    }

    pub fn new_single<K: Clock + ?Sized>(selected: CalendarDay, config: CalendarConfig, calendar: C, clock: &K) -> Self {
        Self::new(SelectionMode::Single { selected }, config, calendar, clock)
    }

    pub fn new_range<K: Clock + ?Sized>(config: CalendarConfig, calendar: C, clock: &K) -> Self {
        Self::new(SelectionMode::Range(RangeSelection::Empty), config, calendar, clock)
    }

    pub const fn calendar(&self) -> &C {
        &self.calendar
    }

    pub const fn policy(&self) -> &ActivationPolicy {
        &self.policy
    }

    pub const fn selection(&self) -> &SelectionMode {
        &self.selection
    }

    /// Selected day in single mode
    pub const fn selected_date(&self) -> Option<CalendarDay> {
        match self.selection {
            SelectionMode::Single { selected } => Some(selected),
            SelectionMode::Range(_) => None,
        }
    }

    /// Range selection in range mode
    pub const fn range_selection(&self) -> Option<&RangeSelection> {
        match &self.selection {
            SelectionMode::Range(selection) => Some(selection),
            SelectionMode::Single { .. } => None,
        }
    }

    /// Writes the host-bound selected day. Only valid in single mode; returns
    /// false and changes nothing in range mode.
    ///
    /// Unlike [`pick`](Self::pick) this does not consult the activation
    /// policy, mirroring a binding written by the host.
    pub fn set_selected_date(&mut self, day: CalendarDay) -> bool {
        match &mut self.selection {
            SelectionMode::Single { selected } => {
                *selected = day;
                true
            },
            SelectionMode::Range(_) => false,
        }
    }

    /// First day of the displayed month
    pub const fn displayed_month(&self) -> CalendarDay {
        self.displayed_month
    }

    pub const fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// The day sampled from the clock when the layout was created
    pub const fn today(&self) -> CalendarDay {
        self.today
    }

    /// Moves the displayed month one month back
    pub fn previous_month(&mut self) -> bool {
        self.navigate(Navigation::Previous)
    }

    /// Moves the displayed month one month forward
    pub fn next_month(&mut self) -> bool {
        self.navigate(Navigation::Next)
    }

    /// Moves the displayed month by one month and rebuilds the grid.
    /// Leaves the month unchanged and returns false if the calendar cannot
    /// represent the target month or lay out its grid.
    pub fn navigate(&mut self, navigation: Navigation) -> bool {
        match self.adjacent_grid(navigation) {
            Ok(grid) => {
                self.displayed_month = grid.month();
                self.grid = grid;
                tracing::debug!(%navigation, month = %self.displayed_month, "navigated");
                true
            },
            Err(error) => {
                tracing::warn!(%navigation, month = %self.displayed_month, %error, "navigation failed");
                false
            },
        }
    }

    fn adjacent_grid(&self, navigation: Navigation) -> Result<MonthGrid, CalendarError> {
        let target = self
            .calendar
            .add_months(self.displayed_month, navigation.months())?;
        MonthGrid::try_generate(target, &self.calendar)
    }

    pub fn title(&self) -> MonthTitle {
        MonthTitle {
            month:        self.displayed_month,
            has_previous: self.adjacent_grid(Navigation::Previous).is_ok(),
            has_next:     self.adjacent_grid(Navigation::Next).is_ok(),
        }
    }

    pub fn classify(&self, day: CalendarDay) -> Activation {
        self.policy.classify(day, self.displayed_month, &self.calendar)
    }

    /// Describes `day` as it would be drawn in the displayed month
    pub fn cell(&self, day: CalendarDay) -> DayCell {
        let activation = self.classify(day);
        DayCell {
            day,
            activation,
            is_active: activation.is_active(),
            is_selected: self.selection.contains(day, &self.calendar),
            is_today: self.calendar.is_same_day(day, self.today),
            in_displayed_month: self.calendar.is_same_month(day, self.displayed_month),
            in_active_range: self.policy.in_active_range(day),
        }
    }

    /// Every grid day in display order
    pub fn cells(&self) -> Vec<DayCell> {
        self.grid.iter().map(|&day| self.cell(day)).collect()
    }

    /// Runs one render pass through `renderer`.
    pub fn render<R>(&self, renderer: &mut R) -> RenderedMonth<R::Title, R::Header, R::Cell>
    where
        R: TitleRenderer + HeaderRenderer + CellRenderer,
    {
        let title = renderer.title(&self.title());
        let headers = self
            .grid
            .first_week()
            .iter()
            .map(|&day| renderer.header(self.calendar.weekday_of(day), day))
            .collect();
        let cells = self
            .cells()
            .iter()
            .map(|cell| {
                if cell.is_active {
                    renderer.active_cell(cell)
                } else {
                    renderer.disabled_cell(cell)
                }
            })
            .collect();

        RenderedMonth { title, headers, cells }
    }

    /// Handles a pick on `day`.
    ///
    /// Only active days of the displayed grid are accepted. In single mode the
    /// day becomes the selected date; in range mode it advances the range
    /// selection.
    pub fn pick(&mut self, day: CalendarDay) -> PickOutcome {
        if !self.grid.contains(day) || !self.classify(day).is_active() {
            tracing::trace!(%day, "ignored pick on inactive day");
            return PickOutcome::Ignored;
        }

        match &mut self.selection {
            SelectionMode::Single { selected } => {
                *selected = day;
                tracing::debug!(%day, "selected date");
                PickOutcome::Selected(day)
            },
            SelectionMode::Range(selection) => {
                *selection = selection.pick(day);
                tracing::debug!(%day, start = ?selection.start(), end = ?selection.end(), "range selection");
                PickOutcome::Range(*selection)
            },
        }
    }
}

impl<C: Calendar + PartialEq> PartialEq for CalendarLayout<C> {
    fn eq(&self, other: &Self) -> bool {
        self.calendar == other.calendar
            && self.selection == other.selection
            && self.displayed_month == other.displayed_month
            && self.today == other.today
    }
}
