use super::{Store, SubscriptionId};
use crate::calendar::{
    build_month_grid, weekdays_from, MonthGrid, OutOfTimeError, YearMonth, DAYS_IN_WEEK,
};
use time::{Date, Weekday};
use tracing::debug;

/// Something that knows which dates have entries attached to them
pub trait DayMarker {
    fn has_items(&self, date: Date) -> bool;
}

impl<T: DayMarker + ?Sized> DayMarker for &T {
    fn has_items(&self, date: Date) -> bool {
        (**self).has_items(date)
    }
}

/// A [`DayMarker`] that marks nothing
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoMarks;

impl DayMarker for NoMarks {
    fn has_items(&self, _date: Date) -> bool {
        false
    }
}

/// One cell of a month grid, with the flags the view needs to draw it
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CalendarDay {
    pub date: Date,
    pub is_today: bool,
    pub in_month: bool,
    pub has_items: bool,
}

/// State behind the month calendar screen.
///
/// The grid on display is kept already built, so every month and week
/// start the state can reach has a grid within the range of [`Date`].
/// Changes that would leave that range are refused and leave the state
/// as it was.
#[derive(Debug)]
pub struct CalendarState {
    today: Date,
    grid: Store<MonthGrid>,
}

impl CalendarState {
    pub fn new(today: Date, week_start: Weekday) -> Result<CalendarState, OutOfTimeError> {
        let grid = build_month_grid(YearMonth::of(today), week_start)?;
        Ok(CalendarState {
            today,
            grid: Store::new(grid),
        })
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn week_start(&self) -> Weekday {
        self.grid.get().week_start()
    }

    /// Change the first column of the grid.  Subscribers are notified if
    /// this changes the grid.
    pub fn set_week_start(&mut self, week_start: Weekday) -> Result<(), OutOfTimeError> {
        debug!(%week_start, "Changing week start");
        self.show(self.month(), week_start)
    }

    /// The month currently on display
    pub fn month(&self) -> YearMonth {
        self.grid.get().month()
    }

    pub fn revision(&self) -> u64 {
        self.grid.revision()
    }

    /// Register a callback to be run whenever the displayed grid changes,
    /// whether from a new month or a new week start
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&MonthGrid) + 'static,
    {
        self.grid.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.grid.unsubscribe(id)
    }

    pub fn show_previous_month(&mut self) -> Result<YearMonth, OutOfTimeError> {
        self.shift_month(-1)
    }

    pub fn show_next_month(&mut self) -> Result<YearMonth, OutOfTimeError> {
        self.shift_month(1)
    }

    pub fn shift_month(&mut self, delta: i32) -> Result<YearMonth, OutOfTimeError> {
        let month = self.month().advance(delta)?;
        debug!(%month, delta, "Switching displayed month");
        self.show(month, self.week_start())?;
        Ok(month)
    }

    /// Display the month containing `date`
    pub fn jump_to(&mut self, date: Date) -> Result<(), OutOfTimeError> {
        let month = YearMonth::of(date);
        debug!(%month, "Jumping to month");
        self.show(month, self.week_start())
    }

    pub fn jump_to_today(&mut self) -> Result<(), OutOfTimeError> {
        self.jump_to(self.today)
    }

    fn show(&mut self, month: YearMonth, week_start: Weekday) -> Result<(), OutOfTimeError> {
        let grid = build_month_grid(month, week_start)?;
        self.grid.set(grid);
        Ok(())
    }

    pub fn grid(&self) -> &MonthGrid {
        self.grid.get()
    }

    /// The weekdays in the order of the grid's columns
    pub fn weekdays(&self) -> [Weekday; DAYS_IN_WEEK] {
        weekdays_from(self.week_start())
    }

    /// The cells of the displayed month's grid
    pub fn days<M: DayMarker>(&self, marker: M) -> Vec<CalendarDay> {
        let grid = self.grid();
        grid.dates()
            .iter()
            .map(|&date| CalendarDay {
                date,
                is_today: date == self.today,
                in_month: grid.in_month(date),
                has_items: marker.has_items(date),
            })
            .collect()
    }
}
