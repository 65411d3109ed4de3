use super::{OutOfTimeError, WeekdayExt, YearMonth, DAYS_IN_WEEK, GRID_DAYS};
use std::slice::ChunksExact;
use time::{Date, Duration, Weekday};

/// Six weeks of consecutive dates covering a month, padded at either end
/// with days from the neighboring months.
///
/// The first date is the latest date on or before the first of the month
/// that falls on the grid's week start.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MonthGrid {
    month: YearMonth,
    week_start: Weekday,
    dates: [Date; GRID_DAYS],
}

impl MonthGrid {
    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    pub fn first(&self) -> Date {
        self.dates[0]
    }

    pub fn last(&self) -> Date {
        self.dates[GRID_DAYS - 1]
    }

    /// Iterate over the rows of the grid, each of which holds
    /// [`DAYS_IN_WEEK`] dates
    pub fn weeks(&self) -> ChunksExact<'_, Date> {
        self.dates.chunks_exact(DAYS_IN_WEEK)
    }

    /// Returns `true` if `date` is in the month the grid was built for, as
    /// opposed to being padding
    pub fn in_month(&self, date: Date) -> bool {
        self.month.contains(date)
    }

    pub fn contains(&self, date: Date) -> bool {
        (self.first()..=self.last()).contains(&date)
    }

    pub fn position(&self, date: Date) -> Option<usize> {
        self.dates.iter().position(|&d| d == date)
    }
}

/// Build the grid of dates to show for `target` with `week_start` as the
/// first column
pub fn build_month_grid(
    target: YearMonth,
    week_start: Weekday,
) -> Result<MonthGrid, OutOfTimeError> {
    let first_of_month = target.first_day()?;
    let lead = first_of_month.weekday().days_since(week_start);
    let start = first_of_month
        .checked_sub(Duration::days(i64::from(lead)))
        .ok_or(OutOfTimeError)?;
    let mut dates = [start; GRID_DAYS];
    let mut current = start;
    for slot in dates.iter_mut().skip(1) {
        current = current.next_day().ok_or(OutOfTimeError)?;
        *slot = current;
    }
    Ok(MonthGrid {
        month: target,
        week_start,
        dates,
    })
}
