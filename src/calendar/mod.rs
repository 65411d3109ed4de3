mod grid;
mod util;
mod window;
pub use self::grid::{build_month_grid, MonthGrid};
pub use self::util::{weekdays_from, WeekdayExt, YearMonth};
pub use self::window::{DateWindow, Edge};
use thiserror::Error;

pub const DAYS_IN_WEEK: usize = 7;

/// Number of rows in a month grid
pub const GRID_WEEKS: usize = 6;

pub const GRID_DAYS: usize = DAYS_IN_WEEK * GRID_WEEKS;

/// Returned when a computation would step outside the range of dates
/// representable by [`time::Date`] (years -9999 through 9999).
#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub struct OutOfTimeError;
