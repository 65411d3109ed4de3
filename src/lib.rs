//! Date arithmetic and view state for a calendar-driven shopping planner.
//!
//! [`build_month_grid()`] lays out the six weeks shown for a month, and
//! [`DateWindow`] is a run of dates that grows a page at a time in either
//! direction.  [`CalendarState`] and [`ShopPlanner`] wrap these in
//! observable [`Store`]s for a month view and a per-day shopping list.
mod calendar;
mod config;
mod state;
pub use crate::calendar::{
    build_month_grid, weekdays_from, DateWindow, Edge, MonthGrid, OutOfTimeError, WeekdayExt,
    YearMonth, DAYS_IN_WEEK, GRID_DAYS, GRID_WEEKS,
};
pub use crate::config::{
    PlannerConfig, DEFAULT_EDGE_THRESHOLD, DEFAULT_PAGE_SIZE, DEFAULT_RADIUS_DAYS,
};
pub use crate::state::{
    CalendarDay, CalendarState, DayMarker, NoMarks, ShopError, ShopItem, ShopPlanner, Store,
    SubscriptionId,
};
