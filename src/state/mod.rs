mod calendar;
mod shop;
mod store;
pub use self::calendar::{CalendarDay, CalendarState, DayMarker, NoMarks};
pub use self::shop::{ShopError, ShopItem, ShopPlanner};
pub use self::store::{Store, SubscriptionId};
