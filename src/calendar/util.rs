use super::{OutOfTimeError, DAYS_IN_WEEK};
use std::cmp::Ordering;
use std::fmt;
use time::{Date, Month, Weekday};

pub trait WeekdayExt {
    /// Returns how many days lie between the most recent `start` (inclusive)
    /// and `self`, in the range `0..7`
    fn days_since(&self, start: Weekday) -> u8;
}

impl WeekdayExt for Weekday {
    fn days_since(&self, start: Weekday) -> u8 {
        (self.number_days_from_monday() + 7 - start.number_days_from_monday()) % 7
    }
}

/// Returns the seven weekdays in column order for a calendar whose weeks
/// begin on `start`
pub fn weekdays_from(start: Weekday) -> [Weekday; DAYS_IN_WEEK] {
    let mut wd = start;
    std::array::from_fn(|_| {
        let current = wd;
        wd = wd.next();
        current
    })
}

/// A month of a specific year
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    pub const fn new(year: i32, month: Month) -> YearMonth {
        YearMonth { year, month }
    }

    /// Returns the month containing `date`
    pub fn of(date: Date) -> YearMonth {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn first_day(&self) -> Result<Date, OutOfTimeError> {
        Date::from_calendar_date(self.year, self.month, 1).map_err(|_| OutOfTimeError)
    }

    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Adds `delta_months` (which may be negative) to the month, carrying
    /// into or borrowing from the year as needed.
    ///
    /// Fails only if the resulting year does not fit in an `i32`.
    pub fn advance(self, delta_months: i32) -> Result<YearMonth, OutOfTimeError> {
        let index = i64::from(self.year) * 12 + i64::from(u8::from(self.month)) - 1
            + i64::from(delta_months);
        let year = i32::try_from(index.div_euclid(12)).map_err(|_| OutOfTimeError)?;
        let month = u8::try_from(index.rem_euclid(12) + 1).map_err(|_| OutOfTimeError)?;
        let month = Month::try_from(month).map_err(|_| OutOfTimeError)?;
        Ok(YearMonth { year, month })
    }

    pub fn next(self) -> Result<YearMonth, OutOfTimeError> {
        self.advance(1)
    }

    pub fn previous(self) -> Result<YearMonth, OutOfTimeError> {
        self.advance(-1)
    }
}

impl Ord for YearMonth {
    fn cmp(&self, other: &YearMonth) -> Ordering {
        (self.year, u8::from(self.month)).cmp(&(other.year, u8::from(other.month)))
    }
}

impl PartialOrd for YearMonth {
    fn partial_cmp(&self, other: &YearMonth) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Weekday::*;

    #[test]
    fn test_days_since() {
        assert_eq!(Monday.days_since(Monday), 0);
        assert_eq!(Thursday.days_since(Monday), 3);
        assert_eq!(Sunday.days_since(Monday), 6);
        assert_eq!(Monday.days_since(Sunday), 1);
        assert_eq!(Saturday.days_since(Sunday), 6);
        assert_eq!(Sunday.days_since(Sunday), 0);
    }

    #[test]
    fn test_weekdays_from_monday() {
        assert_eq!(
            weekdays_from(Monday),
            [Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday]
        );
    }

    #[test]
    fn test_weekdays_from_sunday() {
        assert_eq!(
            weekdays_from(Sunday),
            [Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday]
        );
    }

    #[test]
    fn test_of() {
        let ym = YearMonth::of(date!(2024 - 02 - 29));
        assert_eq!(ym, YearMonth::new(2024, Month::February));
        assert!(ym.contains(date!(2024 - 02 - 01)));
        assert!(!ym.contains(date!(2024 - 03 - 01)));
        assert!(!ym.contains(date!(2023 - 02 - 01)));
        assert_eq!(ym.first_day(), Ok(date!(2024 - 02 - 01)));
    }

    #[test]
    fn test_advance_carry() {
        let ym = YearMonth::new(2024, Month::December);
        assert_eq!(ym.next(), Ok(YearMonth::new(2025, Month::January)));
        assert_eq!(ym.advance(14), Ok(YearMonth::new(2026, Month::February)));
    }

    #[test]
    fn test_advance_borrow() {
        let ym = YearMonth::new(2024, Month::January);
        assert_eq!(ym.previous(), Ok(YearMonth::new(2023, Month::December)));
        assert_eq!(ym.advance(-13), Ok(YearMonth::new(2022, Month::December)));
        assert_eq!(ym.advance(-24), Ok(YearMonth::new(2022, Month::January)));
    }

    #[test]
    fn test_advance_across_year_zero() {
        let ym = YearMonth::new(0, Month::March);
        assert_eq!(ym.advance(-3), Ok(YearMonth::new(-1, Month::December)));
        assert_eq!(
            YearMonth::new(-1, Month::November).advance(2),
            Ok(YearMonth::new(0, Month::January))
        );
    }

    #[test]
    fn test_advance_round_trip() {
        for year in -3..=3 {
            for month in 1..=12 {
                let ym = YearMonth::new(year, Month::try_from(month).unwrap());
                assert_eq!(ym.advance(1).unwrap().advance(-1), Ok(ym));
                for delta in [-25, -12, -1, 0, 7, 12, 100] {
                    assert_eq!(ym.advance(delta).unwrap().advance(-delta), Ok(ym));
                }
            }
        }
    }

    #[test]
    fn test_advance_overflow() {
        let ym = YearMonth::new(i32::MAX, Month::December);
        assert_eq!(ym.next(), Err(OutOfTimeError));
        let ym = YearMonth::new(i32::MIN, Month::January);
        assert_eq!(ym.previous(), Err(OutOfTimeError));
    }

    #[test]
    fn test_first_day_out_of_range() {
        assert_eq!(
            YearMonth::new(100_000, Month::January).first_day(),
            Err(OutOfTimeError)
        );
    }

    #[test]
    fn test_ordering() {
        let a = YearMonth::new(2023, Month::December);
        let b = YearMonth::new(2024, Month::January);
        let c = YearMonth::new(2024, Month::February);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(b.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            YearMonth::new(2024, Month::February).to_string(),
            "February 2024"
        );
    }
}
