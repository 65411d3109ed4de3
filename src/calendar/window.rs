use super::OutOfTimeError;
use std::iter::successors;
use time::{Date, Duration};

/// A contiguous, non-empty run of dates that can be grown a page at a time
/// at either end.
///
/// Windows are never shrunk and their interior is never modified; the
/// `extend_*` methods return a new window and leave the original untouched.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DateWindow {
    // Invariant: first <= last
    first: Date,
    last: Date,
}

/// An end of a [`DateWindow`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Edge {
    Start,
    End,
}

impl DateWindow {
    /// Returns the `2 * radius_days + 1` dates centered on `anchor`
    pub fn initial(anchor: Date, radius_days: u32) -> Result<DateWindow, OutOfTimeError> {
        let radius = Duration::days(i64::from(radius_days));
        let first = anchor.checked_sub(radius).ok_or(OutOfTimeError)?;
        let last = anchor.checked_add(radius).ok_or(OutOfTimeError)?;
        Ok(DateWindow { first, last })
    }

    /// Returns a copy of the window with `page_size` more dates before its
    /// first date
    pub fn extend_backward(&self, page_size: u32) -> Result<DateWindow, OutOfTimeError> {
        let first = self
            .first
            .checked_sub(Duration::days(i64::from(page_size)))
            .ok_or(OutOfTimeError)?;
        Ok(DateWindow {
            first,
            last: self.last,
        })
    }

    /// Returns a copy of the window with `page_size` more dates after its
    /// last date
    pub fn extend_forward(&self, page_size: u32) -> Result<DateWindow, OutOfTimeError> {
        let last = self
            .last
            .checked_add(Duration::days(i64::from(page_size)))
            .ok_or(OutOfTimeError)?;
        Ok(DateWindow {
            first: self.first,
            last,
        })
    }

    pub fn first(&self) -> Date {
        self.first
    }

    pub fn last(&self) -> Date {
        self.last
    }

    pub fn len(&self) -> usize {
        usize::try_from((self.last - self.first).whole_days() + 1).unwrap_or(usize::MAX)
    }

    /// Always `false`; a window holds at least one date
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, date: Date) -> bool {
        (self.first..=self.last).contains(&date)
    }

    pub fn get(&self, index: usize) -> Option<Date> {
        let offset = i64::try_from(index).ok()?;
        let date = self.first.checked_add(Duration::days(offset))?;
        (date <= self.last).then_some(date)
    }

    pub fn position(&self, date: Date) -> Option<usize> {
        if self.contains(date) {
            usize::try_from((date - self.first).whole_days()).ok()
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Date> {
        let last = self.last;
        successors(Some(self.first), move |&d| {
            if d < last {
                d.next_day()
            } else {
                None
            }
        })
    }

    /// Reports whether the date at `index` lies within `threshold` positions
    /// of either end of the window.
    ///
    /// A threshold of zero is treated as one, so the first and last
    /// positions always count as being at an edge.  When a window is short
    /// enough for `index` to be near both ends, [`Edge::Start`] wins.
    pub fn edge_near(&self, index: usize, threshold: usize) -> Option<Edge> {
        let threshold = threshold.max(1);
        if index < threshold {
            Some(Edge::Start)
        } else if index.saturating_add(threshold) >= self.len() {
            Some(Edge::End)
        } else {
            None
        }
    }
}
