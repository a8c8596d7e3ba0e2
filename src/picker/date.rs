//! The committed calendar date

use crate::error::CalendarError;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A real calendar date with a 0-based month
///
/// Values are immutable; the picker replaces its selection with a new
/// `CalendarDate` rather than editing one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from a year, a 0-based month and a 1-based day
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        month
            .checked_add(1)
            .and_then(|month1| NaiveDate::from_ymd_opt(year, month1, day))
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month index, 0 = January
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month0()
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    #[must_use]
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(crate::utils::datetime::ISO_DATE_FORMAT))
    }
}
