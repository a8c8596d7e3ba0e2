//! Month and weekday name tables
//!
//! The tables are plain immutable data. A single English table is built the
//! first time it is requested; a configured table can replace it at startup
//! and is then shared through an `Arc`.

use crate::error::CalendarError;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Fixed Monday-first header shown above the grid columns
pub const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

static ENGLISH: Lazy<Arc<NameTables>> = Lazy::new(|| {
    Arc::new(NameTables {
        months: ENGLISH_MONTHS.iter().map(ToString::to_string).collect(),
        weekdays: ENGLISH_WEEKDAYS.iter().map(ToString::to_string).collect(),
    })
});

/// Month names (January first) and weekday names (Sunday first)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTables {
    months: Vec<String>,
    weekdays: Vec<String>,
}

impl NameTables {
    /// Build a table, checking that exactly 12 months and 7 weekdays are given
    pub fn new(months: Vec<String>, weekdays: Vec<String>) -> Result<Self, CalendarError> {
        if months.len() != 12 {
            return Err(CalendarError::InvalidNameTable {
                table: "month",
                expected: 12,
                actual: months.len(),
            });
        }
        if weekdays.len() != 7 {
            return Err(CalendarError::InvalidNameTable {
                table: "weekday",
                expected: 7,
                actual: weekdays.len(),
            });
        }
        Ok(Self { months, weekdays })
    }

    /// The shared English table
    #[must_use]
    pub fn english() -> Arc<Self> {
        Arc::clone(&*ENGLISH)
    }

    /// Name of the month at `index` (0 = January)
    pub fn month_name(&self, index: i32) -> Result<&str, CalendarError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.months.get(i))
            .map(String::as_str)
            .ok_or(CalendarError::InvalidMonthIndex(index))
    }

    /// Index of a month by its exact name, `None` when the name is unknown
    #[must_use]
    pub fn month_index(&self, name: &str) -> Option<u32> {
        self.months
            .iter()
            .position(|m| m == name)
            .and_then(|i| u32::try_from(i).ok())
    }

    /// All month names in calendar order
    #[must_use]
    pub fn months(&self) -> &[String] {
        &self.months
    }

    /// Weekday name for a Sunday-based index; out-of-range indexes wrap
    #[must_use]
    pub fn weekday_name(&self, sunday_based: u32) -> &str {
        &self.weekdays[(sunday_based % 7) as usize]
    }
}

impl Default for NameTables {
    fn default() -> Self {
        Self::english().as_ref().clone()
    }
}
