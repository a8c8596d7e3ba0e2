//! Calendar math for the date picker
//!
//! Pure functions computing month lengths, weekdays and the Monday-first
//! [`MonthGrid`], plus [`CalendarMath`], which pairs those functions with the
//! injected [`NameTables`].

pub mod grid;
pub mod math;
pub mod names;
pub mod parse;

use crate::error::CalendarError;
use std::sync::Arc;

pub use grid::{build_month_grid, CellKind, GridCell, MonthGrid};
pub use math::{
    days_in_month, days_in_previous_month, first_weekday_of_month, is_supported_year, last_weekday_of_month,
};
pub use names::{NameTables, WEEKDAY_HEADERS};
pub use parse::{is_valid_date_string, parse_date_input};

/// Calendar operations bound to a name table
#[derive(Debug, Clone)]
pub struct CalendarMath {
    names: Arc<NameTables>,
}

impl CalendarMath {
    pub fn new(names: Arc<NameTables>) -> Self {
        Self { names }
    }

    /// The name table in use
    #[must_use]
    pub fn names(&self) -> &NameTables {
        &self.names
    }

    pub fn month_name(&self, index: i32) -> Result<&str, CalendarError> {
        self.names.month_name(index)
    }

    #[must_use]
    pub fn month_index(&self, name: &str) -> Option<u32> {
        self.names.month_index(name)
    }

    /// Build the grid for `(year, month)`, tracing the weekdays it was built from
    #[must_use]
    pub fn build_month_grid(&self, year: i32, month: i32) -> MonthGrid {
        log::trace!(
            "Building grid for {}-{}: starts on {}, ends on {}",
            year,
            month,
            self.names.weekday_name(first_weekday_of_month(year, month)),
            self.names.weekday_name(last_weekday_of_month(year, month))
        );
        build_month_grid(year, month)
    }

    /// Fixed Monday-first column headers
    #[must_use]
    pub fn weekday_headers(&self) -> [&'static str; 7] {
        WEEKDAY_HEADERS
    }
}

impl Default for CalendarMath {
    fn default() -> Self {
        Self::new(NameTables::english())
    }
}
