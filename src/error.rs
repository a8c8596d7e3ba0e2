//! Error types for the calendar and picker layers

/// Errors raised by calendar math and the picker state machine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid month index {0}: expected a value between 0 and 11")]
    InvalidMonthIndex(i32),

    #[error("Unknown month name: {0}")]
    UnknownMonthName(String),

    #[error("Invalid date: year {year}, month index {month}, day {day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Invalid {table} table: expected {expected} entries, got {actual}")]
    InvalidNameTable {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Unsupported locale: {0}")]
    InvalidLocale(String),
}
