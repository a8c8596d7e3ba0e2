//! Host clock helpers
//!
//! The picker's initial selection and the year selector both depend on the
//! local date; everything that reads the clock goes through here.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// ISO-8601 calendar date format
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's local date
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today's local date shifted by `days_offset` days
///
/// Offsets that would leave chrono's date range leave the date unchanged.
#[must_use]
pub fn today_with_offset(days_offset: i64) -> NaiveDate {
    let today = today();
    Duration::try_days(days_offset)
        .and_then(|offset| today.checked_add_signed(offset))
        .unwrap_or(today)
}

/// The current local year
#[must_use]
pub fn current_year() -> i32 {
    today().year()
}

/// Format a NaiveDate to YYYY-MM-DD string
#[must_use]
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(ISO_DATE_FORMAT).to_string()
}
