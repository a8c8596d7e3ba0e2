//! Day counts and weekday lookups for a (year, month) pair
//!
//! Months are 0-based. A month outside 0..=11 rolls into the neighbouring
//! year, so `(2024, 12)` is January 2025 and `(2024, -1)` is December 2023.
//! Years are clamped to the range chrono can represent, which keeps every
//! function total.

use chrono::{Datelike, NaiveDate};

/// Largest absolute year accepted before clamping
pub const YEAR_LIMIT: i32 = 262_000;

/// Whether `year` can be shown without being clamped
#[must_use]
pub fn is_supported_year(year: i32) -> bool {
    (-YEAR_LIMIT..=YEAR_LIMIT).contains(&year)
}

/// Fold a possibly out-of-range month into its year, returning `(year, month0)`
#[must_use]
pub fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    let total = i64::from(year) * 12 + i64::from(month);
    let normalized_year = total
        .div_euclid(12)
        .clamp(i64::from(-YEAR_LIMIT), i64::from(YEAR_LIMIT));
    // rem_euclid(12) is always in 0..12
    let month0 = total.rem_euclid(12) as u32;
    (normalized_year as i32, month0)
}

/// The 1st of the given month
#[must_use]
pub fn first_day_of_month(year: i32, month: i32) -> NaiveDate {
    let (year, month0) = normalize_month(year, month);
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or_default()
}

/// "Day 0" of the given month, i.e. the last day of the month before it
fn day_zero(year: i32, month: i32) -> NaiveDate {
    let first = first_day_of_month(year, month);
    first.pred_opt().unwrap_or(first)
}

/// The last day of the given month
#[must_use]
pub fn last_day_of_month(year: i32, month: i32) -> NaiveDate {
    day_zero(year, month.saturating_add(1))
}

/// Number of days in the given month
#[must_use]
pub fn days_in_month(year: i32, month: i32) -> u32 {
    last_day_of_month(year, month).day()
}

/// Number of days in the month preceding the given one
#[must_use]
pub fn days_in_previous_month(year: i32, month: i32) -> u32 {
    day_zero(year, month).day()
}

/// Weekday of the 1st, 0 = Sunday .. 6 = Saturday
#[must_use]
pub fn first_weekday_of_month(year: i32, month: i32) -> u32 {
    first_day_of_month(year, month).weekday().num_days_from_sunday()
}

/// Weekday of the last day, 0 = Sunday .. 6 = Saturday
#[must_use]
pub fn last_weekday_of_month(year: i32, month: i32) -> u32 {
    last_day_of_month(year, month).weekday().num_days_from_sunday()
}

/// Whether `year` has a 29th of February
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    days_in_month(year, 1) == 29
}
