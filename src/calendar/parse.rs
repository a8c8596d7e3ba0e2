//! Lenient parsing of free-text dates
//!
//! Accepts the shapes people usually type into a date field: ISO dates and
//! date-times, slash-separated US dates, long and short month names, and bare
//! `YYYY` / `YYYY-MM` prefixes. Every date the picker itself emits with the
//! default format parses back to the same day.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%A, %B %d, %Y",
    "%a, %d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse `input` into a calendar date, `None` when no known shape matches
#[must_use]
pub fn parse_date_input(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
    {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Some(dt.date());
    }

    parse_partial(input)
}

/// `YYYY` or `YYYY-MM`, resolved to the first day of the period
fn parse_partial(input: &str) -> Option<NaiveDate> {
    let mut parts = input.splitn(2, '-');
    let year_part = parts.next()?;
    if year_part.len() != 4 || !year_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year_part.parse().ok()?;
    let month = match parts.next() {
        Some(m) if m.len() == 2 && m.bytes().all(|b| b.is_ascii_digit()) => m.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// True when `input` parses as a date
///
/// Empty input is reported as invalid here; callers decide what an empty
/// field means.
#[must_use]
pub fn is_valid_date_string(input: &str) -> bool {
    parse_date_input(input).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_forms() {
        assert_eq!(parse_partial("2024"), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(parse_partial("2024-03"), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(parse_partial("2024-13"), None);
        assert_eq!(parse_partial("24-03"), None);
        assert_eq!(parse_partial("2024-3x"), None);
    }
}
