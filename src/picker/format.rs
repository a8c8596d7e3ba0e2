//! Locale-aware formatting of the committed date
//!
//! Field styles follow the `Intl.DateTimeFormat` vocabulary (`numeric`,
//! `2-digit`, `long`, `short`, `narrow`) so existing configurations carry
//! over. Month and weekday words come from chrono's locale data; field order
//! is picked from the locale tag.

use crate::error::CalendarError;
use crate::constants::DEFAULT_LOCALE;
use chrono::{Datelike, Locale, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearStyle {
    #[default]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthStyle {
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
    #[default]
    Long,
    Short,
    Narrow,
}

impl MonthStyle {
    fn is_textual(self) -> bool {
        matches!(self, Self::Long | Self::Short | Self::Narrow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStyle {
    Numeric,
    #[default]
    #[serde(rename = "2-digit")]
    TwoDigit,
}

/// Caller-supplied format of the committed date string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormat {
    /// BCP 47 style tag, e.g. "en-US" or "fr-FR"
    pub locale: String,
    pub year: YearStyle,
    pub month: MonthStyle,
    pub day: DayStyle,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            year: YearStyle::default(),
            month: MonthStyle::default(),
            day: DayStyle::default(),
        }
    }
}

impl DateFormat {
    /// Resolve the locale tag and build a formatter
    pub fn formatter(&self) -> Result<DateFormatter, CalendarError> {
        let locale = resolve_locale(&self.locale)?;
        Ok(DateFormatter {
            locale,
            order: FieldOrder::for_tag(&self.locale),
            day_suffix: day_suffix(&self.locale),
            year: self.year,
            month: self.month,
            day: self.day,
        })
    }
}

/// Order of the year, month and day fields in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

impl FieldOrder {
    fn for_tag(tag: &str) -> Self {
        let (language, region) = split_tag(tag);
        match (language.as_str(), region.as_deref()) {
            ("ja" | "zh" | "ko" | "hu" | "lt", _) => Self::YearMonthDay,
            ("en", None | Some("US" | "PH")) => Self::MonthDayYear,
            (_, Some("US")) => Self::MonthDayYear,
            _ => Self::DayMonthYear,
        }
    }
}

fn split_tag(tag: &str) -> (String, Option<String>) {
    let mut parts = tag.split(['-', '_']);
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    let region = parts.next().map(str::to_ascii_uppercase);
    (language, region)
}

/// Turn "en-US" / "en_us" / "fr" into a chrono locale
fn resolve_locale(tag: &str) -> Result<Locale, CalendarError> {
    let (language, region) = split_tag(tag);
    let region = match region {
        Some(region) => region,
        None => default_region(&language),
    };
    let posix = format!("{language}_{region}");
    Locale::try_from(posix.as_str()).map_err(|_| CalendarError::InvalidLocale(tag.to_string()))
}

/// Region used when a tag names only a language
fn default_region(language: &str) -> String {
    match language {
        "en" => "US",
        "ja" => "JP",
        "zh" => "CN",
        "ko" => "KR",
        "sv" => "SE",
        "da" => "DK",
        "nb" => "NO",
        "cs" => "CZ",
        "el" => "GR",
        "uk" => "UA",
        other => return other.to_ascii_uppercase(),
    }
    .to_string()
}

fn day_suffix(tag: &str) -> &'static str {
    match split_tag(tag).0.as_str() {
        "de" | "da" | "nb" | "fi" => ".",
        _ => "",
    }
}

/// A resolved [`DateFormat`]
#[derive(Debug, Clone)]
pub struct DateFormatter {
    locale: Locale,
    order: FieldOrder,
    day_suffix: &'static str,
    year: YearStyle,
    month: MonthStyle,
    day: DayStyle,
}

impl DateFormatter {
    #[must_use]
    pub fn order(&self) -> FieldOrder {
        self.order
    }

    /// Render `date` with the configured fields
    #[must_use]
    pub fn format(&self, date: NaiveDate) -> String {
        // chrono's %Y signs years past 9999; plain digits match Intl output
        let year = match self.year {
            YearStyle::Numeric => date.year().to_string(),
            YearStyle::TwoDigit => format!("{:02}", date.year().rem_euclid(100)),
        };
        let day = match self.day {
            DayStyle::Numeric => date.format("%-d").to_string(),
            DayStyle::TwoDigit => date.format("%d").to_string(),
        };
        let month = match self.month {
            MonthStyle::Numeric => date.format("%-m").to_string(),
            MonthStyle::TwoDigit => date.format("%m").to_string(),
            MonthStyle::Long => date.format_localized("%B", self.locale).to_string(),
            MonthStyle::Short => date.format_localized("%b", self.locale).to_string(),
            MonthStyle::Narrow => date
                .format_localized("%B", self.locale)
                .to_string()
                .chars()
                .take(1)
                .flat_map(char::to_uppercase)
                .collect(),
        };

        if self.month.is_textual() {
            match self.order {
                FieldOrder::MonthDayYear => format!("{month} {day}, {year}"),
                FieldOrder::DayMonthYear => format!("{day}{} {month} {year}", self.day_suffix),
                FieldOrder::YearMonthDay => format!("{year} {month} {day}"),
            }
        } else {
            match self.order {
                FieldOrder::MonthDayYear => format!("{month}/{day}/{year}"),
                FieldOrder::DayMonthYear if !self.day_suffix.is_empty() => format!("{day}.{month}.{year}"),
                FieldOrder::DayMonthYear => format!("{day}/{month}/{year}"),
                FieldOrder::YearMonthDay => format!("{year}-{month}-{day}"),
            }
        }
    }
}
