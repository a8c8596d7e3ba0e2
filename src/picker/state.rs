//! Date picker state machine
//!
//! [`PickerState`] owns the displayed month/year, the committed date and the
//! open/closed status. Every mutation goes through a named event; views only
//! read the state and send [`PickerEvent`]s back.

use super::date::CalendarDate;
use super::format::{DateFormat, DateFormatter};
use crate::calendar::{is_supported_year, parse_date_input, CalendarMath, MonthGrid, NameTables};
use crate::constants::{DEFAULT_CLOSE_GRACE_MS, DEFAULT_YEAR_SPAN};
use crate::error::CalendarError;
use crate::utils::datetime;
use chrono::{Datelike, Month};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Open/closed status of the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerStatus {
    #[default]
    Closed,
    Open,
}

/// Inputs the state machine reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// Click on the field or the calendar icon
    Toggle,
    /// Escape
    Dismiss,
    /// The pointer was pressed outside the picker
    PointerLeftBounds { at: Instant },
    /// The pointer was pressed inside the picker again
    PointerEnteredBounds,
    /// Clock tick, used to apply a deferred close
    Tick { now: Instant },
    NavigatePrev,
    NavigateNext,
    SelectMonth(Month),
    SelectYear(i32),
    SelectDay(u32),
    TextInput(String),
    /// External synchronization of the committed value
    SetValue(CalendarDate),
}

/// What the caller should do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    /// A date was committed; carries the formatted value
    Committed(String),
    /// State changed without a commit
    Redraw,
    None,
}

/// Snapshot of everything a view needs besides the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerViewState {
    /// 0 = January
    pub displayed_month: u32,
    pub displayed_year: i32,
    pub selected_date: CalendarDate,
    pub is_open: bool,
    pub has_input_error: bool,
}

/// Construction options
#[derive(Debug, Clone)]
pub struct PickerOptions {
    pub format: DateFormat,
    /// Delay between a pointer leaving the picker and the picker closing
    pub close_grace: Duration,
    /// Days added to today for the initial selection
    pub initial_days_offset: i64,
    /// How many years before the current one the year selector offers
    pub year_span: u32,
    pub names: Arc<NameTables>,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            format: DateFormat::default(),
            close_grace: Duration::from_millis(DEFAULT_CLOSE_GRACE_MS),
            initial_days_offset: 0,
            year_span: DEFAULT_YEAR_SPAN,
            names: NameTables::english(),
        }
    }
}

/// The picker state machine
#[derive(Debug, Clone)]
pub struct PickerState {
    math: CalendarMath,
    formatter: DateFormatter,
    close_grace: Duration,
    year_span: u32,
    view: PickerViewState,
    grid: MonthGrid,
    close_deadline: Option<Instant>,
}

impl PickerState {
    /// Create a picker whose selection is today shifted by `initial_days_offset`
    pub fn new(options: PickerOptions) -> Result<Self, CalendarError> {
        let initial = CalendarDate::from(datetime::today_with_offset(options.initial_days_offset));
        Self::with_date(options, initial)
    }

    /// Create a picker with an explicit initial selection
    pub fn with_date(options: PickerOptions, selected: CalendarDate) -> Result<Self, CalendarError> {
        if !is_supported_year(selected.year()) {
            return Err(CalendarError::InvalidDate {
                year: selected.year(),
                month: selected.month(),
                day: selected.day(),
            });
        }
        let formatter = options.format.formatter()?;
        let math = CalendarMath::new(options.names);
        let grid = math.build_month_grid(selected.year(), selected.month() as i32);
        Ok(Self {
            math,
            formatter,
            close_grace: options.close_grace,
            year_span: options.year_span,
            view: PickerViewState {
                displayed_month: selected.month(),
                displayed_year: selected.year(),
                selected_date: selected,
                is_open: false,
                has_input_error: false,
            },
            grid,
            close_deadline: None,
        })
    }

    /// Dispatch an event to its handler
    pub fn handle_event(&mut self, event: PickerEvent) -> PickerAction {
        log::debug!("Picker event: {:?}", event);
        match event {
            PickerEvent::Toggle => self.toggle(),
            PickerEvent::Dismiss => self.dismiss(),
            PickerEvent::PointerLeftBounds { at } => self.pointer_left_bounds(at),
            PickerEvent::PointerEnteredBounds => self.pointer_entered_bounds(),
            PickerEvent::Tick { now } => self.tick(now),
            PickerEvent::NavigatePrev => self.navigate_prev(),
            PickerEvent::NavigateNext => self.navigate_next(),
            PickerEvent::SelectMonth(month) => self.select_month(month),
            PickerEvent::SelectYear(year) => self.select_year(year),
            PickerEvent::SelectDay(day) => self.select_day(day),
            PickerEvent::TextInput(raw) => self.text_input(&raw),
            PickerEvent::SetValue(date) => self.set_value(date),
        }
    }

    pub fn toggle(&mut self) -> PickerAction {
        if self.view.is_open {
            self.close();
        } else {
            self.view.is_open = true;
            self.close_deadline = None;
        }
        PickerAction::Redraw
    }

    pub fn dismiss(&mut self) -> PickerAction {
        if !self.view.is_open {
            return PickerAction::None;
        }
        self.close();
        PickerAction::Redraw
    }

    /// Schedule a close after the grace window
    pub fn pointer_left_bounds(&mut self, at: Instant) -> PickerAction {
        if self.view.is_open {
            self.close_deadline = Some(at + self.close_grace);
        }
        PickerAction::None
    }

    /// Cancel a pending close
    pub fn pointer_entered_bounds(&mut self) -> PickerAction {
        self.close_deadline = None;
        PickerAction::None
    }

    /// Apply a pending close once its deadline has passed
    pub fn tick(&mut self, now: Instant) -> PickerAction {
        match self.close_deadline {
            Some(deadline) if now >= deadline => {
                self.close();
                PickerAction::Redraw
            }
            _ => PickerAction::None,
        }
    }

    pub fn navigate_prev(&mut self) -> PickerAction {
        let (year, month) = match self.view.displayed_month {
            0 => (self.view.displayed_year - 1, 11),
            m => (self.view.displayed_year, m - 1),
        };
        self.navigate_to(year, month)
    }

    pub fn navigate_next(&mut self) -> PickerAction {
        let (year, month) = match self.view.displayed_month {
            11 => (self.view.displayed_year + 1, 0),
            m => (self.view.displayed_year, m + 1),
        };
        self.navigate_to(year, month)
    }

    fn navigate_to(&mut self, year: i32, month: u32) -> PickerAction {
        if !is_supported_year(year) {
            log::warn!("Not navigating past year {}", self.view.displayed_year);
            return PickerAction::None;
        }
        self.show_month(year, month);
        PickerAction::Redraw
    }

    pub fn select_month(&mut self, month: Month) -> PickerAction {
        self.show_month(self.view.displayed_year, month.number_from_month() - 1);
        PickerAction::Redraw
    }

    /// Resolve a month name through the name table, then select it
    ///
    /// Unknown names are rejected and leave the state untouched.
    pub fn select_month_by_name(&mut self, name: &str) -> Result<PickerAction, CalendarError> {
        let month = self
            .math
            .month_index(name)
            .and_then(|index| u8::try_from(index + 1).ok())
            .and_then(|number| Month::try_from(number).ok())
            .ok_or_else(|| CalendarError::UnknownMonthName(name.to_string()))?;
        Ok(self.select_month(month))
    }

    pub fn select_year(&mut self, year: i32) -> PickerAction {
        if !is_supported_year(year) {
            log::warn!("Ignoring out-of-range year {}", year);
            return PickerAction::None;
        }
        self.show_month(year, self.view.displayed_month);
        PickerAction::Redraw
    }

    /// Commit a day of the displayed month
    pub fn select_day(&mut self, day: u32) -> PickerAction {
        match CalendarDate::new(self.view.displayed_year, self.view.displayed_month, day) {
            Ok(date) => self.commit(date),
            Err(e) => {
                log::warn!("Ignoring day selection: {}", e);
                PickerAction::None
            }
        }
    }

    /// Validate free text typed into the field
    ///
    /// An empty field only clears the error flag; it does not clear the
    /// selection.
    pub fn text_input(&mut self, raw: &str) -> PickerAction {
        if raw.is_empty() {
            self.view.has_input_error = false;
            return PickerAction::Redraw;
        }
        match parse_date_input(raw) {
            Some(date) if is_supported_year(date.year()) => {
                self.view.has_input_error = false;
                self.commit(CalendarDate::from(date))
            }
            _ => {
                log::debug!("Rejected date input {:?}", raw);
                self.view.has_input_error = true;
                PickerAction::Redraw
            }
        }
    }

    /// Replace the committed value from outside
    ///
    /// Dates in years the grid cannot show are ignored.
    pub fn set_value(&mut self, date: CalendarDate) -> PickerAction {
        if !is_supported_year(date.year()) {
            log::warn!("Ignoring out-of-range value {}", date);
            return PickerAction::None;
        }
        self.commit(date)
    }

    fn commit(&mut self, date: CalendarDate) -> PickerAction {
        self.view.selected_date = date;
        self.show_month(date.year(), date.month());
        self.close();
        let formatted = self.formatter.format(date.as_naive());
        log::info!("Committed date {} ({})", date, formatted);
        PickerAction::Committed(formatted)
    }

    fn close(&mut self) {
        self.view.is_open = false;
        self.close_deadline = None;
    }

    /// Point the grid at a month, rebuilding it from scratch
    fn show_month(&mut self, year: i32, month: u32) {
        self.view.displayed_year = year;
        self.view.displayed_month = month;
        self.grid = self.math.build_month_grid(year, month as i32);
    }

    #[must_use]
    pub fn view_state(&self) -> PickerViewState {
        self.view
    }

    #[must_use]
    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    #[must_use]
    pub fn status(&self) -> PickerStatus {
        if self.view.is_open {
            PickerStatus::Open
        } else {
            PickerStatus::Closed
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.view.is_open
    }

    #[must_use]
    pub fn has_input_error(&self) -> bool {
        self.view.has_input_error
    }

    #[must_use]
    pub fn selected_date(&self) -> CalendarDate {
        self.view.selected_date
    }

    #[must_use]
    pub fn displayed_month(&self) -> u32 {
        self.view.displayed_month
    }

    #[must_use]
    pub fn displayed_year(&self) -> i32 {
        self.view.displayed_year
    }

    /// Instant at which a pending close fires, if any
    #[must_use]
    pub fn close_deadline(&self) -> Option<Instant> {
        self.close_deadline
    }

    /// The formatted committed date
    #[must_use]
    pub fn committed_value(&self) -> String {
        self.formatter.format(self.view.selected_date.as_naive())
    }

    /// Name of the displayed month
    #[must_use]
    pub fn displayed_month_name(&self) -> &str {
        self.math
            .month_name(self.view.displayed_month as i32)
            .unwrap_or_default()
    }

    /// Month names for the month selector
    #[must_use]
    pub fn month_options(&self) -> &[String] {
        self.math.names().months()
    }

    /// Years for the year selector, `current_year` first, descending
    #[must_use]
    pub fn year_options(&self, current_year: i32) -> Vec<i32> {
        (0..=self.year_span)
            .filter_map(|back| i32::try_from(back).ok())
            .map(|back| current_year - back)
            .collect()
    }

    #[must_use]
    pub fn weekday_headers(&self) -> [&'static str; 7] {
        self.math.weekday_headers()
    }

    /// Whether `day` of the displayed month is the committed date
    #[must_use]
    pub fn is_selected_day(&self, day: u32) -> bool {
        let selected = self.view.selected_date;
        selected.year() == self.view.displayed_year
            && selected.month() == self.view.displayed_month
            && selected.day() == day
    }
}
