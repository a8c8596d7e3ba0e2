//! datepick - calendar grid computation and a date-picker state machine
//!
//! The library computes the Monday-first grid of a month (with the filler
//! days borrowed from the neighbouring months) and drives date selection
//! through a small event-based state machine. A ratatui front-end shows the
//! picker in a terminal.
//!
//! # Modules
//!
//! * [`calendar`] - Month lengths, weekdays, name tables and the month grid
//! * [`picker`] - Committed date, formatting and the picker state machine
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Calendar math: day counts, weekdays and the month grid
pub mod calendar;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error types shared by the calendar and picker layers
pub mod error;

/// Logging setup
pub mod logger;

/// Date picker state machine
pub mod picker;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

pub use calendar::{build_month_grid, MonthGrid};
pub use error::CalendarError;
pub use picker::{CalendarDate, PickerAction, PickerEvent, PickerState};
