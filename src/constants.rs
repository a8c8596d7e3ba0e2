//! Constants used throughout the application
//!
//! This module centralizes default values, UI text and other constant values
//! to improve maintainability and consistency.

// Picker defaults
/// Locale tag used when none is configured
pub const DEFAULT_LOCALE: &str = "en-US";
/// Grace window between a click outside the picker and the picker closing
pub const DEFAULT_CLOSE_GRACE_MS: u64 = 100;
/// Upper bound accepted for the grace window
pub const MAX_CLOSE_GRACE_MS: u64 = 5_000;
/// Years offered by the year selector before the current one
pub const DEFAULT_YEAR_SPAN: u32 = 80;
/// Upper bound accepted for the year span
pub const MAX_YEAR_SPAN: u32 = 500;

// UI text
pub const DEFAULT_LABEL: &str = "Date";
pub const DEFAULT_FIELD_ID: &str = "date";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const STATUS_HINT_CLOSED: &str = "Type a date • Enter: commit/open • Ctrl+C: quit";
pub const STATUS_HINT_OPEN: &str = "←→↑↓: day • Enter: select • [ ]: month • m/M: month • y/Y: year • Esc: close";
pub const INPUT_ERROR_HINT: &str = "❌ Not a valid date";

// Event loop
/// Poll interval of the blocking terminal reader
pub const EVENT_POLL_MS: u64 = 50;

// Files
pub const APP_DIR_NAME: &str = "datepick";
pub const LOCAL_CONFIG_FILE: &str = "datepick.toml";
pub const LOG_FILE_NAME: &str = "datepick.log";

// UI Layout Constants
/// Width of one grid column in cells
pub const GRID_COLUMN_WIDTH: u16 = 4;
/// Height of the popup: borders, header, weekday row, six weeks
pub const POPUP_HEIGHT: u16 = 10;
/// Width of the popup: seven columns plus borders
pub const POPUP_WIDTH: u16 = GRID_COLUMN_WIDTH * 7 + 2;
/// Height of the text field including borders
pub const FIELD_HEIGHT: u16 = 3;
