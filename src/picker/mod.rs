//! Date picker: committed date, formatting and the selection state machine

pub mod date;
pub mod format;
pub mod state;

pub use date::CalendarDate;
pub use format::{DateFormat, DateFormatter, DayStyle, FieldOrder, MonthStyle, YearStyle};
pub use state::{PickerAction, PickerEvent, PickerOptions, PickerState, PickerStatus, PickerViewState};
