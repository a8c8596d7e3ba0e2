//! UI components for the picker screen

pub mod calendar_popup;
pub mod date_field;
pub mod status_bar;

pub use calendar_popup::CalendarPopup;
pub use date_field::DateField;
pub use status_bar::StatusBar;
