//! UI module for datepick
//!
//! This module handles the terminal front-end: rendering the field and popup
//! and translating key and mouse input into picker events.

pub mod app;
pub mod components;
pub mod events;
pub mod layout;
pub mod renderer;

pub use app::App;
pub use events::handle_events;
pub use layout::{LayoutManager, PickerAreas};
pub use renderer::run_app;
