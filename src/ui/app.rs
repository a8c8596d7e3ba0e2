//! Application state for the terminal front-end
//!
//! `App` is the caller of the picker: it owns the text field contents, keeps
//! the last committed value and turns key presses into picker events.

use super::layout::PickerAreas;
use crate::calendar::days_in_month;
use crate::config::UiConfig;
use crate::picker::{PickerAction, PickerEvent, PickerState};
use crate::utils::datetime;

/// Application state
pub struct App {
    pub should_quit: bool,
    pub picker: PickerState,
    pub ui: UiConfig,
    /// Text shown in the field
    pub input: String,
    /// Whether `input` was edited since the last commit
    pub input_dirty: bool,
    /// Last value reported by the picker
    pub committed: Option<String>,
    /// Keyboard cursor inside the grid
    pub cursor_day: u32,
    /// Regions from the last frame, used for mouse hit-testing
    pub areas: PickerAreas,
}

impl App {
    /// Create the app around a picker, showing its initial value
    #[must_use]
    pub fn new(picker: PickerState, ui: UiConfig) -> Self {
        let input = picker.committed_value();
        let cursor_day = picker.selected_date().day();
        Self {
            should_quit: false,
            picker,
            ui,
            input_dirty: false,
            // The initial selection counts as the first reported value
            committed: Some(input.clone()),
            input,
            cursor_day,
            areas: PickerAreas::default(),
        }
    }

    /// Feed an event to the picker and react to the outcome
    pub fn dispatch(&mut self, event: PickerEvent) -> PickerAction {
        let action = self.picker.handle_event(event);
        if let PickerAction::Committed(value) = &action {
            log::info!("Field '{}' changed to {}", self.ui.id, value);
            self.input.clone_from(value);
            self.input_dirty = false;
            self.committed = Some(value.clone());
            self.cursor_day = self.picker.selected_date().day();
        }
        self.clamp_cursor();
        action
    }

    /// Open or close the popup, placing the cursor on the selection
    pub fn toggle_picker(&mut self) {
        self.dispatch(PickerEvent::Toggle);
        if self.picker.is_open() {
            let selected = self.picker.selected_date();
            self.cursor_day = if self.picker.is_selected_day(selected.day()) {
                selected.day()
            } else {
                1
            };
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.input_dirty = true;
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
        self.input_dirty = true;
    }

    /// Send the edited field contents to the picker
    pub fn submit_input(&mut self) -> PickerAction {
        let raw = self.input.clone();
        let action = self.dispatch(PickerEvent::TextInput(raw));
        self.input_dirty = false;
        action
    }

    /// Move the grid cursor by `delta` days within the displayed month
    pub fn move_cursor(&mut self, delta: i64) {
        let max = i64::from(self.days_displayed());
        let moved = (i64::from(self.cursor_day) + delta).clamp(1, max);
        self.cursor_day = u32::try_from(moved).unwrap_or(1);
    }

    /// Select the month after (`step` = 1) or before (`step` = -1) the displayed one by name
    pub fn cycle_month_by_name(&mut self, step: i32) {
        let names = self.picker.month_options();
        let current = self.picker.displayed_month() as i32;
        let index = (current + step).rem_euclid(names.len() as i32) as usize;
        let name = names[index].clone();
        match self.picker.select_month_by_name(&name) {
            Ok(_) => self.clamp_cursor(),
            Err(e) => log::warn!("{}", e),
        }
    }

    /// Step through the year selector options, wrapping at both ends
    pub fn cycle_year(&mut self, step: i32) {
        let options = self.picker.year_options(datetime::current_year());
        let displayed = self.picker.displayed_year();
        let next = match options.iter().position(|&y| y == displayed) {
            // Options are listed newest first, so a positive step moves up the list
            Some(i) => {
                let len = options.len() as i32;
                options[(i as i32 - step).rem_euclid(len) as usize]
            }
            None => options.first().copied().unwrap_or(displayed),
        };
        self.dispatch(PickerEvent::SelectYear(next));
    }

    fn days_displayed(&self) -> u32 {
        days_in_month(self.picker.displayed_year(), self.picker.displayed_month() as i32)
    }

    fn clamp_cursor(&mut self) {
        self.cursor_day = self.cursor_day.clamp(1, self.days_displayed());
    }
}
