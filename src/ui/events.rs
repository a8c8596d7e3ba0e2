//! Event handling and key bindings

use super::app::App;
use crate::picker::PickerEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

/// Handle a terminal event; returns whether anything was handled
pub fn handle_events(event: Event, app: &mut App, now: Instant) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(key, app),
        Event::Mouse(mouse) if app.ui.mouse_enabled => handle_mouse(mouse, app, now),
        _ => false,
    }
}

fn handle_key(key: KeyEvent, app: &mut App) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c' | 'q')) {
        app.should_quit = true;
        return true;
    }

    if app.picker.is_open() {
        handle_popup_key(key, app)
    } else {
        handle_field_key(key, app)
    }
}

/// Keys while the popup is closed edit the text field
fn handle_field_key(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char(c) if !c.is_control() => {
            app.push_char(c);
            true
        }
        KeyCode::Backspace => {
            app.pop_char();
            true
        }
        KeyCode::Enter if app.input_dirty => {
            app.submit_input();
            true
        }
        KeyCode::Enter | KeyCode::Down | KeyCode::F(4) => {
            app.toggle_picker();
            true
        }
        _ => false,
    }
}

/// Keys while the popup is open drive the grid
fn handle_popup_key(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.dispatch(PickerEvent::Dismiss);
        }
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-7),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(7),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.dispatch(PickerEvent::SelectDay(app.cursor_day));
        }
        KeyCode::Char('[') | KeyCode::PageUp => {
            app.dispatch(PickerEvent::NavigatePrev);
        }
        KeyCode::Char(']') | KeyCode::PageDown => {
            app.dispatch(PickerEvent::NavigateNext);
        }
        KeyCode::Char('m') => app.cycle_month_by_name(1),
        KeyCode::Char('M') => app.cycle_month_by_name(-1),
        KeyCode::Char('y') => app.cycle_year(1),
        KeyCode::Char('Y') => app.cycle_year(-1),
        _ => return false,
    }
    true
}

fn handle_mouse(mouse: MouseEvent, app: &mut App, now: Instant) -> bool {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return false;
    }
    let (column, row) = (mouse.column, mouse.row);
    let areas = app.areas;
    let open = app.picker.is_open();

    if !areas.contains(column, row, open) {
        app.dispatch(PickerEvent::PointerLeftBounds { at: now });
        return true;
    }
    app.dispatch(PickerEvent::PointerEnteredBounds);

    if areas.field.contains((column, row).into()) {
        app.toggle_picker();
        return true;
    }
    if !open {
        return false;
    }

    if areas.prev_button.contains((column, row).into()) {
        app.dispatch(PickerEvent::NavigatePrev);
    } else if areas.next_button.contains((column, row).into()) {
        app.dispatch(PickerEvent::NavigateNext);
    } else if areas.month_label.contains((column, row).into()) {
        app.cycle_month_by_name(1);
    } else if areas.year_label.contains((column, row).into()) {
        app.cycle_year(1);
    } else if let Some((week, col)) = areas.grid_cell_at(column, row) {
        let cell = app.picker.grid().weeks().get(week).and_then(|w| w.get(col)).copied();
        match cell {
            Some(cell) if cell.is_selectable() => {
                app.dispatch(PickerEvent::SelectDay(cell.day));
            }
            _ => return false,
        }
    } else {
        return false;
    }
    true
}
