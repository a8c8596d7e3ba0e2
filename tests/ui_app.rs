use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use datepick::config::UiConfig;
use datepick::picker::{CalendarDate, PickerOptions, PickerState};
use datepick::ui::layout::LayoutManager;
use datepick::ui::{handle_events, App};
use ratatui::layout::Rect;
use std::time::Instant;

fn app() -> App {
    let picker =
        PickerState::with_date(PickerOptions::default(), CalendarDate::new(2024, 1, 10).unwrap()).unwrap();
    let mut app = App::new(picker, UiConfig::default());
    app.areas = LayoutManager::picker_areas(Rect::new(0, 0, 80, 24));
    app
}

fn key(app: &mut App, code: KeyCode) -> bool {
    handle_events(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), app, Instant::now())
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        key(app, KeyCode::Char(c));
    }
}

fn click(app: &mut App, column: u16, row: u16, at: Instant) -> bool {
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
    handle_events(event, app, at)
}

#[test]
fn test_field_starts_with_initial_value() {
    let app = app();
    assert_eq!(app.input, "February 10, 2024");
    // Quitting right away still reports the initial date
    assert_eq!(app.committed.as_deref(), Some("February 10, 2024"));
    assert_eq!(app.cursor_day, 10);
}

#[test]
fn test_typed_date_commits_on_enter() {
    let mut app = app();
    app.input.clear();
    type_text(&mut app, "2024-03-07");
    assert!(app.input_dirty);

    key(&mut app, KeyCode::Enter);
    assert_eq!(app.committed.as_deref(), Some("March 07, 2024"));
    assert_eq!(app.input, "March 07, 2024");
    assert!(!app.input_dirty);
    assert!(!app.picker.is_open());
}

#[test]
fn test_typed_garbage_flags_error() {
    let mut app = app();
    type_text(&mut app, "xyz");
    key(&mut app, KeyCode::Enter);
    assert!(app.picker.has_input_error());
    assert_eq!(app.committed.as_deref(), Some("February 10, 2024"));

    // Clearing the field clears the error without touching the selection
    while !app.input.is_empty() {
        key(&mut app, KeyCode::Backspace);
    }
    key(&mut app, KeyCode::Enter);
    assert!(!app.picker.has_input_error());
    assert_eq!(app.picker.selected_date(), CalendarDate::new(2024, 1, 10).unwrap());
}

#[test]
fn test_keyboard_day_selection() {
    let mut app = app();
    key(&mut app, KeyCode::Enter);
    assert!(app.picker.is_open());
    assert_eq!(app.cursor_day, 10);

    key(&mut app, KeyCode::Right);
    key(&mut app, KeyCode::Down);
    assert_eq!(app.cursor_day, 18);

    key(&mut app, KeyCode::Enter);
    assert!(!app.picker.is_open());
    assert_eq!(app.committed.as_deref(), Some("February 18, 2024"));
}

#[test]
fn test_cursor_is_clamped_to_month() {
    let mut app = app();
    key(&mut app, KeyCode::Enter);
    for _ in 0..10 {
        key(&mut app, KeyCode::Down);
    }
    assert_eq!(app.cursor_day, 29);
    key(&mut app, KeyCode::Char('['));
    assert_eq!(app.picker.displayed_month(), 0);
    assert_eq!(app.cursor_day, 29);
}

#[test]
fn test_month_and_year_cycling() {
    let mut app = app();
    key(&mut app, KeyCode::Enter);
    key(&mut app, KeyCode::Char('m'));
    assert_eq!(app.picker.displayed_month(), 2);
    key(&mut app, KeyCode::Char('M'));
    key(&mut app, KeyCode::Char('M'));
    assert_eq!(app.picker.displayed_month(), 0);

    key(&mut app, KeyCode::Char('Y'));
    assert_eq!(app.picker.displayed_year(), 2023);
    key(&mut app, KeyCode::Char('y'));
    assert_eq!(app.picker.displayed_year(), 2024);
}

#[test]
fn test_escape_closes_popup() {
    let mut app = app();
    key(&mut app, KeyCode::Enter);
    key(&mut app, KeyCode::Esc);
    assert!(!app.picker.is_open());
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = app();
    let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(handle_events(event, &mut app, Instant::now()));
    assert!(app.should_quit);
}

#[test]
fn test_click_on_grid_selects_day() {
    let mut app = app();
    let field = app.areas.field;
    click(&mut app, field.x + 1, field.y + 1, Instant::now());
    assert!(app.picker.is_open());

    // February 2024: row 0 starts with Jan 29-31, so the 1st sits at column 3
    let cell = LayoutManager::cell_rect(app.areas.grid, 0, 3);
    click(&mut app, cell.x, cell.y, Instant::now());
    assert_eq!(app.committed.as_deref(), Some("February 01, 2024"));
}

#[test]
fn test_click_on_filler_cell_is_ignored() {
    let mut app = app();
    key(&mut app, KeyCode::Enter);
    let cell = LayoutManager::cell_rect(app.areas.grid, 0, 0);
    assert!(!click(&mut app, cell.x, cell.y, Instant::now()));
    assert!(app.picker.is_open());
    assert_eq!(app.committed.as_deref(), Some("February 10, 2024"));
}

#[test]
fn test_click_outside_schedules_close() {
    let mut app = app();
    key(&mut app, KeyCode::Enter);
    let t0 = Instant::now();
    click(&mut app, 70, 20, t0);
    assert!(app.picker.is_open());
    assert!(app.picker.close_deadline().is_some());
}

#[test]
fn test_header_buttons_navigate() {
    let mut app = app();
    key(&mut app, KeyCode::Enter);
    let next = app.areas.next_button;
    click(&mut app, next.x, next.y, Instant::now());
    assert_eq!(app.picker.displayed_month(), 2);
    let prev = app.areas.prev_button;
    click(&mut app, prev.x, prev.y, Instant::now());
    click(&mut app, prev.x, prev.y, Instant::now());
    assert_eq!(app.picker.displayed_month(), 0);
}
