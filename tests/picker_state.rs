use chrono::Month;
use datepick::picker::{
    CalendarDate, DateFormat, PickerAction, PickerEvent, PickerOptions, PickerState, PickerStatus,
};
use datepick::calendar::math::YEAR_LIMIT;
use datepick::calendar::first_weekday_of_month;
use datepick::CalendarError;
use std::time::{Duration, Instant};

/// Picker showing February 2024 with the 10th selected
fn picker() -> PickerState {
    picker_at(2024, 1, 10)
}

fn picker_at(year: i32, month: u32, day: u32) -> PickerState {
    PickerState::with_date(PickerOptions::default(), CalendarDate::new(year, month, day).unwrap()).unwrap()
}

#[test]
fn test_initial_state() {
    let picker = picker();
    let view = picker.view_state();
    assert_eq!(view.displayed_month, 1);
    assert_eq!(view.displayed_year, 2024);
    assert!(!view.is_open);
    assert!(!view.has_input_error);
    assert_eq!(picker.status(), PickerStatus::Closed);
    assert_eq!(picker.committed_value(), "February 10, 2024");
    assert_eq!(picker.grid().current_month.len(), 29);
    assert!(picker.close_deadline().is_none());
}

#[test]
fn test_new_uses_initial_offset() {
    let options = PickerOptions {
        initial_days_offset: 3,
        ..PickerOptions::default()
    };
    let picker = PickerState::new(options).unwrap();
    let expected = datepick::utils::datetime::today_with_offset(3);
    assert_eq!(picker.selected_date().as_naive(), expected);
}

#[test]
fn test_invalid_locale_fails_construction() {
    let options = PickerOptions {
        format: DateFormat {
            locale: "xx-YY".to_string(),
            ..DateFormat::default()
        },
        ..PickerOptions::default()
    };
    assert!(matches!(
        PickerState::new(options),
        Err(CalendarError::InvalidLocale(_))
    ));
}

#[test]
fn test_toggle_and_dismiss() {
    let mut picker = picker();
    assert_eq!(picker.handle_event(PickerEvent::Toggle), PickerAction::Redraw);
    assert_eq!(picker.status(), PickerStatus::Open);
    picker.handle_event(PickerEvent::Toggle);
    assert_eq!(picker.status(), PickerStatus::Closed);

    picker.handle_event(PickerEvent::Toggle);
    assert_eq!(picker.handle_event(PickerEvent::Dismiss), PickerAction::Redraw);
    assert!(!picker.is_open());
    assert_eq!(picker.handle_event(PickerEvent::Dismiss), PickerAction::None);
}

#[test]
fn test_navigate_next_wraps_december() {
    let mut picker = picker_at(2023, 11, 15);
    picker.handle_event(PickerEvent::NavigateNext);
    assert_eq!(picker.displayed_month(), 0);
    assert_eq!(picker.displayed_year(), 2024);
    // Browsing never changes the selection
    assert_eq!(picker.selected_date(), CalendarDate::new(2023, 11, 15).unwrap());
}

#[test]
fn test_navigate_prev_wraps_january() {
    let mut picker = picker_at(2024, 0, 15);
    picker.handle_event(PickerEvent::NavigatePrev);
    assert_eq!(picker.displayed_month(), 11);
    assert_eq!(picker.displayed_year(), 2023);
    assert_eq!(picker.grid().current_month.len(), 31);
}

#[test]
fn test_navigation_recomputes_grid() {
    let mut picker = picker();
    picker.handle_event(PickerEvent::NavigateNext);
    assert_eq!(picker.grid().prev_month, vec![26, 27, 28, 29]);
    assert!(picker.grid().next_month.is_empty());
}

#[test]
fn test_select_day_commits_and_closes() {
    let mut picker = picker();
    picker.handle_event(PickerEvent::Toggle);
    let action = picker.handle_event(PickerEvent::SelectDay(15));
    assert_eq!(action, PickerAction::Committed("February 15, 2024".to_string()));
    assert!(!picker.is_open());
    assert_eq!(picker.selected_date(), CalendarDate::new(2024, 1, 15).unwrap());
    assert!(picker.is_selected_day(15));
    assert!(!picker.is_selected_day(10));
}

#[test]
fn test_committing_same_day_twice_notifies_twice() {
    let mut picker = picker();
    let first = picker.handle_event(PickerEvent::SelectDay(15));
    let second = picker.handle_event(PickerEvent::SelectDay(15));
    assert_eq!(first, PickerAction::Committed("February 15, 2024".to_string()));
    assert_eq!(first, second);
}

#[test]
fn test_select_day_uses_displayed_month() {
    let mut picker = picker();
    picker.handle_event(PickerEvent::NavigateNext);
    picker.handle_event(PickerEvent::NavigateNext);
    assert!(!picker.is_selected_day(10));

    let action = picker.handle_event(PickerEvent::SelectDay(30));
    assert_eq!(action, PickerAction::Committed("April 30, 2024".to_string()));
    assert_eq!(picker.displayed_month(), 3);
}

#[test]
fn test_select_day_outside_month_is_ignored() {
    let mut picker = picker();
    assert_eq!(picker.handle_event(PickerEvent::SelectDay(30)), PickerAction::None);
    assert_eq!(picker.handle_event(PickerEvent::SelectDay(0)), PickerAction::None);
    assert_eq!(picker.selected_date(), CalendarDate::new(2024, 1, 10).unwrap());
}

#[test]
fn test_select_month_and_year() {
    let mut picker = picker();
    picker.handle_event(PickerEvent::SelectMonth(Month::July));
    assert_eq!(picker.displayed_month(), 6);
    assert_eq!(picker.grid().current_month.len(), 31);

    picker.handle_event(PickerEvent::SelectYear(1944));
    picker.handle_event(PickerEvent::SelectMonth(Month::February));
    assert_eq!(picker.displayed_year(), 1944);
    assert_eq!(picker.grid().current_month.len(), 29);
    assert_eq!(picker.selected_date(), CalendarDate::new(2024, 1, 10).unwrap());
}

#[test]
fn test_select_year_out_of_range_is_ignored() {
    let mut picker = picker();
    assert_eq!(picker.handle_event(PickerEvent::SelectYear(300_000)), PickerAction::None);
    assert_eq!(picker.displayed_year(), 2024);
}

#[test]
fn test_select_month_by_name() {
    let mut picker = picker();
    assert_eq!(picker.select_month_by_name("October"), Ok(PickerAction::Redraw));
    assert_eq!(picker.displayed_month(), 9);
    assert_eq!(picker.displayed_month_name(), "October");

    assert_eq!(
        picker.select_month_by_name("Smarch"),
        Err(CalendarError::UnknownMonthName("Smarch".to_string()))
    );
    assert_eq!(picker.displayed_month(), 9);
}

#[test]
fn test_empty_text_input_is_neutral() {
    let mut picker = picker();
    picker.handle_event(PickerEvent::TextInput("garbage".to_string()));
    assert!(picker.has_input_error());

    picker.handle_event(PickerEvent::TextInput(String::new()));
    assert!(!picker.has_input_error());
    assert_eq!(picker.selected_date(), CalendarDate::new(2024, 1, 10).unwrap());
}

#[test]
fn test_invalid_text_input_sets_error() {
    let mut picker = picker();
    let action = picker.handle_event(PickerEvent::TextInput("not-a-date".to_string()));
    assert_eq!(action, PickerAction::Redraw);
    assert!(picker.has_input_error());
    assert_eq!(picker.selected_date(), CalendarDate::new(2024, 1, 10).unwrap());
}

#[test]
fn test_valid_text_input_commits_and_resyncs() {
    let mut picker = picker();
    picker.handle_event(PickerEvent::TextInput("nope".to_string()));
    picker.handle_event(PickerEvent::NavigateNext);

    let action = picker.handle_event(PickerEvent::TextInput("1999-12-31".to_string()));
    assert_eq!(action, PickerAction::Committed("December 31, 1999".to_string()));
    assert!(!picker.has_input_error());
    assert_eq!(picker.displayed_month(), 11);
    assert_eq!(picker.displayed_year(), 1999);
    assert!(picker.is_selected_day(31));
}

#[test]
fn test_set_value_resyncs_display() {
    let mut picker = picker();
    picker.handle_event(PickerEvent::SelectYear(1990));
    let date = CalendarDate::new(2025, 6, 4).unwrap();
    let action = picker.handle_event(PickerEvent::SetValue(date));
    assert_eq!(action, PickerAction::Committed("July 04, 2025".to_string()));
    assert_eq!(picker.displayed_year(), 2025);
    assert_eq!(picker.displayed_month(), 6);
}

#[test]
fn test_pointer_leaving_closes_after_grace_window() {
    let mut picker = picker();
    picker.handle_event(PickerEvent::Toggle);

    let t0 = Instant::now();
    picker.handle_event(PickerEvent::PointerLeftBounds { at: t0 });
    assert!(picker.is_open());
    assert_eq!(picker.close_deadline(), Some(t0 + Duration::from_millis(100)));

    let early = picker.handle_event(PickerEvent::Tick {
        now: t0 + Duration::from_millis(50),
    });
    assert_eq!(early, PickerAction::None);
    assert!(picker.is_open());

    let due = picker.handle_event(PickerEvent::Tick {
        now: t0 + Duration::from_millis(100),
    });
    assert_eq!(due, PickerAction::Redraw);
    assert!(!picker.is_open());
    assert!(picker.close_deadline().is_none());
}

#[test]
fn test_pointer_reentering_cancels_close() {
    let mut picker = picker();
    picker.handle_event(PickerEvent::Toggle);
    let t0 = Instant::now();
    picker.handle_event(PickerEvent::PointerLeftBounds { at: t0 });
    picker.handle_event(PickerEvent::PointerEnteredBounds);
    picker.handle_event(PickerEvent::Tick {
        now: t0 + Duration::from_secs(1),
    });
    assert!(picker.is_open());
}

#[test]
fn test_commit_within_grace_window_clears_pending_close() {
    let mut picker = picker();
    picker.handle_event(PickerEvent::Toggle);
    let t0 = Instant::now();
    picker.handle_event(PickerEvent::PointerLeftBounds { at: t0 });
    picker.handle_event(PickerEvent::SelectDay(20));
    assert!(picker.close_deadline().is_none());
    assert!(!picker.is_open());
}

#[test]
fn test_pointer_leaving_closed_picker_schedules_nothing() {
    let mut picker = picker();
    picker.handle_event(PickerEvent::PointerLeftBounds { at: Instant::now() });
    assert!(picker.close_deadline().is_none());
}

#[test]
fn test_grace_window_is_configurable() {
    let options = PickerOptions {
        close_grace: Duration::from_millis(250),
        ..PickerOptions::default()
    };
    let mut picker = PickerState::with_date(options, CalendarDate::new(2024, 1, 10).unwrap()).unwrap();
    picker.handle_event(PickerEvent::Toggle);
    let t0 = Instant::now();
    picker.handle_event(PickerEvent::PointerLeftBounds { at: t0 });
    picker.handle_event(PickerEvent::Tick {
        now: t0 + Duration::from_millis(200),
    });
    assert!(picker.is_open());
}

#[test]
fn test_year_options_span_81_years() {
    let picker = picker();
    let years = picker.year_options(2026);
    assert_eq!(years.len(), 81);
    assert_eq!(years.first(), Some(&2026));
    assert_eq!(years.last(), Some(&1946));
}

#[test]
fn test_month_options_follow_name_table() {
    let picker = picker();
    let months = picker.month_options();
    assert_eq!(months.len(), 12);
    assert_eq!(months[0], "January");
    assert_eq!(picker.weekday_headers()[0], "Mon");
}

#[test]
fn test_navigate_next_stops_at_last_supported_year() {
    let mut picker = picker_at(YEAR_LIMIT, 11, 15);
    assert_eq!(picker.handle_event(PickerEvent::NavigateNext), PickerAction::None);
    assert_eq!(picker.displayed_year(), YEAR_LIMIT);
    assert_eq!(picker.displayed_month(), 11);

    // The grid still matches the displayed month
    let leading = (first_weekday_of_month(YEAR_LIMIT, 11) + 6) % 7;
    assert_eq!(picker.grid().leading_offset(), leading as usize);
    assert_eq!(picker.grid().current_month.len(), 31);

    let action = picker.handle_event(PickerEvent::SelectDay(1));
    assert_eq!(
        action,
        PickerAction::Committed(format!("December 01, {YEAR_LIMIT}"))
    );
}

#[test]
fn test_navigate_prev_stops_at_first_supported_year() {
    let mut picker = picker_at(-YEAR_LIMIT, 0, 15);
    assert_eq!(picker.handle_event(PickerEvent::NavigatePrev), PickerAction::None);
    assert_eq!(picker.displayed_year(), -YEAR_LIMIT);
    assert_eq!(picker.displayed_month(), 0);
}

#[test]
fn test_out_of_range_values_are_rejected() {
    let mut picker = picker();
    let far = CalendarDate::new(YEAR_LIMIT + 1, 0, 1).unwrap();
    assert_eq!(picker.handle_event(PickerEvent::SetValue(far)), PickerAction::None);
    assert_eq!(picker.selected_date(), CalendarDate::new(2024, 1, 10).unwrap());
    assert_eq!(picker.displayed_year(), 2024);

    assert!(matches!(
        PickerState::with_date(PickerOptions::default(), far),
        Err(CalendarError::InvalidDate { .. })
    ));

    picker.handle_event(PickerEvent::TextInput(format!("+{}-01-01", YEAR_LIMIT + 100)));
    assert!(picker.has_input_error());
    assert_eq!(picker.displayed_year(), 2024);
}

#[test]
fn test_large_years_format_without_sign() {
    let picker = picker_at(12_345, 0, 5);
    assert_eq!(picker.committed_value(), "January 05, 12345");
}
