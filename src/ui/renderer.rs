//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Alignment,
    style::{Color, Style},
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use super::app::App;
use super::components::{CalendarPopup, DateField, StatusBar};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::config::Config;
use crate::constants::{EVENT_POLL_MS, FIELD_HEIGHT, POPUP_HEIGHT, POPUP_WIDTH};
use crate::picker::{PickerEvent, PickerState};

/// Run the interactive picker; returns the last committed value, if any
pub async fn run_app(config: &Config) -> Result<Option<String>> {
    let picker = PickerState::new(config.picker_options()?)?;
    let mut app = App::new(picker, config.ui.clone());
    log::info!("Starting picker '{}' at {}", app.ui.id, app.input);

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if app.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = mpsc::unbounded_channel();
    let reader = spawn_event_reader(tx);

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, rx).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = reader.await {
        log::warn!("Event reader ended abnormally: {e}");
    }

    res.map(|()| app.committed)
}

/// Forward terminal events from a blocking thread until the receiver goes away
fn spawn_event_reader(tx: mpsc::UnboundedSender<Event>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(Duration::from_millis(EVENT_POLL_MS)) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to read terminal event: {e}");
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    log::error!("Failed to poll terminal events: {e}");
                    break;
                }
            }
        }
    })
}

/// Sleep until the picker's pending close is due, or forever when none is pending
async fn close_deadline_elapsed(deadline: Option<std::time::Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

/// Main UI loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    mut rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        tokio::select! {
            maybe_event = rx.recv() => match maybe_event {
                Some(event) => {
                    handle_events(event, app, std::time::Instant::now());
                }
                None => break,
            },
            () = close_deadline_elapsed(app.picker.close_deadline()) => {
                app.dispatch(PickerEvent::Tick { now: std::time::Instant::now() });
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the field, the popup and the status bar
fn render_ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    if area.width < POPUP_WIDTH + 2 || area.height < FIELD_HEIGHT + POPUP_HEIGHT + 3 {
        let warning = Paragraph::new("Terminal too small")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red));
        f.render_widget(warning, area);
        return;
    }

    app.areas = LayoutManager::picker_areas(area);
    DateField::render(f, app);
    CalendarPopup::render(f, app);
    StatusBar::render(f, app);
}
