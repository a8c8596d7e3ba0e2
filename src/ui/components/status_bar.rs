//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::constants::{INPUT_ERROR_HINT, STATUS_HINT_CLOSED, STATUS_HINT_OPEN};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, app: &App) {
        let (status_text, status_color) = if app.picker.has_input_error() {
            (INPUT_ERROR_HINT, Color::Red)
        } else if app.picker.is_open() {
            (STATUS_HINT_OPEN, Color::Gray)
        } else {
            (STATUS_HINT_CLOSED, Color::Gray)
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, app.areas.status);
    }
}
