//! Labelled text field holding the date value

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::config::LabelPosition;

/// Date text field component
pub struct DateField;

impl DateField {
    /// Render the label and the field; the border turns red on invalid input
    pub fn render(f: &mut Frame, app: &App) {
        let areas = app.areas;

        let alignment = match app.ui.label_position {
            LabelPosition::Left => Alignment::Left,
            LabelPosition::Right => Alignment::Right,
            LabelPosition::Center => Alignment::Center,
        };
        let label = Paragraph::new(app.ui.label.as_str())
            .alignment(alignment)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        f.render_widget(label, areas.label);

        let border_color = if app.picker.has_input_error() {
            Color::Red
        } else if app.picker.is_open() {
            Color::Cyan
        } else {
            Color::Gray
        };

        let cursor = if app.picker.is_open() { "" } else { "█" };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" 📅 ")
            .title_alignment(Alignment::Right)
            .style(Style::default().fg(border_color));

        let field = Paragraph::new(format!("{}{}", app.input, cursor))
            .block(block)
            .style(Style::default().fg(Color::White));
        f.render_widget(field, areas.field);
    }
}
