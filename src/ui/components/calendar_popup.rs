//! Calendar popup: month/year header, weekday row and the day grid

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;
use crate::calendar::{CellKind, GridCell};
use crate::constants::GRID_COLUMN_WIDTH;

/// Calendar popup component
pub struct CalendarPopup;

impl CalendarPopup {
    /// Render the popup; does nothing while the picker is closed
    pub fn render(f: &mut Frame, app: &App) {
        if !app.picker.is_open() {
            return;
        }
        let areas = app.areas;
        f.render_widget(Clear, areas.popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan));
        f.render_widget(block, areas.popup);

        let nav_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        f.render_widget(Paragraph::new(" ‹ ").style(nav_style), areas.prev_button);
        f.render_widget(Paragraph::new(" › ").style(nav_style), areas.next_button);

        let header_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        f.render_widget(
            Paragraph::new(app.picker.displayed_month_name())
                .alignment(Alignment::Center)
                .style(header_style),
            areas.month_label,
        );
        f.render_widget(
            Paragraph::new(app.picker.displayed_year().to_string())
                .alignment(Alignment::Center)
                .style(header_style),
            areas.year_label,
        );

        let width = usize::from(GRID_COLUMN_WIDTH);
        let weekdays: String = app
            .picker
            .weekday_headers()
            .iter()
            .map(|name| format!("{name:^width$}"))
            .collect();
        f.render_widget(
            Paragraph::new(weekdays).style(Style::default().fg(Color::Gray)),
            areas.weekday_row,
        );

        for (week, cells) in app.picker.grid().weeks().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let rect = LayoutManager::cell_rect(areas.grid, week, col);
                if rect.bottom() > areas.grid.bottom() {
                    continue;
                }
                let span = Span::styled(format!("{:^width$}", cell.day), Self::cell_style(app, cell));
                f.render_widget(Paragraph::new(span), rect);
            }
        }
    }

    fn cell_style(app: &App, cell: &GridCell) -> Style {
        match cell.kind {
            CellKind::Previous | CellKind::Next => Style::default().fg(Color::DarkGray),
            CellKind::Current if app.picker.is_selected_day(cell.day) => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            CellKind::Current if cell.day == app.cursor_day => {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::REVERSED)
            }
            CellKind::Current => Style::default().fg(Color::White),
        }
    }
}
