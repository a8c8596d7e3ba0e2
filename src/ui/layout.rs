//! Layout management and calculations

use crate::constants::{FIELD_HEIGHT, GRID_COLUMN_WIDTH, POPUP_HEIGHT, POPUP_WIDTH};
use ratatui::layout::{Position, Rect};

/// Screen regions used for rendering and mouse hit-testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickerAreas {
    pub label: Rect,
    pub field: Rect,
    pub popup: Rect,
    pub prev_button: Rect,
    pub next_button: Rect,
    pub month_label: Rect,
    pub year_label: Rect,
    pub weekday_row: Rect,
    /// Week rows of the grid, without the weekday header
    pub grid: Rect,
    pub status: Rect,
}

impl PickerAreas {
    /// Whether `(column, row)` lies on the field or, when shown, on the popup
    #[must_use]
    pub fn contains(&self, column: u16, row: u16, popup_visible: bool) -> bool {
        let position = Position::new(column, row);
        self.field.contains(position) || (popup_visible && self.popup.contains(position))
    }

    /// Week row and column of the grid cell under `(column, row)`
    #[must_use]
    pub fn grid_cell_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        if !self.grid.contains(Position::new(column, row)) {
            return None;
        }
        let col = usize::from((column - self.grid.x) / GRID_COLUMN_WIDTH);
        let week = usize::from(row - self.grid.y);
        (col < 7).then_some((week, col))
    }
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Compute every region of the picker for a screen of `area`
    #[must_use]
    pub fn picker_areas(area: Rect) -> PickerAreas {
        let x = area.x.saturating_add(1);
        let width = area.width.saturating_sub(2).min(POPUP_WIDTH + 10).max(POPUP_WIDTH);
        let width = width.min(area.width);

        let label = Rect::new(x, area.y.saturating_add(1), width, 1);
        let field = Rect::new(x, label.y + 1, width, FIELD_HEIGHT);
        let popup = Rect::new(x, field.y + FIELD_HEIGHT, POPUP_WIDTH.min(area.width), POPUP_HEIGHT);

        let inner = Rect::new(
            popup.x + 1,
            popup.y + 1,
            popup.width.saturating_sub(2),
            popup.height.saturating_sub(2),
        );
        let header_y = inner.y;
        let prev_button = Rect::new(inner.x, header_y, 3, 1);
        let next_button = Rect::new(inner.right().saturating_sub(3), header_y, 3, 1);
        let month_label = Rect::new(prev_button.right() + 1, header_y, 11, 1);
        let year_label = Rect::new(month_label.right() + 1, header_y, 6, 1);
        let weekday_row = Rect::new(inner.x, header_y + 1, inner.width, 1);
        let grid = Rect::new(inner.x, header_y + 2, inner.width, inner.height.saturating_sub(2));

        let status = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);

        PickerAreas {
            label,
            field,
            popup,
            prev_button,
            next_button,
            month_label,
            year_label,
            weekday_row,
            grid,
            status,
        }
    }

    /// Rect of one grid cell
    #[must_use]
    pub fn cell_rect(grid: Rect, week: usize, col: usize) -> Rect {
        let x = grid.x + GRID_COLUMN_WIDTH * u16::try_from(col).unwrap_or(0);
        let y = grid.y + u16::try_from(week).unwrap_or(0);
        Rect::new(x, y, GRID_COLUMN_WIDTH, 1)
    }
}
