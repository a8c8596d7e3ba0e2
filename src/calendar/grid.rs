//! Monday-first month grid
//!
//! A grid is the days of one month plus the filler days needed to pad the
//! first and last week rows to seven columns.

use super::math::{days_in_month, days_in_previous_month, first_weekday_of_month, last_weekday_of_month};
use serde::{Deserialize, Serialize};

/// Which month a grid cell belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Previous,
    Current,
    Next,
}

/// A single numbered cell of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub day: u32,
    pub kind: CellKind,
}

impl GridCell {
    /// Whether the cell can be selected (belongs to the displayed month)
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.kind == CellKind::Current
    }
}

/// Day numbers of the previous, displayed and next month making up a grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub prev_month: Vec<u32>,
    pub current_month: Vec<u32>,
    pub next_month: Vec<u32>,
}

impl MonthGrid {
    /// Column (0 = Monday) of the 1st of the displayed month
    #[must_use]
    pub fn leading_offset(&self) -> usize {
        self.prev_month.len()
    }

    /// All cells in display order
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        let tag = |kind: CellKind| move |day: &u32| GridCell { day: *day, kind };
        self.prev_month
            .iter()
            .map(tag(CellKind::Previous))
            .chain(self.current_month.iter().map(tag(CellKind::Current)))
            .chain(self.next_month.iter().map(tag(CellKind::Next)))
    }

    /// Cells split into week rows of seven
    #[must_use]
    pub fn weeks(&self) -> Vec<Vec<GridCell>> {
        let cells: Vec<GridCell> = self.cells().collect();
        cells.chunks(7).map(<[GridCell]>::to_vec).collect()
    }

    /// Week row and column of `day` in the displayed month
    #[must_use]
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        if day == 0 || day as usize > self.current_month.len() {
            return None;
        }
        let index = self.leading_offset() + day as usize - 1;
        Some((index / 7, index % 7))
    }
}

/// Map a Sunday-based weekday onto a Monday-first week, Monday = 1 .. Sunday = 7
fn monday_based(sunday_based: u32) -> u32 {
    if sunday_based == 0 {
        7
    } else {
        sunday_based
    }
}

/// Compute the grid for a month (0-based)
///
/// The grid is always rebuilt from scratch; nothing is carried over from a
/// previously displayed month.
#[must_use]
pub fn build_month_grid(year: i32, month: i32) -> MonthGrid {
    let first_weekday = monday_based(first_weekday_of_month(year, month));
    let last_weekday = monday_based(last_weekday_of_month(year, month));

    let current_month: Vec<u32> = (1..=days_in_month(year, month)).collect();

    let leading = first_weekday - 1;
    let prev_month = if leading > 0 {
        let prev_len = days_in_previous_month(year, month);
        (prev_len - leading + 1..=prev_len).collect()
    } else {
        Vec::new()
    };

    let trailing = 7 - last_weekday;
    let next_month = if trailing > 0 {
        (1..=trailing).collect()
    } else {
        Vec::new()
    };

    MonthGrid {
        prev_month,
        current_month,
        next_month,
    }
}
