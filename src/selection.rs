use std::cmp;
use std::fmt;

use tracing::debug;

use crate::grid::grid::Grid;
use crate::util::{CellRef, Direction};

/// Two-point rectangular selection.
/// `anchor` is where shift-navigation began, `moving` is the far corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub anchor: CellRef,
    pub moving: CellRef,
}

impl Range {
    /// Bounds as (start_row, end_row, start_col, end_col), inclusive
    pub fn bounds(&self) -> (usize, usize, usize, usize) {
        (
            cmp::min(self.anchor.row, self.moving.row),
            cmp::max(self.anchor.row, self.moving.row),
            cmp::min(self.anchor.col, self.moving.col),
            cmp::max(self.anchor.col, self.moving.col),
        )
    }

    pub fn contains(&self, cell: CellRef) -> bool {
        let (start_row, end_row, start_col, end_col) = self.bounds();
        (start_row..=end_row).contains(&cell.row) && (start_col..=end_col).contains(&cell.col)
    }

    pub fn cell_count(&self) -> usize {
        let (start_row, end_row, start_col, end_col) = self.bounds();
        (end_row - start_row + 1) * (end_col - start_col + 1)
    }

    /// Whether `moving` sits exactly one step from `anchor` in `direction`
    fn is_one_step(&self, direction: Direction) -> bool {
        self.anchor.step(direction) == Some(self.moving)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start_row, end_row, start_col, end_col) = self.bounds();
        write!(
            f,
            "{}:{}",
            CellRef::new(start_row, start_col),
            CellRef::new(end_row, end_col)
        )
    }
}

/// Optional range selection driven by Shift+Arrow
#[derive(Debug, Clone, Default)]
pub struct Selection {
    range: Option<Range>,
}

impl Selection {
    pub fn new() -> Self {
        Self { range: None }
    }

    pub fn range(&self) -> Option<Range> {
        self.range
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_none()
    }

    pub fn clear(&mut self) {
        if self.range.take().is_some() {
            debug!("selection cleared");
        }
    }

    pub fn contains(&self, cell: CellRef) -> bool {
        self.range.is_some_and(|r| r.contains(cell))
    }

    /// Apply one Shift+Arrow press.
    ///
    /// Starts a two-cell range at `active`, collapses a one-step range when
    /// walking back towards the anchor, or pushes the moving corner one more
    /// step. Steps off the grid leave the selection untouched.
    pub fn extend(&mut self, direction: Direction, active: CellRef, grid: &Grid) {
        match self.range {
            None => {
                if let Some(moving) = active.step(direction).filter(|c| grid.contains(*c)) {
                    let range = Range { anchor: active, moving };
                    debug!(%range, "selection started");
                    self.range = Some(range);
                }
            }
            Some(range) if range.is_one_step(direction.opposite()) => {
                debug!(%range, "selection collapsed");
                self.range = None;
            }
            Some(range) => {
                if let Some(moving) = range.moving.step(direction).filter(|c| grid.contains(*c)) {
                    let range = Range { anchor: range.anchor, moving };
                    debug!(%range, "selection extended");
                    self.range = Some(range);
                }
            }
        }
    }
}
