use crate::grid::grid::Grid;
use crate::util::{CellRef, Direction};

/// View state for the grid (active cell, viewport)
#[derive(Debug, Clone)]
pub struct GridView {
    pub active: CellRef,

    // Viewport offset (top-left visible cell)
    pub viewport_row: usize,
    pub viewport_col: usize,

    // Visible cells, set from the layout before each render
    pub viewport_height: usize,
    pub viewport_width: usize,
}

impl GridView {
    pub fn new() -> Self {
        Self {
            active: CellRef::default(),
            viewport_row: 0,
            viewport_col: 0,
            viewport_height: 20,
            viewport_width: 8,
        }
    }

    pub fn is_active(&self, cell: CellRef) -> bool {
        self.active == cell
    }

    /// Move the active cell one step. A step off the grid is dropped; returns whether it moved.
    pub fn navigate(&mut self, direction: Direction, grid: &Grid) -> bool {
        match self.active.step(direction) {
            Some(target) if grid.contains(target) => {
                self.active = target;
                self.scroll_to_cursor();
                true
            }
            _ => false,
        }
    }

    /// Jump to an arbitrary cell, ignoring refs outside the grid
    pub fn set_active(&mut self, cell: CellRef, grid: &Grid) -> bool {
        if !grid.contains(cell) {
            return false;
        }
        self.active = cell;
        self.scroll_to_cursor();
        true
    }

    /// Update the visible cell counts and keep the active cell in view
    pub fn resize(&mut self, height: usize, width: usize) {
        self.viewport_height = height.max(1);
        self.viewport_width = width.max(1);
        self.scroll_to_cursor();
    }

    /// Ensure viewport contains the active cell
    pub fn scroll_to_cursor(&mut self) {
        // Vertical scrolling
        if self.active.row < self.viewport_row {
            self.viewport_row = self.active.row;
        } else if self.active.row >= self.viewport_row + self.viewport_height {
            self.viewport_row = self.active.row + 1 - self.viewport_height;
        }

        // Horizontal scrolling
        if self.active.col < self.viewport_col {
            self.viewport_col = self.active.col;
        } else if self.active.col >= self.viewport_col + self.viewport_width {
            self.viewport_col = self.active.col + 1 - self.viewport_width;
        }
    }
}

impl Default for GridView {
    fn default() -> Self {
        Self::new()
    }
}
