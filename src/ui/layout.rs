use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};

/// Top-level screen split: tab strip, grid, status bar, message line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub navbar: Rect,
    pub grid: Rect,
    pub status: Rect,
    pub message: Rect,
}

impl ScreenAreas {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            navbar: chunks[0],
            grid: chunks[1],
            status: chunks[2],
            message: chunks[3],
        }
    }
}

pub fn grid_block() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

/// Placement of header, gutter and cells inside the grid block.
///
/// Shared by rendering and mouse hit-testing so both agree on where a cell is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Area inside the border
    pub inner: Rect,
    /// Width of the row-number column, including one space of padding
    pub gutter_width: u16,
    pub cell_width: u16,
}

impl GridLayout {
    pub fn new(grid_area: Rect, row_count: usize, cell_width: u16) -> Self {
        let digits = row_count.to_string().len().max(3) as u16;
        Self {
            inner: grid_block().inner(grid_area),
            gutter_width: digits + 1,
            cell_width: cell_width.max(1),
        }
    }

    /// Layout for a whole frame area
    pub fn for_screen(screen: Rect, row_count: usize, cell_width: u16) -> Self {
        Self::new(ScreenAreas::new(screen).grid, row_count, cell_width)
    }

    /// Data rows that fit below the header line
    pub fn visible_rows(&self) -> usize {
        self.inner.height.saturating_sub(1) as usize
    }

    /// Whole cells that fit right of the gutter
    pub fn visible_cols(&self) -> usize {
        (self.inner.width.saturating_sub(self.gutter_width) / self.cell_width) as usize
    }

    /// Screen x of the cell at viewport column offset `col_offset`
    pub fn cell_x(&self, col_offset: usize) -> u16 {
        self.inner.x + self.gutter_width + col_offset as u16 * self.cell_width
    }

    /// Screen y of the data row at viewport row offset `row_offset`
    pub fn cell_y(&self, row_offset: usize) -> u16 {
        self.inner.y + 1 + row_offset as u16
    }

    /// Viewport (row, col) offsets of the cell under a screen position.
    /// The header line, the gutter and partial trailing cells are not hits.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let first_x = self.inner.x + self.gutter_width;
        let first_y = self.inner.y + 1;
        if x < first_x || y < first_y {
            return None;
        }

        let row_offset = (y - first_y) as usize;
        let col_offset = ((x - first_x) / self.cell_width) as usize;
        if row_offset >= self.visible_rows() || col_offset >= self.visible_cols() {
            return None;
        }
        Some((row_offset, col_offset))
    }
}
