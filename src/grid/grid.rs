use crate::grid::cell::Cell;
use crate::util::CellRef;

/// Fixed-size rectangular array of cells.
/// Dimensions are set at construction and never change.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create an empty grid. Each cell is its own allocation, so rows never alias.
    /// Both dimensions are raised to at least one.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let cells = (0..rows)
            .map(|_| (0..cols).map(|_| Cell::default()).collect())
            .collect();
        Self { cells, rows, cols }
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn contains(&self, cell: CellRef) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn get(&self, cell: CellRef) -> Option<&Cell> {
        self.cells.get(cell.row)?.get(cell.col)
    }

    pub fn get_mut(&mut self, cell: CellRef) -> Option<&mut Cell> {
        self.cells.get_mut(cell.row)?.get_mut(cell.col)
    }

    /// Text of a cell, empty for out-of-bounds refs
    pub fn value(&self, cell: CellRef) -> &str {
        self.get(cell).map(|c| c.value.as_str()).unwrap_or("")
    }
}
