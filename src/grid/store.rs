use tracing::debug;

use crate::grid::cell::StyleTag;
use crate::grid::grid::Grid;
use crate::mode::Mode;
use crate::util::CellRef;

/// Writable properties of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellProp {
    Value,
    Styles,
}

/// Payload for a property write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    Text(String),
    Tags(Vec<StyleTag>),
}

/// Mutation path into the grid for the active cell.
///
/// Borrows the grid and the editing mode for the duration of one key event.
pub struct StoreCell<'a> {
    grid: &'a mut Grid,
    active: CellRef,
    mode: &'a mut Mode,
}

impl<'a> StoreCell<'a> {
    pub fn new(grid: &'a mut Grid, active: CellRef, mode: &'a mut Mode) -> Self {
        Self { grid, active, mode }
    }

    /// Write a property of the active cell.
    /// A value whose kind does not match the property is ignored; returns whether anything was written.
    pub fn set_cell_property(&mut self, property: CellProp, new_value: PropValue) -> bool {
        let Some(cell) = self.grid.get_mut(self.active) else {
            return false;
        };

        match (property, new_value) {
            (CellProp::Value, PropValue::Text(text)) => {
                cell.value = text;
                true
            }
            (CellProp::Styles, PropValue::Tags(tags)) => {
                cell.styles = tags;
                true
            }
            (property, _) => {
                debug!(?property, cell = %self.active, "ignored mismatched property write");
                false
            }
        }
    }

    /// Leave edit mode, storing `value` first if one is given.
    /// Commit passes the editor text, cancel passes None.
    pub fn store_val(&mut self, value: Option<String>) {
        if let Some(value) = value {
            self.set_cell_property(CellProp::Value, PropValue::Text(value));
        }
        *self.mode = Mode::Idle;
    }

    /// Add `tag` to the active cell or remove it if already present.
    /// Returns whether the tag is now set.
    pub fn toggle_style(&mut self, tag: &str) -> bool {
        let Some(cell) = self.grid.get(self.active) else {
            return false;
        };
        let styles = cell.toggled_styles(tag);
        let enabled = styles.iter().any(|t| t.as_str() == tag);
        self.set_cell_property(CellProp::Styles, PropValue::Tags(styles));
        debug!(cell = %self.active, tag, enabled, "style toggled");
        enabled
    }
}
