use super::cell::*;
use super::grid::*;
use super::gridview::*;
use super::store::*;

use crate::mode::Mode;
use crate::util::{CellRef, Direction};

fn at(row: usize, col: usize) -> CellRef {
    CellRef::new(row, col)
}

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new(4, 3);
    assert_eq!(grid.row_count(), 4);
    assert_eq!(grid.col_count(), 3);
    for row in 0..4 {
        for col in 0..3 {
            let cell = grid.get(at(row, col)).unwrap();
            assert!(cell.value.is_empty());
            assert!(cell.styles.is_empty());
        }
    }
}

#[test]
fn test_zero_dimensions_raised_to_one() {
    let grid = Grid::new(0, 0);
    assert_eq!(grid.row_count(), 1);
    assert_eq!(grid.col_count(), 1);
}

#[test]
fn test_out_of_bounds_access() {
    let mut grid = Grid::new(2, 2);
    assert!(grid.get(at(2, 0)).is_none());
    assert!(grid.get(at(0, 2)).is_none());
    assert!(grid.get_mut(at(5, 5)).is_none());
    assert_eq!(grid.value(at(9, 9)), "");
    assert!(!grid.contains(at(2, 1)));
    assert!(grid.contains(at(1, 1)));
}

#[test]
fn test_cells_are_independent() {
    let mut grid = Grid::new(3, 3);
    let mut mode = Mode::Idle;
    {
        let mut store = StoreCell::new(&mut grid, at(1, 1), &mut mode);
        store.set_cell_property(CellProp::Value, PropValue::Text("x".to_string()));
        store.toggle_style(BOLD);
    }

    for row in 0..3 {
        for col in 0..3 {
            let cell = grid.get(at(row, col)).unwrap();
            if (row, col) == (1, 1) {
                assert_eq!(cell.value, "x");
                assert!(cell.has_style(BOLD));
            } else {
                assert_eq!(cell, &Cell::default());
            }
        }
    }
}

#[test]
fn test_mismatched_property_is_ignored() {
    let mut grid = Grid::new(2, 2);
    let mut mode = Mode::Editing;
    let mut store = StoreCell::new(&mut grid, at(0, 0), &mut mode);

    assert!(!store.set_cell_property(CellProp::Value, PropValue::Tags(vec![StyleTag::from(BOLD)])));
    assert!(!store.set_cell_property(CellProp::Styles, PropValue::Text("bold".to_string())));
    drop(store);

    assert_eq!(grid.get(at(0, 0)), Some(&Cell::default()));
    assert_eq!(mode, Mode::Editing);
}

#[test]
fn test_store_val_always_clears_editing() {
    let mut grid = Grid::new(2, 2);
    let mut mode = Mode::Editing;
    StoreCell::new(&mut grid, at(0, 1), &mut mode).store_val(Some("hello".to_string()));
    assert_eq!(mode, Mode::Idle);
    assert_eq!(grid.value(at(0, 1)), "hello");

    mode = Mode::Editing;
    StoreCell::new(&mut grid, at(0, 1), &mut mode).store_val(None);
    assert_eq!(mode, Mode::Idle);
    assert_eq!(grid.value(at(0, 1)), "hello");
}

#[test]
fn test_store_out_of_bounds_is_noop() {
    let mut grid = Grid::new(2, 2);
    let mut mode = Mode::Idle;
    let mut store = StoreCell::new(&mut grid, at(4, 4), &mut mode);
    assert!(!store.set_cell_property(CellProp::Value, PropValue::Text("x".to_string())));
    assert!(!store.toggle_style(ITALIC));
}

#[test]
fn test_toggle_twice_restores_styles() {
    let mut grid = Grid::new(1, 1);
    let mut mode = Mode::Idle;
    let mut store = StoreCell::new(&mut grid, at(0, 0), &mut mode);

    assert!(store.toggle_style(UNDERLINE));
    assert!(store.toggle_style(BOLD));
    assert!(!store.toggle_style(BOLD));
    drop(store);

    assert_eq!(grid.get(at(0, 0)).unwrap().styles, vec![StyleTag::from(UNDERLINE)]);
}

#[test]
fn test_toggle_keeps_insertion_order() {
    let cell = Cell {
        value: String::new(),
        styles: vec![StyleTag::from(BOLD), StyleTag::from(ITALIC), StyleTag::from(UNDERLINE)],
    };
    let toggled = cell.toggled_styles(ITALIC);
    assert_eq!(toggled, vec![StyleTag::from(BOLD), StyleTag::from(UNDERLINE)]);
    let back = Cell { styles: toggled, ..cell }.toggled_styles(ITALIC);
    assert_eq!(back.last().map(|t| t.as_str()), Some(ITALIC));
}

#[test]
fn test_navigate_stays_in_bounds() {
    let grid = Grid::new(3, 4);
    let mut view = GridView::new();

    // from every cell, try every direction
    for row in 0..3 {
        for col in 0..4 {
            for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
                view.active = at(row, col);
                let moved = view.navigate(direction, &grid);
                assert!(grid.contains(view.active));
                if !moved {
                    assert_eq!(view.active, at(row, col));
                }
            }
        }
    }
}

#[test]
fn test_navigate_edges_dropped() {
    let grid = Grid::new(2, 2);
    let mut view = GridView::new();

    assert!(!view.navigate(Direction::Up, &grid));
    assert!(!view.navigate(Direction::Left, &grid));
    assert_eq!(view.active, at(0, 0));

    assert!(view.navigate(Direction::Down, &grid));
    assert!(view.navigate(Direction::Right, &grid));
    assert!(!view.navigate(Direction::Down, &grid));
    assert!(!view.navigate(Direction::Right, &grid));
    assert_eq!(view.active, at(1, 1));
}

#[test]
fn test_viewport_follows_active_cell() {
    let grid = Grid::new(50, 20);
    let mut view = GridView::new();
    view.resize(5, 3);

    for _ in 0..7 {
        view.navigate(Direction::Down, &grid);
    }
    assert_eq!(view.active.row, 7);
    assert_eq!(view.viewport_row, 3);

    for _ in 0..4 {
        view.navigate(Direction::Right, &grid);
    }
    assert_eq!(view.viewport_col, 2);

    view.set_active(at(0, 0), &grid);
    assert_eq!((view.viewport_row, view.viewport_col), (0, 0));
    assert!(!view.set_active(at(50, 0), &grid));
}
