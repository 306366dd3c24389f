use std::io;
use std::sync::mpsc::Receiver;

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{debug, info};

use crate::grid::grid::Grid;
use crate::grid::gridview::GridView;
use crate::grid::store::{CellProp, PropValue, StoreCell};
use crate::input::{is_quit, KeyResult};
use crate::mode::idle::IdleHandler;
use crate::mode::insert::InsertHandler;
use crate::mode::Mode;
use crate::selection::Selection;
use crate::ui;
use crate::ui::layout::GridLayout;
use crate::ui::navbar::Navbar;
use crate::ui::style::Style;
use crate::util::CellRef;

pub struct App {
    pub grid: Grid,
    pub view: GridView,
    pub selection: Selection,
    pub mode: Mode,
    pub style: Style,
    pub navbar: Navbar,
    pub cell_width: u16,
    pub message: Option<String>,
    pub should_quit: bool,
    /// Last known terminal area, used to map mouse positions to cells
    pub screen: Rect,
    // Mode handlers
    idle_handler: IdleHandler,
    insert_handler: InsertHandler,
}

impl App {
    pub fn new(grid: Grid, style: Style, cell_width: u16) -> Self {
        let mut app = Self {
            grid,
            view: GridView::new(),
            selection: Selection::new(),
            mode: Mode::Idle,
            style,
            navbar: Navbar::default(),
            cell_width,
            message: None,
            should_quit: false,
            screen: Rect::default(),
            idle_handler: IdleHandler::new(),
            insert_handler: InsertHandler::new(),
        };
        app.set_screen(Rect::new(0, 0, 80, 24));
        app
    }

    // Accessor methods for UI
    pub fn edit_buffer(&self) -> &str {
        &self.insert_handler.buffer
    }

    pub fn edit_cursor(&self) -> usize {
        self.insert_handler.cursor
    }

    /// Record the terminal size and fit the viewport to it
    pub fn set_screen(&mut self, area: Rect) {
        self.screen = area;
        let layout = GridLayout::for_screen(area, self.grid.row_count(), self.cell_width);
        self.view.resize(layout.visible_rows(), layout.visible_cols());
    }

    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: Receiver<Event>,
    ) -> io::Result<()> {
        while !self.should_quit {
            self.set_screen(terminal.size()?);
            terminal.draw(|f| ui::render(f, self))?;

            match events.recv() {
                Ok(event) => self.handle_event(event),
                Err(_) => {
                    info!("event channel closed");
                    break;
                }
            }
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                self.message = None;
                self.handle_key(key);
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.set_screen(Rect::new(0, 0, width, height)),
            _ => {}
        }
    }

    // === Key handling ===

    pub fn handle_key(&mut self, key: KeyEvent) {
        if is_quit(key) {
            self.process_key_result(KeyResult::Quit);
            return;
        }

        let result = match self.mode {
            Mode::Idle => self.idle_handler.handle_key(key),
            Mode::Editing => self.insert_handler.handle_key(key),
        };
        self.process_key_result(result);
    }

    fn store(&mut self) -> StoreCell<'_> {
        StoreCell::new(&mut self.grid, self.view.active, &mut self.mode)
    }

    fn start_edit(&mut self, seed: Option<char>) {
        self.selection.clear();
        let active = self.view.active;
        let initial = match seed {
            Some(c) => {
                let text = c.to_string();
                self.store().set_cell_property(CellProp::Value, PropValue::Text(text.clone()));
                text
            }
            None => self.grid.value(active).to_string(),
        };
        self.insert_handler.start_edit(initial);
        self.mode = Mode::Editing;
        debug!(cell = %active, typed = seed.is_some(), "edit started");
    }

    fn cancel_edit(&mut self) {
        self.insert_handler.discard();
        self.store().store_val(None);
        debug!(cell = %self.view.active, "edit cancelled");
    }

    fn process_key_result(&mut self, result: KeyResult) {
        match result {
            KeyResult::Continue => {}
            KeyResult::Navigate(direction) => {
                self.selection.clear();
                self.view.navigate(direction, &self.grid);
            }
            KeyResult::Extend(direction) => {
                self.selection.extend(direction, self.view.active, &self.grid);
            }
            KeyResult::StartEdit(seed) => self.start_edit(seed),
            KeyResult::Commit(direction) => {
                let text = self.insert_handler.take_buffer();
                let cell = self.view.active;
                self.store().store_val(Some(text));
                debug!(%cell, "edit committed");
                self.view.navigate(direction, &self.grid);
            }
            KeyResult::Cancel => self.cancel_edit(),
            KeyResult::ClearCell => {
                self.store().set_cell_property(CellProp::Value, PropValue::Text(String::new()));
            }
            KeyResult::ClearSelection => self.selection.clear(),
            KeyResult::ToggleStyle(tag) => {
                let cell = self.view.active;
                let enabled = self.store().toggle_style(tag);
                let state = if enabled { "on" } else { "off" };
                self.message = Some(format!("{} {} at {}", tag, state, cell));
            }
            KeyResult::Quit => {
                self.should_quit = true;
            }
        }
    }

    // === Mouse handling ===

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let layout = GridLayout::for_screen(self.screen, self.grid.row_count(), self.cell_width);
        let Some((row_offset, col_offset)) = layout.cell_at(mouse.column, mouse.row) else {
            return;
        };
        let target = CellRef::new(
            self.view.viewport_row + row_offset,
            self.view.viewport_col + col_offset,
        );
        if !self.grid.contains(target) {
            return;
        }

        if self.view.is_active(target) {
            if !self.mode.is_editing() {
                self.start_edit(None);
            }
            return;
        }

        if self.mode.is_editing() {
            self.cancel_edit();
        }
        self.selection.clear();
        self.view.set_active(target, &self.grid);
        debug!(cell = %target, "clicked cell");
    }
}
