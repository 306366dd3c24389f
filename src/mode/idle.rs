use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::grid::cell::{BOLD, ITALIC, UNDERLINE};
use crate::input::{arrow_direction, has_command_modifier, KeyResult};

/// Key handling while no cell is being edited
pub struct IdleHandler {
}

impl IdleHandler {
    pub fn new() -> Self {
        Self {
        }
    }

    pub fn handle_key(&self, key: KeyEvent) -> KeyResult {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        if let Some(direction) = arrow_direction(key.code) {
            if shift {
                return KeyResult::Extend(direction);
            }
            return KeyResult::Navigate(direction);
        }

        match key.code {
            KeyCode::Char(c) if has_command_modifier(key) => match c.to_ascii_lowercase() {
                'b' => KeyResult::ToggleStyle(BOLD),
                'u' => KeyResult::ToggleStyle(UNDERLINE),
                'i' => KeyResult::ToggleStyle(ITALIC),
                _ => KeyResult::Continue,
            },
            // Typing overwrites the cell rather than appending
            KeyCode::Char(c) => KeyResult::StartEdit(Some(c)),
            KeyCode::Enter => KeyResult::StartEdit(None),
            KeyCode::Tab | KeyCode::BackTab => KeyResult::ClearSelection,
            KeyCode::Backspace => KeyResult::ClearCell,
            _ => KeyResult::Continue,
        }
    }
}

impl Default for IdleHandler {
    fn default() -> Self {
        Self::new()
    }
}
