use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::input::{has_command_modifier, is_escape, KeyResult};
use crate::string::{get_word_end, get_word_start};
use crate::util::{char_count, insert_char_at, remove_char_at, Direction};

/// Inline editor for the active cell
/// Note: cursor is a CHARACTER index, not a byte index
pub struct InsertHandler {
    pub buffer: String,
    /// Cursor position as character index (not byte index)
    pub cursor: usize,
}

impl InsertHandler {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    /// Seed the editor and place the cursor at the end
    pub fn start_edit(&mut self, initial: String) {
        self.buffer = initial;
        self.cursor = char_count(&self.buffer);
    }

    /// Hand over the edited text, leaving the editor empty
    pub fn take_buffer(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    pub fn discard(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        if is_escape(key) {
            return KeyResult::Cancel;
        }

        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Enter => {
                return KeyResult::Commit(if shift { Direction::Up } else { Direction::Down });
            }
            KeyCode::Tab => {
                return KeyResult::Commit(if shift { Direction::Left } else { Direction::Right });
            }
            KeyCode::BackTab => {
                return KeyResult::Commit(Direction::Left);
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    if let Some((new_buf, _)) = remove_char_at(&self.buffer, self.cursor) {
                        self.buffer = new_buf;
                    }
                }
            }
            KeyCode::Delete => {
                if let Some((new_buf, _)) = remove_char_at(&self.buffer, self.cursor) {
                    self.buffer = new_buf;
                }
            }
            // Style shortcuts and other chords are not text
            KeyCode::Char(_) if has_command_modifier(key) => {}
            KeyCode::Char(c) => {
                self.buffer = insert_char_at(&self.buffer, self.cursor, c);
                self.cursor += 1;
            }
            KeyCode::Left | KeyCode::Right if shift => {}
            KeyCode::Left if ctrl => {
                self.cursor = get_word_start(&self.buffer, self.cursor);
            }
            KeyCode::Right if ctrl => {
                self.cursor = get_word_end(&self.buffer, self.cursor);
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cursor = std::cmp::min(self.cursor + 1, char_count(&self.buffer));
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = char_count(&self.buffer);
            }
            _ => {}
        }

        KeyResult::Continue
    }
}

impl Default for InsertHandler {
    fn default() -> Self {
        Self::new()
    }
}
