use std::sync::mpsc::{self, Receiver};
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use tracing::error;

use crate::util::Direction;

/// Result of handling a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResult {
    /// Nothing for the app to do (handled internally or ignored)
    Continue,
    /// Move the active cell one step
    Navigate(Direction),
    /// Grow, shrink or collapse the range selection
    Extend(Direction),
    /// Open the inline editor. `Some(c)` overwrites the cell with `c`,
    /// `None` edits the current value.
    StartEdit(Option<char>),
    /// Store the editor text, leave edit mode, then move one step
    Commit(Direction),
    /// Leave edit mode without storing the editor text
    Cancel,
    /// Empty the active cell
    ClearCell,
    /// Drop the range selection
    ClearSelection,
    /// Toggle a style tag on the active cell
    ToggleStyle(&'static str),
    /// Quit the application
    Quit,
}

/// Check for escape key (Esc or Ctrl+[)
pub fn is_escape(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('[') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Ctrl+C or Ctrl+Q, in any mode
pub fn is_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Ctrl, Alt or Meta/Super held. Shift alone is not a command modifier.
pub fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META)
}

/// Arrow keys as grid directions
pub fn arrow_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Forward terminal events from a dedicated reader thread.
/// The channel closes when reading fails or the receiver is dropped.
pub fn spawn_event_reader() -> Receiver<Event> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "failed to read terminal event");
                break;
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_variants() {
        assert!(is_escape(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_escape(KeyEvent::new(KeyCode::Char('['), KeyModifiers::CONTROL)));
        assert!(!is_escape(KeyEvent::new(KeyCode::Char('['), KeyModifiers::NONE)));
    }

    #[test]
    fn shift_is_not_a_command_modifier() {
        assert!(!has_command_modifier(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT)));
        assert!(has_command_modifier(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT)));
        assert!(has_command_modifier(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::SUPER)));
    }

    #[test]
    fn quit_needs_control() {
        assert!(is_quit(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(is_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
    }
}
