//! Key classification for the chat view.
//!
//! Enter sends, Alt+Enter or Shift+Enter inserts a newline, Ctrl+C and Esc
//! quit. Every other key edits the input buffer.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Submit,
    InsertNewline,
    Edit,
}

pub fn classify_key(key: &KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) =>
        {
            KeyAction::InsertNewline
        }
        KeyCode::Enter => KeyAction::Submit,
        _ => KeyAction::Edit,
    }
}
