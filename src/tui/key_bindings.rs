use crate::tui::message::{InputEdit, Message};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a message
pub fn handle_key_event(key: KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char('c') if ctrl => Some(Message::Quit),
        KeyCode::Char('u') if ctrl => Some(Message::Edit(InputEdit::Clear)),
        KeyCode::Char(c) if !ctrl => Some(Message::Edit(InputEdit::Insert(c))),
        KeyCode::Backspace => Some(Message::Edit(InputEdit::Backspace)),
        _ => None,
    }
}
