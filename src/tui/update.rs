use crate::number::{Report, parse_integer};
use crate::tui::logger::logln;
use crate::tui::message::{InputEdit, Message};
use crate::tui::model::AppState;

impl AppState {
    /// Apply a message; returns `false` when the shell should exit
    pub fn update(&mut self, msg: Message) -> bool {
        match msg {
            Message::Quit => return false,
            Message::Edit(edit) => {
                match edit {
                    InputEdit::Insert(c) => self.input.push(c),
                    InputEdit::Backspace => {
                        self.input.pop();
                    }
                    InputEdit::Clear => self.input.clear(),
                }
                self.refresh();
            }
        }
        true
    }

    /// Re-run the formatter on the current input
    fn refresh(&mut self) {
        match parse_integer(self.input.trim()) {
            Ok(outcome) => {
                self.invalid = false;
                // A bare "0x" keeps the previous report while the user types
                if let Some(value) = outcome.value() {
                    self.report = Report::new(value);
                }
            }
            Err(err) => {
                logln(&err.to_string());
                self.invalid = true;
            }
        }
    }
}
