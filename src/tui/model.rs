use crate::number::Report;

/// State of the interactive shell
#[derive(Debug, Clone)]
pub struct AppState {
    /// Raw text of the input line
    pub input: String,
    /// Report for the last input that produced a value
    pub report: Report,
    /// Set when the input cannot be parsed; the report is left as it was
    pub invalid: bool,
}

impl AppState {
    #[must_use]
    pub fn new(initial_value: i64) -> Self {
        Self {
            input: String::new(),
            report: Report::new(initial_value),
            invalid: false,
        }
    }
}
