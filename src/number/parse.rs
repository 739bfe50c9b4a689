use thiserror::Error;

const HEX_PREFIX: &str = "0x";

/// Input that could not be read as a signed 64-bit integer.
///
/// Malformed digits and out-of-range magnitudes are reported alike.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid number '{input}'")]
pub struct ParseError {
    input: String,
}

impl ParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The text that failed to parse
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Successful outcome of reading user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Nothing was entered; reports as zero
    Empty,
    /// A bare `0x`, the user is still typing
    Incomplete,
    Value(i64),
}

impl ParseOutcome {
    /// The value to report, if the outcome warrants a new report
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        match self {
            Self::Empty => Some(0),
            Self::Incomplete => None,
            Self::Value(v) => Some(v),
        }
    }
}

/// Parse already-trimmed text as a decimal or `0x`-prefixed hex `i64`.
///
/// # Errors
///
/// Returns [`ParseError`] when the digits are empty, outside the digit set of
/// their base, or overflow the signed 64-bit range.
pub fn parse_integer(text: &str) -> Result<ParseOutcome, ParseError> {
    if text.is_empty() {
        return Ok(ParseOutcome::Empty);
    }

    let parsed = match text.strip_prefix(HEX_PREFIX) {
        Some("") => return Ok(ParseOutcome::Incomplete),
        Some(digits) => i64::from_str_radix(digits, 16),
        None => text.parse::<i64>(),
    };

    parsed
        .map(ParseOutcome::Value)
        .map_err(|_| ParseError::new(text))
}

/// Like [`parse_integer`], but a bare `0x` is an error.
///
/// Used where no further input will arrive to complete the number.
///
/// # Errors
///
/// Returns [`ParseError`] for everything [`parse_integer`] rejects and for a
/// bare `0x`.
pub fn parse_strict(text: &str) -> Result<i64, ParseError> {
    parse_integer(text)?
        .value()
        .ok_or_else(|| ParseError::new(text))
}
