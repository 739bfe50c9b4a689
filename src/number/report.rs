use super::bit_reverse;
use super::order::{ByteBreakdown, ByteOrdering};

/// Everything known about one value: itself, its bit reversal, and the
/// byte layout of both under each ordering.
///
/// How the rows are laid out on screen is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    value: i64,
    reversed: i64,
}

/// One value/ordering combination of a [`Report`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRow {
    /// Whether this row describes the bit-reversed value
    pub reversed: bool,
    pub ordering: ByteOrdering,
    /// The number whose bytes are shown
    pub source: i64,
    pub bytes: ByteBreakdown,
}

impl ReportRow {
    /// Row prefix: `"R "` for the reversed value, two spaces otherwise
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        if self.reversed { "R " } else { "  " }
    }

    #[must_use]
    pub fn source_hex(&self) -> String {
        hex16(self.source)
    }
}

impl Report {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            reversed: bit_reverse(value),
        }
    }

    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    #[must_use]
    pub const fn reversed(&self) -> i64 {
        self.reversed
    }

    /// The value as 16 uppercase, zero-padded hex digits
    #[must_use]
    pub fn value_hex(&self) -> String {
        hex16(self.value)
    }

    #[must_use]
    pub fn reversed_hex(&self) -> String {
        hex16(self.reversed)
    }

    /// The four breakdowns: value LE, value BE, reversed LE, reversed BE
    #[must_use]
    pub fn rows(&self) -> [ReportRow; 4] {
        let row = |reversed: bool, ordering: ByteOrdering| {
            let source = if reversed { self.reversed } else { self.value };
            ReportRow {
                reversed,
                ordering,
                source,
                bytes: ordering.breakdown(source),
            }
        };
        [
            row(false, ByteOrdering::LittleEndian),
            row(false, ByteOrdering::BigEndian),
            row(true, ByteOrdering::LittleEndian),
            row(true, ByteOrdering::BigEndian),
        ]
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new(0)
    }
}

fn hex16(value: i64) -> String {
    format!("{value:016X}")
}
