//! The numeric engine: parsing, bit reversal and byte-order breakdowns of
//! 64-bit signed integers.

pub mod order;
pub mod parse;
pub mod report;

pub use order::{ByteBreakdown, ByteOrdering};
pub use parse::{ParseError, ParseOutcome, parse_integer, parse_strict};
pub use report::Report;

/// Reverse all 64 bits of `value`; bit 63 becomes bit 0 and so on.
#[must_use]
pub const fn bit_reverse(value: i64) -> i64 {
    value.reverse_bits()
}
