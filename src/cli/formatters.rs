//! Console rendering of reports
use crate::number::Report;
use std::fmt;

/// One report as printed in batch mode:
///
/// ```text
///   1 0000000000000001
/// R -9223372036854775808 8000000000000000
/// 0000000000000001   LE 01 00 00 00 00 00 00 00
/// ...
/// ```
pub struct ConsoleBlock<'a>(pub &'a Report);

impl fmt::Display for ConsoleBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "  {} {}", report.value(), report.value_hex())?;
        writeln!(f, "R {} {}", report.reversed(), report.reversed_hex())?;
        for row in report.rows() {
            writeln!(
                f,
                "{} {}{} {}",
                row.source_hex(),
                row.marker(),
                row.ordering,
                row.bytes
            )?;
        }
        Ok(())
    }
}
