use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrdering {
    LittleEndian,
    BigEndian,
}

impl ByteOrdering {
    /// Short label used in reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LittleEndian => "LE",
            Self::BigEndian => "BE",
        }
    }

    /// Lay out `value` in an 8-byte buffer using this ordering
    #[must_use]
    pub const fn breakdown(self, value: i64) -> ByteBreakdown {
        let bytes = match self {
            Self::LittleEndian => value.to_le_bytes(),
            Self::BigEndian => value.to_be_bytes(),
        };
        ByteBreakdown(bytes)
    }
}

impl fmt::Display for ByteOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The eight bytes of a value in one ordering, displayed as `01 00 .. 00`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteBreakdown([u8; 8]);

impl ByteBreakdown {
    #[must_use]
    pub const fn bytes(&self) -> &[u8; 8] {
        &self.0
    }
}

impl fmt::Display for ByteBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}
