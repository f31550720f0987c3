//! LZ77 output unit.

use oxilz_core::{LiteralMode, Result, Symbol, UnitReader, UnitWriter, WireUnit};

/// One (offset, length, literal) triple.
///
/// - `offset`: backward distance to the start of the match, 0 = no match
/// - `length`: number of matched symbols
/// - `literal`: symbol following the match; `None` when the match reached
///   the look-ahead boundary or the end of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lz77Unit {
    /// Backward distance to the match start.
    pub offset: u16,
    /// Match length.
    pub length: u16,
    /// Symbol following the match.
    pub literal: Option<Symbol>,
}

impl Lz77Unit {
    /// A no-match unit carrying only `symbol`.
    pub fn literal(symbol: Symbol) -> Self {
        Self {
            offset: 0,
            length: 0,
            literal: Some(symbol),
        }
    }

    /// Whether this unit copies from history.
    pub fn is_match(&self) -> bool {
        self.offset != 0 && self.length != 0
    }

    /// Number of symbols this unit expands to.
    pub fn decoded_len(&self) -> usize {
        let copied = if self.is_match() {
            usize::from(self.length)
        } else {
            0
        };
        copied + usize::from(self.literal.is_some())
    }
}

impl WireUnit for Lz77Unit {
    fn wire_size(mode: LiteralMode) -> usize {
        2 + 2 + mode.literal_width()
    }

    fn write(&self, writer: &mut UnitWriter) -> Result<()> {
        writer.write_i16("offset", u64::from(self.offset))?;
        writer.write_i16("length", u64::from(self.length))?;
        writer.write_literal(self.literal)
    }

    fn read(reader: &mut UnitReader<'_>) -> Result<Self> {
        // i16 fields are non-negative after read_i16, so they fit u16
        let offset = reader.read_i16("offset")? as u16;
        let length = reader.read_i16("length")? as u16;
        let literal = reader.read_literal()?;
        Ok(Self {
            offset,
            length,
            literal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxilz_core::{LzError, deserialize_units, serialize_units};

    #[test]
    fn test_wire_layout() {
        let units = [
            Lz77Unit::literal(1),
            Lz77Unit {
                offset: 3,
                length: 0x0102,
                literal: None,
            },
        ];
        let bytes = serialize_units(&units, LiteralMode::Sentinel).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 0, 1, 3, 0, 0x02, 0x01, 0xFF]);
        assert_eq!(bytes.len(), 2 * Lz77Unit::wire_size(LiteralMode::Sentinel));

        let back: Vec<Lz77Unit> = deserialize_units(&bytes, LiteralMode::Sentinel).unwrap();
        assert_eq!(back, units);
    }

    #[test]
    fn test_offset_overflow_rejected() {
        let unit = Lz77Unit {
            offset: 40_000,
            length: 1,
            literal: None,
        };
        assert!(matches!(
            serialize_units(&[unit], LiteralMode::Sentinel),
            Err(LzError::FieldOverflow { field: "offset", .. })
        ));
    }

    #[test]
    fn test_decoded_len() {
        assert_eq!(Lz77Unit::literal(0).decoded_len(), 1);
        let unit = Lz77Unit {
            offset: 2,
            length: 5,
            literal: Some(1),
        };
        assert_eq!(unit.decoded_len(), 6);
    }
}
