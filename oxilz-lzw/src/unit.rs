//! LZW output unit.

use oxilz_core::{LiteralMode, NodeId, Result, UnitReader, UnitWriter, WireUnit};

/// A single LZW code.
///
/// No literal is needed: the seeded dictionary already holds every
/// single-symbol phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LzwUnit {
    /// Dictionary node of the emitted phrase.
    pub index: NodeId,
}

impl LzwUnit {
    /// Wrap a raw code.
    pub fn new(code: u32) -> Self {
        Self {
            index: NodeId::new(code),
        }
    }
}

impl WireUnit for LzwUnit {
    fn wire_size(_mode: LiteralMode) -> usize {
        4
    }

    fn write(&self, writer: &mut UnitWriter) -> Result<()> {
        writer.write_i32("index", u64::from(self.index.get()))
    }

    fn read(reader: &mut UnitReader<'_>) -> Result<Self> {
        // Non-negative i32, fits u32
        let code = reader.read_i32("index")? as u32;
        Ok(Self::new(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxilz_core::{LzError, deserialize_units, serialize_units};

    #[test]
    fn test_wire_layout() {
        let units = [LzwUnit::new(1), LzwUnit::new(0x01020304)];
        let bytes = serialize_units(&units, LiteralMode::Sentinel).unwrap();
        assert_eq!(bytes, vec![1, 0, 0, 0, 4, 3, 2, 1]);

        let back: Vec<LzwUnit> = deserialize_units(&bytes, LiteralMode::Flagged).unwrap();
        assert_eq!(back, units);
    }

    #[test]
    fn test_negative_code_rejected() {
        let result: Result<Vec<LzwUnit>> =
            deserialize_units(&[0xFF, 0xFF, 0xFF, 0xFF], LiteralMode::Sentinel);
        assert!(matches!(result, Err(LzError::CorruptedData { .. })));
    }
}
