//! LZ78 output unit.

use oxilz_core::{LiteralMode, NodeId, Result, Symbol, UnitReader, UnitWriter, WireUnit};

/// One (dictionary index, literal) pair.
///
/// `literal` is `None` only for the final unit of a stream whose last
/// phrase exactly matched an existing dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lz78Unit {
    /// Node of the longest matching phrase (root when nothing matched).
    pub index: NodeId,
    /// Symbol extending the phrase.
    pub literal: Option<Symbol>,
}

impl WireUnit for Lz78Unit {
    fn wire_size(mode: LiteralMode) -> usize {
        2 + mode.literal_width()
    }

    fn write(&self, writer: &mut UnitWriter) -> Result<()> {
        writer.write_i16("index", u64::from(self.index.get()))?;
        writer.write_literal(self.literal)
    }

    fn read(reader: &mut UnitReader<'_>) -> Result<Self> {
        // Non-negative i16, fits u32
        let index = NodeId::new(reader.read_i16("index")? as u32);
        let literal = reader.read_literal()?;
        Ok(Self { index, literal })
    }
}
