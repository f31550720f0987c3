//! Per-block compression results and their byte envelope.
//!
//! ## Envelope Layout
//!
//! ```text
//! +-------------+----------------------+------------------------+
//! | block count | unit count per block | unit records, in order |
//! |   u32 LE    |   u32 LE x count     |   WireUnit records     |
//! +-------------+----------------------+------------------------+
//! ```

use oxilz_core::{LiteralMode, LzError, Result, UnitReader, UnitWriter, WireUnit};

/// Output of a block-parallel compression: one unit sequence per block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelResult<U> {
    blocks: Vec<Vec<U>>,
}

impl<U> ParallelResult<U> {
    /// Wrap per-block unit sequences, in block order.
    pub fn from_blocks(blocks: Vec<Vec<U>>) -> Self {
        Self { blocks }
    }

    /// Unit sequences, in block order.
    pub fn blocks(&self) -> &[Vec<U>] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of units produced by each block.
    pub fn block_lengths(&self) -> Vec<usize> {
        self.blocks.iter().map(Vec::len).collect()
    }

    /// Total units over all blocks.
    pub fn total_units(&self) -> usize {
        self.blocks.iter().map(Vec::len).sum()
    }

    /// Iterate over every unit, block by block.
    pub fn units(&self) -> impl Iterator<Item = &U> {
        self.blocks.iter().flatten()
    }

    /// Take the per-block unit sequences.
    pub fn into_blocks(self) -> Vec<Vec<U>> {
        self.blocks
    }
}

impl<U: WireUnit> ParallelResult<U> {
    /// Size of the envelope in bytes.
    pub fn encoded_len(&self, mode: LiteralMode) -> usize {
        4 + 4 * self.blocks.len() + self.total_units() * U::wire_size(mode)
    }

    /// Serialize into the envelope layout.
    pub fn to_bytes(&self, mode: LiteralMode) -> Result<Vec<u8>> {
        let mut writer = UnitWriter::with_capacity(mode, self.encoded_len(mode));
        writer.write_count("block_count", self.blocks.len())?;
        for block in &self.blocks {
            writer.write_count("block_length", block.len())?;
        }
        for unit in self.units() {
            unit.write(&mut writer)?;
        }
        Ok(writer.into_vec())
    }

    /// Parse an envelope. The whole buffer must be consumed.
    pub fn from_bytes(data: &[u8], mode: LiteralMode) -> Result<Self> {
        let mut reader = UnitReader::new(data, mode);

        let block_count = reader.read_u32()? as usize;
        // Counts are checked against the buffer before allocating
        let table_len = block_count.saturating_mul(4);
        if table_len > reader.remaining() {
            return Err(LzError::unexpected_eof(table_len - reader.remaining()));
        }

        let mut lengths = Vec::with_capacity(block_count);
        for _ in 0..block_count {
            lengths.push(reader.read_u32()? as usize);
        }

        let unit_size = U::wire_size(mode);
        let mut blocks = Vec::with_capacity(block_count);
        for len in lengths {
            let needed = len.saturating_mul(unit_size);
            if needed > reader.remaining() {
                return Err(LzError::unexpected_eof(needed - reader.remaining()));
            }
            let mut units = Vec::with_capacity(len);
            for _ in 0..len {
                units.push(U::read(&mut reader)?);
            }
            blocks.push(units);
        }

        reader.finish()?;
        Ok(Self { blocks })
    }
}

impl<U> Default for ParallelResult<U> {
    fn default() -> Self {
        Self { blocks: Vec::new() }
    }
}

impl<U> From<Vec<Vec<U>>> for ParallelResult<U> {
    fn from(blocks: Vec<Vec<U>>) -> Self {
        Self::from_blocks(blocks)
    }
}
