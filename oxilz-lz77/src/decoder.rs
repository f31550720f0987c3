//! LZ77 decoder (decompression).

use crate::unit::Lz77Unit;
use oxilz_core::{LzError, Result, Symbol};

/// LZ77 decoder for decompression.
///
/// Decoding needs no window configuration: every unit carries its own
/// distance and length, and the decoder only checks that the distance
/// stays inside what has been produced so far.
#[derive(Debug, Clone, Default)]
pub struct Lz77Decoder {
    /// Decoded output (doubles as the history buffer).
    output: Vec<Symbol>,
}

impl Lz77Decoder {
    /// Symbols reserved per unit ahead of decoding.
    const RESERVE_PER_UNIT: usize = 16;

    /// Create a new LZ77 decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a single unit, appending to the output.
    ///
    /// `index` is the unit's position in its sequence and only feeds error
    /// reports.
    pub fn decode_unit(&mut self, index: usize, unit: &Lz77Unit) -> Result<()> {
        if !unit.is_match() {
            let literal = unit.literal.ok_or_else(|| LzError::missing_literal(index))?;
            self.output.push(literal);
            return Ok(());
        }

        let distance = usize::from(unit.offset);
        if distance > self.output.len() {
            return Err(LzError::invalid_distance(distance, self.output.len()));
        }

        // Copy one symbol at a time: the source may overlap what this unit writes
        let start = self.output.len() - distance;
        for i in 0..usize::from(unit.length) {
            let symbol = self.output[start + i];
            self.output.push(symbol);
        }

        if let Some(literal) = unit.literal {
            self.output.push(literal);
        }
        Ok(())
    }

    /// Decode a full unit sequence.
    pub fn decode(&mut self, units: &[Lz77Unit]) -> Result<Vec<Symbol>> {
        self.output.clear();
        // Lengths are unchecked until decoded, so the reservation is bounded
        let total: usize = units.iter().map(Lz77Unit::decoded_len).sum();
        self.output
            .reserve(total.min(units.len().saturating_mul(Self::RESERVE_PER_UNIT)));

        for (index, unit) in units.iter().enumerate() {
            self.decode_unit(index, unit)?;
        }
        Ok(self.take_output())
    }

    /// Get the decoded output.
    pub fn output(&self) -> &[Symbol] {
        &self.output
    }

    /// Take the decoded output.
    pub fn take_output(&mut self) -> Vec<Symbol> {
        std::mem::take(&mut self.output)
    }

    /// Reset the decoder.
    pub fn reset(&mut self) {
        self.output.clear();
    }
}
