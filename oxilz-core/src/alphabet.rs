//! Symbol alphabets.

use crate::Symbol;
use crate::error::{LzError, Result};

/// A finite alphabet `0..size` of symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    size: u16,
}

impl Alphabet {
    /// Two-symbol alphabet (bits).
    pub const BINARY: Self = Self { size: 2 };

    /// Full byte alphabet (256 symbols).
    pub const BYTE: Self = Self { size: 256 };

    /// Create an alphabet with `size` symbols (1..=256).
    pub fn new(size: u16) -> Result<Self> {
        if size == 0 || size > 256 {
            return Err(LzError::invalid_config(format!(
                "alphabet size {size} out of range 1..=256"
            )));
        }
        Ok(Self { size })
    }

    /// Number of symbols.
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Whether `symbol` belongs to this alphabet.
    #[inline]
    pub fn contains(&self, symbol: Symbol) -> bool {
        u16::from(symbol) < self.size
    }

    /// Iterate over every symbol in ascending order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> {
        // size <= 256, so every value fits a Symbol
        (0..self.size).map(|s| s as Symbol)
    }

    /// Check a whole input before any encoding starts.
    ///
    /// Reports the first symbol outside the alphabet.
    pub fn validate(&self, symbols: &[Symbol]) -> Result<()> {
        match symbols.iter().position(|&s| !self.contains(s)) {
            Some(position) => Err(LzError::invalid_symbol(
                position,
                symbols[position],
                self.size,
            )),
            None => Ok(()),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::BINARY
    }
}
