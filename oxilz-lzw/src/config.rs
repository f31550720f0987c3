//! LZW dictionary configuration.

use oxilz_core::{Alphabet, LzError, Result};

/// LZW configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Input alphabet; every symbol gets a seeded single-symbol code.
    pub alphabet: Alphabet,
    /// Maximum number of dictionary nodes, root and seeds included.
    pub dict_size: usize,
}

impl LzwConfig {
    /// Largest dictionary whose codes fit the 32-bit signed wire field.
    pub const MAX_DICT_SIZE: usize = i32::MAX as usize;

    /// Binary alphabet, 4096-node dictionary.
    pub const BINARY: Self = Self {
        alphabet: Alphabet::BINARY,
        dict_size: 4096,
    };

    /// Byte alphabet, 4096-node dictionary (classic 12-bit LZW table).
    pub const BYTE: Self = Self {
        alphabet: Alphabet::BYTE,
        dict_size: 4096,
    };

    /// Create a new LZW configuration.
    pub fn new(alphabet: Alphabet, dict_size: usize) -> Self {
        Self {
            alphabet,
            dict_size,
        }
    }

    /// Code of the single-symbol phrase for `symbol`.
    pub fn seed_code(&self, symbol: u8) -> u32 {
        u32::from(symbol) + 1
    }

    /// First code assigned to a learned (multi-symbol) phrase.
    pub fn first_code(&self) -> u32 {
        u32::from(self.alphabet.size()) + 1
    }

    /// Smallest dictionary that holds the root plus every seed.
    pub fn min_dict_size(&self) -> usize {
        usize::from(self.alphabet.size()) + 1
    }

    /// Check the dictionary can hold the seeds and its codes fit the wire.
    pub fn validate(&self) -> Result<()> {
        if self.dict_size < self.min_dict_size() || self.dict_size > Self::MAX_DICT_SIZE {
            return Err(LzError::invalid_config(format!(
                "dict_size {} out of range {}..={} for alphabet size {}",
                self.dict_size,
                self.min_dict_size(),
                Self::MAX_DICT_SIZE,
                self.alphabet.size()
            )));
        }
        Ok(())
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::BINARY
    }
}
