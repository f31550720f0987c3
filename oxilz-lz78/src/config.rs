//! LZ78 dictionary configuration.

use oxilz_core::{Alphabet, LzError, Result};

/// LZ78 configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz78Config {
    /// Input alphabet.
    pub alphabet: Alphabet,
    /// Maximum number of dictionary nodes, root included.
    pub dict_size: usize,
}

impl Lz78Config {
    /// Smallest useful dictionary: root plus one phrase.
    pub const MIN_DICT_SIZE: usize = 2;

    /// Largest dictionary whose indices fit the 16-bit signed wire field.
    pub const MAX_DICT_SIZE: usize = i16::MAX as usize + 1;

    /// Binary alphabet, 4096-node dictionary.
    pub const DEFAULT: Self = Self {
        alphabet: Alphabet::BINARY,
        dict_size: 4096,
    };

    /// Create a new LZ78 configuration.
    pub fn new(alphabet: Alphabet, dict_size: usize) -> Self {
        Self {
            alphabet,
            dict_size,
        }
    }

    /// Check the dictionary size range.
    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_DICT_SIZE..=Self::MAX_DICT_SIZE).contains(&self.dict_size) {
            return Err(LzError::invalid_config(format!(
                "dict_size {} out of range {}..={}",
                self.dict_size,
                Self::MIN_DICT_SIZE,
                Self::MAX_DICT_SIZE
            )));
        }
        Ok(())
    }
}

impl Default for Lz78Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dict_size_bounds() {
        assert!(Lz78Config::new(Alphabet::BINARY, 1).validate().is_err());
        assert!(Lz78Config::new(Alphabet::BINARY, 2).validate().is_ok());
        assert!(Lz78Config::new(Alphabet::BYTE, 32768).validate().is_ok());
        assert!(Lz78Config::new(Alphabet::BYTE, 32769).validate().is_err());
        assert!(Lz78Config::default().validate().is_ok());
    }
}
