//! LZ77 window configuration.

use oxilz_core::{Alphabet, LzError, Result};

/// LZ77 configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77Config {
    /// Input alphabet.
    pub alphabet: Alphabet,
    /// Number of already-processed symbols eligible as match sources.
    pub search_buf_len: usize,
    /// Maximum number of upcoming symbols a single match may cover.
    pub look_ahead_buf_len: usize,
}

impl Lz77Config {
    /// Largest window either buffer may use (offsets and lengths are 16-bit signed on the wire).
    pub const MAX_WINDOW: usize = i16::MAX as usize;

    /// Binary alphabet, 1 KiB search buffer, 64-symbol look-ahead.
    pub const DEFAULT: Self = Self {
        alphabet: Alphabet::BINARY,
        search_buf_len: 1024,
        look_ahead_buf_len: 64,
    };

    /// Create a new LZ77 configuration.
    pub fn new(alphabet: Alphabet, search_buf_len: usize, look_ahead_buf_len: usize) -> Self {
        Self {
            alphabet,
            search_buf_len,
            look_ahead_buf_len,
        }
    }

    /// Check both windows are within `1..=MAX_WINDOW`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("search_buf_len", self.search_buf_len),
            ("look_ahead_buf_len", self.look_ahead_buf_len),
        ] {
            if value == 0 || value > Self::MAX_WINDOW {
                return Err(LzError::invalid_config(format!(
                    "{name} {value} out of range 1..={}",
                    Self::MAX_WINDOW
                )));
            }
        }
        Ok(())
    }
}

impl Default for Lz77Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Lz77Config::default();
        assert_eq!(config.alphabet, Alphabet::BINARY);
        assert_eq!(config.search_buf_len, 1024);
        assert_eq!(config.look_ahead_buf_len, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_window_bounds() {
        assert!(Lz77Config::new(Alphabet::BINARY, 0, 4).validate().is_err());
        assert!(Lz77Config::new(Alphabet::BINARY, 4, 0).validate().is_err());
        assert!(
            Lz77Config::new(Alphabet::BINARY, Lz77Config::MAX_WINDOW + 1, 4)
                .validate()
                .is_err()
        );
        assert!(
            Lz77Config::new(Alphabet::BYTE, Lz77Config::MAX_WINDOW, 1)
                .validate()
                .is_ok()
        );
    }
}
