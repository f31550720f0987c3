//! # OxiLZ-LZ77: Sliding-Window Dictionary Codec
//!
//! LZ77 replaces repeated runs with back-references into a bounded window of
//! already-seen symbols. Every output unit is an `(offset, length, literal)`
//! triple.
//!
//! ## Features
//!
//! - **Greedy matching**: the longest match inside the search buffer wins,
//!   ties go to the most distant offset
//! - **Overlapping copies**: a match may extend into the look-ahead, so a
//!   single unit can expand a short seed into a long run
//! - **Explicit absent literal**: a unit whose match reaches the look-ahead
//!   boundary or the end of input carries `None` instead of a magic value
//!
//! ## Example
//!
//! ```rust
//! use oxilz_core::Alphabet;
//! use oxilz_lz77::{Lz77Config, decode, encode};
//!
//! let config = Lz77Config::new(Alphabet::BINARY, 4, 4);
//! let original = [0u8, 0, 0, 0, 0, 0, 0, 0];
//!
//! let units = encode(&original, &config).unwrap();
//! assert!(units.len() < original.len());
//!
//! let decoded = decode(&units, &config).unwrap();
//! assert_eq!(decoded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod encoder;
mod match_finder;
mod unit;

pub use config::Lz77Config;
pub use decoder::Lz77Decoder;
pub use encoder::Lz77Encoder;
pub use match_finder::{Match, MatchFinder};
pub use unit::Lz77Unit;

use oxilz_core::{Codec, Result, Symbol};

/// Encode symbols with LZ77 using the given configuration.
///
/// # Example
///
/// ```rust
/// use oxilz_lz77::{Lz77Config, encode};
///
/// let units = encode(&[0, 1, 0, 1, 0, 1], &Lz77Config::DEFAULT).unwrap();
/// assert_eq!(units.len(), 3);
/// ```
pub fn encode(symbols: &[Symbol], config: &Lz77Config) -> Result<Vec<Lz77Unit>> {
    Lz77Encoder::new(*config)?.encode(symbols)
}

/// Decode LZ77 units back into symbols.
///
/// `config` must be the configuration used to encode; LZ77 decoding does not
/// depend on it beyond validation.
pub fn decode(units: &[Lz77Unit], config: &Lz77Config) -> Result<Vec<Symbol>> {
    config.validate()?;
    Lz77Decoder::new().decode(units)
}

/// LZ77 as a [`Codec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77Codec {
    config: Lz77Config,
}

impl Lz77Codec {
    /// Create a codec, validating the configuration.
    pub fn new(config: Lz77Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &Lz77Config {
        &self.config
    }
}

impl Codec for Lz77Codec {
    type Unit = Lz77Unit;

    fn name(&self) -> &'static str {
        "lz77"
    }

    fn encode(&self, symbols: &[Symbol]) -> Result<Vec<Lz77Unit>> {
        encode(symbols, &self.config)
    }

    fn decode(&self, units: &[Lz77Unit]) -> Result<Vec<Symbol>> {
        decode(units, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxilz_core::{Alphabet, LzError};

    #[test]
    fn test_roundtrip_binary() {
        let config = Lz77Config::new(Alphabet::BINARY, 8, 4);
        let original = [1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 1, 0, 0, 0, 1];
        let units = encode(&original, &config).unwrap();
        assert_eq!(decode(&units, &config).unwrap(), original);
    }

    #[test]
    fn test_roundtrip_bytes() {
        let config = Lz77Config::new(Alphabet::BYTE, 64, 16);
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let units = encode(original, &config).unwrap();
        assert!(units.len() < original.len());
        assert_eq!(decode(&units, &config).unwrap(), original);
    }

    #[test]
    fn test_short_input_is_all_literals() {
        let config = Lz77Config::new(Alphabet::BINARY, 16, 16);
        let original = [0, 1];
        let units = encode(&original, &config).unwrap();
        assert!(units.iter().all(|u| !u.is_match()));
        assert_eq!(decode(&units, &config).unwrap(), original);
    }

    #[test]
    fn test_codec_encode_into_capacity() {
        let codec = Lz77Codec::new(Lz77Config::new(Alphabet::BINARY, 4, 4)).unwrap();
        let mut small = [Lz77Unit::literal(0); 2];
        let err = codec.encode_into(&[0, 1, 1, 0, 1], &mut small).unwrap_err();
        assert!(matches!(err, LzError::OutputCapacityExceeded { .. }));

        let mut enough = [Lz77Unit::literal(0); 8];
        let written = codec.encode_into(&[0; 8], &mut enough).unwrap();
        assert_eq!(written, 3);

        let mut out = [9u8; 8];
        assert_eq!(codec.decode_into(&enough[..written], &mut out).unwrap(), 8);
        assert_eq!(out, [0; 8]);
    }
}
