//! # OxiLZ-LZ78: Incremental Trie Dictionary Codec
//!
//! LZ78 parses the input into phrases, each one the longest phrase already
//! in the dictionary extended by one new symbol. Every output unit is an
//! `(index, literal)` pair and every literal adds one node to the trie.
//!
//! The dictionary starts empty (root only) and is bounded by
//! [`Lz78Config::dict_size`]. When it fills up, no new phrases are added and
//! parsing continues against the frozen dictionary.
//!
//! ## Example
//!
//! ```rust
//! use oxilz_core::Alphabet;
//! use oxilz_lz78::{Lz78Config, decode, encode};
//!
//! let config = Lz78Config::new(Alphabet::BYTE, 1024);
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let units = encode(original, &config).unwrap();
//! let decoded = decode(&units, &config).unwrap();
//! assert_eq!(decoded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod encoder;
mod unit;

pub use config::Lz78Config;
pub use decoder::Lz78Decoder;
pub use encoder::Lz78Encoder;
pub use unit::Lz78Unit;

use oxilz_core::{Codec, Result, Symbol};

/// Encode symbols with LZ78 using the given configuration.
pub fn encode(symbols: &[Symbol], config: &Lz78Config) -> Result<Vec<Lz78Unit>> {
    Lz78Encoder::new(*config)?.encode(symbols)
}

/// Decode LZ78 units back into symbols.
///
/// `config.dict_size` must match the value used to encode.
pub fn decode(units: &[Lz78Unit], config: &Lz78Config) -> Result<Vec<Symbol>> {
    Lz78Decoder::new(*config)?.decode(units)
}

/// LZ78 as a [`Codec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz78Codec {
    config: Lz78Config,
}

impl Lz78Codec {
    /// Create a codec, validating the configuration.
    pub fn new(config: Lz78Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &Lz78Config {
        &self.config
    }
}

impl Codec for Lz78Codec {
    type Unit = Lz78Unit;

    fn name(&self) -> &'static str {
        "lz78"
    }

    fn encode(&self, symbols: &[Symbol]) -> Result<Vec<Lz78Unit>> {
        encode(symbols, &self.config)
    }

    fn decode(&self, units: &[Lz78Unit]) -> Result<Vec<Symbol>> {
        decode(units, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxilz_core::Alphabet;

    #[test]
    fn test_roundtrip_empty() {
        let config = Lz78Config::default();
        let units = encode(&[], &config).unwrap();
        assert!(units.is_empty());
        assert!(decode(&units, &config).unwrap().is_empty());
    }

    #[test]
    fn test_roundtrip_repeating() {
        let config = Lz78Config::new(Alphabet::BINARY, 64);
        let original = vec![1u8; 1000];
        let units = encode(&original, &config).unwrap();
        assert!(units.len() < original.len() / 4);
        assert_eq!(decode(&units, &config).unwrap(), original);
    }

    #[test]
    fn test_roundtrip_tiny_dictionary() {
        let config = Lz78Config::new(Alphabet::BINARY, 2);
        let original = [0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1];
        let units = encode(&original, &config).unwrap();
        assert_eq!(decode(&units, &config).unwrap(), original);
    }

    #[test]
    fn test_codec_trait() {
        let codec = Lz78Codec::new(Lz78Config::new(Alphabet::BYTE, 256)).unwrap();
        assert_eq!(codec.name(), "lz78");
        let units = codec.encode(b"abababab").unwrap();
        assert_eq!(codec.decode(&units).unwrap(), b"abababab");
    }
}
