//! # OxiLZ-LZW: Lempel-Ziv-Welch Codec
//!
//! This crate provides LZW compression and decompression over any finite
//! symbol alphabet, from single bits up to full bytes.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Seeded dictionary**: one code per alphabet symbol, so output units are
//!   bare codes with no literal field
//! - **Bounded table**: the dictionary stops growing at `dict_size` nodes and
//!   keeps encoding against the frozen table
//!
//! ## Code Layout
//!
//! Codes are trie node ids:
//!
//! - **0**: root (never emitted)
//! - **1..=alphabet size**: single-symbol seeds (`symbol + 1`)
//! - **alphabet size + 1..**: learned phrases, in creation order
//!
//! ## Example
//!
//! ```rust
//! use oxilz_lzw::{LzwConfig, decode, encode};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! // Compress
//! let units = encode(original, &LzwConfig::BYTE).unwrap();
//! assert!(units.len() < original.len());
//!
//! // Decompress
//! let decoded = decode(&units, &LzwConfig::BYTE).unwrap();
//! assert_eq!(decoded, original);
//! ```
//!
//! ## Deferred Insertion
//!
//! The decoder learns each dictionary entry one code late. When the encoder
//! emits a code it created on the very previous step, the decoder rebuilds
//! it from the previous phrase:
//!
//! ```rust
//! use oxilz_core::Alphabet;
//! use oxilz_lzw::{LzwConfig, decode, encode};
//!
//! let config = LzwConfig::new(Alphabet::BINARY, 16);
//! let original = [0u8; 6];
//!
//! let units = encode(&original, &config).unwrap();
//! let codes: Vec<u32> = units.iter().map(|u| u.index.get()).collect();
//! assert_eq!(codes, vec![1, 3, 4]);
//!
//! assert_eq!(decode(&units, &config).unwrap(), original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod encoder;
mod unit;

pub use config::LzwConfig;
pub use decoder::LzwDecoder;
pub use encoder::LzwEncoder;
pub use unit::LzwUnit;

use oxilz_core::{Codec, Result, Symbol};

/// Encode symbols with LZW using the given configuration.
///
/// # Example
///
/// ```rust
/// use oxilz_lzw::{LzwConfig, encode};
///
/// let units = encode(&[0, 1, 0, 1, 0, 1], &LzwConfig::BINARY).unwrap();
/// assert_eq!(units.len(), 4);
/// ```
pub fn encode(symbols: &[Symbol], config: &LzwConfig) -> Result<Vec<LzwUnit>> {
    LzwEncoder::new(*config)?.encode(symbols)
}

/// Decode LZW codes back into symbols.
///
/// `config` must match the configuration used to encode.
pub fn decode(units: &[LzwUnit], config: &LzwConfig) -> Result<Vec<Symbol>> {
    LzwDecoder::new(*config)?.decode(units)
}

/// LZW as a [`Codec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwCodec {
    config: LzwConfig,
}

impl LzwCodec {
    /// Create a codec, validating the configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }
}

impl Codec for LzwCodec {
    type Unit = LzwUnit;

    fn name(&self) -> &'static str {
        "lzw"
    }

    fn encode(&self, symbols: &[Symbol]) -> Result<Vec<LzwUnit>> {
        encode(symbols, &self.config)
    }

    fn decode(&self, units: &[LzwUnit]) -> Result<Vec<Symbol>> {
        decode(units, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxilz_core::Alphabet;

    #[test]
    fn test_roundtrip_byte() {
        let original = b"This is a test of compression! ".repeat(10);
        let units = encode(&original, &LzwConfig::BYTE).unwrap();
        let decoded = decode(&units, &LzwConfig::BYTE).unwrap();
        assert_eq!(decoded.len(), 310);
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_empty_input() {
        let units = encode(&[], &LzwConfig::BINARY).unwrap();
        assert!(units.is_empty());
        assert!(decode(&units, &LzwConfig::BINARY).unwrap().is_empty());
    }

    #[test]
    fn test_single_symbol() {
        let units = encode(&[1], &LzwConfig::BINARY).unwrap();
        assert_eq!(units, vec![LzwUnit::new(2)]);
        assert_eq!(decode(&units, &LzwConfig::BINARY).unwrap(), vec![1]);
    }

    #[test]
    fn test_repeating_pattern() {
        let original = vec![b'X'; 1000];
        let units = encode(&original, &LzwConfig::BYTE).unwrap();

        // Highly repetitive - phrases grow by one symbol each step
        assert!(units.len() < original.len() / 10);
        assert_eq!(decode(&units, &LzwConfig::BYTE).unwrap(), original);
    }

    #[test]
    fn test_all_byte_values() {
        let original: Vec<u8> = (0..=255).collect();
        let units = encode(&original, &LzwConfig::BYTE).unwrap();
        assert_eq!(units.len(), 256);
        assert_eq!(decode(&units, &LzwConfig::BYTE).unwrap(), original);
    }

    #[test]
    fn test_codec_rejects_small_dictionary() {
        assert!(LzwCodec::new(LzwConfig::new(Alphabet::BYTE, 100)).is_err());
    }
}
