//! LZW decoder (decompression).
//!
//! The decoder builds the same dictionary as the encoder but always one
//! entry behind: the entry the encoder adds after emitting a code is
//! "that phrase + the first symbol of the next phrase", which the decoder
//! can only complete once it has read the next code.

use crate::config::LzwConfig;
use crate::unit::LzwUnit;
use oxilz_core::{DictionaryTrie, LzError, NodeId, Result, Symbol};

/// LZW decoder for decompression.
#[derive(Debug, Clone)]
pub struct LzwDecoder {
    config: LzwConfig,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Decode LZW codes.
    ///
    /// A code that is not yet in the dictionary is valid only if it is
    /// exactly the next code to be assigned: the encoder created it on the
    /// previous step and used it immediately. Its phrase is then the
    /// previous phrase followed by that phrase's own first symbol.
    pub fn decode(&self, units: &[LzwUnit]) -> Result<Vec<Symbol>> {
        let mut trie = DictionaryTrie::seeded(self.config.dict_size, self.config.alphabet)?;
        let mut output = Vec::new();

        // Previous code (for dictionary building)
        let mut prev_code: Option<NodeId> = None;

        for unit in units {
            let code = unit.index;
            let start = output.len();

            if !code.is_root() && trie.contains(code) {
                // Code exists in dictionary - this is the common case
                trie.append_phrase(code, &mut output)?;
            } else if code == trie.next_id() && !trie.is_full() {
                // Special case: code not yet in dictionary (e.g. "0 00 000...")
                let prev = prev_code
                    .ok_or_else(|| LzError::invalid_code(code.get(), trie.next_id().get()))?;
                trie.append_phrase(prev, &mut output)?;
                output.push(trie.first_symbol(prev)?);
            } else {
                return Err(LzError::invalid_code(code.get(), trie.next_id().get()));
            }

            // Every non-root phrase is non-empty
            let first = output[start];
            if let Some(prev) = prev_code {
                trie.insert(prev, first);
            }
            prev_code = Some(code);
        }

        debug_assert!(trie.len() <= self.config.dict_size);
        Ok(output)
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::LzwEncoder;
    use oxilz_core::Alphabet;

    fn units(codes: &[u32]) -> Vec<LzwUnit> {
        codes.iter().copied().map(LzwUnit::new).collect()
    }

    #[test]
    fn test_decode_alternating() {
        let decoder = LzwDecoder::new(LzwConfig::new(Alphabet::BINARY, 16)).unwrap();
        let out = decoder.decode(&units(&[1, 2, 3, 3])).unwrap();
        assert_eq!(out, vec![0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_decode_code_not_yet_defined() {
        let decoder = LzwDecoder::new(LzwConfig::new(Alphabet::BINARY, 16)).unwrap();
        // Codes 3 and 4 are each used the moment they are created
        let out = decoder.decode(&units(&[1, 3, 4])).unwrap();
        assert_eq!(out, vec![0; 6]);
    }

    #[test]
    fn test_decode_rejects_root_code() {
        let decoder = LzwDecoder::new(LzwConfig::BINARY).unwrap();
        assert!(matches!(
            decoder.decode(&units(&[0])),
            Err(LzError::InvalidCode { code: 0, .. })
        ));
    }

    #[test]
    fn test_decode_rejects_undefined_first_code() {
        let decoder = LzwDecoder::new(LzwConfig::BINARY).unwrap();
        // Code 3 is the next code, but there is no previous phrase to build it from
        assert!(decoder.decode(&units(&[3])).is_err());
    }

    #[test]
    fn test_decode_rejects_code_beyond_next() {
        let decoder = LzwDecoder::new(LzwConfig::BINARY).unwrap();
        assert!(matches!(
            decoder.decode(&units(&[1, 2, 9])),
            Err(LzError::InvalidCode {
                code: 9,
                next_code: 4
            })
        ));
    }

    #[test]
    fn test_decode_roundtrip_byte_text() {
        let config = LzwConfig::BYTE;
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let encoded = LzwEncoder::new(config).unwrap().encode(original).unwrap();
        let decoded = LzwDecoder::new(config).unwrap().decode(&encoded).unwrap();
        assert_eq!(decoded, original);
    }
}
