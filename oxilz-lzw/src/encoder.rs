//! LZW encoder (compression).

use crate::config::LzwConfig;
use crate::unit::LzwUnit;
use oxilz_core::{DictionaryTrie, LzError, NodeId, Result, Symbol};

/// LZW encoder for compression.
#[derive(Debug, Clone)]
pub struct LzwEncoder {
    config: LzwConfig,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Encode symbols into dictionary codes.
    ///
    /// # Algorithm
    ///
    /// The LZW encoding algorithm:
    /// 1. Seed the dictionary with one code per alphabet symbol
    /// 2. Build the longest phrase present in the dictionary
    /// 3. Output the code for that phrase
    /// 4. Add phrase + next symbol to the dictionary (if not full)
    /// 5. Restart at the root from that next symbol
    /// 6. Repeat until all input is processed
    ///
    /// The symbol that ended a phrase is not consumed; it begins the next
    /// phrase, which is how the decoder learns it.
    pub fn encode(&self, input: &[Symbol]) -> Result<Vec<LzwUnit>> {
        self.config.alphabet.validate(input)?;

        let mut trie = DictionaryTrie::seeded(self.config.dict_size, self.config.alphabet)?;
        let mut units = Vec::new();
        let mut pos = 0;

        while pos < input.len() {
            let mut node = NodeId::ROOT;
            while let Some(child) = input.get(pos).and_then(|&s| trie.lookup(node, s)) {
                node = child;
                pos += 1;
            }

            // Seeds cover every valid symbol, so at least one symbol matched
            if node.is_root() {
                return Err(LzError::invalid_symbol(
                    pos,
                    input[pos],
                    self.config.alphabet.size(),
                ));
            }
            units.push(LzwUnit { index: node });

            if let Some(&symbol) = input.get(pos) {
                trie.insert(node, symbol);
            }
        }

        debug_assert!(trie.len() <= self.config.dict_size);
        Ok(units)
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxilz_core::Alphabet;

    fn codes(units: &[LzwUnit]) -> Vec<u32> {
        units.iter().map(|u| u.index.get()).collect()
    }

    #[test]
    fn test_encode_alternating() {
        let encoder = LzwEncoder::new(LzwConfig::new(Alphabet::BINARY, 16)).unwrap();
        // Seeds: 0 -> 1, 1 -> 2. Learned: 01 -> 3, 10 -> 4, 010 -> 5
        let units = encoder.encode(&[0, 1, 0, 1, 0, 1]).unwrap();
        assert_eq!(codes(&units), vec![1, 2, 3, 3]);
    }

    #[test]
    fn test_encode_run_uses_fresh_code() {
        let encoder = LzwEncoder::new(LzwConfig::new(Alphabet::BINARY, 16)).unwrap();
        // 0 | 00 | 000: each phrase is the code learned one step earlier
        let units = encoder.encode(&[0; 6]).unwrap();
        assert_eq!(codes(&units), vec![1, 3, 4]);
    }

    #[test]
    fn test_encode_full_dictionary_falls_back_to_seeds() {
        let encoder = LzwEncoder::new(LzwConfig::new(Alphabet::BINARY, 3)).unwrap();
        let units = encoder.encode(&[1, 1, 0, 1]).unwrap();
        assert_eq!(codes(&units), vec![2, 2, 1, 2]);
    }

    #[test]
    fn test_encode_empty() {
        let encoder = LzwEncoder::new(LzwConfig::BYTE).unwrap();
        assert!(encoder.encode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_encode_rejects_invalid_symbol() {
        let encoder = LzwEncoder::new(LzwConfig::BINARY).unwrap();
        assert!(encoder.encode(&[1, 0, 9]).is_err());
    }
}
