//! LZ78 encoder (compression).

use crate::config::Lz78Config;
use crate::unit::Lz78Unit;
use oxilz_core::{DictionaryTrie, NodeId, Result, Symbol};

/// LZ78 encoder for compression.
#[derive(Debug, Clone)]
pub struct Lz78Encoder {
    config: Lz78Config,
}

impl Lz78Encoder {
    /// Create a new LZ78 encoder with the given configuration.
    pub fn new(config: Lz78Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Encode symbols into (index, literal) pairs.
    ///
    /// # Algorithm
    ///
    /// 1. Start at the root of an empty dictionary
    /// 2. Follow existing children for as long as the input allows
    /// 3. On the first missing child, add it (if there is room), emit the
    ///    matched node plus the missing symbol, and restart at the root
    /// 4. If input runs out mid-phrase, emit the matched node without a
    ///    literal
    pub fn encode(&self, input: &[Symbol]) -> Result<Vec<Lz78Unit>> {
        self.config.alphabet.validate(input)?;

        let mut trie = DictionaryTrie::new(self.config.dict_size)?;
        let mut units = Vec::new();
        let mut pos = 0;

        while pos < input.len() {
            let mut node = NodeId::ROOT;
            while let Some(child) = input.get(pos).and_then(|&s| trie.lookup(node, s)) {
                node = child;
                pos += 1;
            }

            match input.get(pos) {
                Some(&symbol) => {
                    trie.insert(node, symbol);
                    units.push(Lz78Unit {
                        index: node,
                        literal: Some(symbol),
                    });
                    pos += 1;
                }
                None => units.push(Lz78Unit {
                    index: node,
                    literal: None,
                }),
            }
        }

        debug_assert!(trie.len() <= self.config.dict_size);
        Ok(units)
    }

    /// Get the configuration.
    pub fn config(&self) -> &Lz78Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxilz_core::Alphabet;

    fn unit(index: u32, literal: Option<Symbol>) -> Lz78Unit {
        Lz78Unit {
            index: NodeId::new(index),
            literal,
        }
    }

    #[test]
    fn test_encode_phrases() {
        let encoder = Lz78Encoder::new(Lz78Config::new(Alphabet::BINARY, 16)).unwrap();
        // Phrases: 0 | 1 | 00 | 01 | 0
        let units = encoder.encode(&[0, 1, 0, 0, 0, 1, 0]).unwrap();
        assert_eq!(
            units,
            vec![
                unit(0, Some(0)),
                unit(0, Some(1)),
                unit(1, Some(0)),
                unit(1, Some(1)),
                unit(1, None),
            ]
        );
    }

    #[test]
    fn test_encode_with_full_dictionary() {
        // Room for the root plus one phrase only
        let encoder = Lz78Encoder::new(Lz78Config::new(Alphabet::BINARY, 2)).unwrap();
        let units = encoder.encode(&[0, 0, 0, 1]).unwrap();
        assert_eq!(
            units,
            vec![unit(0, Some(0)), unit(1, Some(0)), unit(0, Some(1))]
        );
    }

    #[test]
    fn test_encode_rejects_invalid_symbol() {
        let encoder = Lz78Encoder::new(Lz78Config::default()).unwrap();
        assert!(encoder.encode(&[0, 5]).is_err());
    }
}
