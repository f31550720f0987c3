//! LZ78 decoder (decompression).

use crate::config::Lz78Config;
use crate::unit::Lz78Unit;
use oxilz_core::{DictionaryTrie, LzError, Result, Symbol};

/// LZ78 decoder for decompression.
#[derive(Debug, Clone)]
pub struct Lz78Decoder {
    config: Lz78Config,
}

impl Lz78Decoder {
    /// Create a new LZ78 decoder with the given configuration.
    pub fn new(config: Lz78Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Decode (index, literal) pairs.
    ///
    /// Each unit expands to the phrase of its node followed by its literal.
    /// The decoder grows its own dictionary exactly as the encoder did: one
    /// new child of `index` per literal, skipped once the dictionary is full.
    pub fn decode(&self, units: &[Lz78Unit]) -> Result<Vec<Symbol>> {
        let mut trie = DictionaryTrie::new(self.config.dict_size)?;
        let mut output = Vec::new();

        for (i, unit) in units.iter().enumerate() {
            if !trie.contains(unit.index) {
                return Err(LzError::invalid_code(
                    unit.index.get(),
                    trie.next_id().get(),
                ));
            }
            trie.append_phrase(unit.index, &mut output)?;

            match unit.literal {
                Some(symbol) => {
                    output.push(symbol);
                    trie.insert(unit.index, symbol);
                }
                // Only the final phrase may end without a literal
                None if i + 1 == units.len() => {}
                None => return Err(LzError::missing_literal(i)),
            }
        }

        Ok(output)
    }

    /// Get the configuration.
    pub fn config(&self) -> &Lz78Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxilz_core::{Alphabet, NodeId};

    fn unit(index: u32, literal: Option<Symbol>) -> Lz78Unit {
        Lz78Unit {
            index: NodeId::new(index),
            literal,
        }
    }

    fn decoder(dict_size: usize) -> Lz78Decoder {
        Lz78Decoder::new(Lz78Config::new(Alphabet::BINARY, dict_size)).unwrap()
    }

    #[test]
    fn test_decode_phrases() {
        let units = [
            unit(0, Some(0)),
            unit(0, Some(1)),
            unit(1, Some(0)),
            unit(1, Some(1)),
            unit(1, None),
        ];
        assert_eq!(decoder(16).decode(&units).unwrap(), vec![0, 1, 0, 0, 0, 1, 0]);
    }

    #[test]
    fn test_decode_unknown_index() {
        let err = decoder(16).decode(&[unit(0, Some(0)), unit(5, Some(1))]).unwrap_err();
        assert!(matches!(
            err,
            LzError::InvalidCode {
                code: 5,
                next_code: 2
            }
        ));
    }

    #[test]
    fn test_decode_missing_literal_mid_stream() {
        let err = decoder(16)
            .decode(&[unit(0, Some(0)), unit(1, None), unit(0, Some(1))])
            .unwrap_err();
        assert!(matches!(err, LzError::MissingLiteral { unit: 1 }));
    }

    #[test]
    fn test_decode_respects_capacity() {
        // With dict_size 2 node 2 is never created, so referencing it is invalid
        let err = decoder(2)
            .decode(&[unit(0, Some(0)), unit(1, Some(1)), unit(2, Some(0))])
            .unwrap_err();
        assert!(matches!(err, LzError::InvalidCode { code: 2, .. }));
    }
}
