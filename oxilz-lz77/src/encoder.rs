//! LZ77 encoder (compression).

use crate::config::Lz77Config;
use crate::match_finder::MatchFinder;
use crate::unit::Lz77Unit;
use oxilz_core::{Result, Symbol};

/// LZ77 encoder for compression.
#[derive(Debug, Clone)]
pub struct Lz77Encoder {
    config: Lz77Config,
    finder: MatchFinder,
}

impl Lz77Encoder {
    /// Create a new LZ77 encoder with the given configuration.
    pub fn new(config: Lz77Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            finder: MatchFinder::new(config.search_buf_len, config.look_ahead_buf_len),
        })
    }

    /// Encode symbols into (offset, length, literal) triples.
    ///
    /// # Algorithm
    ///
    /// 1. Validate every symbol against the alphabet
    /// 2. Find the longest match at the current position
    /// 3. If the match stops short of both the look-ahead boundary and the
    ///    end of input, attach the next symbol as literal and skip past it
    /// 4. Otherwise emit the match without a literal
    /// 5. Repeat until all input is consumed
    pub fn encode(&self, input: &[Symbol]) -> Result<Vec<Lz77Unit>> {
        self.config.alphabet.validate(input)?;

        let mut units = Vec::new();
        let mut pos = 0;
        while pos < input.len() {
            let found = self.finder.find(input, pos);
            let next = pos + found.length;

            // Window sizes are validated to fit i16, so both casts are lossless
            let mut unit = Lz77Unit {
                offset: found.offset as u16,
                length: found.length as u16,
                literal: None,
            };

            if found.length < self.config.look_ahead_buf_len && next < input.len() {
                unit.literal = Some(input[next]);
                pos = next + 1;
            } else {
                pos = next;
            }
            units.push(unit);
        }

        Ok(units)
    }

    /// Get the configuration.
    pub fn config(&self) -> &Lz77Config {
        &self.config
    }
}
