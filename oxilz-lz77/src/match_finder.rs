//! Bounded-window longest-match search.
//!
//! The search is a plain brute-force scan over the search buffer: for every
//! candidate offset it counts how many symbols starting at `pos - offset`
//! agree with those starting at `pos`. Matches may run past `pos` into the
//! look-ahead (overlapping copies), which the decoder reproduces by copying
//! one symbol at a time.

use oxilz_core::Symbol;

/// A match candidate: backward distance and run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Match {
    /// Backward distance to the match start (0 = no match).
    pub offset: usize,
    /// Number of matching symbols.
    pub length: usize,
}

impl Match {
    /// The "no match" result.
    pub const NONE: Self = Self {
        offset: 0,
        length: 0,
    };

    /// Whether a positive-length match was found.
    pub fn is_some(&self) -> bool {
        self.length > 0
    }
}

/// Greedy longest-match finder over a fixed search/look-ahead window.
#[derive(Debug, Clone, Copy)]
pub struct MatchFinder {
    search_buf_len: usize,
    look_ahead_buf_len: usize,
}

impl MatchFinder {
    /// Create a finder for the given window sizes.
    pub fn new(search_buf_len: usize, look_ahead_buf_len: usize) -> Self {
        Self {
            search_buf_len,
            look_ahead_buf_len,
        }
    }

    /// Find the longest match for the symbols starting at `pos`.
    ///
    /// Offsets are scanned from the most distant (`min(pos, search_buf_len)`)
    /// down to 1 and a candidate replaces the best only when strictly longer,
    /// so among equal-length matches the most distant offset wins. Returns
    /// [`Match::NONE`] when no offset matches even one symbol.
    pub fn find(&self, history: &[Symbol], pos: usize) -> Match {
        let max_len = self
            .look_ahead_buf_len
            .min(history.len().saturating_sub(pos));
        if max_len == 0 {
            return Match::NONE;
        }

        let mut best = Match::NONE;
        for offset in (1..=pos.min(self.search_buf_len)).rev() {
            let length = match_length(history, pos - offset, pos, max_len);
            if length > best.length {
                best = Match { offset, length };
                if length == max_len {
                    // Nothing can be strictly longer
                    break;
                }
            }
        }
        best
    }
}

/// Count agreeing symbols at `a` and `b`, up to `max_len`.
#[inline]
fn match_length(history: &[Symbol], a: usize, b: usize, max_len: usize) -> usize {
    history[a..]
        .iter()
        .zip(&history[b..b + max_len])
        .take_while(|(x, y)| x == y)
        .count()
}
