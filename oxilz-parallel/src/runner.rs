//! Block-parallel execution of a codec.
//!
//! The input is split into exactly `num_t` contiguous blocks of
//! `ceil(len / num_t)` symbols. Each block is encoded with fresh codec state
//! on a dedicated rayon pool, and results are reassembled in block order.

use crate::config::ParallelConfig;
use crate::result::ParallelResult;
use oxilz_core::{Codec, LzError, Result, Symbol};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::ops::Range;
use tracing::{debug, warn};

/// Split `len` symbols into exactly `num_t` contiguous ranges.
///
/// Every range except possibly the trailing ones holds `ceil(len / num_t)`
/// symbols; trailing ranges may be short or empty. A `num_t` of zero is
/// treated as one.
pub fn partition(len: usize, num_t: usize) -> Vec<Range<usize>> {
    let num_t = num_t.max(1);
    let block_len = len.div_ceil(num_t);
    (0..num_t)
        .map(|i| {
            let start = i.saturating_mul(block_len).min(len);
            let end = start.saturating_add(block_len).min(len);
            start..end
        })
        .collect()
}

/// Runs a [`Codec`] over contiguous blocks on a fixed-size worker pool.
pub struct BlockParallelRunner {
    config: ParallelConfig,
    pool: ThreadPool,
}

impl BlockParallelRunner {
    /// Create a runner with `num_t` blocks and workers.
    pub fn new(num_t: usize) -> Result<Self> {
        Self::with_config(ParallelConfig::new(num_t))
    }

    /// Create a runner from a configuration.
    pub fn with_config(config: ParallelConfig) -> Result<Self> {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.num_t)
            .thread_name(|i| format!("oxilz-worker-{i}"))
            .build()
            .map_err(|e| LzError::ThreadPool(e.to_string()))?;
        Ok(Self { config, pool })
    }

    /// Number of blocks produced by [`compress`](Self::compress).
    pub fn num_t(&self) -> usize {
        self.config.num_t
    }

    /// Get the configuration.
    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    /// Encode `symbols` as `num_t` independent blocks.
    ///
    /// Every block runs to completion. If any block fails, the error of the
    /// lowest failing block is returned as [`LzError::WorkerFailure`].
    pub fn compress<C: Codec>(
        &self,
        codec: &C,
        symbols: &[Symbol],
    ) -> Result<ParallelResult<C::Unit>> {
        let ranges = partition(symbols.len(), self.config.num_t);
        debug!(
            codec = codec.name(),
            symbols = symbols.len(),
            blocks = ranges.len(),
            block_len = ranges.first().map_or(0, |r| r.len()),
            "partitioned input"
        );

        let results: Vec<Result<Vec<C::Unit>>> = self.pool.install(|| {
            ranges
                .par_iter()
                .enumerate()
                .map(|(block, range)| -> Result<Vec<C::Unit>> {
                    let units = codec.encode(&symbols[range.clone()])?;
                    debug!(
                        block,
                        symbols = range.len(),
                        units = units.len(),
                        "block encoded"
                    );
                    Ok(units)
                })
                .collect()
        });

        join_blocks(results).map(ParallelResult::from_blocks)
    }

    /// Decode every block and concatenate the symbols in block order.
    ///
    /// The number of blocks in `result` need not match `num_t`.
    pub fn decompress<C: Codec>(
        &self,
        codec: &C,
        result: &ParallelResult<C::Unit>,
    ) -> Result<Vec<Symbol>> {
        debug!(
            codec = codec.name(),
            blocks = result.block_count(),
            units = result.total_units(),
            "decompressing blocks"
        );

        let decoded: Vec<Result<Vec<Symbol>>> = self.pool.install(|| {
            result
                .blocks()
                .par_iter()
                .enumerate()
                .map(|(block, units)| -> Result<Vec<Symbol>> {
                    let symbols = codec.decode(units)?;
                    debug!(
                        block,
                        units = units.len(),
                        symbols = symbols.len(),
                        "block decoded"
                    );
                    Ok(symbols)
                })
                .collect()
        });

        Ok(join_blocks(decoded)?.concat())
    }
}

impl std::fmt::Debug for BlockParallelRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockParallelRunner")
            .field("num_t", &self.config.num_t)
            .finish()
    }
}

/// Unwrap per-block results in order, failing on the lowest failed block.
fn join_blocks<T>(results: Vec<Result<T>>) -> Result<Vec<T>> {
    let mut blocks = Vec::with_capacity(results.len());
    for (block, result) in results.into_iter().enumerate() {
        match result {
            Ok(value) => blocks.push(value),
            Err(err) => {
                warn!(block, error = %err, "block failed");
                return Err(LzError::worker_failure(block, err));
            }
        }
    }
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxilz_lzw::{LzwCodec, LzwConfig};

    fn sizes(ranges: &[Range<usize>]) -> Vec<usize> {
        ranges.iter().map(|r| r.len()).collect()
    }

    #[test]
    fn test_partition_even() {
        let ranges = partition(12, 3);
        assert_eq!(ranges, vec![0..4, 4..8, 8..12]);
    }

    #[test]
    fn test_partition_uneven() {
        assert_eq!(sizes(&partition(10, 3)), vec![4, 4, 2]);
        assert_eq!(sizes(&partition(10_000, 3)), vec![3334, 3334, 3332]);
    }

    #[test]
    fn test_partition_trailing_empty_blocks() {
        // ceil(5 / 4) = 2, so the fourth block starts past the end
        assert_eq!(partition(5, 4), vec![0..2, 2..4, 4..5, 5..5]);
        assert_eq!(sizes(&partition(2, 5)), vec![1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_partition_empty_input() {
        assert_eq!(partition(0, 3), vec![0..0, 0..0, 0..0]);
    }

    #[test]
    fn test_partition_zero_threads() {
        assert_eq!(partition(7, 0), vec![0..7]);
    }

    #[test]
    fn test_runner_rejects_zero() {
        assert!(matches!(
            BlockParallelRunner::new(0),
            Err(LzError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_join_blocks_lowest_failure() {
        let results: Vec<Result<u8>> = vec![
            Ok(1),
            Err(LzError::missing_literal(0)),
            Err(LzError::unexpected_eof(1)),
        ];
        match join_blocks(results) {
            Err(LzError::WorkerFailure { block, source }) => {
                assert_eq!(block, 1);
                assert!(matches!(*source, LzError::MissingLiteral { .. }));
            }
            other => panic!("expected worker failure, got {other:?}"),
        }
    }

    #[test]
    fn test_roundtrip_small() {
        let runner = BlockParallelRunner::new(2).unwrap();
        let codec = LzwCodec::new(LzwConfig::BYTE).unwrap();
        let input = b"abracadabra abracadabra";
        let result = runner.compress(&codec, input).unwrap();
        assert_eq!(result.block_count(), 2);
        assert_eq!(runner.decompress(&codec, &result).unwrap(), input);
    }
}
