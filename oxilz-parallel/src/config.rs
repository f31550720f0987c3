//! Parallel runner configuration.

use oxilz_core::{LzError, Result};

/// Block-parallel execution parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Number of blocks, and of worker threads in the pool.
    pub num_t: usize,
}

impl ParallelConfig {
    /// Single block on a single worker.
    pub const SERIAL: Self = Self { num_t: 1 };

    /// Create a configuration with `num_t` blocks.
    pub fn new(num_t: usize) -> Self {
        Self { num_t }
    }

    /// Check that at least one block is requested.
    pub fn validate(&self) -> Result<()> {
        if self.num_t == 0 {
            return Err(LzError::invalid_config("num_t must be at least 1"));
        }
        Ok(())
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self::SERIAL
    }
}
