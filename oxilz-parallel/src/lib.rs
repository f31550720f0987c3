//! # OxiLZ-Parallel
//!
//! Block-parallel compression for any OxiLZ [`Codec`](oxilz_core::Codec).
//!
//! The input is cut into exactly `num_t` contiguous blocks and each block is
//! encoded independently on a dedicated rayon pool of `num_t` workers. Blocks
//! share no dictionary or window state, so compression may be slightly worse
//! than a single serial pass; in exchange the work scales with cores and the
//! output is deterministic for a given input and `num_t`.
//!
//! ## Example
//!
//! ```rust
//! use oxilz_core::Alphabet;
//! use oxilz_lz78::{Lz78Codec, Lz78Config};
//! use oxilz_parallel::BlockParallelRunner;
//!
//! let codec = Lz78Codec::new(Lz78Config::new(Alphabet::BINARY, 256)).unwrap();
//! let runner = BlockParallelRunner::new(3).unwrap();
//!
//! let input: Vec<u8> = (0..100).map(|i| (i % 3 == 0) as u8).collect();
//! let result = runner.compress(&codec, &input).unwrap();
//! assert_eq!(result.block_count(), 3);
//!
//! let decoded = runner.decompress(&codec, &result).unwrap();
//! assert_eq!(decoded, input);
//! ```
//!
//! ## Failure Semantics
//!
//! Every block runs to completion. When one or more blocks fail, the error
//! of the lowest-indexed failing block is reported as
//! [`LzError::WorkerFailure`](oxilz_core::LzError::WorkerFailure) and all
//! partial results are discarded.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod result;
mod runner;

pub use config::ParallelConfig;
pub use result::ParallelResult;
pub use runner::{BlockParallelRunner, partition};
