//! Error types for OxiLZ operations.
//!
//! A single error enum covers every codec, the unit serializer and the
//! parallel runner, so that a block failure can carry the codec error that
//! caused it.

use crate::Symbol;
use thiserror::Error;

/// The main error type for OxiLZ operations.
#[derive(Debug, Error)]
pub enum LzError {
    /// An input symbol lies outside the configured alphabet.
    #[error("Invalid symbol {symbol} at position {position} (alphabet size {alphabet_size})")]
    InvalidSymbol {
        /// Index of the offending symbol in the input.
        position: usize,
        /// The offending symbol.
        symbol: Symbol,
        /// Size of the configured alphabet.
        alphabet_size: u16,
    },

    /// Caller-provided output buffer cannot hold the result.
    #[error("Output capacity exceeded: need {needed} elements, have {capacity}")]
    OutputCapacityExceeded {
        /// Number of elements the result requires.
        needed: usize,
        /// Number of elements the buffer provides.
        capacity: usize,
    },

    /// A parallel worker failed; carries the first failing block.
    #[error("Worker for block {block} failed: {source}")]
    WorkerFailure {
        /// Index of the lowest failing block.
        block: usize,
        /// The error reported by that block.
        #[source]
        source: Box<LzError>,
    },

    /// Configuration values are out of range.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// A dictionary index does not name a node that exists at this point.
    #[error("Invalid dictionary code {code} (next code {next_code})")]
    InvalidCode {
        /// The offending code.
        code: u32,
        /// The next code the dictionary would assign.
        next_code: u32,
    },

    /// LZ77 back-reference points before the start of the output.
    #[error("Invalid back-reference distance: {distance} exceeds history size {history_size}")]
    InvalidDistance {
        /// The invalid distance value.
        distance: usize,
        /// Number of symbols decoded so far.
        history_size: usize,
    },

    /// A unit that must carry a literal has none.
    #[error("Unit {unit} is missing its literal")]
    MissingLiteral {
        /// Index of the unit in its sequence.
        unit: usize,
    },

    /// Serialized data ended early.
    #[error("Unexpected end of data: need {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// Serialized data is malformed.
    #[error("Corrupted data at offset {offset}: {message}")]
    CorruptedData {
        /// Byte offset where corruption was detected.
        offset: u64,
        /// Description of the corruption.
        message: String,
    },

    /// A unit field does not fit its fixed-width wire representation.
    #[error("Field `{field}` value {value} does not fit its wire width")]
    FieldOverflow {
        /// Field name.
        field: &'static str,
        /// The value that did not fit.
        value: u64,
    },

    /// A literal equals the reserved absent-literal sentinel byte.
    #[error("Literal {literal:#04x} collides with the absent-literal sentinel")]
    SentinelCollision {
        /// The colliding literal.
        literal: Symbol,
    },

    /// The worker pool could not be created.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

/// Result type alias for OxiLZ operations.
pub type Result<T> = std::result::Result<T, LzError>;

impl LzError {
    /// Create an invalid symbol error.
    pub fn invalid_symbol(position: usize, symbol: Symbol, alphabet_size: u16) -> Self {
        Self::InvalidSymbol {
            position,
            symbol,
            alphabet_size,
        }
    }

    /// Create an output capacity error.
    pub fn output_capacity(needed: usize, capacity: usize) -> Self {
        Self::OutputCapacityExceeded { needed, capacity }
    }

    /// Wrap a block error into a worker failure.
    pub fn worker_failure(block: usize, source: LzError) -> Self {
        Self::WorkerFailure {
            block,
            source: Box::new(source),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid code error.
    pub fn invalid_code(code: u32, next_code: u32) -> Self {
        Self::InvalidCode { code, next_code }
    }

    /// Create an invalid distance error.
    pub fn invalid_distance(distance: usize, history_size: usize) -> Self {
        Self::InvalidDistance {
            distance,
            history_size,
        }
    }

    /// Create a missing literal error.
    pub fn missing_literal(unit: usize) -> Self {
        Self::MissingLiteral { unit }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create a corrupted data error.
    pub fn corrupted(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptedData {
            offset,
            message: message.into(),
        }
    }

    /// Create a field overflow error.
    pub fn field_overflow(field: &'static str, value: u64) -> Self {
        Self::FieldOverflow { field, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = LzError::invalid_symbol(7, 2, 2);
        assert!(err.to_string().contains("position 7"));

        let err = LzError::invalid_code(12, 9);
        assert!(err.to_string().contains("12"));

        let err = LzError::invalid_config("dict_size must be at least 2");
        assert!(err.to_string().contains("dict_size"));
    }

    #[test]
    fn test_worker_failure_source() {
        let err = LzError::worker_failure(3, LzError::invalid_symbol(0, 9, 2));
        assert!(err.to_string().contains("block 3"));

        let source = err.source().expect("worker failure has a source");
        assert!(source.to_string().contains("Invalid symbol 9"));
        assert!(matches!(
            err,
            LzError::WorkerFailure { block: 3, ref source } if matches!(**source, LzError::InvalidSymbol { .. })
        ));
    }
}
