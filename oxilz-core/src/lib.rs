//! # OxiLZ Core
//!
//! Core components shared by the OxiLZ codecs.
//!
//! - [`alphabet`]: finite symbol alphabets and up-front input validation
//! - [`trie`]: arena-backed dictionary trie used by LZ78 and LZW
//! - [`traits`]: the [`Codec`] trait implemented by every codec
//! - [`wire`]: fixed-width binary serialization of output units
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Tools                                               │
//! │     oxilz CLI (bit unpacking, file container)          │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Execution                                           │
//! │     BlockParallelRunner, ParallelResult envelope       │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Codec                                               │
//! │     LZ77 (match finder), LZ78, LZW                     │
//! ├─────────────────────────────────────────────────────────┤
//! │ L0: Core (this crate)                                   │
//! │     Alphabet, DictionaryTrie, Codec, wire records      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxilz_core::{Alphabet, DictionaryTrie, NodeId};
//!
//! let mut trie = DictionaryTrie::seeded(8, Alphabet::BINARY).unwrap();
//! let one = trie.lookup(NodeId::ROOT, 1).unwrap();
//! let one_zero = trie.insert(one, 0).unwrap();
//! assert_eq!(trie.path_to_root(one_zero).unwrap(), vec![1, 0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]

pub mod alphabet;
pub mod error;
pub mod traits;
pub mod trie;
pub mod wire;

/// One element of a finite alphabet.
pub type Symbol = u8;

// Re-exports for convenience
pub use alphabet::Alphabet;
pub use error::{LzError, Result};
pub use traits::Codec;
pub use trie::{DictionaryTrie, NodeId};
pub use wire::{
    ABSENT_LITERAL, LiteralMode, UnitReader, UnitWriter, WireUnit, deserialize_units,
    serialize_units,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Symbol;
    pub use crate::alphabet::Alphabet;
    pub use crate::error::{LzError, Result};
    pub use crate::traits::Codec;
    pub use crate::wire::{LiteralMode, WireUnit};
}
