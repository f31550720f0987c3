//! OXLZ container format.
//!
//! ```text
//! Offset  Size  Field
//! 0       4     Magic "OXLZ"
//! 4       1     Version (1)
//! 5       1     Method (0 = LZ77, 1 = LZ78, 2 = LZW)
//! 6       1     Alphabet (0 = bits, 1 = bytes)
//! 7       1     Literal mode (0 = sentinel, 1 = flagged)
//! 8       4     Parameter A (LZ77 search window, otherwise dictionary size)
//! 12      4     Parameter B (LZ77 look-ahead window, otherwise 0)
//! 16      8     Original length in bytes
//! 24      ...   Block envelope
//! ```
//!
//! All integers are little-endian.

use clap::ValueEnum;
use oxilz_core::{Alphabet, Codec, LiteralMode, LzError, Symbol};
use oxilz_lz77::{Lz77Codec, Lz77Config};
use oxilz_lz78::{Lz78Codec, Lz78Config};
use oxilz_lzw::{LzwCodec, LzwConfig};
use oxilz_parallel::{BlockParallelRunner, ParallelResult};
use serde::Serialize;

/// Container magic.
pub const MAGIC: &[u8; 4] = b"OXLZ";

/// Container format version.
pub const VERSION: u8 = 1;

/// Header size in bytes.
pub const HEADER_LEN: usize = 24;

/// Compression method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Sliding-window LZ77
    Lz77,
    /// Dictionary LZ78
    Lz78,
    /// Seeded-dictionary LZW
    Lzw,
}

impl Method {
    fn to_byte(self) -> u8 {
        match self {
            Method::Lz77 => 0,
            Method::Lz78 => 1,
            Method::Lzw => 2,
        }
    }

    fn from_byte(byte: u8) -> Result<Self, LzError> {
        match byte {
            0 => Ok(Method::Lz77),
            1 => Ok(Method::Lz78),
            2 => Ok(Method::Lzw),
            _ => Err(LzError::corrupted(5, format!("unknown method {byte}"))),
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Method::Lz77 => "LZ77",
            Method::Lz78 => "LZ78",
            Method::Lzw => "LZW",
        }
    }
}

/// How file bytes are turned into symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlphabetKind {
    /// Eight binary symbols per byte, least significant bit first
    #[default]
    Bits,
    /// One symbol per byte
    Bytes,
}

impl AlphabetKind {
    /// Symbol alphabet for this kind.
    pub fn alphabet(self) -> Alphabet {
        match self {
            AlphabetKind::Bits => Alphabet::BINARY,
            AlphabetKind::Bytes => Alphabet::BYTE,
        }
    }

    fn to_byte(self) -> u8 {
        match self {
            AlphabetKind::Bits => 0,
            AlphabetKind::Bytes => 1,
        }
    }

    fn from_byte(byte: u8) -> Result<Self, LzError> {
        match byte {
            0 => Ok(AlphabetKind::Bits),
            1 => Ok(AlphabetKind::Bytes),
            _ => Err(LzError::corrupted(6, format!("unknown alphabet {byte}"))),
        }
    }
}

/// Codec parameters stored in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecSettings {
    /// LZ77 windows.
    Lz77 {
        /// Search buffer length.
        search_buf_len: u32,
        /// Look-ahead buffer length.
        look_ahead_buf_len: u32,
    },
    /// LZ78 dictionary size.
    Lz78 {
        /// Maximum dictionary nodes.
        dict_size: u32,
    },
    /// LZW dictionary size.
    Lzw {
        /// Maximum dictionary nodes.
        dict_size: u32,
    },
}

impl CodecSettings {
    /// Method these settings belong to.
    pub fn method(&self) -> Method {
        match self {
            CodecSettings::Lz77 { .. } => Method::Lz77,
            CodecSettings::Lz78 { .. } => Method::Lz78,
            CodecSettings::Lzw { .. } => Method::Lzw,
        }
    }

    fn params(&self) -> (u32, u32) {
        match *self {
            CodecSettings::Lz77 {
                search_buf_len,
                look_ahead_buf_len,
            } => (search_buf_len, look_ahead_buf_len),
            CodecSettings::Lz78 { dict_size } | CodecSettings::Lzw { dict_size } => (dict_size, 0),
        }
    }

    fn from_params(method: Method, a: u32, b: u32) -> Self {
        match method {
            Method::Lz77 => CodecSettings::Lz77 {
                search_buf_len: a,
                look_ahead_buf_len: b,
            },
            Method::Lz78 => CodecSettings::Lz78 { dict_size: a },
            Method::Lzw => CodecSettings::Lzw { dict_size: a },
        }
    }
}

/// Parsed container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Codec and its parameters.
    pub settings: CodecSettings,
    /// Symbol alphabet.
    pub alphabet: AlphabetKind,
    /// Literal layout of the unit records.
    pub literal_mode: LiteralMode,
    /// Length of the uncompressed file in bytes.
    pub original_len: u64,
}

impl Header {
    /// Append the header bytes to `out`.
    pub fn write(&self, out: &mut Vec<u8>) {
        let (a, b) = self.settings.params();
        out.extend_from_slice(MAGIC);
        out.push(VERSION);
        out.push(self.settings.method().to_byte());
        out.push(self.alphabet.to_byte());
        out.push(self.literal_mode.to_byte());
        out.extend_from_slice(&a.to_le_bytes());
        out.extend_from_slice(&b.to_le_bytes());
        out.extend_from_slice(&self.original_len.to_le_bytes());
    }

    /// Parse a header, returning it and the envelope that follows.
    pub fn read(data: &[u8]) -> Result<(Self, &[u8]), LzError> {
        if data.len() < HEADER_LEN {
            return Err(LzError::unexpected_eof(HEADER_LEN - data.len()));
        }
        if &data[0..4] != MAGIC {
            return Err(LzError::corrupted(0, "not an OXLZ file"));
        }
        if data[4] != VERSION {
            return Err(LzError::corrupted(
                4,
                format!("unsupported version {}", data[4]),
            ));
        }

        let method = Method::from_byte(data[5])?;
        let alphabet = AlphabetKind::from_byte(data[6])?;
        let literal_mode = LiteralMode::from_byte(data[7])?;
        let a = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);
        let b = u32::from_le_bytes([data[12], data[13], data[14], data[15]]);
        let mut len_bytes = [0u8; 8];
        len_bytes.copy_from_slice(&data[16..24]);

        let header = Self {
            settings: CodecSettings::from_params(method, a, b),
            alphabet,
            literal_mode,
            original_len: u64::from_le_bytes(len_bytes),
        };
        Ok((header, &data[HEADER_LEN..]))
    }

    /// Compress `symbols` with the configured codec and serialize the blocks.
    pub fn encode_payload(
        &self,
        runner: &BlockParallelRunner,
        symbols: &[Symbol],
    ) -> Result<Vec<u8>, LzError> {
        let alphabet = self.alphabet.alphabet();
        match self.settings {
            CodecSettings::Lz77 {
                search_buf_len,
                look_ahead_buf_len,
            } => {
                let config =
                    Lz77Config::new(alphabet, search_buf_len as usize, look_ahead_buf_len as usize);
                self.compress_with(&Lz77Codec::new(config)?, runner, symbols)
            }
            CodecSettings::Lz78 { dict_size } => {
                let config = Lz78Config::new(alphabet, dict_size as usize);
                self.compress_with(&Lz78Codec::new(config)?, runner, symbols)
            }
            CodecSettings::Lzw { dict_size } => {
                let config = LzwConfig::new(alphabet, dict_size as usize);
                self.compress_with(&LzwCodec::new(config)?, runner, symbols)
            }
        }
    }

    /// Parse the envelope and decode every block.
    pub fn decode_payload(
        &self,
        runner: &BlockParallelRunner,
        payload: &[u8],
    ) -> Result<Vec<Symbol>, LzError> {
        let alphabet = self.alphabet.alphabet();
        match self.settings {
            CodecSettings::Lz77 {
                search_buf_len,
                look_ahead_buf_len,
            } => {
                let config =
                    Lz77Config::new(alphabet, search_buf_len as usize, look_ahead_buf_len as usize);
                self.decompress_with(&Lz77Codec::new(config)?, runner, payload)
            }
            CodecSettings::Lz78 { dict_size } => {
                let config = Lz78Config::new(alphabet, dict_size as usize);
                self.decompress_with(&Lz78Codec::new(config)?, runner, payload)
            }
            CodecSettings::Lzw { dict_size } => {
                let config = LzwConfig::new(alphabet, dict_size as usize);
                self.decompress_with(&LzwCodec::new(config)?, runner, payload)
            }
        }
    }

    /// Units produced by each block, without decoding.
    pub fn block_lengths(&self, payload: &[u8]) -> Result<Vec<usize>, LzError> {
        let mode = self.literal_mode;
        match self.settings.method() {
            Method::Lz77 => Ok(ParallelResult::<oxilz_lz77::Lz77Unit>::from_bytes(payload, mode)?
                .block_lengths()),
            Method::Lz78 => Ok(ParallelResult::<oxilz_lz78::Lz78Unit>::from_bytes(payload, mode)?
                .block_lengths()),
            Method::Lzw => Ok(ParallelResult::<oxilz_lzw::LzwUnit>::from_bytes(payload, mode)?
                .block_lengths()),
        }
    }

    fn compress_with<C: Codec>(
        &self,
        codec: &C,
        runner: &BlockParallelRunner,
        symbols: &[Symbol],
    ) -> Result<Vec<u8>, LzError> {
        runner
            .compress(codec, symbols)?
            .to_bytes(self.literal_mode)
    }

    fn decompress_with<C: Codec>(
        &self,
        codec: &C,
        runner: &BlockParallelRunner,
        payload: &[u8],
    ) -> Result<Vec<Symbol>, LzError> {
        let result = ParallelResult::<C::Unit>::from_bytes(payload, self.literal_mode)?;
        runner.decompress(codec, &result)
    }
}
