//! Compress command implementation.

use crate::container::{AlphabetKind, CodecSettings, Header, Method};
use crate::utils::{format_size, space_savings, unpack_bits};
use oxilz_core::{LiteralMode, LzError};
use oxilz_parallel::BlockParallelRunner;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Options for compressing a file.
#[derive(Debug, Clone, Copy)]
pub struct CompressOptions {
    pub method: Method,
    pub search_buf_len: usize,
    pub look_ahead_buf_len: usize,
    pub dict_size: usize,
    pub threads: usize,
    pub alphabet: AlphabetKind,
    pub flagged: bool,
    pub verbose: bool,
}

impl CompressOptions {
    fn settings(&self) -> Result<CodecSettings, LzError> {
        let param = |name: &'static str, value: usize| {
            u32::try_from(value).map_err(|_| LzError::field_overflow(name, value as u64))
        };
        Ok(match self.method {
            Method::Lz77 => CodecSettings::Lz77 {
                search_buf_len: param("search_buf_len", self.search_buf_len)?,
                look_ahead_buf_len: param("look_ahead_buf_len", self.look_ahead_buf_len)?,
            },
            Method::Lz78 => CodecSettings::Lz78 {
                dict_size: param("dict_size", self.dict_size)?,
            },
            Method::Lzw => CodecSettings::Lzw {
                dict_size: param("dict_size", self.dict_size)?,
            },
        })
    }

    fn literal_mode(&self) -> LiteralMode {
        // A byte alphabet can carry 0xFF as a real literal
        if self.flagged || self.alphabet == AlphabetKind::Bytes {
            LiteralMode::Flagged
        } else {
            LiteralMode::Sentinel
        }
    }
}

/// Compress `data` into a complete OXLZ container.
pub fn compress_bytes(data: &[u8], options: &CompressOptions) -> Result<Vec<u8>, LzError> {
    let header = Header {
        settings: options.settings()?,
        alphabet: options.alphabet,
        literal_mode: options.literal_mode(),
        original_len: data.len() as u64,
    };

    let symbols = match options.alphabet {
        AlphabetKind::Bits => unpack_bits(data),
        AlphabetKind::Bytes => data.to_vec(),
    };
    debug!(
        method = options.method.name(),
        symbols = symbols.len(),
        threads = options.threads,
        "compressing"
    );

    let runner = BlockParallelRunner::new(options.threads)?;
    let payload = header.encode_payload(&runner, &symbols)?;

    let mut output = Vec::with_capacity(crate::container::HEADER_LEN + payload.len());
    header.write(&mut output);
    output.extend_from_slice(&payload);
    Ok(output)
}

pub fn cmd_compress(
    input: &PathBuf,
    output: &PathBuf,
    options: &CompressOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let compressed = compress_bytes(&data, options)?;
    fs::write(output, &compressed)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        original = data.len(),
        compressed = compressed.len(),
        "compressed file"
    );

    if options.verbose {
        println!(
            "{} -> {} ({}, {} -> {})",
            input.display(),
            output.display(),
            options.method.name(),
            format_size(data.len() as u64),
            format_size(compressed.len() as u64)
        );
        if let Some(savings) = space_savings(data.len() as u64, compressed.len() as u64) {
            println!("Space savings: {:.1}%", savings);
        }
    }

    Ok(())
}
