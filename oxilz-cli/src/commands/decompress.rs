//! Decompress command implementation.

use crate::container::{AlphabetKind, Header};
use crate::utils::{format_size, pack_bits};
use oxilz_core::LzError;
use oxilz_parallel::BlockParallelRunner;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Decode a complete OXLZ container back into the original bytes.
pub fn decompress_bytes(data: &[u8], threads: usize) -> Result<Vec<u8>, LzError> {
    let (header, payload) = Header::read(data)?;
    debug!(
        method = header.settings.method().name(),
        original = header.original_len,
        "decompressing"
    );

    let runner = BlockParallelRunner::new(threads)?;
    let symbols = header.decode_payload(&runner, payload)?;

    let bytes = match header.alphabet {
        AlphabetKind::Bits => pack_bits(&symbols)?,
        AlphabetKind::Bytes => symbols,
    };
    if bytes.len() as u64 != header.original_len {
        return Err(LzError::corrupted(
            crate::container::HEADER_LEN as u64,
            format!(
                "decoded {} bytes, header says {}",
                bytes.len(),
                header.original_len
            ),
        ));
    }
    Ok(bytes)
}

pub fn cmd_decompress(
    input: &PathBuf,
    output: &PathBuf,
    threads: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let decompressed = decompress_bytes(&data, threads)?;
    fs::write(output, &decompressed)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        size = decompressed.len(),
        "decompressed file"
    );

    if verbose {
        println!(
            "{} -> {} ({})",
            input.display(),
            output.display(),
            format_size(decompressed.len() as u64)
        );
    }

    Ok(())
}
