//! Utility functions for the CLI.

use oxilz_core::{LzError, Symbol};

/// Unpack bytes into binary symbols, least significant bit first.
pub fn unpack_bits(bytes: &[u8]) -> Vec<Symbol> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for j in 0..8 {
            bits.push((byte >> j) & 1);
        }
    }
    bits
}

/// Pack binary symbols back into bytes, least significant bit first.
///
/// The symbol count must be a whole number of bytes.
pub fn pack_bits(bits: &[Symbol]) -> Result<Vec<u8>, LzError> {
    if bits.len() % 8 != 0 {
        return Err(LzError::corrupted(
            bits.len() as u64,
            format!("{} bits do not form whole bytes", bits.len()),
        ));
    }

    bits.chunks_exact(8)
        .enumerate()
        .map(|(i, chunk)| {
            chunk.iter().enumerate().try_fold(0u8, |byte, (j, &bit)| {
                if bit > 1 {
                    return Err(LzError::invalid_symbol(i * 8 + j, bit, 2));
                }
                Ok(byte | (bit << j))
            })
        })
        .collect()
}

/// Format a byte count for humans.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Space savings in percent, `None` for empty input.
pub fn space_savings(original: u64, compressed: u64) -> Option<f64> {
    (original > 0).then(|| (1.0 - compressed as f64 / original as f64) * 100.0)
}
