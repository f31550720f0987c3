//! Info command implementation.

use crate::container::{AlphabetKind, CodecSettings, HEADER_LEN, Header, Method};
use crate::utils::{format_size, space_savings};
use oxilz_core::{LiteralMode, LzError};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// JSON output for container inspection.
#[derive(Debug, Serialize)]
struct InfoJson {
    file: String,
    size: u64,
    method: Method,
    alphabet: AlphabetKind,
    literal_mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    search_buf_len: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    look_ahead_buf_len: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dict_size: Option<u32>,
    original_size: u64,
    blocks: usize,
    block_units: Vec<usize>,
    total_units: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    space_savings: Option<f64>,
}

impl InfoJson {
    fn from_container(file: &PathBuf, data: &[u8]) -> Result<Self, LzError> {
        let (header, payload) = Header::read(data)?;
        let block_units = header.block_lengths(payload)?;

        let (search_buf_len, look_ahead_buf_len, dict_size) = match header.settings {
            CodecSettings::Lz77 {
                search_buf_len,
                look_ahead_buf_len,
            } => (Some(search_buf_len), Some(look_ahead_buf_len), None),
            CodecSettings::Lz78 { dict_size } | CodecSettings::Lzw { dict_size } => {
                (None, None, Some(dict_size))
            }
        };

        Ok(Self {
            file: file.display().to_string(),
            size: data.len() as u64,
            method: header.settings.method(),
            alphabet: header.alphabet,
            literal_mode: match header.literal_mode {
                LiteralMode::Sentinel => "sentinel",
                LiteralMode::Flagged => "flagged",
            },
            search_buf_len,
            look_ahead_buf_len,
            dict_size,
            original_size: header.original_len,
            blocks: block_units.len(),
            total_units: block_units.iter().sum(),
            block_units,
            space_savings: space_savings(header.original_len, data.len() as u64),
        })
    }
}

pub fn cmd_info(file: &PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(file)?;
    let info = InfoJson::from_container(file, &data)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Container Information");
    println!("=====================");
    println!("File: {}", info.file);
    println!("Size: {}", format_size(info.size));
    println!("Method: {}", info.method.name());
    println!("Alphabet: {:?}", info.alphabet);
    println!("Literal mode: {}", info.literal_mode);
    if let (Some(sb), Some(lb)) = (info.search_buf_len, info.look_ahead_buf_len) {
        println!("Search buffer: {}", sb);
        println!("Look-ahead buffer: {}", lb);
    }
    if let Some(ds) = info.dict_size {
        println!("Dictionary size: {}", ds);
    }

    println!();
    println!("Contents:");
    println!("  Original size: {}", format_size(info.original_size));
    println!("  Header: {} bytes", HEADER_LEN);
    println!("  Blocks: {}", info.blocks);
    for (i, units) in info.block_units.iter().enumerate() {
        println!("    #{}: {} units", i, units);
    }
    println!("  Total units: {}", info.total_units);
    if let Some(savings) = info.space_savings {
        println!("  Space savings: {:.1}%", savings);
    }

    Ok(())
}
