//! OxiLZ CLI - dictionary compression for bit and byte streams
//!
//! Compresses files with LZ77, LZ78 or LZW, split into blocks that are
//! encoded in parallel.

mod commands;
mod container;
mod utils;

use clap::{Parser, Subcommand};
use commands::{CompressOptions, cmd_compress, cmd_decompress, cmd_info};
use container::{AlphabetKind, Method};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxilz")]
#[command(
    author,
    version,
    about = "OxiLZ - Pure Rust LZ77/LZ78/LZW block-parallel compressor"
)]
#[command(long_about = "
OxiLZ compresses files with classic Lempel-Ziv codecs. Input is read as a
stream of bits (default) or bytes, split into blocks and encoded in parallel.

Examples:
  oxilz compress -m lz77 -i data.bin -o data.oxlz --sb 1024 --lb 64 -n 4
  oxilz compress -m lzw -i notes.txt -o notes.oxlz --alphabet bytes --ds 65536
  oxilz decompress -i data.oxlz -o data.bin -n 4
  oxilz info data.oxlz --json
")]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// Compression method
        #[arg(short, long, value_enum)]
        method: Method,

        /// Input file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// LZ77 search buffer length
        #[arg(long = "sb", default_value_t = 1024)]
        search_buf_len: usize,

        /// LZ77 look-ahead buffer length
        #[arg(long = "lb", default_value_t = 64)]
        look_ahead_buf_len: usize,

        /// LZ78/LZW dictionary size
        #[arg(long = "ds", default_value_t = 4096)]
        dict_size: usize,

        /// Number of blocks and worker threads
        #[arg(short = 'n', long, default_value_t = 1)]
        threads: usize,

        /// How file bytes are split into symbols
        #[arg(long, value_enum, default_value = "bits")]
        alphabet: AlphabetKind,

        /// Store literals with a presence flag byte instead of a sentinel
        #[arg(long)]
        flagged: bool,
    },

    /// Decompress an OXLZ file
    #[command(alias = "d")]
    Decompress {
        /// Input file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Number of worker threads
        #[arg(short = 'n', long, default_value_t = 1)]
        threads: usize,
    },

    /// Show information about an OXLZ file
    #[command(alias = "i")]
    Info {
        /// File to inspect
        file: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Compress {
            method,
            input,
            output,
            search_buf_len,
            look_ahead_buf_len,
            dict_size,
            threads,
            alphabet,
            flagged,
        } => {
            let options = CompressOptions {
                method,
                search_buf_len,
                look_ahead_buf_len,
                dict_size,
                threads,
                alphabet,
                flagged,
                verbose: cli.verbose,
            };
            cmd_compress(&input, &output, &options)
        }
        Commands::Decompress {
            input,
            output,
            threads,
        } => cmd_decompress(&input, &output, threads, cli.verbose),
        Commands::Info { file, json } => cmd_info(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
