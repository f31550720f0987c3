//! Performance benchmarks for oxilz-lz77
//!
//! Measures encode/decode throughput on binary symbol streams for a few
//! window configurations.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxilz_core::Alphabet;
use oxilz_lz77::{Lz77Config, decode, encode};
use std::hint::black_box;

/// Reproducible pseudo-random bits with some repetition mixed in.
fn bit_stream(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed: u64 = 0x123456789ABCDEF0;
    while data.len() < size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        if seed >> 62 == 0 && data.len() >= 16 {
            // Repeat a recent run
            let start = data.len() - 16;
            for i in 0..16 {
                if data.len() < size {
                    data.push(data[start + i]);
                }
            }
        } else {
            data.push(((seed >> 33) & 1) as u8);
        }
    }
    data
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77_encode");
    let input = bit_stream(64 * 1024);
    group.throughput(Throughput::Elements(input.len() as u64));

    for (search, look) in [(64, 16), (256, 32), (1024, 64)] {
        let config = Lz77Config::new(Alphabet::BINARY, search, look);
        group.bench_with_input(
            BenchmarkId::new("window", format!("{search}x{look}")),
            &config,
            |b, config| b.iter(|| encode(black_box(&input), config).unwrap()),
        );
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77_decode");
    let input = bit_stream(64 * 1024);
    group.throughput(Throughput::Elements(input.len() as u64));

    let config = Lz77Config::new(Alphabet::BINARY, 256, 32);
    let units = encode(&input, &config).unwrap();
    group.bench_function("256x32", |b| {
        b.iter(|| decode(black_box(&units), &config).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
