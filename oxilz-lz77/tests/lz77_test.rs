//! LZ77 integration tests.

use oxilz_core::{Alphabet, LiteralMode, deserialize_units, serialize_units};
use oxilz_lz77::{Lz77Config, Lz77Unit, decode, encode};
use proptest::prelude::*;

fn binary(search: usize, look: usize) -> Lz77Config {
    Lz77Config::new(Alphabet::BINARY, search, look)
}

#[test]
fn test_lz77_empty_input() {
    let config = binary(4, 4);
    let units = encode(&[], &config).expect("encode failed");
    assert!(units.is_empty());
    assert!(decode(&units, &config).expect("decode failed").is_empty());
}

#[test]
fn test_lz77_all_zeros_beats_literals() {
    let config = binary(4, 4);
    let original = [0u8; 8];
    let units = encode(&original, &config).expect("encode failed");

    assert!(
        units.len() < original.len(),
        "8 zeros should need fewer than 8 units, got {}",
        units.len()
    );
    assert_eq!(decode(&units, &config).expect("decode failed"), original);
}

#[test]
fn test_lz77_input_shorter_than_windows() {
    let config = binary(16, 16);
    let original = [1u8, 0];
    let units = encode(&original, &config).expect("encode failed");

    assert_eq!(units, vec![Lz77Unit::literal(1), Lz77Unit::literal(0)]);
    assert_eq!(decode(&units, &config).expect("decode failed"), original);
}

#[test]
fn test_lz77_minimal_windows() {
    let config = binary(1, 1);
    let original = [0u8, 0, 0, 1, 1, 0, 1, 0, 0, 0];
    let units = encode(&original, &config).expect("encode failed");
    assert_eq!(decode(&units, &config).expect("decode failed"), original);
}

#[test]
fn test_lz77_serialized_roundtrip() {
    let config = Lz77Config::new(Alphabet::BYTE, 255, 32);
    let original = b"abracadabra abracadabra abracadabra".to_vec();
    let units = encode(&original, &config).expect("encode failed");

    let bytes = serialize_units(&units, LiteralMode::Flagged).expect("serialize failed");
    assert_eq!(bytes.len(), units.len() * 6);

    let parsed: Vec<Lz77Unit> =
        deserialize_units(&bytes, LiteralMode::Flagged).expect("deserialize failed");
    assert_eq!(parsed, units);
    assert_eq!(decode(&parsed, &config).expect("decode failed"), original);
}

#[test]
fn test_lz77_sentinel_rejects_0xff_literal() {
    let config = Lz77Config::new(Alphabet::BYTE, 8, 8);
    let units = encode(&[0xFF], &config).expect("encode failed");
    assert!(serialize_units(&units, LiteralMode::Sentinel).is_err());
    assert!(serialize_units(&units, LiteralMode::Flagged).is_ok());
}

#[test]
fn test_lz77_deterministic() {
    let config = binary(32, 8);
    let original: Vec<u8> = (0..500u32).map(|i| ((i * 7 + i / 3) % 2) as u8).collect();
    let first = serialize_units(&encode(&original, &config).unwrap(), LiteralMode::Sentinel);
    let second = serialize_units(&encode(&original, &config).unwrap(), LiteralMode::Sentinel);
    assert_eq!(first.unwrap(), second.unwrap());
}

proptest! {
    #[test]
    fn prop_lz77_roundtrip_binary(
        input in proptest::collection::vec(0u8..2, 0..400),
        search in 1usize..40,
        look in 1usize..20,
    ) {
        let config = binary(search, look);
        let units = encode(&input, &config).unwrap();
        prop_assert_eq!(decode(&units, &config).unwrap(), input);
    }

    #[test]
    fn prop_lz77_roundtrip_small_alphabet(
        input in proptest::collection::vec(0u8..5, 0..300),
        search in 1usize..64,
        look in 1usize..16,
    ) {
        let config = Lz77Config::new(Alphabet::new(5).unwrap(), search, look);
        let units = encode(&input, &config).unwrap();
        prop_assert_eq!(decode(&units, &config).unwrap(), input);
    }

    #[test]
    fn prop_lz77_field_bounds(
        input in proptest::collection::vec(0u8..2, 0..300),
        search in 1usize..32,
        look in 1usize..16,
    ) {
        let config = binary(search, look);
        for unit in encode(&input, &config).unwrap() {
            prop_assert!(usize::from(unit.offset) <= search);
            prop_assert!(usize::from(unit.length) <= look);
        }
    }
}
