#![no_main]

use arbitrary::Arbitrary;
use hasher::{HashError, utf8};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    units: Vec<u16>,
    code_points: Vec<u32>,
}

fn is_digest_hex(s: &str) -> bool {
    s.len() == 32 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

fn check(input: Input) {
    // Text: the explicit encoder must agree with Rust's UTF-8, through both
    // the `&str` and the UTF-16 entry points.
    assert_eq!(utf8::encode_str(&input.text).as_slice(), input.text.as_bytes());
    let text_units: Vec<u16> = input.text.encode_utf16().collect();
    assert_eq!(utf8::encode_utf16(&text_units).as_slice(), input.text.as_bytes());

    let hex = hasher::hash_hex(&input.text).unwrap();
    assert!(is_digest_hex(&hex), "{hex}");
    assert_eq!(hasher::hash_hex_utf16(&text_units).unwrap(), hex);

    // Raw UTF-16, lone surrogates included, always hashes.
    assert!(is_digest_hex(&hasher::hash_hex_utf16(&input.units).unwrap()));

    // Code points fail exactly when one is out of range.
    let first_bad = input.code_points.iter().copied().find(|&cp| cp >= 0x11_0000);
    match (hasher::hash_hex_code_points(input.code_points.iter().copied()), first_bad) {
        (Ok(hex), None) => assert!(is_digest_hex(&hex)),
        (Err(HashError::CodePointOutOfRange(cp)), Some(bad)) => assert_eq!(cp, bad),
        (other, bad) => panic!("unexpected {other:?} for first out-of-range {bad:?}"),
    }
}

fuzz_target!(|input: Input| check(input));
