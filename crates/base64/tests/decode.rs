//! Tests for base64 decoding (decode).

use mime_base64::{decode, decode_opt, decoded_len, encode, DecodeError, DecodeErrorKind};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

fn kind(input: &str) -> DecodeErrorKind {
    decode(input).unwrap_err().kind()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob);
        assert_eq!(decode(&encoded).unwrap(), blob);
        assert_eq!(decoded_len(&encoded).unwrap(), blob.len());
    }
}

#[test]
fn handles_invalid_values() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob);
        let invalid = format!("{encoded}!!!!");
        assert_eq!(kind(&invalid), DecodeErrorKind::InvalidCharacter);
    }
}

#[test]
fn tolerates_mime_line_breaks() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob);
        let mut wrapped = String::new();
        for c in encoded.chars() {
            if rng.gen_bool(0.2) {
                wrapped.push([' ', '\r', '\n', '\t'][rng.gen_range(0..4)]);
            }
            wrapped.push(c);
        }
        wrapped.push_str("\r\n");
        assert_eq!(decode(&wrapped).unwrap(), blob);
    }
}

#[test]
fn rfc_vectors() {
    assert_eq!(decode("").unwrap(), b"");
    assert_eq!(decode("TWFu").unwrap(), [0x4d, 0x61, 0x6e]);
    assert_eq!(decode("TWE=").unwrap(), [0x4d, 0x61]);
    assert_eq!(decode("TQ==").unwrap(), [0x4d]);
}

#[test]
fn hello_world() {
    assert_eq!(decode("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
    assert_eq!(
        decode("aGVs\nbG8g\nd29y\nbGQ=\n").unwrap(),
        b"hello world"
    );
}

#[test]
fn absent_passes_through() {
    assert_eq!(decode_opt(None), Ok(None));
}

#[test]
fn invalid_length() {
    assert_eq!(decode("A"), Err(DecodeError::InvalidLength { length: 1 }));
    assert_eq!(decode("AB"), Err(DecodeError::InvalidLength { length: 2 }));
    assert_eq!(decode("ABCDE"), Err(DecodeError::InvalidLength { length: 5 }));
    assert_eq!(kind("TWE"), DecodeErrorKind::InvalidLength);
    assert_eq!(kind("TWFu="), DecodeErrorKind::InvalidLength);
}

#[test]
fn invalid_character() {
    assert_eq!(
        decode("AB#D"),
        Err(DecodeError::InvalidCharacter {
            position: 2,
            character: '#'
        })
    );
    // URL-safe symbols are not part of the standard alphabet.
    assert_eq!(kind("ab-_"), DecodeErrorKind::InvalidCharacter);
    assert_eq!(kind("TWFu\u{0b}TWF"), DecodeErrorKind::InvalidCharacter);
}

#[test]
fn padding_must_be_terminal() {
    assert_eq!(kind("TQ==TWFu"), DecodeErrorKind::InvalidCharacter);
    assert_eq!(kind("TWE=TWFu"), DecodeErrorKind::InvalidCharacter);
    assert_eq!(kind("TW=u"), DecodeErrorKind::InvalidCharacter);
    assert_eq!(kind("T==="), DecodeErrorKind::InvalidCharacter);
    assert_eq!(kind("=AAA"), DecodeErrorKind::InvalidCharacter);
}

#[test]
fn padding_bits_must_be_zero() {
    // Every second character whose low 4 bits are set is rejected before `==`.
    for c in "BCDEFGHIJKLMNOP".chars() {
        assert_eq!(kind(&format!("T{c}==")), DecodeErrorKind::InvalidPadding, "{c}");
    }
    assert_eq!(decode("TQ==").unwrap(), [0x4d]);
    // Third character whose low 2 bits are set is rejected before `=`.
    for c in "BCD".chars() {
        assert_eq!(kind(&format!("TW{c}=")), DecodeErrorKind::InvalidPadding, "{c}");
    }
    assert_eq!(
        decode("TWFuTWF="),
        Err(DecodeError::InvalidPadding { position: 6 })
    );
}

#[test]
fn first_error_wins() {
    // The bad character comes before the bad padding.
    assert_eq!(kind("A#AATR=="), DecodeErrorKind::InvalidCharacter);
    // Length is checked before any character.
    assert_eq!(kind("###"), DecodeErrorKind::InvalidLength);
}
