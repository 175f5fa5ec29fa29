//! Strict standard base64 decoding with MIME whitespace tolerance.
//!
//! Whitespace is removed first. Every quadruple but the last must hold four
//! alphabet characters. The last one may end in `=` or `==`, in which case the
//! unused low bits of the preceding character must be zero. The first violation
//! rejects the whole input; no partial output is ever returned.

use crate::classify::{is_pad, is_whitespace};
use crate::error::DecodeError;
use crate::table::value_of;

/// A non-whitespace character and its byte offset in the caller's text.
type Symbol = (usize, char);

/// How the final quadruple ends.
enum Tail {
    /// `xxxx`: three bytes.
    Full(u8, u8),
    /// `xxx=`: two bytes.
    OnePad(u8),
    /// `xx==`: one byte.
    TwoPad,
}

/// Decodes standard base64 text.
///
/// Space, CR, LF and tab are ignored wherever they appear.
///
/// # Errors
///
/// - [`DecodeError::InvalidLength`] if the text without whitespace is not a multiple of 4 long.
/// - [`DecodeError::InvalidCharacter`] for a non-alphabet character, or padding out of place.
/// - [`DecodeError::InvalidPadding`] if padding hides non-zero bits.
///
/// # Example
///
/// ```
/// use mime_base64::{decode, DecodeError};
///
/// assert_eq!(decode("TWFu").unwrap(), b"Man");
/// assert_eq!(decode("TW\r\nE=").unwrap(), b"Ma");
/// assert_eq!(decode("TQ==").unwrap(), b"M");
/// assert!(matches!(decode("ABCDE"), Err(DecodeError::InvalidLength { length: 5 })));
/// ```
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let symbols: Vec<Symbol> = encoded
        .char_indices()
        .filter(|&(_, c)| !is_whitespace(c))
        .collect();

    let length = symbols.len();
    if length % 4 != 0 {
        return Err(DecodeError::InvalidLength { length });
    }
    let Some((body, last)) = symbols.split_last_chunk::<4>() else {
        return Ok(Vec::new());
    };

    let mut buf = Vec::with_capacity(length / 4 * 3);

    for quad in body.chunks_exact(4) {
        let sextet0 = data(quad[0])?;
        let sextet1 = data(quad[1])?;
        let sextet2 = data(quad[2])?;
        let sextet3 = data(quad[3])?;
        push_triplet(&mut buf, sextet0, sextet1, sextet2, sextet3);
    }

    let [s0, s1, s2, s3] = *last;
    let sextet0 = data(s0)?;
    let sextet1 = data(s1)?;

    match tail(s2, s3)? {
        Tail::Full(sextet2, sextet3) => {
            push_triplet(&mut buf, sextet0, sextet1, sextet2, sextet3);
        }
        Tail::OnePad(sextet2) => {
            if sextet2 & 0x03 != 0 {
                return Err(DecodeError::InvalidPadding { position: s2.0 });
            }
            buf.push((sextet0 << 2) | (sextet1 >> 4));
            buf.push(((sextet1 & 0x0f) << 4) | (sextet2 >> 2));
        }
        Tail::TwoPad => {
            if sextet1 & 0x0f != 0 {
                return Err(DecodeError::InvalidPadding { position: s1.0 });
            }
            buf.push((sextet0 << 2) | (sextet1 >> 4));
        }
    }

    Ok(buf)
}

/// Decodes optional input; `None` passes through as `Ok(None)`.
pub fn decode_opt(encoded: Option<&str>) -> Result<Option<Vec<u8>>, DecodeError> {
    encoded.map(decode).transpose()
}

/// Number of bytes [`decode`] yields for `encoded` when it succeeds.
///
/// Only the length is validated; characters and padding bits are not checked.
pub fn decoded_len(encoded: &str) -> Result<usize, DecodeError> {
    let mut length = 0usize;
    let mut trailing_pads = 0usize;
    for c in encoded.chars().filter(|&c| !is_whitespace(c)) {
        length += 1;
        trailing_pads = if is_pad(c) { trailing_pads + 1 } else { 0 };
    }
    if length % 4 != 0 {
        return Err(DecodeError::InvalidLength { length });
    }
    Ok(length / 4 * 3 - trailing_pads.min(2))
}

#[inline]
fn data((position, character): Symbol) -> Result<u8, DecodeError> {
    value_of(character).ok_or(DecodeError::InvalidCharacter {
        position,
        character,
    })
}

fn tail(s2: Symbol, s3: Symbol) -> Result<Tail, DecodeError> {
    let invalid = |(position, character): Symbol| DecodeError::InvalidCharacter {
        position,
        character,
    };
    match (value_of(s2.1), value_of(s3.1)) {
        (Some(sextet2), Some(sextet3)) => Ok(Tail::Full(sextet2, sextet3)),
        (Some(sextet2), None) if is_pad(s3.1) => Ok(Tail::OnePad(sextet2)),
        (Some(_), None) => Err(invalid(s3)),
        (None, None) if is_pad(s2.1) && is_pad(s3.1) => Ok(Tail::TwoPad),
        // `=` followed by data means padding is not at the end.
        (None, Some(_)) if is_pad(s2.1) => Err(invalid(s2)),
        (None, _) if is_pad(s2.1) => Err(invalid(s3)),
        (None, _) => Err(invalid(s2)),
    }
}

#[inline]
fn push_triplet(buf: &mut Vec<u8>, sextet0: u8, sextet1: u8, sextet2: u8, sextet3: u8) {
    buf.push((sextet0 << 2) | (sextet1 >> 4));
    buf.push((sextet1 << 4) | (sextet2 >> 2));
    buf.push((sextet2 << 6) | sextet3);
}
