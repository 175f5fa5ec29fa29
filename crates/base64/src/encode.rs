//! Standard base64 encoding.

use crate::constants::PAD;
use crate::table::symbol_of;

/// Length of the encoded text for `length` input bytes: `4 * ceil(length / 3)`.
#[inline]
pub fn encoded_len(length: usize) -> usize {
    length.div_ceil(3) * 4
}

/// Encodes a byte slice to a standard base64 string with padding.
///
/// No line breaks are ever inserted.
///
/// # Example
///
/// ```
/// use mime_base64::encode;
///
/// assert_eq!(encode(b"Man"), "TWFu");
/// assert_eq!(encode(b"Ma"), "TWE=");
/// assert_eq!(encode(b"M"), "TQ==");
/// assert_eq!(encode(b""), "");
/// ```
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));

    let mut triplets = data.chunks_exact(3);
    for triplet in &mut triplets {
        let (b1, b2, b3) = (triplet[0], triplet[1], triplet[2]);
        out.push(symbol_of(b1 >> 2));
        out.push(symbol_of(((b1 & 0x03) << 4) | (b2 >> 4)));
        out.push(symbol_of(((b2 & 0x0f) << 2) | (b3 >> 6)));
        out.push(symbol_of(b3 & 0x3f));
    }

    match *triplets.remainder() {
        [] => {}
        [b1] => {
            out.push(symbol_of(b1 >> 2));
            out.push(symbol_of((b1 & 0x03) << 4));
            out.push(PAD);
            out.push(PAD);
        }
        [b1, b2] => {
            out.push(symbol_of(b1 >> 2));
            out.push(symbol_of(((b1 & 0x03) << 4) | (b2 >> 4)));
            out.push(symbol_of((b2 & 0x0f) << 2));
            out.push(PAD);
        }
        _ => unreachable!("chunks_exact(3) leaves at most two bytes"),
    }

    out
}

/// Encodes optional input, keeping "absent" distinct from "empty".
///
/// `None` yields `None`; `Some(&[])` yields `Some("")`.
pub fn encode_opt(data: Option<&[u8]>) -> Option<String> {
    data.map(encode)
}
