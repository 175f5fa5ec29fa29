//! Forward and reverse lookup tables.
//!
//! Both tables are evaluated at compile time and live in read-only statics, so
//! any number of threads can read them without synchronization.

use crate::constants::{ALPHABET_BYTES, BASELENGTH, INVALID};

/// Maps a 6-bit value to its alphabet byte.
pub static ENCODE_TABLE: [u8; 64] = *ALPHABET_BYTES;

/// Maps an ASCII code to its 6-bit value, or [`INVALID`].
pub static DECODE_TABLE: [i8; BASELENGTH] = build_decode_table();

const fn build_decode_table() -> [i8; BASELENGTH] {
    let mut table = [INVALID; BASELENGTH];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as i8;
        i += 1;
    }
    table
}

/// Returns the 6-bit value of `c`, or `None` if `c` is not an alphabet character.
#[inline]
pub fn value_of(c: char) -> Option<u8> {
    let code = c as u32 as usize;
    if code >= BASELENGTH {
        return None;
    }
    match DECODE_TABLE[code] {
        INVALID => None,
        v => Some(v as u8),
    }
}

/// Returns the alphabet character for the low 6 bits of `v`.
#[inline]
pub fn symbol_of(v: u8) -> char {
    ENCODE_TABLE[(v & 0x3f) as usize] as char
}
