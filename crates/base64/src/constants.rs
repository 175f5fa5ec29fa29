/// Standard base64 alphabet (RFC 2045, table 1).
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for const table construction).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: char = '=';

/// Whitespace that MIME allows anywhere inside encoded text.
pub const WHITESPACE: [char; 4] = [' ', '\r', '\n', '\t'];

/// Size of the reverse lookup table. Every code point at or above this is not data.
pub const BASELENGTH: usize = 128;

/// Reverse table entry for "not a data character".
pub const INVALID: i8 = -1;
