//! Character classification predicates.

use crate::constants::PAD;
use crate::table::value_of;

/// Returns `true` for space, carriage return, line feed and horizontal tab.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\r' | '\n' | '\t')
}

/// Returns `true` for the padding character `=`.
#[inline]
pub fn is_pad(c: char) -> bool {
    c == PAD
}

/// Returns `true` if `c` is one of the 64 alphabet characters.
#[inline]
pub fn is_data(c: char) -> bool {
    value_of(c).is_some()
}

/// Returns `true` if `c` may appear somewhere in encoded text.
///
/// This is a lenient pre-filter; [`decode`](crate::decode) applies stricter
/// per-position rules.
#[inline]
pub fn is_base64(c: char) -> bool {
    is_whitespace(c) || is_pad(c) || is_data(c)
}
