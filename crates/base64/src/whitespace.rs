//! Removal of MIME whitespace from encoded text.

use std::borrow::Cow;

use crate::classify::is_whitespace;

/// Removes space, CR, LF and tab from `encoded`, keeping the order of everything else.
///
/// Borrows the input when it contains no whitespace.
///
/// # Example
///
/// ```
/// use mime_base64::strip_whitespace;
///
/// assert_eq!(strip_whitespace("TW\r\nFu"), "TWFu");
/// ```
pub fn strip_whitespace(encoded: &str) -> Cow<'_, str> {
    if !encoded.contains(is_whitespace) {
        return Cow::Borrowed(encoded);
    }
    Cow::Owned(encoded.chars().filter(|&c| !is_whitespace(c)).collect())
}
