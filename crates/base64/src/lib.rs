//! RFC 2045 base64 encoding and decoding.
//!
//! This crate provides:
//! - Standard base64 encoding with `=` padding and no line breaks
//! - Strict decoding that ignores MIME whitespace (space, CR, LF, tab) anywhere
//! - Typed decode errors: bad length, bad character, non-zero padding bits
//!
//! The lookup tables are computed at compile time, so every function here is a
//! pure computation that can be called from any number of threads.
//!
//! # Example
//!
//! ```
//! use mime_base64::{decode, encode};
//!
//! let data = b"hello world";
//! let encoded = encode(data);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! let decoded = decode("aGVsbG8g\r\nd29ybGQ=").unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod classify;
pub mod cli;
mod constants;
mod decode;
mod encode;
mod error;
mod table;
mod whitespace;

pub use classify::{is_base64, is_data, is_pad, is_whitespace};
pub use constants::{ALPHABET, ALPHABET_BYTES, PAD, WHITESPACE};
pub use decode::{decode, decode_opt, decoded_len};
pub use encode::{encode, encode_opt, encoded_len};
pub use error::{DecodeError, DecodeErrorKind};
pub use whitespace::strip_whitespace;
