use thiserror::Error;

/// Reasons encoded text is rejected.
///
/// Positions are byte offsets into the text passed to [`decode`](crate::decode),
/// before whitespace removal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Length after whitespace removal is not a multiple of 4.
    #[error("base64 length {length} is not a multiple of 4")]
    InvalidLength { length: usize },
    /// A position holds neither an alphabet character nor padding where padding is allowed.
    #[error("invalid base64 character {character:?} at offset {position}")]
    InvalidCharacter { position: usize, character: char },
    /// Padding is well placed but the character before it carries non-zero unused bits.
    #[error("non-zero padding bits in base64 character at offset {position}")]
    InvalidPadding { position: usize },
}

/// Failure cause without location details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    InvalidLength,
    InvalidCharacter,
    InvalidPadding,
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::InvalidLength { .. } => DecodeErrorKind::InvalidLength,
            DecodeError::InvalidCharacter { .. } => DecodeErrorKind::InvalidCharacter,
            DecodeError::InvalidPadding { .. } => DecodeErrorKind::InvalidPadding,
        }
    }
}
