//! Errors raised while parsing signatures.

/// An error indicating that a descriptor or signature could not be parsed.
///
/// Every variant carries the byte offset into the input at which parsing stopped.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum SignatureError {
    /// The input ended where more characters were required.
    #[error("Unexpected end of input at position {position}")]
    EndOfInput {
        /// Byte offset of the end of the input.
        position: usize,
    },
    /// The input violates the signature grammar.
    #[error("Malformed signature at position {position}: {message}")]
    Malformed {
        /// Byte offset of the offending character.
        position: usize,
        /// What went wrong.
        message: String,
    },
    /// A complete signature was parsed but characters remain.
    #[error("Unexpected trailing input at position {position}: {remaining:?}")]
    TrailingInput {
        /// Byte offset of the first unconsumed character.
        position: usize,
        /// The unconsumed characters.
        remaining: String,
    },
    /// The raw bytes are not valid modified UTF-8.
    #[error("Invalid modified UTF-8 byte sequence")]
    InvalidEncoding,
}

impl SignatureError {
    /// Returns the position at which the error occurred, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EndOfInput { position }
            | Self::Malformed { position, .. }
            | Self::TrailingInput { position, .. } => Some(*position),
            Self::InvalidEncoding => None,
        }
    }
}

/// An error indicating that a name is not one of the nine base types.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[error("Unknown base type: {0}")]
pub struct UnknownBaseType(pub String);

/// An error indicating that an [`ArrayTypeSignature`](super::signatures::ArrayTypeSignature)
/// cannot be constructed.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[error("Invalid array type: {0}")]
pub struct InvalidArrayType(pub &'static str);
