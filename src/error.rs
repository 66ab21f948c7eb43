//! Error types for the ISUPPORT library.
//!
//! The capability tracker never fails: malformed ISUPPORT data is absorbed
//! and surfaced as `None` from its accessors. The only fallible surface is
//! turning a raw protocol line into a [`MessageRef`](crate::MessageRef).

use thiserror::Error;

/// Convenience type alias for Results using [`MessageParseError`].
pub type Result<T, E = MessageParseError> = std::result::Result<T, E>;

/// Errors encountered when parsing IRC protocol lines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// Line was empty (or only CR/LF).
    #[error("empty message")]
    EmptyMessage,

    /// Parsing stopped before a complete message was read.
    #[error("parsing failed at position {position}: {context}")]
    ParseContext {
        /// Byte position in the line where parsing failed.
        position: usize,
        /// Description of what was being parsed.
        context: String,
    },
}

impl MessageParseError {
    /// Byte offset of the failure, if the error carries one.
    pub fn position(&self) -> Option<usize> {
        match self {
            MessageParseError::EmptyMessage => None,
            MessageParseError::ParseContext { position, .. } => Some(*position),
        }
    }
}
