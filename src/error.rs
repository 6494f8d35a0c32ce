//! Library error types.

use thiserror::Error;

/// Errors produced by the block parser.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An open marker was found with no matching close marker before input
    /// end. Raised only under the strict unterminated policy; the lenient
    /// policy drops the partial block and records a warning instead. A close
    /// position is never fabricated.
    #[error("unterminated comment block starting at line {line}")]
    UnterminatedBlock { line: usize },

    /// Reserved: tag scanning could not determine a segment boundary. The
    /// current grammar cannot produce this (every `@` either starts a
    /// segment or is ordinary content), but the kind exists so callers can
    /// match on it.
    #[error("malformed tag segment at offset {offset}")]
    MalformedTagSegment { offset: usize },
}
