//! Common lexer module
//!
//! This module contains the lexer error type.

use std::fmt;

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No pattern matches at the start of `remainder` on `line` (1-based).
    UnmatchedInput { line: usize, remainder: String },
    /// A literal matched its pattern but its value could not be decoded.
    MalformedLiteral {
        line: usize,
        text: String,
        reason: String,
    },
}

impl LexError {
    pub fn line(&self) -> usize {
        match self {
            LexError::UnmatchedInput { line, .. } | LexError::MalformedLiteral { line, .. } => *line,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnmatchedInput { line, remainder } => {
                write!(f, "Lexing error: invalid token on line {} at '{}'", line, remainder)
            }
            LexError::MalformedLiteral { line, text, reason } => write!(
                f,
                "Lexing error: malformed literal '{}' on line {}: {}",
                text, line, reason
            ),
        }
    }
}

impl std::error::Error for LexError {}

impl From<LexError> for String {
    fn from(err: LexError) -> Self {
        err.to_string()
    }
}
