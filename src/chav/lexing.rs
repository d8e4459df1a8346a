//! Lexer
//!
//!     This module turns chav source text into a flat, ordered sequence of tokens. It
//!     has no knowledge of the grammar: every decision is made by the ordered pattern
//!     table in [patterns](patterns).
//!
//! The Lexing Pass
//!
//!     The source is split into lines and each line is trimmed. A line is consumed left
//!     to right: at each position every pattern is tried in declaration order, the first
//!     match wins, its span (leading whitespace included) is removed from the line and a
//!     token of the mapped kind is built from the captured payload.
//!
//!     Nothing is skipped and nothing is recovered. A position where no pattern matches,
//!     or a literal whose value does not fit its type, aborts the pass with a
//!     [`LexError`] naming the line.

pub mod common;
pub mod patterns;

pub use common::LexError;
pub use patterns::{first_match, PatternMatch, TokenPattern, TOKEN_PATTERNS};
// Re-export token types for consumers that import them from `lexing`
pub use crate::chav::token::{Literal, Token, TokenKind};

/// Lex a complete source text.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line_number = index + 1;
        let mut remaining = line.trim();

        while !remaining.is_empty() {
            let (kind, matched) =
                first_match(remaining).ok_or_else(|| LexError::UnmatchedInput {
                    line: line_number,
                    remainder: remaining.trim_start().to_string(),
                })?;
            tokens.push(Token::new(kind, matched.payload, line_number)?);
            remaining = &remaining[matched.consumed..];
        }
    }

    Ok(tokens)
}
