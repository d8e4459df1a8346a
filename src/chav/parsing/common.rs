//! Parser error type.

use std::fmt;

use super::location::Location;
use crate::chav::token::Token;

/// How many upcoming token kinds a syntax error shows.
const CONTEXT_TOKENS: usize = 6;

/// Errors that can occur during parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No production legal at `location` matches the remaining tokens.
    NoMatchingProduction {
        location: Location,
        line: usize,
        found: String,
    },
    /// Input ended while `depth` blocks were still open.
    UnterminatedBlock { location: Location, depth: usize },
    /// A builder precondition or the tree invariant failed. These come from the
    /// grammar/builder pairing, never from user input.
    Internal {
        context: &'static str,
        message: String,
    },
}

impl ParseError {
    pub(crate) fn no_match(location: Location, remaining: &[Token]) -> Self {
        let mut found: Vec<&str> = remaining
            .iter()
            .take(CONTEXT_TOKENS)
            .map(|t| t.kind().name())
            .collect();
        if remaining.len() > CONTEXT_TOKENS {
            found.push("...");
        }
        ParseError::NoMatchingProduction {
            location,
            line: remaining.first().map(Token::line).unwrap_or(0),
            found: found.join(" "),
        }
    }

    pub(crate) fn internal(context: &'static str, message: impl Into<String>) -> Self {
        ParseError::Internal {
            context,
            message: message.into(),
        }
    }

    /// True for defects in the parser itself rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, ParseError::Internal { .. })
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NoMatchingProduction {
                location,
                line,
                found,
            } => write!(
                f,
                "Parsing error: invalid syntax in {} on line {}, found: {}",
                location, line, found
            ),
            ParseError::UnterminatedBlock { location, depth } => write!(
                f,
                "Parsing error: unexpected end of input inside {} ({} unclosed block{})",
                location,
                depth,
                if *depth == 1 { "" } else { "s" }
            ),
            ParseError::Internal { context, message } => {
                write!(f, "[BUG] {}: {}", context, message)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for String {
    fn from(err: ParseError) -> Self {
        err.to_string()
    }
}
