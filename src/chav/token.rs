//! Core token types shared by the lexer, the parser and tooling.
//!
//!     A token is a closed [`TokenKind`] plus the exact text the lexer matched. Literal
//!     tokens also carry their decoded value; decoding happens when the token is built,
//!     so a token that exists always holds a value that fits its target width.
//!
//!     Several kinds (the arithmetic, bitwise and logical operators, `if` and `else`)
//!     are produced by the lexer but not consumed by any grammar production yet.

use serde::Serialize;
use std::fmt;

use crate::chav::lexing::LexError;

/// The closed set of token categories.
///
/// Declaration order mirrors the lexer pattern table, which is what decides
/// precedence between overlapping patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    Comma,
    Semicolon,
    Minus,
    Complement,
    Negation,
    Addition,
    Multiply,
    Divide,
    LogicalAnd,
    LogicalOr,
    BitwiseAnd,
    BitwiseOr,
    /// `==`, `!=`, `<`, `<=`, `>` and `>=`. The token text tells them apart.
    Comparison,
    Assignment,
    /// `int`, `uint` or `byte`.
    TypeKeyword,
    ReturnKeyword,
    IfKeyword,
    ElseKeyword,
    Identifier,
    UnsignedIntegerLiteral,
    IntegerLiteral,
}

impl TokenKind {
    /// Grammar name of the kind, as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::OpenBrace => "OpenBrace",
            TokenKind::CloseBrace => "CloseBrace",
            TokenKind::OpenParen => "OpenParen",
            TokenKind::CloseParen => "CloseParen",
            TokenKind::Comma => "Comma",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Minus => "Minus",
            TokenKind::Complement => "Complement",
            TokenKind::Negation => "Negation",
            TokenKind::Addition => "Addition",
            TokenKind::Multiply => "Multiply",
            TokenKind::Divide => "Divide",
            TokenKind::LogicalAnd => "LogicalAnd",
            TokenKind::LogicalOr => "LogicalOr",
            TokenKind::BitwiseAnd => "BitwiseAnd",
            TokenKind::BitwiseOr => "BitwiseOr",
            TokenKind::Comparison => "Comparison",
            TokenKind::Assignment => "Assignment",
            TokenKind::TypeKeyword => "TypeKeyword",
            TokenKind::ReturnKeyword => "ReturnKeyword",
            TokenKind::IfKeyword => "IfKeyword",
            TokenKind::ElseKeyword => "ElseKeyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::UnsignedIntegerLiteral => "UnsignedIntegerLiteral",
            TokenKind::IntegerLiteral => "IntegerLiteral",
        }
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral | TokenKind::UnsignedIntegerLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded value of a literal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Literal {
    Int(i32),
    UInt(u32),
}

/// A single lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
    /// 1-based source line, kept for diagnostics only.
    line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    literal: Option<Literal>,
}

impl Token {
    /// Build a token, decoding the literal value for literal kinds.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Result<Self, LexError> {
        let text = text.into();
        let literal = match kind {
            TokenKind::IntegerLiteral => Some(Literal::Int(decode_signed(&text, line)?)),
            TokenKind::UnsignedIntegerLiteral => Some(Literal::UInt(decode_unsigned(&text, line)?)),
            _ => None,
        };
        Ok(Self {
            kind,
            text,
            line,
            literal,
        })
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn literal(&self) -> Option<Literal> {
        self.literal
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] => {}", self.kind, self.text)
    }
}

fn malformed(text: &str, line: usize, reason: impl Into<String>) -> LexError {
    LexError::MalformedLiteral {
        line,
        text: text.to_string(),
        reason: reason.into(),
    }
}

fn decode_digits<T: std::str::FromStr>(digits: &str, text: &str, line: usize) -> Result<T, LexError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(text, line, "expected a run of decimal digits"));
    }
    digits
        .parse()
        .map_err(|_| malformed(text, line, "value does not fit the literal type"))
}

fn decode_signed(text: &str, line: usize) -> Result<i32, LexError> {
    decode_digits(text, text, line)
}

fn decode_unsigned(text: &str, line: usize) -> Result<u32, LexError> {
    let digits = text
        .strip_suffix('u')
        .ok_or_else(|| malformed(text, line, "unsigned literal is missing its 'u' suffix"))?;
    decode_digits(digits, text, line)
}
