//! Token Pattern Definitions
//!
//! The lexer is driven by an ordered table of patterns. At every position each pattern
//! is tried in declaration order and the first match wins, so the order is what
//! resolves prefix conflicts:
//!
//! 1. punctuation - single characters, no overlap with anything else
//! 2. comparison - before `!` and `=` so that `!=` and `==` stay single tokens
//! 3. `&&` and `||` - before their single-character bitwise forms
//! 4. keywords - before identifiers, and only at a word boundary (`intx` is an identifier)
//! 5. identifier
//! 6. unsigned literal - before the plain literal, it is the more specific match
//! 7. integer literal
//!
//! Every pattern is anchored and may be preceded by whitespace; the payload is capture
//! group 1. The `regex` crate has no look-around, so "not followed by an identifier
//! character" is expressed with the `word_boundary` flag instead of `(?!...)`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::chav::token::TokenKind;

/// A single entry of the pattern table.
#[derive(Debug)]
pub struct TokenPattern {
    pub kind: TokenKind,
    regex: Regex,
    word_boundary: bool,
}

/// Successful match of a pattern against the start of the remaining input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch<'a> {
    /// The captured payload, without the leading whitespace.
    pub payload: &'a str,
    /// Bytes consumed from the input, leading whitespace included.
    pub consumed: usize,
}

impl TokenPattern {
    fn new(kind: TokenKind, body: &str, word_boundary: bool) -> Self {
        let regex = Regex::new(&format!(r"^\s*({})", body)).unwrap();
        Self {
            kind,
            regex,
            word_boundary,
        }
    }

    /// Match this pattern at the very start of `input`.
    pub fn match_start<'a>(&self, input: &'a str) -> Option<PatternMatch<'a>> {
        let caps = self.regex.captures(input)?;
        let full = caps.get(0)?;
        let payload = caps.get(1)?;
        if self.word_boundary && input[full.end()..].starts_with(is_identifier_char) {
            return None;
        }
        Some(PatternMatch {
            payload: payload.as_str(),
            consumed: full.end(),
        })
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// The pattern table, in precedence order.
pub static TOKEN_PATTERNS: Lazy<Vec<TokenPattern>> = Lazy::new(|| {
    vec![
        TokenPattern::new(TokenKind::OpenBrace, r"\{", false),
        TokenPattern::new(TokenKind::CloseBrace, r"\}", false),
        TokenPattern::new(TokenKind::OpenParen, r"\(", false),
        TokenPattern::new(TokenKind::CloseParen, r"\)", false),
        TokenPattern::new(TokenKind::Comma, r",", false),
        TokenPattern::new(TokenKind::Semicolon, r";", false),
        TokenPattern::new(TokenKind::Comparison, r"==|!=|<=?|>=?", false),
        TokenPattern::new(TokenKind::Minus, r"-", false),
        TokenPattern::new(TokenKind::Complement, r"~", false),
        TokenPattern::new(TokenKind::Negation, r"!", false),
        TokenPattern::new(TokenKind::Addition, r"\+", false),
        TokenPattern::new(TokenKind::Multiply, r"\*", false),
        TokenPattern::new(TokenKind::Divide, r"/", false),
        TokenPattern::new(TokenKind::LogicalAnd, r"&&", false),
        TokenPattern::new(TokenKind::LogicalOr, r"\|\|", false),
        TokenPattern::new(TokenKind::BitwiseAnd, r"&", false),
        TokenPattern::new(TokenKind::BitwiseOr, r"\|", false),
        TokenPattern::new(TokenKind::Assignment, r"=", false),
        TokenPattern::new(TokenKind::TypeKeyword, r"uint|int|byte", true),
        TokenPattern::new(TokenKind::ReturnKeyword, r"return", true),
        TokenPattern::new(TokenKind::IfKeyword, r"if", true),
        TokenPattern::new(TokenKind::ElseKeyword, r"else", true),
        TokenPattern::new(TokenKind::Identifier, r"[a-zA-Z_][a-zA-Z0-9_]*", false),
        TokenPattern::new(TokenKind::UnsignedIntegerLiteral, r"[0-9]+u", true),
        TokenPattern::new(TokenKind::IntegerLiteral, r"[0-9]+", true),
    ]
});

/// Find the first pattern, in table order, that matches the start of `input`.
pub fn first_match(input: &str) -> Option<(TokenKind, PatternMatch<'_>)> {
    TOKEN_PATTERNS
        .iter()
        .find_map(|pattern| pattern.match_start(input).map(|m| (pattern.kind, m)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_kind_has_exactly_one_pattern() {
        let kinds: HashSet<TokenKind> = TOKEN_PATTERNS.iter().map(|p| p.kind).collect();
        assert_eq!(kinds.len(), TOKEN_PATTERNS.len());
        assert_eq!(TOKEN_PATTERNS.len(), 25);
    }

    #[test]
    fn test_match_skips_leading_whitespace() {
        let (kind, m) = first_match("   main()").unwrap();
        assert_eq!(kind, TokenKind::Identifier);
        assert_eq!(m.payload, "main");
        assert_eq!(m.consumed, 7);
    }

    #[test]
    fn test_keyword_needs_word_boundary() {
        let (kind, m) = first_match("intx = 1;").unwrap();
        assert_eq!(kind, TokenKind::Identifier);
        assert_eq!(m.payload, "intx");

        let (kind, m) = first_match("int x").unwrap();
        assert_eq!(kind, TokenKind::TypeKeyword);
        assert_eq!(m.payload, "int");
    }

    #[test]
    fn test_uint_keyword_is_not_split() {
        let (kind, m) = first_match("uint value").unwrap();
        assert_eq!(kind, TokenKind::TypeKeyword);
        assert_eq!(m.payload, "uint");
    }

    #[test]
    fn test_literal_followed_by_letters_does_not_match() {
        assert!(first_match("420x").is_none());
        assert!(first_match("420ux").is_none());
    }

    #[test]
    fn test_literal_followed_by_punctuation_matches() {
        let (kind, m) = first_match("420u;").unwrap();
        assert_eq!(kind, TokenKind::UnsignedIntegerLiteral);
        assert_eq!(m.payload, "420u");

        let (kind, m) = first_match("5)").unwrap();
        assert_eq!(kind, TokenKind::IntegerLiteral);
        assert_eq!(m.payload, "5");
    }
}
