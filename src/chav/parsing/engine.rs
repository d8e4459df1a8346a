//! Declarative Grammar Engine
//!
//! This module matches the productions from [grammar](super::grammar) directly against
//! the remaining token slice:
//! 1. Filters productions to those legal at the current location
//! 2. Tries them in declaration order, first match wins
//! 3. Reports the match length in tokens, which is exactly what the builder consumes
//!
//! Matching is anchored at the start of the slice and never looks past the end of the
//! match. Optional groups are all-or-nothing and repeats are greedy; no production in
//! the grammar needs backtracking into them.

use super::grammar::{Element, Production, PRODUCTIONS};
use super::location::Location;
use crate::chav::token::Token;

/// Pattern matcher for the declarative grammar
pub struct GrammarMatcher;

impl GrammarMatcher {
    /// Try to match a production at the start of `tokens`.
    ///
    /// Returns the matched production and how many tokens it spans.
    pub fn try_match(
        location: Location,
        tokens: &[Token],
    ) -> Option<(&'static Production, usize)> {
        PRODUCTIONS
            .iter()
            .filter(|production| production.is_legal_at(location))
            .find_map(|production| {
                Self::match_sequence(production.pattern, tokens)
                    .filter(|&consumed| consumed > 0)
                    .map(|consumed| (production, consumed))
            })
    }

    /// Match every element of `pattern` in turn, returning the total length.
    pub fn match_sequence(pattern: &[Element], tokens: &[Token]) -> Option<usize> {
        let mut consumed = 0;
        for element in pattern {
            consumed += Self::match_element(element, &tokens[consumed..])?;
        }
        Some(consumed)
    }

    fn match_element(element: &Element, tokens: &[Token]) -> Option<usize> {
        match element {
            Element::Kind(kind) => (tokens.first()?.kind() == *kind).then_some(1),
            Element::OneOf(kinds) => kinds.contains(&tokens.first()?.kind()).then_some(1),
            Element::Optional(inner) => Some(Self::match_sequence(inner, tokens).unwrap_or(0)),
            Element::Repeat(inner) => {
                let mut total = 0;
                while let Some(consumed) = Self::match_sequence(inner, &tokens[total..]) {
                    if consumed == 0 {
                        break;
                    }
                    total += consumed;
                }
                Some(total)
            }
        }
    }
}
