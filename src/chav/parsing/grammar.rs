//! Grammar Production Definitions
//!
//! This module defines the declarative grammar productions used by the parser.
//! Productions are data: sequences of [`Element`]s over token kinds, each legal at a
//! fixed set of locations, and tried in declaration order.
//!
//! # Grammar Parse Order
//!
//! 1. function_definition - `TypeKeyword Identifier ( params? ) {`, program only
//! 2. variable_declaration - `TypeKeyword Identifier (= literal)? ;`, program and function
//! 3. return_statement - `return (literal | identifier)? ;`, function only
//! 4. close_brace - `}`, function only
//!
//! Function definition comes first: it shares the `TypeKeyword Identifier` prefix with
//! variable declarations and is only told apart by the `OpenParen` that follows.

use super::location::Location;
use crate::chav::token::TokenKind::{self, *};

/// One step of a production pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Exactly one token of this kind.
    Kind(TokenKind),
    /// Exactly one token of any of these kinds.
    OneOf(&'static [TokenKind]),
    /// The whole inner sequence, or nothing.
    Optional(&'static [Element]),
    /// The inner sequence, zero or more times.
    Repeat(&'static [Element]),
}

/// Names the builder invoked when a production matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductionKind {
    FunctionDefinition,
    VariableDeclaration,
    ReturnStatement,
    CloseBrace,
}

impl ProductionKind {
    pub fn name(self) -> &'static str {
        match self {
            ProductionKind::FunctionDefinition => "function_definition",
            ProductionKind::VariableDeclaration => "variable_declaration",
            ProductionKind::ReturnStatement => "return_statement",
            ProductionKind::CloseBrace => "close_brace",
        }
    }
}

/// A grammar production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Production {
    pub kind: ProductionKind,
    /// Locations at which this production may match.
    pub locations: &'static [Location],
    pub pattern: &'static [Element],
}

impl Production {
    pub fn is_legal_at(&self, location: Location) -> bool {
        self.locations.contains(&location)
    }
}

use Element::{Kind, OneOf, Optional, Repeat};

const INTEGER_LITERALS: &[TokenKind] = &[IntegerLiteral, UnsignedIntegerLiteral];
const RETURN_VALUES: &[TokenKind] = &[IntegerLiteral, UnsignedIntegerLiteral, Identifier];

const MORE_PARAMETERS: &[Element] = &[Kind(Comma), Kind(TypeKeyword), Kind(Identifier)];
const PARAMETER_LIST: &[Element] = &[
    Kind(TypeKeyword),
    Kind(Identifier),
    Repeat(MORE_PARAMETERS),
];

/// Productions in parse order.
pub const PRODUCTIONS: &[Production] = &[
    Production {
        kind: ProductionKind::FunctionDefinition,
        locations: &[Location::Program],
        pattern: &[
            Kind(TypeKeyword),
            Kind(Identifier),
            Kind(OpenParen),
            Optional(PARAMETER_LIST),
            Kind(CloseParen),
            Kind(OpenBrace),
        ],
    },
    Production {
        kind: ProductionKind::VariableDeclaration,
        locations: &[Location::Program, Location::Function],
        pattern: &[
            Kind(TypeKeyword),
            Kind(Identifier),
            Optional(&[Kind(Assignment), OneOf(INTEGER_LITERALS)]),
            Kind(Semicolon),
        ],
    },
    Production {
        kind: ProductionKind::ReturnStatement,
        locations: &[Location::Function],
        pattern: &[
            Kind(ReturnKeyword),
            Optional(&[OneOf(RETURN_VALUES)]),
            Kind(Semicolon),
        ],
    },
    Production {
        kind: ProductionKind::CloseBrace,
        locations: &[Location::Function],
        pattern: &[Kind(CloseBrace)],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_location_has_a_production() {
        for location in [Location::Program, Location::Function] {
            assert!(PRODUCTIONS.iter().any(|p| p.is_legal_at(location)));
        }
    }

    #[test]
    fn test_function_definition_is_tried_before_variables() {
        let position = |kind: ProductionKind| PRODUCTIONS.iter().position(|p| p.kind == kind).unwrap();
        assert!(
            position(ProductionKind::FunctionDefinition)
                < position(ProductionKind::VariableDeclaration)
        );
    }

    #[test]
    fn test_function_definition_only_at_program_level() {
        let function = PRODUCTIONS
            .iter()
            .find(|p| p.kind == ProductionKind::FunctionDefinition)
            .unwrap();
        assert!(function.is_legal_at(Location::Program));
        assert!(!function.is_legal_at(Location::Function));
    }
}
