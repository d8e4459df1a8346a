//! Parsing module for chav
//!
//!     Turns the flat token stream produced by [lexing](crate::chav::lexing) into an
//!     arena-backed [`Program`] tree.
//!
//! Parsing End To End
//!
//!     The parser keeps an explicit [`ParserState`]: a cursor (the node new statements
//!     are attached to) and a stack of [locations](location::Location). At every step:
//!
//!         1. The [engine](engine) tries the productions legal at the current location,
//!            in declaration order, against the remaining tokens. First match wins.
//!         2. The matched tokens are handed to the production's [builder](builders),
//!            which attaches nodes and returns the next state.
//!         3. The cursor advances past exactly the tokens that were matched.
//!
//!     Input is fully consumed or the parse fails. When the stream ends, the location
//!     stack must be back to `[Program]` and the tree must pass
//!     [`Program::validate`].
//!
//! Terminology
//!
//!     - production: one rule of the [grammar](grammar), plus the locations it is legal at
//!     - location: a nesting context (program level, function body)
//!     - build: attaching the nodes for one matched production

pub mod builders;
pub mod common;
pub mod engine;
pub mod grammar;
pub mod location;

pub use common::ParseError;
pub use engine::GrammarMatcher;
pub use grammar::{Element, Production, ProductionKind, PRODUCTIONS};
pub use location::{Location, ParserState};

pub use crate::chav::ast::Program;

use crate::chav::token::Token;

/// Parse a token stream into a program tree.
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    let mut program = Program::new();
    let mut state = ParserState::new(program.root());
    let mut position = 0;

    while position < tokens.len() {
        let remaining = &tokens[position..];
        let (production, consumed) = GrammarMatcher::try_match(state.location(), remaining)
            .ok_or_else(|| ParseError::no_match(state.location(), remaining))?;

        state = builders::build(
            production.kind,
            &remaining[..consumed],
            state,
            &mut program,
        )?;
        position += consumed;
    }

    state.finish()?;
    program
        .validate()
        .map_err(|err| ParseError::internal("tree integrity", err.to_string()))?;

    Ok(program)
}
