//! AST node construction from matched productions.
//!
//! Every builder receives exactly the token slice its production matched, the current
//! [`ParserState`] and the program under construction, and returns the next state.
//! Builders never look beyond their slice. Their preconditions are guaranteed by the
//! grammar, so a violation is reported as an internal error.

use super::common::ParseError;
use super::grammar::ProductionKind;
use super::location::{Location, ParserState};
use crate::chav::ast::{Function, NodeKind, Parameter, Program, VariableDeclaration};
use crate::chav::token::{Literal, Token, TokenKind};

/// `TypeKeyword Identifier OpenParen CloseParen OpenBrace`
const FUNCTION_WITHOUT_PARAMETERS: usize = 5;
/// The header above plus a single `TypeKeyword Identifier` pair.
const FUNCTION_WITH_ONE_PARAMETER: usize = 7;
/// `Comma TypeKeyword Identifier`
const EXTRA_PARAMETER_WIDTH: usize = 3;
/// Tokens before the parameter list: `TypeKeyword Identifier OpenParen`.
const FUNCTION_HEADER_WIDTH: usize = 3;

/// Dispatch to the builder for `production`.
pub fn build(
    production: ProductionKind,
    tokens: &[Token],
    state: ParserState,
    program: &mut Program,
) -> Result<ParserState, ParseError> {
    match production {
        ProductionKind::FunctionDefinition => build_function(tokens, state, program),
        ProductionKind::VariableDeclaration => build_variable(tokens, state, program),
        ProductionKind::ReturnStatement => build_return(tokens, state, program),
        ProductionKind::CloseBrace => build_close_brace(tokens, state, program),
    }
}

/// Number of parameters encoded by a function header of `matched` tokens.
pub fn parameter_count(matched: usize) -> Result<usize, ParseError> {
    match matched {
        FUNCTION_WITHOUT_PARAMETERS => Ok(0),
        n if n >= FUNCTION_WITH_ONE_PARAMETER
            && (n - FUNCTION_WITH_ONE_PARAMETER) % EXTRA_PARAMETER_WIDTH == 0 =>
        {
            Ok((n - FUNCTION_WITH_ONE_PARAMETER) / EXTRA_PARAMETER_WIDTH + 1)
        }
        n => Err(ParseError::internal(
            "function_definition",
            format!("{} matched tokens do not encode a parameter list", n),
        )),
    }
}

fn expect_kind<'a>(
    tokens: &'a [Token],
    index: usize,
    kind: TokenKind,
    context: &'static str,
) -> Result<&'a Token, ParseError> {
    match tokens.get(index) {
        Some(token) if token.kind() == kind => Ok(token),
        Some(token) => Err(ParseError::internal(
            context,
            format!("expected {} at offset {}, found {}", kind, index, token.kind()),
        )),
        None => Err(ParseError::internal(
            context,
            format!("expected {} at offset {}, found nothing", kind, index),
        )),
    }
}

fn build_function(
    tokens: &[Token],
    state: ParserState,
    program: &mut Program,
) -> Result<ParserState, ParseError> {
    const CONTEXT: &str = "function_definition";

    if state.cursor != program.root() || state.location() != Location::Program {
        return Err(ParseError::internal(
            CONTEXT,
            format!(
                "functions are only built at program level (cursor {}, location {})",
                state.cursor,
                state.location()
            ),
        ));
    }

    let count = parameter_count(tokens.len())?;
    let return_type = expect_kind(tokens, 0, TokenKind::TypeKeyword, CONTEXT)?;
    let name = expect_kind(tokens, 1, TokenKind::Identifier, CONTEXT)?;

    let mut parameters = Vec::with_capacity(count);
    for i in 0..count {
        let offset = FUNCTION_HEADER_WIDTH + i * EXTRA_PARAMETER_WIDTH;
        if i > 0 {
            expect_kind(tokens, offset - 1, TokenKind::Comma, CONTEXT)?;
        }
        let type_name = expect_kind(tokens, offset, TokenKind::TypeKeyword, CONTEXT)?;
        let param_name = expect_kind(tokens, offset + 1, TokenKind::Identifier, CONTEXT)?;
        parameters.push(Parameter::new(type_name.text(), param_name.text()));
    }

    let function = program.attach(
        state.cursor,
        NodeKind::Function(Function {
            return_type: return_type.text().to_string(),
            name: name.text().to_string(),
            parameters,
        }),
    );

    Ok(state.enter(Location::Function, function))
}

fn build_variable(
    tokens: &[Token],
    state: ParserState,
    program: &mut Program,
) -> Result<ParserState, ParseError> {
    const CONTEXT: &str = "variable_declaration";

    let default_value = match tokens.len() {
        3 => {
            expect_kind(tokens, 2, TokenKind::Semicolon, CONTEXT)?;
            None
        }
        5 => {
            expect_kind(tokens, 2, TokenKind::Assignment, CONTEXT)?;
            expect_kind(tokens, 4, TokenKind::Semicolon, CONTEXT)?;
            let literal = tokens
                .get(3)
                .filter(|t| t.kind().is_literal())
                .ok_or_else(|| ParseError::internal(CONTEXT, "initializer is not a literal"))?;
            Some(literal.text().to_string())
        }
        n => {
            return Err(ParseError::internal(
                CONTEXT,
                format!("expected 3 or 5 matched tokens, got {}", n),
            ))
        }
    };
    let type_name = expect_kind(tokens, 0, TokenKind::TypeKeyword, CONTEXT)?;
    let name = expect_kind(tokens, 1, TokenKind::Identifier, CONTEXT)?;

    program.attach(
        state.cursor,
        NodeKind::VariableDeclaration(VariableDeclaration {
            type_name: type_name.text().to_string(),
            name: name.text().to_string(),
            default_value,
        }),
    );

    Ok(state)
}

fn build_return(
    tokens: &[Token],
    state: ParserState,
    program: &mut Program,
) -> Result<ParserState, ParseError> {
    const CONTEXT: &str = "return_statement";

    if state.location() != Location::Function {
        return Err(ParseError::internal(
            CONTEXT,
            "return statements are only built inside functions",
        ));
    }

    let value = match tokens.len() {
        2 => None,
        3 => Some(value_node(&tokens[1], CONTEXT)?),
        n => {
            return Err(ParseError::internal(
                CONTEXT,
                format!("expected 2 or 3 matched tokens, got {}", n),
            ))
        }
    };

    let node = program.attach(state.cursor, NodeKind::Return);
    if let Some(value) = value {
        program.attach(node, value);
    }

    Ok(state)
}

fn value_node(token: &Token, context: &'static str) -> Result<NodeKind, ParseError> {
    match (token.kind(), token.literal()) {
        (TokenKind::IntegerLiteral, Some(Literal::Int(value))) => Ok(NodeKind::IntLiteral(value)),
        (TokenKind::UnsignedIntegerLiteral, Some(Literal::UInt(value))) => {
            Ok(NodeKind::UIntLiteral(value))
        }
        (TokenKind::Identifier, _) => Ok(NodeKind::Identifier(token.text().to_string())),
        (kind, _) => Err(ParseError::internal(
            context,
            format!("{} cannot be a returned value", kind),
        )),
    }
}

fn build_close_brace(
    tokens: &[Token],
    state: ParserState,
    program: &mut Program,
) -> Result<ParserState, ParseError> {
    const CONTEXT: &str = "close_brace";

    expect_kind(tokens, 0, TokenKind::CloseBrace, CONTEXT)?;
    if state.location() == Location::Program {
        return Err(ParseError::internal(
            CONTEXT,
            "closing brace matched at program level",
        ));
    }
    let parent = program.parent(state.cursor).ok_or_else(|| {
        ParseError::internal(
            CONTEXT,
            format!("cursor {} has no parent to return to", state.cursor),
        )
    })?;

    state.leave(parent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chav::lexing::lex;

    #[test]
    fn test_parameter_count_arithmetic() {
        assert_eq!(parameter_count(5).unwrap(), 0);
        assert_eq!(parameter_count(7).unwrap(), 1);
        assert_eq!(parameter_count(10).unwrap(), 2);
        assert_eq!(parameter_count(13).unwrap(), 3);
    }

    #[test]
    fn test_parameter_count_rejects_bad_lengths() {
        for n in [0, 4, 6, 8, 9, 11, 12] {
            let err = parameter_count(n).unwrap_err();
            assert!(err.is_internal(), "{} should be rejected", n);
        }
    }

    #[test]
    fn test_function_builder_requires_program_cursor() {
        let mut program = Program::new();
        let tokens = lex("int main() {").unwrap();
        let state = ParserState::new(program.root());
        let state = build_function(&tokens, state, &mut program).unwrap();

        // A second function while the cursor sits on `main` breaks the precondition.
        let err = build_function(&tokens, state, &mut program).unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn test_function_builder_moves_cursor() {
        let mut program = Program::new();
        let tokens = lex("int add(int a, uint b) {").unwrap();
        let state = build_function(&tokens, ParserState::new(program.root()), &mut program).unwrap();

        assert_eq!(state.location(), Location::Function);
        let function = program.kind(state.cursor).as_function().unwrap();
        assert_eq!(function.name, "add");
        assert_eq!(function.return_type, "int");
        assert_eq!(
            function.parameters,
            vec![Parameter::new("int", "a"), Parameter::new("uint", "b")]
        );
    }

    #[test]
    fn test_variable_builder_keeps_cursor() {
        let mut program = Program::new();
        let tokens = lex("int foo = 5;").unwrap();
        let before = ParserState::new(program.root());
        let after = build_variable(&tokens, before.clone(), &mut program).unwrap();

        assert_eq!(after, before);
        let var_id = program.children(program.root())[0];
        let var = program.kind(var_id).as_variable().unwrap();
        assert_eq!(var.default_value.as_deref(), Some("5"));
    }

    #[test]
    fn test_variable_builder_rejects_other_lengths() {
        let mut program = Program::new();
        let tokens = lex("int foo =").unwrap();
        let err = build_variable(&tokens, ParserState::new(program.root()), &mut program).unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn test_close_brace_builder_at_program_level_is_internal() {
        let mut program = Program::new();
        let tokens = lex("}").unwrap();
        let err =
            build_close_brace(&tokens, ParserState::new(program.root()), &mut program).unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn test_return_builder_attaches_value() {
        let mut program = Program::new();
        let header = lex("int main() {").unwrap();
        let state = build_function(&header, ParserState::new(program.root()), &mut program).unwrap();
        let function = state.cursor;

        let tokens = lex("return 7u;").unwrap();
        let state = build_return(&tokens, state, &mut program).unwrap();
        assert_eq!(state.cursor, function);

        let ret = program.children(function)[0];
        assert!(program.kind(ret).is_return());
        let value = program.children(ret)[0];
        assert_eq!(program.kind(value).as_uint(), Some(7));
    }
}
