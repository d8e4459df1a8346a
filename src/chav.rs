//! Main module for chav library functionality

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;

use std::fmt;

use self::ast::Program;
use self::lexing::LexError;
use self::parsing::ParseError;

/// Failure of either pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChavError {
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for ChavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChavError::Lex(err) => write!(f, "{}", err),
            ChavError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ChavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChavError::Lex(err) => Some(err),
            ChavError::Parse(err) => Some(err),
        }
    }
}

impl From<LexError> for ChavError {
    fn from(err: LexError) -> Self {
        ChavError::Lex(err)
    }
}

impl From<ParseError> for ChavError {
    fn from(err: ParseError) -> Self {
        ChavError::Parse(err)
    }
}

/// Process source text through the complete pipeline: lex, then parse.
///
/// # Example
///
/// ```rust,ignore
/// use chav::process;
///
/// let program = process("int main() { int x = 5; }")?;
/// assert_eq!(program.children(program.root()).len(), 1);
/// ```
pub fn process(source: &str) -> Result<Program, ChavError> {
    let tokens = lexing::lex(source)?;
    let program = parsing::parse(&tokens)?;
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_runs_both_stages() {
        let program = process("int foo; int main() { }").expect("should parse");
        assert_eq!(program.children(program.root()).len(), 2);
    }

    #[test]
    fn test_process_reports_lex_errors() {
        let err = process("int main() { $ }").unwrap_err();
        assert!(matches!(err, ChavError::Lex(_)));
    }

    #[test]
    fn test_process_reports_parse_errors() {
        let err = process("int main() {").unwrap_err();
        assert!(matches!(err, ChavError::Parse(ParseError::UnterminatedBlock { .. })));
    }
}
