//! Token stream renderings.

use super::registry::FormatError;
use crate::chav::token::Token;

/// `Kind(text)` per token, tokens from the same source line on the same output line.
pub fn tokens_to_simple_str(tokens: &[Token]) -> String {
    let mut output = String::new();
    let mut current_line = None;

    for token in tokens {
        match current_line {
            Some(line) if line == token.line() => output.push(' '),
            Some(_) => output.push('\n'),
            None => {}
        }
        current_line = Some(token.line());
        output.push_str(&format!("{}({})", token.kind(), token.text()));
    }

    if current_line.is_some() {
        output.push('\n');
    }
    output
}

pub fn tokens_to_json(tokens: &[Token]) -> Result<String, FormatError> {
    serde_json::to_string_pretty(tokens)
        .map_err(|err| FormatError::SerializationError(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chav::lexing::lex;

    #[test]
    fn test_simple_groups_by_source_line() {
        let tokens = lex("int main() {\n\n  return 0u;\n}").unwrap();
        assert_eq!(
            tokens_to_simple_str(&tokens),
            "TypeKeyword(int) Identifier(main) OpenParen(() CloseParen()) OpenBrace({)\n\
             ReturnKeyword(return) UnsignedIntegerLiteral(0u) Semicolon(;)\n\
             CloseBrace(})\n"
        );
    }

    #[test]
    fn test_simple_empty() {
        assert_eq!(tokens_to_simple_str(&[]), "");
    }

    #[test]
    fn test_json_carries_literal_values() {
        let tokens = lex("x = 7u;").unwrap();
        let json: serde_json::Value = serde_json::from_str(&tokens_to_json(&tokens).unwrap()).unwrap();
        assert_eq!(json[0]["kind"], "Identifier");
        assert_eq!(json[2]["text"], "7u");
        assert_eq!(json[2]["literal"]["UInt"], 7);
        assert_eq!(json[2]["line"], 1);
        assert!(json[0].get("literal").is_none());
    }
}
