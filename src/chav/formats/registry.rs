//! The catalogue of output formats.

use std::fmt;
use std::str::FromStr;

use super::treeviz::TreevizOptions;
use crate::chav::ast::Program;
use crate::chav::token::Token;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No format with this name
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Pipeline stage a format consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Tokens,
    Ast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    TokensSimple,
    TokensJson,
    AstTreeviz,
    AstJson,
    AstYaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::TokensSimple,
        OutputFormat::TokensJson,
        OutputFormat::AstTreeviz,
        OutputFormat::AstJson,
        OutputFormat::AstYaml,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::TokensSimple => "tokens-simple",
            OutputFormat::TokensJson => "tokens-json",
            OutputFormat::AstTreeviz => "ast-treeviz",
            OutputFormat::AstJson => "ast-json",
            OutputFormat::AstYaml => "ast-yaml",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::TokensSimple => "One line per source line, Kind(text) per token",
            OutputFormat::TokensJson => "Token list with kinds, texts, lines and literal values",
            OutputFormat::AstTreeviz => "Visual tree with box-drawing connectors and icons",
            OutputFormat::AstJson => "Tree snapshot as JSON",
            OutputFormat::AstYaml => "Tree snapshot as YAML",
        }
    }

    pub fn stage(self) -> Stage {
        match self {
            OutputFormat::TokensSimple | OutputFormat::TokensJson => Stage::Tokens,
            OutputFormat::AstTreeviz | OutputFormat::AstJson | OutputFormat::AstYaml => {
                Stage::Ast
            }
        }
    }

    /// Render a token stream. Fails for tree formats.
    pub fn render_tokens(self, tokens: &[Token]) -> Result<String, FormatError> {
        match self {
            OutputFormat::TokensSimple => Ok(super::tokens_to_simple_str(tokens)),
            OutputFormat::TokensJson => super::tokens_to_json(tokens),
            other => Err(FormatError::SerializationError(format!(
                "{} renders program trees, not tokens",
                other
            ))),
        }
    }

    /// Render a program tree. Fails for token formats.
    pub fn render_program(
        self,
        program: &Program,
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        match self {
            OutputFormat::AstTreeviz => Ok(super::to_treeviz_str(program, &options.treeviz)),
            OutputFormat::AstJson => super::to_json(program, options.pretty_json),
            OutputFormat::AstYaml => super::to_yaml(program),
            other => Err(FormatError::SerializationError(format!(
                "{} renders tokens, not program trees",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| FormatError::FormatNotFound(s.to_string()))
    }
}

/// Knobs shared by the tree formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub treeviz: TreevizOptions,
    pub pretty_json: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            treeviz: TreevizOptions::default(),
            pretty_json: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chav::lexing::lex;

    #[test]
    fn test_names_round_trip() {
        for format in OutputFormat::ALL {
            assert_eq!(format.name().parse::<OutputFormat>(), Ok(format));
        }
    }

    #[test]
    fn test_unknown_format() {
        match "ast-tag".parse::<OutputFormat>() {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "ast-tag"),
            other => panic!("Expected FormatNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_stage_mismatch_is_an_error() {
        let tokens = lex("int x;").unwrap();
        assert!(OutputFormat::AstJson.render_tokens(&tokens).is_err());
        assert!(OutputFormat::TokensSimple
            .render_program(&Program::new(), &FormatOptions::default())
            .is_err());
    }

    #[test]
    fn test_stages() {
        assert_eq!(OutputFormat::TokensJson.stage(), Stage::Tokens);
        assert_eq!(OutputFormat::AstYaml.stage(), Stage::Ast);
    }
}
