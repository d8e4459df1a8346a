//! Node types and per-kind payloads.

use serde::Serialize;
use std::fmt;

/// Index of a node inside its [`Program`](super::Program) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A function parameter: `int a`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub type_name: String,
    pub name: String,
}

impl Parameter {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.name)
    }
}

/// Function definition payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    pub return_type: String,
    pub name: String,
    pub parameters: Vec<Parameter>,
}

/// Variable declaration payload. `default_value` keeps the literal text as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableDeclaration {
    pub type_name: String,
    pub name: String,
    pub default_value: Option<String>,
}

/// The per-kind part of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    Program,
    Function(Function),
    VariableDeclaration(VariableDeclaration),
    /// Zero or one child expression.
    Return,
    IntLiteral(i32),
    UIntLiteral(u32),
    Identifier(String),
}

impl NodeKind {
    /// Node type name, as used by snapshots and assertions.
    pub fn node_type(&self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::Function(_) => "Function",
            NodeKind::VariableDeclaration(_) => "VariableDeclaration",
            NodeKind::Return => "Return",
            NodeKind::IntLiteral(_) => "IntLiteral",
            NodeKind::UIntLiteral(_) => "UIntLiteral",
            NodeKind::Identifier(_) => "Identifier",
        }
    }

    /// One-line human readable label.
    pub fn display_label(&self) -> String {
        match self {
            NodeKind::Program => "PROGRAM".to_string(),
            NodeKind::Function(function) => {
                let parameters: Vec<String> =
                    function.parameters.iter().map(|p| p.to_string()).collect();
                format!("FUNCTION {}({})", function.name, parameters.join(", "))
            }
            NodeKind::VariableDeclaration(var) => format!(
                "VAR {} {} = {}",
                var.type_name,
                var.name,
                var.default_value.as_deref().unwrap_or("<DEFAULT>")
            ),
            NodeKind::Return => "RETURN".to_string(),
            NodeKind::IntLiteral(value) => format!("INT {}", value),
            NodeKind::UIntLiteral(value) => format!("UINT {}", value),
            NodeKind::Identifier(name) => format!("IDENT {}", name),
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            NodeKind::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableDeclaration> {
        match self {
            NodeKind::VariableDeclaration(var) => Some(var),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            NodeKind::IntLiteral(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u32> {
        match self {
            NodeKind::UIntLiteral(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            NodeKind::Identifier(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_return(&self) -> bool {
        matches!(self, NodeKind::Return)
    }
}

/// A node stored in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_label_lists_parameters() {
        let kind = NodeKind::Function(Function {
            return_type: "int".to_string(),
            name: "main".to_string(),
            parameters: vec![Parameter::new("int", "a"), Parameter::new("uint", "b")],
        });
        assert_eq!(kind.display_label(), "FUNCTION main(int a, uint b)");
        assert_eq!(kind.node_type(), "Function");
    }

    #[test]
    fn test_variable_label_marks_missing_default() {
        let kind = NodeKind::VariableDeclaration(VariableDeclaration {
            type_name: "int".to_string(),
            name: "foo".to_string(),
            default_value: None,
        });
        assert_eq!(kind.display_label(), "VAR int foo = <DEFAULT>");
    }

    #[test]
    fn test_payload_accessors() {
        assert_eq!(NodeKind::IntLiteral(-3).as_int(), Some(-3));
        assert_eq!(NodeKind::UIntLiteral(7).as_uint(), Some(7));
        assert_eq!(NodeKind::Identifier("x".into()).as_identifier(), Some("x"));
        assert!(NodeKind::Return.as_function().is_none());
        assert!(NodeKind::Program.as_variable().is_none());
    }
}
