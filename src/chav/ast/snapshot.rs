//! AST Snapshot - a normalized intermediate representation of the AST tree
//!
//! This module provides a canonical, format-agnostic representation of a parsed
//! program suitable for serialization to any output format (JSON, YAML, treeviz).
//!
//! The snapshot captures the complete tree structure with node types, labels,
//! attributes, and children, so each serializer only deals with presentation.
//! Attributes live in a sorted map so that serialized output is stable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::node::{NodeId, NodeKind};
use super::tree::Program;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The type of node (e.g., "Function", "VariableDeclaration")
    pub node_type: String,

    /// The one-line label of the node
    pub label: String,

    /// Additional attributes specific to the node type
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    /// Child nodes in the tree
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    /// Create a new snapshot with the given node type and label
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute to this snapshot
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Add a child snapshot
    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }
}

/// Snapshot of the whole program.
pub fn snapshot_from_program(program: &Program) -> AstSnapshot {
    snapshot_from_node(program, program.root())
}

/// Snapshot of `id` and all its descendants.
pub fn snapshot_from_node(program: &Program, id: NodeId) -> AstSnapshot {
    let kind = program.kind(id);
    let snapshot = with_payload_attributes(AstSnapshot::new(kind.node_type(), kind.display_label()), kind);

    program
        .children(id)
        .iter()
        .fold(snapshot, |snapshot, &child| {
            snapshot.with_child(snapshot_from_node(program, child))
        })
}

fn with_payload_attributes(snapshot: AstSnapshot, kind: &NodeKind) -> AstSnapshot {
    match kind {
        NodeKind::Program | NodeKind::Return => snapshot,
        NodeKind::Function(function) => {
            let parameters: Vec<String> = function.parameters.iter().map(|p| p.to_string()).collect();
            snapshot
                .with_attribute("return_type", function.return_type.as_str())
                .with_attribute("name", function.name.as_str())
                .with_attribute("parameters", parameters.join(", "))
        }
        NodeKind::VariableDeclaration(var) => {
            let snapshot = snapshot
                .with_attribute("type", var.type_name.as_str())
                .with_attribute("name", var.name.as_str());
            match &var.default_value {
                Some(value) => snapshot.with_attribute("default", value.as_str()),
                None => snapshot,
            }
        }
        NodeKind::IntLiteral(value) => snapshot.with_attribute("value", value.to_string()),
        NodeKind::UIntLiteral(value) => snapshot.with_attribute("value", value.to_string()),
        NodeKind::Identifier(name) => snapshot.with_attribute("name", name.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chav::ast::node::{Function, Parameter, VariableDeclaration};

    #[test]
    fn test_snapshot_mirrors_tree() {
        let mut program = Program::new();
        let root = program.root();
        let main = program.attach(
            root,
            NodeKind::Function(Function {
                return_type: "int".to_string(),
                name: "main".to_string(),
                parameters: vec![Parameter::new("int", "a")],
            }),
        );
        program.attach(
            main,
            NodeKind::VariableDeclaration(VariableDeclaration {
                type_name: "int".to_string(),
                name: "x".to_string(),
                default_value: Some("5".to_string()),
            }),
        );

        let snapshot = snapshot_from_program(&program);
        assert_eq!(snapshot.node_type, "Program");
        assert_eq!(snapshot.children.len(), 1);

        let function = &snapshot.children[0];
        assert_eq!(function.label, "FUNCTION main(int a)");
        assert_eq!(function.attributes["parameters"], "int a");

        let var = &function.children[0];
        assert_eq!(var.label, "VAR int x = 5");
        assert_eq!(var.attributes["default"], "5");
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let snapshot = AstSnapshot::new("Return", "RETURN")
            .with_child(AstSnapshot::new("IntLiteral", "INT 2").with_attribute("value", "2"));
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: AstSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
