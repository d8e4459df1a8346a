//! Abstract Syntax Tree
//!
//!     The parser's output is a [`Program`]: an arena holding every node of one tree.
//!     Nodes refer to each other through [`NodeId`] indices, so parents and children
//!     can point at each other without shared ownership.
//!
//! Structure
//!
//!     - The root is always the single `Program` node.
//!     - Every other node has exactly one parent, fixed when the node is allocated.
//!     - Children are kept in insertion order, which is source order.
//!
//!     The tree is built once, by the parser, and is read-only afterwards. The
//!     parent/child invariant is not only assumed: [`Program::validate`] checks it.
//!
//! Snapshots
//!
//!     [snapshot](snapshot) turns the arena into a plain nested value. All renderers
//!     (treeviz, JSON, YAML) consume snapshots rather than walking the arena themselves.

pub mod error;
pub mod node;
pub mod snapshot;
pub mod tree;

pub use error::TreeIntegrityError;
pub use node::{Function, Node, NodeId, NodeKind, Parameter, VariableDeclaration};
pub use snapshot::{snapshot_from_node, snapshot_from_program, AstSnapshot};
pub use tree::{Descendants, Program};
