//! Error types for AST operations

use std::fmt;

use super::node::NodeId;

/// A broken parent/child link found by [`Program::validate`](super::Program::validate).
///
/// The parser is the only code that adds nodes, so any of these is a parser defect,
/// never a problem with the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeIntegrityError {
    /// The root node records a parent.
    RootHasParent { parent: NodeId },
    /// A child index does not exist in the arena.
    DanglingChild { parent: NodeId, child: NodeId },
    /// A child's parent link does not point back at the node listing it.
    ParentMismatch {
        parent: NodeId,
        child: NodeId,
        recorded: Option<NodeId>,
    },
    /// A node is reachable along more than one path.
    SharedChild { child: NodeId },
}

impl fmt::Display for TreeIntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeIntegrityError::RootHasParent { parent } => {
                write!(f, "Tree corrupted: root records parent {}", parent)
            }
            TreeIntegrityError::DanglingChild { parent, child } => {
                write!(f, "Tree corrupted: {} lists missing child {}", parent, child)
            }
            TreeIntegrityError::ParentMismatch {
                parent,
                child,
                recorded,
            } => match recorded {
                Some(recorded) => write!(
                    f,
                    "Tree corrupted: {} is a child of {} but records parent {}",
                    child, parent, recorded
                ),
                None => write!(
                    f,
                    "Tree corrupted: {} is a child of {} but records no parent",
                    child, parent
                ),
            },
            TreeIntegrityError::SharedChild { child } => {
                write!(f, "Tree corrupted: {} is reachable more than once", child)
            }
        }
    }
}

impl std::error::Error for TreeIntegrityError {}
