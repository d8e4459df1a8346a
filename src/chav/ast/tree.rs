//! Arena storage for a parsed program.

use super::error::TreeIntegrityError;
use super::node::{Node, NodeId, NodeKind};

/// A complete syntax tree, rooted at its single `Program` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    nodes: Vec<Node>,
}

impl Program {
    /// An empty program: just the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Program,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Panics if `id` does not belong to this program.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth-first, pre-order walk from the root.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            program: self,
            stack: vec![self.root()],
        }
    }

    /// Allocate a node as the last child of `parent`.
    ///
    /// This is the only way nodes enter the arena, and the parent link is set here
    /// once and for all.
    pub(crate) fn attach(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Check that every child reachable from the root points back at its parent.
    pub fn validate(&self) -> Result<(), TreeIntegrityError> {
        let root = self.root();
        if let Some(parent) = self.node(root).parent {
            return Err(TreeIntegrityError::RootHasParent { parent });
        }

        let mut visited = vec![false; self.nodes.len()];
        visited[root.0] = true;
        let mut pending = vec![root];

        while let Some(current) = pending.pop() {
            for &child in &self.node(current).children {
                let node = self.get(child).ok_or(TreeIntegrityError::DanglingChild {
                    parent: current,
                    child,
                })?;
                if node.parent != Some(current) {
                    return Err(TreeIntegrityError::ParentMismatch {
                        parent: current,
                        child,
                        recorded: node.parent,
                    });
                }
                if visited[child.0] {
                    return Err(TreeIntegrityError::SharedChild { child });
                }
                visited[child.0] = true;
                pending.push(child);
            }
        }

        Ok(())
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`Program::descendants`].
pub struct Descendants<'a> {
    program: &'a Program,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.program.node(id);
        self.stack.extend(node.children.iter().rev());
        Some((id, node))
    }
}
