//! Core search node type.

/// Identifier of a node within one search call.
///
/// Assigned monotonically at creation; the root is always `0`.
pub type NodeId = u64;

/// Backward link from a node to the node it was expanded from.
///
/// The parent id and the relation that was traversed only ever exist
/// together, so they travel as one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentLink<R> {
    /// The predecessor node.
    pub parent_id: NodeId,
    /// The relation traversed from the parent's state to this node's state.
    pub action: R,
}

/// An immutable search node.
///
/// Nodes form a tree rooted at the search's start state. Parent links are
/// node ids into the per-search arena rather than references, so the whole
/// tree is released in bulk when the search call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S, R> {
    /// Monotonic node identifier.
    pub node_id: NodeId,
    /// The state this node stands for.
    pub state: S,
    /// How this node was reached (`None` for the root).
    pub link: Option<ParentLink<R>>,
    /// Tree depth (root = 0). Equal to the hop count from the source.
    pub depth: u32,
}

impl<S, R> SearchNode<S, R> {
    /// Build the root node for `state`.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            node_id: 0,
            state,
            link: None,
            depth: 0,
        }
    }

    /// Build a child of `parent` reached by traversing `action`.
    #[must_use]
    pub fn child(node_id: NodeId, parent: &Self, action: R, state: S) -> Self {
        Self {
            node_id,
            state,
            link: Some(ParentLink {
                parent_id: parent.node_id,
                action,
            }),
            depth: parent.depth + 1,
        }
    }

    /// Parent node id (`None` for the root).
    #[must_use]
    pub fn parent_id(&self) -> Option<NodeId> {
        self.link.as_ref().map(|l| l.parent_id)
    }

    /// The relation that produced this node (`None` for the root).
    #[must_use]
    pub fn action(&self) -> Option<&R> {
        self.link.as_ref().map(|l| &l.action)
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.link.is_none()
    }
}
