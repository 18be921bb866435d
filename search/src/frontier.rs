//! Pending-node frontier with FIFO or LIFO removal.
//!
//! The frontier does not deduplicate on insertion. The driver checks
//! [`Frontier::contains_state`] (and its own visited set) before every
//! `add`, so the frontier only has to answer membership quickly. Membership
//! is kept as a state multiset next to the ordered node list, which makes
//! `contains_state` O(1) without changing `add`'s no-dedup contract.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;

use crate::error::SearchError;
use crate::node::SearchNode;

/// Removal discipline, fixed when the frontier is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrontierKind {
    /// Earliest-inserted node first (breadth-first).
    Queue,
    /// Most-recently-inserted node first (depth-first).
    Stack,
}

impl FrontierKind {
    /// Stable lowercase name used in traces and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Queue => "queue",
            Self::Stack => "stack",
        }
    }
}

impl fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered collection of not-yet-expanded nodes.
///
/// Not synchronized; a frontier belongs to exactly one search call.
#[derive(Debug)]
pub struct Frontier<S, R> {
    kind: FrontierKind,
    nodes: VecDeque<SearchNode<S, R>>,
    /// Number of held nodes per state.
    members: HashMap<S, usize>,
    high_water: usize,
}

impl<S, R> Frontier<S, R>
where
    S: Clone + Eq + Hash,
{
    /// Create an empty frontier with the given removal discipline.
    #[must_use]
    pub fn new(kind: FrontierKind) -> Self {
        Self {
            kind,
            nodes: VecDeque::new(),
            members: HashMap::new(),
            high_water: 0,
        }
    }

    /// Create an empty FIFO frontier.
    #[must_use]
    pub fn queue() -> Self {
        Self::new(FrontierKind::Queue)
    }

    /// Create an empty LIFO frontier.
    #[must_use]
    pub fn stack() -> Self {
        Self::new(FrontierKind::Stack)
    }

    /// Insert a node. No duplicate check is performed.
    pub fn add(&mut self, node: SearchNode<S, R>) {
        *self.members.entry(node.state.clone()).or_insert(0) += 1;
        self.nodes.push_back(node);
        self.high_water = self.high_water.max(self.nodes.len());
    }

    /// Extract one node according to the frontier's discipline.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontier`] if no nodes remain.
    pub fn remove(&mut self) -> Result<SearchNode<S, R>, SearchError> {
        let node = match self.kind {
            FrontierKind::Queue => self.nodes.pop_front(),
            FrontierKind::Stack => self.nodes.pop_back(),
        }
        .ok_or(SearchError::EmptyFrontier { kind: self.kind })?;

        if let Some(count) = self.members.get_mut(&node.state) {
            *count -= 1;
            if *count == 0 {
                self.members.remove(&node.state);
            }
        }
        Ok(node)
    }

    /// Whether any held node has `state`.
    #[must_use]
    pub fn contains_state(&self, state: &S) -> bool {
        self.members.contains_key(state)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn kind(&self) -> FrontierKind {
        self.kind
    }

    /// Largest number of nodes held at once.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
