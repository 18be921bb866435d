//! `AdjacencyGraph`: in-memory graph model built from an edge list.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::contract::GraphModel;

/// A labelled adjacency list.
///
/// Neighbors are yielded in insertion order. Edges are not deduplicated;
/// the driver's canonical neighbor order drops exact repeats.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<S, R> {
    graph_id: String,
    adjacency: HashMap<S, Vec<(R, S)>>,
}

impl<S, R> AdjacencyGraph<S, R>
where
    S: Clone + Eq + Hash,
    R: Clone,
{
    #[must_use]
    pub fn new(graph_id: impl Into<String>) -> Self {
        Self {
            graph_id: graph_id.into(),
            adjacency: HashMap::new(),
        }
    }

    /// Register a state with no edges (no-op if already present).
    pub fn add_state(&mut self, state: S) {
        self.adjacency.entry(state).or_default();
    }

    /// Add a one-way edge `from -relation-> to`.
    pub fn add_arc(&mut self, from: S, relation: R, to: S) {
        self.add_state(to.clone());
        self.adjacency.entry(from).or_default().push((relation, to));
    }

    /// Add an undirected edge: arcs in both directions with the same label.
    pub fn add_edge(&mut self, a: S, relation: R, b: S) {
        self.add_arc(a.clone(), relation.clone(), b.clone());
        self.add_arc(b, relation, a);
    }

    /// Whether `state` has been registered.
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.adjacency.contains_key(state)
    }

    /// Number of registered states.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Iterate over registered states (unordered).
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.adjacency.keys()
    }
}

impl<S, R> GraphModel for AdjacencyGraph<S, R>
where
    S: Clone + Eq + Hash + Ord + Debug + Display,
    R: Clone + Eq + Hash + Ord + Debug + Display,
{
    type State = S;
    type Relation = R;

    fn graph_id(&self) -> &str {
        &self.graph_id
    }

    fn neighbors(&self, state: &S) -> Vec<(R, S)> {
        self.adjacency.get(state).cloned().unwrap_or_default()
    }
}
