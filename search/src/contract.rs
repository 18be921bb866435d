//! Graph model contract trait.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for graphs that support search.
///
/// # Contract
///
/// - `neighbors` must be a pure function of the loaded graph: no side
///   effects, same `state` → same pairs.
/// - It is called once per expanded node and should cost O(degree).
/// - States passed in have already been validated by the caller. An unknown
///   state is the model's concern; the driver treats whatever comes back
///   (usually nothing) as the state's neighbors.
/// - The yielded order only decides which of several equal-length paths is
///   returned under [`NeighborOrder::AsEnumerated`]. Path length never
///   depends on it.
///
/// [`NeighborOrder::AsEnumerated`]: crate::policy::NeighborOrder::AsEnumerated
pub trait GraphModel {
    /// Opaque entity identifier.
    type State: Clone + Eq + Hash + Ord + Debug + Display;
    /// Opaque edge label, carried for path reporting only.
    type Relation: Clone + Eq + Hash + Ord + Debug + Display;

    /// Identifier of this graph, recorded in search traces.
    fn graph_id(&self) -> &str;

    /// All `(relation, neighbor)` pairs reachable from `state` in one step.
    fn neighbors(&self, state: &Self::State) -> Vec<(Self::Relation, Self::State)>;
}
