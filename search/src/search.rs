//! Search entry points and expansion loop.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::contract::GraphModel;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::{NodeId, SearchNode};
use crate::policy::{NeighborOrder, SearchPolicy};
use crate::trace::{NeighborOutcomeV1, SearchTraceV1, TraceMetadataV1, TraceRecorder};

/// A root-to-target path: one `(relation, state)` pair per hop.
///
/// Position 0's relation connects the source to position 0's state; each
/// later pair connects the previous state to the next. The source itself is
/// not included, so `path.len()` is the hop count.
pub type Path<R, S> = Vec<(R, S)>;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// `source == target`; the path is empty and nothing was expanded.
    SourceIsTarget,
    /// A node for the target was created.
    GoalReached { node_id: NodeId },
    /// Frontier emptied without discovering the target.
    FrontierExhausted,
}

/// Counters collected during one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frontier removals (each one expands a distinct state).
    pub expansions: u64,
    /// Nodes created, root included.
    pub nodes_created: u64,
    /// `(relation, state)` pairs processed across all expansions.
    pub neighbors_enumerated: u64,
    /// Pairs skipped because the state was visited or already pending.
    pub duplicates_suppressed: u64,
    pub frontier_high_water: u64,
}

/// Result of a search execution.
#[derive(Debug, Clone)]
pub struct SearchOutcome<R, S> {
    /// `None` iff the target is unreachable from the source.
    pub path: Option<Path<R, S>>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
    /// Present when the policy asked for one.
    pub trace: Option<SearchTraceV1>,
}

impl<R, S> SearchOutcome<R, S> {
    /// Returns `true` if the target was reached (including the zero-hop case).
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.path.is_some()
    }

    /// Hop count of the found path.
    #[must_use]
    pub fn degrees(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}

/// Find a minimum-hop path from `source` to `target`.
///
/// Uses the default policy: FIFO frontier, canonical neighbor order, no
/// trace. Returns `Ok(None)` when the two states are not connected and
/// `Ok(Some(vec![]))` when they are the same state.
///
/// # Errors
///
/// Returns [`SearchError::EmptyFrontier`] only if the driver's own frontier
/// bookkeeping is violated.
pub fn shortest_path<G>(
    graph: &G,
    source: &G::State,
    target: &G::State,
) -> Result<Option<Path<G::Relation, G::State>>, SearchError>
where
    G: GraphModel + ?Sized,
{
    search(graph, source, target, &SearchPolicy::default()).map(|outcome| outcome.path)
}

/// Like [`shortest_path`], with an explicit policy and the full outcome.
///
/// # Errors
///
/// Returns [`SearchError::UnsupportedPolicyMode`] if the policy cannot
/// guarantee a minimum-hop path (see [`SearchPolicy::validate_shortest_path`]).
pub fn shortest_path_with_policy<G>(
    graph: &G,
    source: &G::State,
    target: &G::State,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<G::Relation, G::State>, SearchError>
where
    G: GraphModel + ?Sized,
{
    policy.validate_shortest_path()?;
    search(graph, source, target, policy)
}

/// Run an uninformed search from `source` until `target` is discovered or
/// the frontier is exhausted.
///
/// Every call builds its own frontier, visited set and node arena; nothing
/// carries over between calls. The target test happens when a child node is
/// created, not when it is removed, so under a FIFO frontier the first
/// discovery is at the shallowest depth.
///
/// # Errors
///
/// Returns [`SearchError::EmptyFrontier`] if a removal is attempted on an
/// empty frontier. The loop checks emptiness first, so this signals broken
/// internal bookkeeping rather than a property of the graph.
pub fn search<G>(
    graph: &G,
    source: &G::State,
    target: &G::State,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<G::Relation, G::State>, SearchError>
where
    G: GraphModel + ?Sized,
{
    let mut recorder = policy.record_trace.then(TraceRecorder::default);
    let mut stats = SearchStats::default();

    let root = SearchNode::root(source.clone());
    // Arena of every node created; index == node_id.
    let mut nodes: Vec<SearchNode<G::State, G::Relation>> = vec![root.clone()];
    stats.nodes_created = 1;

    if source == target {
        debug!(graph = graph.graph_id(), %source, "source is target, zero-hop path");
        return Ok(finish(
            graph,
            source,
            target,
            policy,
            recorder,
            &nodes,
            stats,
            TerminationReason::SourceIsTarget,
            Some(Vec::new()),
        ));
    }

    let mut frontier = Frontier::new(policy.frontier);
    let mut visited: HashSet<G::State> = HashSet::new();
    frontier.add(root);

    let termination = loop {
        if frontier.is_empty() {
            break TerminationReason::FrontierExhausted;
        }

        let current = frontier.remove()?;
        visited.insert(current.state.clone());
        stats.expansions += 1;
        trace!(
            node_id = current.node_id,
            state = %current.state,
            depth = current.depth,
            "expanding"
        );
        if let Some(r) = recorder.as_mut() {
            r.begin_expansion(&current);
        }

        let mut neighbors = graph.neighbors(&current.state);
        if policy.neighbor_order == NeighborOrder::Canonical {
            neighbors.sort();
            neighbors.dedup();
        }

        let mut goal = None;
        for (relation, state) in neighbors {
            stats.neighbors_enumerated += 1;

            let skipped = if visited.contains(&state) {
                Some(NeighborOutcomeV1::AlreadyVisited)
            } else if frontier.contains_state(&state) {
                Some(NeighborOutcomeV1::AlreadyInFrontier)
            } else {
                None
            };
            if let Some(outcome) = skipped {
                stats.duplicates_suppressed += 1;
                if let Some(r) = recorder.as_mut() {
                    r.record_neighbor(&relation, &state, outcome);
                }
                continue;
            }

            let child = SearchNode::child(nodes.len() as NodeId, &current, relation, state);
            stats.nodes_created += 1;
            nodes.push(child.clone());

            if &child.state == target {
                if let (Some(r), Some(action)) = (recorder.as_mut(), child.action()) {
                    r.record_neighbor(
                        action,
                        &child.state,
                        NeighborOutcomeV1::GoalReached {
                            to_node: child.node_id,
                        },
                    );
                }
                goal = Some(child.node_id);
                break;
            }

            if let (Some(r), Some(action)) = (recorder.as_mut(), child.action()) {
                r.record_neighbor(
                    action,
                    &child.state,
                    NeighborOutcomeV1::Enqueued {
                        to_node: child.node_id,
                    },
                );
            }
            frontier.add(child);
        }

        if let Some(node_id) = goal {
            break TerminationReason::GoalReached { node_id };
        }
    };
    stats.frontier_high_water = frontier.high_water() as u64;

    let path = match termination {
        TerminationReason::GoalReached { node_id } => Some(reconstruct_path(&nodes, node_id)),
        TerminationReason::SourceIsTarget => Some(Vec::new()),
        TerminationReason::FrontierExhausted => None,
    };

    debug!(
        graph = graph.graph_id(),
        %source,
        %target,
        ?termination,
        hops = path.as_ref().map(Vec::len),
        expansions = stats.expansions,
        nodes_created = stats.nodes_created,
        "search finished"
    );

    Ok(finish(
        graph,
        source,
        target,
        policy,
        recorder,
        &nodes,
        stats,
        termination,
        path,
    ))
}

#[allow(clippy::too_many_arguments)]
fn finish<G>(
    graph: &G,
    source: &G::State,
    target: &G::State,
    policy: &SearchPolicy,
    recorder: Option<TraceRecorder>,
    nodes: &[SearchNode<G::State, G::Relation>],
    stats: SearchStats,
    termination: TerminationReason,
    path: Option<Path<G::Relation, G::State>>,
) -> SearchOutcome<G::Relation, G::State>
where
    G: GraphModel + ?Sized,
{
    let trace = recorder.map(|r| {
        let metadata = TraceMetadataV1::new(
            graph.graph_id(),
            source,
            target,
            &stats,
            termination,
            policy.frontier,
            policy.neighbor_order,
        );
        r.finish(nodes, metadata)
    });

    SearchOutcome {
        path,
        termination,
        stats,
        trace,
    }
}

/// Reconstruct the path from the root to `goal_node_id`.
///
/// `nodes` must be the search's arena, indexed by `node_id`. Walks parent
/// links back to the root collecting `(action, state)` pairs, then reverses
/// into root-to-goal order. The root contributes nothing.
#[must_use]
pub fn reconstruct_path<S: Clone, R: Clone>(
    nodes: &[SearchNode<S, R>],
    goal_node_id: NodeId,
) -> Path<R, S> {
    let mut path = Vec::new();
    let mut current = usize::try_from(goal_node_id)
        .ok()
        .and_then(|i| nodes.get(i));

    while let Some(node) = current {
        let Some(link) = &node.link else {
            break;
        };
        path.push((link.action.clone(), node.state.clone()));
        current = usize::try_from(link.parent_id)
            .ok()
            .and_then(|i| nodes.get(i));
    }

    path.reverse();
    path
}
