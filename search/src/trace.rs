//! `SearchTraceV1`: expansion-event audit log.
//!
//! The normative surface is the ordered list of `ExpandEventV1` entries: one
//! per frontier removal, listing every neighbor considered and what the
//! driver did with it. Node summaries are a derived index for path
//! reconstruction. States and relations are recorded through their
//! `Display` form, so a trace can be compared across processes.

use std::collections::HashMap;
use std::fmt::Display;

use sha2::{Digest, Sha256};

use crate::frontier::FrontierKind;
use crate::node::{NodeId, SearchNode};
use crate::policy::NeighborOrder;
use crate::search::{SearchStats, TerminationReason};

/// Domain prefix for search trace digests.
pub const DOMAIN_SEARCH_TRACE: &[u8] = b"DEGREES::SEARCH_TRACE::V1\0";

/// The complete search audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTraceV1 {
    /// Ordered expansion events (normative decision surface).
    pub expansions: Vec<ExpandEventV1>,
    /// Derived node index sorted by `node_id` ascending.
    pub node_summaries: Vec<NodeSummaryV1>,
    /// Aggregate metadata and policy echo.
    pub metadata: TraceMetadataV1,
}

/// A single frontier-removal + neighbor-expansion event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEventV1 {
    /// Total order of frontier removals.
    pub expansion_order: u64,
    /// The node being expanded.
    pub node_id: NodeId,
    /// Display form of the expanded state.
    pub state: String,
    pub depth: u32,
    /// Neighbors in the order they were processed.
    pub neighbors: Vec<NeighborRecordV1>,
}

/// One `(relation, state)` pair considered during an expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborRecordV1 {
    /// Position in the processed neighbor list.
    pub index: u64,
    pub relation: String,
    pub state: String,
    pub outcome: NeighborOutcomeV1,
}

/// What the driver did with a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborOutcomeV1 {
    /// New node created and added to the frontier.
    Enqueued { to_node: NodeId },
    /// New node created for the target; the search stopped here.
    GoalReached { to_node: NodeId },
    /// State was already expanded.
    AlreadyVisited,
    /// State was already waiting in the frontier.
    AlreadyInFrontier,
}

/// Derived node summary for path reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSummaryV1 {
    pub node_id: NodeId,
    pub parent_id: Option<NodeId>,
    pub action: Option<String>,
    pub state: String,
    pub depth: u32,
    pub is_goal: bool,
    /// Position in `expansions` if this node was expanded.
    pub expansion_order: Option<u64>,
}

/// Aggregate metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceMetadataV1 {
    // Bindings
    pub graph_id: String,
    pub source: String,
    pub target: String,

    // Counters
    pub total_expansions: u64,
    pub total_nodes_created: u64,
    pub total_neighbors_enumerated: u64,
    pub total_duplicates_suppressed: u64,
    pub frontier_high_water: u64,
    pub termination: TerminationReason,

    // Policy echo
    pub frontier_kind: FrontierKind,
    pub neighbor_order: NeighborOrder,
}

// ---------------------------------------------------------------------------
// Recording
// ---------------------------------------------------------------------------

/// Incremental builder the driver feeds while it runs.
#[derive(Debug, Default)]
pub(crate) struct TraceRecorder {
    expansions: Vec<ExpandEventV1>,
}

impl TraceRecorder {
    pub(crate) fn begin_expansion<S: Display, R>(&mut self, node: &SearchNode<S, R>) {
        self.expansions.push(ExpandEventV1 {
            expansion_order: self.expansions.len() as u64,
            node_id: node.node_id,
            state: node.state.to_string(),
            depth: node.depth,
            neighbors: Vec::new(),
        });
    }

    pub(crate) fn record_neighbor<S: Display, R: Display>(
        &mut self,
        relation: &R,
        state: &S,
        outcome: NeighborOutcomeV1,
    ) {
        if let Some(event) = self.expansions.last_mut() {
            event.neighbors.push(NeighborRecordV1 {
                index: event.neighbors.len() as u64,
                relation: relation.to_string(),
                state: state.to_string(),
                outcome,
            });
        }
    }

    pub(crate) fn finish<S: Display, R: Display>(
        self,
        nodes: &[SearchNode<S, R>],
        metadata: TraceMetadataV1,
    ) -> SearchTraceV1 {
        let goal_id = match metadata.termination {
            TerminationReason::GoalReached { node_id } => Some(node_id),
            TerminationReason::SourceIsTarget => Some(0),
            TerminationReason::FrontierExhausted => None,
        };

        // O(N) lookup instead of scanning expansions per node.
        let expansion_index: HashMap<NodeId, u64> = self
            .expansions
            .iter()
            .map(|e| (e.node_id, e.expansion_order))
            .collect();

        let mut node_summaries: Vec<NodeSummaryV1> = nodes
            .iter()
            .map(|n| NodeSummaryV1 {
                node_id: n.node_id,
                parent_id: n.parent_id(),
                action: n.action().map(ToString::to_string),
                state: n.state.to_string(),
                depth: n.depth,
                is_goal: goal_id == Some(n.node_id),
                expansion_order: expansion_index.get(&n.node_id).copied(),
            })
            .collect();
        node_summaries.sort_by_key(|n| n.node_id);

        SearchTraceV1 {
            expansions: self.expansions,
            node_summaries,
            metadata,
        }
    }
}

impl TraceMetadataV1 {
    pub(crate) fn new<S: Display>(
        graph_id: &str,
        source: &S,
        target: &S,
        stats: &SearchStats,
        termination: TerminationReason,
        frontier_kind: FrontierKind,
        neighbor_order: NeighborOrder,
    ) -> Self {
        Self {
            graph_id: graph_id.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            total_expansions: stats.expansions,
            total_nodes_created: stats.nodes_created,
            total_neighbors_enumerated: stats.neighbors_enumerated,
            total_duplicates_suppressed: stats.duplicates_suppressed,
            frontier_high_water: stats.frontier_high_water,
            termination,
            frontier_kind,
            neighbor_order,
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchTraceV1 {
    /// Serialize the trace to canonical JSON bytes.
    ///
    /// Object keys are sorted (serde_json's default `Map` is a `BTreeMap`),
    /// separators are compact, and every number is an integer, so equal
    /// traces always produce equal bytes.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }

    /// Content digest over the canonical bytes: `"sha256:<hex>"`.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if serialization fails.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        Ok(digest_canonical_bytes(&self.to_canonical_json_bytes()?))
    }

    /// Convert to a `serde_json::Value` for canonical serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let expansions: Vec<_> = self.expansions.iter().map(expand_event_to_json).collect();
        let node_summaries: Vec<_> = self.node_summaries.iter().map(node_summary_to_json).collect();
        serde_json::json!({
            "expansions": expansions,
            "metadata": metadata_to_json(&self.metadata),
            "node_summaries": node_summaries,
        })
    }
}

/// Digest of already-serialized canonical trace bytes: `"sha256:<hex>"`.
///
/// Equal to [`SearchTraceV1::digest`] when `bytes` came from
/// [`SearchTraceV1::to_canonical_json_bytes`].
#[must_use]
pub fn digest_canonical_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_SEARCH_TRACE);
    hasher.update(bytes);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

fn expand_event_to_json(e: &ExpandEventV1) -> serde_json::Value {
    serde_json::json!({
        "depth": e.depth,
        "expansion_order": e.expansion_order,
        "neighbors": e.neighbors.iter().map(neighbor_record_to_json).collect::<Vec<_>>(),
        "node_id": e.node_id,
        "state": e.state,
    })
}

fn neighbor_record_to_json(r: &NeighborRecordV1) -> serde_json::Value {
    serde_json::json!({
        "index": r.index,
        "outcome": outcome_to_json(r.outcome),
        "relation": r.relation,
        "state": r.state,
    })
}

fn outcome_to_json(o: NeighborOutcomeV1) -> serde_json::Value {
    match o {
        NeighborOutcomeV1::Enqueued { to_node } => {
            serde_json::json!({"to_node": to_node, "type": "enqueued"})
        }
        NeighborOutcomeV1::GoalReached { to_node } => {
            serde_json::json!({"to_node": to_node, "type": "goal_reached"})
        }
        NeighborOutcomeV1::AlreadyVisited => serde_json::json!({"type": "already_visited"}),
        NeighborOutcomeV1::AlreadyInFrontier => {
            serde_json::json!({"type": "already_in_frontier"})
        }
    }
}

fn node_summary_to_json(n: &NodeSummaryV1) -> serde_json::Value {
    serde_json::json!({
        "action": n.action,
        "depth": n.depth,
        "expansion_order": n.expansion_order,
        "is_goal": n.is_goal,
        "node_id": n.node_id,
        "parent_id": n.parent_id,
        "state": n.state,
    })
}

fn metadata_to_json(m: &TraceMetadataV1) -> serde_json::Value {
    serde_json::json!({
        "frontier_high_water": m.frontier_high_water,
        "frontier_kind": m.frontier_kind.as_str(),
        "graph_id": m.graph_id,
        "neighbor_order": m.neighbor_order.as_str(),
        "source": m.source,
        "target": m.target,
        "termination": termination_to_json(m.termination),
        "total_duplicates_suppressed": m.total_duplicates_suppressed,
        "total_expansions": m.total_expansions,
        "total_neighbors_enumerated": m.total_neighbors_enumerated,
        "total_nodes_created": m.total_nodes_created,
    })
}

fn termination_to_json(r: TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::SourceIsTarget => serde_json::json!({"type": "source_is_target"}),
        TerminationReason::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": "goal_reached"})
        }
        TerminationReason::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
    }
}
