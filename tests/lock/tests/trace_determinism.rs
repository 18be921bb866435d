//! Lock tests for the search trace: byte-identical across runs, and the
//! recorded events agree with the outcome's counters and path.

use degrees_dataset::{load_dir, PersonId};
use degrees_search::policy::SearchPolicy;
use degrees_search::search::TerminationReason;
use degrees_search::search;
use degrees_search::trace::{NeighborOutcomeV1, DOMAIN_SEARCH_TRACE};
use lock_tests::{numbered_graph, small_dataset_dir};
use sha2::{Digest, Sha256};

#[test]
fn trace_bytes_and_digest_are_stable_n10() {
    let dataset = load_dir(&small_dataset_dir()).unwrap();
    let policy = SearchPolicy::default().with_trace();
    let cruise = PersonId::new("129");
    let hanks = PersonId::new("158");

    let first = search(&dataset, &cruise, &hanks, &policy).unwrap();
    let trace = first.trace.as_ref().unwrap();
    let first_bytes = trace.to_canonical_json_bytes().unwrap();
    let first_digest = trace.digest().unwrap();
    assert!(first_digest.starts_with("sha256:"));
    assert_eq!(first_digest.len(), "sha256:".len() + 64);

    for _ in 1..10 {
        let again = search(&dataset, &cruise, &hanks, &policy).unwrap();
        let t = again.trace.as_ref().unwrap();
        assert_eq!(t.to_canonical_json_bytes().unwrap(), first_bytes);
        assert_eq!(t.digest().unwrap(), first_digest);
        assert_eq!(again.path, first.path);
    }
}

#[test]
fn different_queries_produce_different_digests() {
    let dataset = load_dir(&small_dataset_dir()).unwrap();
    let policy = SearchPolicy::default().with_trace();
    let digest = |a: &str, b: &str| {
        search(&dataset, &PersonId::new(a), &PersonId::new(b), &policy)
            .unwrap()
            .trace
            .unwrap()
            .digest()
            .unwrap()
    };
    assert_ne!(digest("129", "158"), digest("144", "158"));
}

#[test]
fn trace_counters_match_outcome_stats() {
    let g = numbered_graph(7, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (5, 6)]);
    let policy = SearchPolicy::default().with_trace();
    let outcome = search(&g, &0, &4, &policy).unwrap();
    let trace = outcome.trace.as_ref().unwrap();
    let meta = &trace.metadata;

    assert_eq!(meta.total_expansions, outcome.stats.expansions);
    assert_eq!(meta.total_nodes_created, outcome.stats.nodes_created);
    assert_eq!(meta.total_neighbors_enumerated, outcome.stats.neighbors_enumerated);
    assert_eq!(meta.total_duplicates_suppressed, outcome.stats.duplicates_suppressed);
    assert_eq!(meta.frontier_high_water, outcome.stats.frontier_high_water);
    assert_eq!(meta.termination, outcome.termination);

    assert_eq!(trace.expansions.len() as u64, outcome.stats.expansions);
    assert_eq!(trace.node_summaries.len() as u64, outcome.stats.nodes_created);
    let recorded: usize = trace.expansions.iter().map(|e| e.neighbors.len()).sum();
    assert_eq!(recorded as u64, outcome.stats.neighbors_enumerated);
}

#[test]
fn goal_event_matches_termination_and_path() {
    let g = numbered_graph(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
    let outcome = search(&g, &0, &4, &SearchPolicy::default().with_trace()).unwrap();
    let TerminationReason::GoalReached { node_id } = outcome.termination else {
        panic!("expected goal, got {:?}", outcome.termination);
    };
    let trace = outcome.trace.unwrap();

    let goal_events: Vec<_> = trace
        .expansions
        .iter()
        .flat_map(|e| &e.neighbors)
        .filter(|r| matches!(r.outcome, NeighborOutcomeV1::GoalReached { .. }))
        .collect();
    assert_eq!(goal_events.len(), 1);
    assert_eq!(goal_events[0].outcome, NeighborOutcomeV1::GoalReached { to_node: node_id });
    assert_eq!(goal_events[0].state, "4");

    // Walk the summaries back from the goal: same hop count as the path.
    let mut hops = 0;
    let mut at = node_id;
    while let Some(parent) = trace.node_summaries[usize::try_from(at).unwrap()].parent_id {
        hops += 1;
        at = parent;
    }
    assert_eq!(Some(hops), outcome.path.map(|p| p.len()));
    assert_eq!(trace.node_summaries.iter().filter(|n| n.is_goal).count(), 1);
}

#[test]
fn unreachable_target_ends_with_exhausted_frontier() {
    let g = numbered_graph(4, &[(0, 1), (2, 3)]);
    let outcome = search(&g, &0, &3, &SearchPolicy::default().with_trace()).unwrap();
    let trace = outcome.trace.unwrap();
    assert_eq!(trace.metadata.termination, TerminationReason::FrontierExhausted);
    assert_eq!(trace.expansions.len(), 2);
    assert!(trace.node_summaries.iter().all(|n| !n.is_goal));
}

#[test]
fn digest_is_domain_separated_sha256_of_canonical_bytes() {
    let g = numbered_graph(3, &[(0, 1), (1, 2)]);
    let trace = search(&g, &0, &2, &SearchPolicy::default().with_trace())
        .unwrap()
        .trace
        .unwrap();
    let bytes = trace.to_canonical_json_bytes().unwrap();

    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_SEARCH_TRACE);
    hasher.update(&bytes);
    let expected = format!("sha256:{}", hex::encode(hasher.finalize()));
    assert_eq!(trace.digest().unwrap(), expected);

    // Without the domain prefix the digest must differ.
    let bare = format!("sha256:{}", hex::encode(Sha256::digest(&bytes)));
    assert_ne!(trace.digest().unwrap(), bare);
}
