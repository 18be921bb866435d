//! Binary that runs a traced search over the `data/small` fixture and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `trace_fixture [SOURCE_ID TARGET_ID]` (default `129 158`).
//!
//! Output: key=value lines (see source for format).

use degrees_dataset::{load_dir, PersonId};
use degrees_search::policy::SearchPolicy;
use degrees_search::search;
use lock_tests::small_dataset_dir;

fn main() {
    let mut args = std::env::args().skip(1);
    let source = PersonId::new(args.next().unwrap_or_else(|| "129".into()));
    let target = PersonId::new(args.next().unwrap_or_else(|| "158".into()));

    let dataset = load_dir(&small_dataset_dir()).expect("fixture dataset loads");
    let outcome = search(&dataset, &source, &target, &SearchPolicy::default().with_trace())
        .expect("search succeeds");
    let trace = outcome.trace.as_ref().expect("trace requested");

    let path: Vec<String> = outcome
        .path
        .iter()
        .flatten()
        .map(|(movie, person)| format!("{movie}>{person}"))
        .collect();

    println!("trace_digest={}", trace.digest().expect("trace serializes"));
    println!("degrees={}", outcome.degrees().map_or(-1, |d| i64::try_from(d).unwrap_or(-1)));
    println!("path={}", path.join(","));
    println!("total_expansions={}", outcome.stats.expansions);
    println!("total_nodes_created={}", outcome.stats.nodes_created);
    println!("frontier_high_water={}", outcome.stats.frontier_high_water);
}
