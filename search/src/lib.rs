//! Degrees Search: uninformed state-space search over unweighted graphs.
//!
//! This crate is the search core. It knows nothing about people, movies or
//! CSV files; it consumes any [`GraphModel`] and finds minimum-hop paths
//! between two of its states with breadth-first search.
//!
//! # Crate dependency graph
//!
//! ```text
//! degrees_search  ←  degrees_dataset  ←  degrees_cli
//! (frontier, bfs)    (csv, graph model)  (prompts, report)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`]: immutable node with a combined parent/action back-link
//! - [`Frontier`]: pending nodes under a FIFO or LIFO removal discipline
//! - [`GraphModel`]: trait the caller implements to expose neighbors
//! - [`SearchPolicy`]: frontier discipline, neighbor ordering, trace recording
//! - [`SearchTraceV1`]: optional expansion-event audit log
//!
//! [`SearchNode`]: node::SearchNode
//! [`Frontier`]: frontier::Frontier
//! [`GraphModel`]: contract::GraphModel
//! [`SearchPolicy`]: policy::SearchPolicy
//! [`SearchTraceV1`]: trace::SearchTraceV1

#![forbid(unsafe_code)]

pub mod adjacency;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;
pub mod trace;

pub use contract::GraphModel;
pub use error::SearchError;
pub use search::{search, shortest_path, shortest_path_with_policy, Path, SearchOutcome};
