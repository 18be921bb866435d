//! Typed search errors.
//!
//! An unreachable target is not an error: it is the `None` path of a
//! completed search. `SearchError` covers pre-flight policy rejection and
//! violations of the frontier's removal contract.

use thiserror::Error;

use crate::frontier::FrontierKind;

/// Typed failure for search execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// `remove()` was called on a frontier holding no nodes.
    ///
    /// The driver checks `is_empty()` before every removal, so seeing this
    /// from a search call means the loop's bookkeeping is broken.
    #[error("remove() called on empty {kind} frontier")]
    EmptyFrontier { kind: FrontierKind },

    /// The policy selected an option the requested operation cannot honor.
    #[error("unsupported policy mode: {detail}")]
    UnsupportedPolicyMode { detail: String },
}
