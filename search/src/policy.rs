//! Search policy types.

use crate::error::SearchError;
use crate::frontier::FrontierKind;

/// Search configuration, fixed for the duration of one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Frontier removal discipline (default: `Queue`).
    pub frontier: FrontierKind,
    /// How each expansion's neighbors are ordered before processing
    /// (default: `Canonical`).
    pub neighbor_order: NeighborOrder,
    /// Whether to build a [`SearchTraceV1`](crate::trace::SearchTraceV1).
    pub record_trace: bool,
}

impl SearchPolicy {
    /// Validate that this policy guarantees minimum-hop paths.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedPolicyMode`] if the frontier is a
    /// stack: LIFO removal finds *a* path, not necessarily a shortest one.
    pub fn validate_shortest_path(&self) -> Result<(), SearchError> {
        if self.frontier == FrontierKind::Stack {
            return Err(SearchError::UnsupportedPolicyMode {
                detail: "FrontierKind::Stack does not guarantee a minimum-hop path".into(),
            });
        }
        Ok(())
    }

    /// Same policy with trace recording switched on.
    #[must_use]
    pub fn with_trace(self) -> Self {
        Self {
            record_trace: true,
            ..self
        }
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            frontier: FrontierKind::Queue,
            neighbor_order: NeighborOrder::Canonical,
            record_trace: false,
        }
    }
}

/// Neighbor ordering applied to each expansion.
///
/// When several shortest paths exist, the one returned depends on the order
/// neighbors are processed in. `Canonical` makes that choice reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborOrder {
    /// Process pairs exactly as the graph model yields them.
    AsEnumerated,
    /// Sort pairs by `(relation, state)` and drop exact duplicates.
    Canonical,
}

impl NeighborOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AsEnumerated => "as_enumerated",
            Self::Canonical => "canonical",
        }
    }
}
