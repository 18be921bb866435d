//! Typed dataset errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading or assembling a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A table file could not be opened or its header read.
    #[error("cannot read {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row could not be decoded into its record type.
    #[error("malformed row in {}: {source}", path.display())]
    MalformedRow {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The same identifier appeared twice in one table.
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}
