//! Typed CLI errors. Each maps to a non-zero exit.

use std::path::PathBuf;

use thiserror::Error;

use degrees_dataset::DatasetError;
use degrees_search::SearchError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Search(#[from] SearchError),

    /// Name unknown, or the disambiguation answer was not an offered id.
    #[error("Person not found.")]
    PersonNotFound { name: String },

    #[error("cannot write trace to {}: {detail}", path.display())]
    TraceWrite { path: PathBuf, detail: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
