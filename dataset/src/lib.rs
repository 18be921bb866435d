//! Degrees Dataset: the people/movies graph the search core runs over.
//!
//! Loads three CSV tables (`people.csv`, `movies.csv`, `stars.csv`) into an
//! immutable [`Dataset`], which implements [`GraphModel`] with people as
//! states and movies as relations. Also owns name lookup and the
//! disambiguation of people who share a name.
//!
//! [`GraphModel`]: degrees_search::GraphModel

#![forbid(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod ids;
pub mod loader;
pub mod records;
pub mod resolve;

pub use dataset::{Dataset, DatasetBuilder, Movie, Person};
pub use error::DatasetError;
pub use ids::{MovieId, PersonId};
pub use loader::load_dir;
pub use resolve::{NameResolution, PersonCandidate};
