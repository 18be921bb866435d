//! Row types for the three CSV tables.
//!
//! Non-numeric `birth`/`year` cells (including empty ones) load as `None`
//! rather than failing the whole file.

use serde::Deserialize;

use crate::ids::{MovieId, PersonId};

/// A row of `people.csv`: `id,name,birth`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonRecord {
    pub id: PersonId,
    pub name: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub birth: Option<u16>,
}

/// A row of `movies.csv`: `id,title,year`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub year: Option<u16>,
}

/// A row of `stars.csv`: `person_id,movie_id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StarRecord {
    pub person_id: PersonId,
    pub movie_id: MovieId,
}
