//! CSV loading: directory of three tables → [`Dataset`].
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   people.csv    id,name,birth
//!   movies.csv    id,title,year
//!   stars.csv     person_id,movie_id
//! ```
//!
//! Star rows naming an unknown person or movie are skipped, not fatal.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::dataset::Dataset;
use crate::error::DatasetError;
use crate::records::{MovieRecord, PersonRecord, StarRecord};

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

/// Load a dataset from `dir`.
///
/// The directory path (as displayed) becomes the dataset label.
///
/// # Errors
///
/// Returns [`DatasetError::Open`] if a table is missing or unreadable,
/// [`DatasetError::MalformedRow`] if a row cannot be decoded, and
/// [`DatasetError::DuplicateId`] if a person or movie id repeats.
pub fn load_dir(dir: &Path) -> Result<Dataset, DatasetError> {
    let mut builder = Dataset::builder(dir.display().to_string());

    let people: Vec<PersonRecord> = read_table(&dir.join(PEOPLE_FILE))?;
    for p in people {
        builder.add_person(p.id, p.name, p.birth)?;
    }

    let movies: Vec<MovieRecord> = read_table(&dir.join(MOVIES_FILE))?;
    for m in movies {
        builder.add_movie(m.id, m.title, m.year)?;
    }

    let stars: Vec<StarRecord> = read_table(&dir.join(STARS_FILE))?;
    let mut linked = 0usize;
    let mut skipped = 0usize;
    for s in &stars {
        if builder.add_star(&s.person_id, &s.movie_id) {
            linked += 1;
        } else {
            debug!(person = %s.person_id, movie = %s.movie_id, "skipping star row with unknown id");
            skipped += 1;
        }
    }
    if skipped > 0 {
        warn!(skipped, "star rows referenced unknown people or movies");
    }

    let dataset = builder.build();
    info!(
        dir = %dir.display(),
        people = dataset.people_count(),
        movies = dataset.movie_count(),
        stars = linked,
        "dataset loaded"
    );
    Ok(dataset)
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    reader
        .deserialize()
        .map(|row| {
            row.map_err(|source| DatasetError::MalformedRow {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}
