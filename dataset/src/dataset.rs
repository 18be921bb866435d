//! The immutable people/movies dataset and its graph model.

use std::collections::{BTreeSet, HashMap};

use degrees_search::GraphModel;
use tracing::debug;

use crate::error::DatasetError;
use crate::ids::{MovieId, PersonId};

/// A person and the movies they starred in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<u16>,
    pub movies: BTreeSet<MovieId>,
}

/// A movie and the people who starred in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: Option<u16>,
    pub stars: BTreeSet<PersonId>,
}

/// Loaded dataset. Read-only once built.
///
/// Construct through [`DatasetBuilder`] (or [`crate::load_dir`]), then share
/// by reference with every search.
#[derive(Debug, Clone)]
pub struct Dataset {
    label: String,
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    /// Lowercased name → every person with that name.
    names: HashMap<String, BTreeSet<PersonId>>,
}

impl Dataset {
    /// Start building a dataset identified by `label` (used as the graph id).
    #[must_use]
    pub fn builder(label: impl Into<String>) -> DatasetBuilder {
        DatasetBuilder {
            dataset: Self {
                label: label.into(),
                people: HashMap::new(),
                movies: HashMap::new(),
                names: HashMap::new(),
            },
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    #[must_use]
    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    #[must_use]
    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Every person whose name matches `name`, case-insensitively, in id order.
    #[must_use]
    pub fn person_ids_for_name(&self, name: &str) -> Vec<PersonId> {
        self.names
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// `(movie, co-star)` pairs for everyone who starred with `person`.
    ///
    /// Includes `person` itself once per movie; the search driver skips it
    /// as already visited. An unknown person has no neighbors.
    #[must_use]
    pub fn neighbors_for_person(&self, person: &PersonId) -> BTreeSet<(MovieId, PersonId)> {
        let Some(p) = self.people.get(person) else {
            debug!(%person, "neighbors requested for unknown person");
            return BTreeSet::new();
        };

        p.movies
            .iter()
            .filter_map(|movie_id| self.movies.get(movie_id))
            .flat_map(|movie| {
                movie
                    .stars
                    .iter()
                    .map(move |star| (movie.id.clone(), star.clone()))
            })
            .collect()
    }
}

impl GraphModel for Dataset {
    type State = PersonId;
    type Relation = MovieId;

    fn graph_id(&self) -> &str {
        &self.label
    }

    fn neighbors(&self, state: &PersonId) -> Vec<(MovieId, PersonId)> {
        self.neighbors_for_person(state).into_iter().collect()
    }
}

/// Mutable staging area for a [`Dataset`].
#[derive(Debug)]
pub struct DatasetBuilder {
    dataset: Dataset,
}

impl DatasetBuilder {
    /// Register a person.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DuplicateId`] if `id` is already registered.
    pub fn add_person(
        &mut self,
        id: PersonId,
        name: impl Into<String>,
        birth: Option<u16>,
    ) -> Result<&mut Self, DatasetError> {
        if self.dataset.people.contains_key(&id) {
            return Err(DatasetError::DuplicateId {
                kind: "person",
                id: id.to_string(),
            });
        }
        let name = name.into();
        self.dataset
            .names
            .entry(name.to_lowercase())
            .or_default()
            .insert(id.clone());
        self.dataset.people.insert(
            id.clone(),
            Person {
                id,
                name,
                birth,
                movies: BTreeSet::new(),
            },
        );
        Ok(self)
    }

    /// Register a movie.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DuplicateId`] if `id` is already registered.
    pub fn add_movie(
        &mut self,
        id: MovieId,
        title: impl Into<String>,
        year: Option<u16>,
    ) -> Result<&mut Self, DatasetError> {
        if self.dataset.movies.contains_key(&id) {
            return Err(DatasetError::DuplicateId {
                kind: "movie",
                id: id.to_string(),
            });
        }
        self.dataset.movies.insert(
            id.clone(),
            Movie {
                id,
                title: title.into(),
                year,
                stars: BTreeSet::new(),
            },
        );
        Ok(self)
    }

    /// Link a person to a movie they starred in.
    ///
    /// Returns `false` (and links nothing) if either id is unknown.
    pub fn add_star(&mut self, person: &PersonId, movie: &MovieId) -> bool {
        let (Some(p), Some(m)) = (
            self.dataset.people.get_mut(person),
            self.dataset.movies.get_mut(movie),
        ) else {
            return false;
        };
        p.movies.insert(movie.clone());
        m.stars.insert(person.clone());
        true
    }

    #[must_use]
    pub fn build(self) -> Dataset {
        self.dataset
    }
}
