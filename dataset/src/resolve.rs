//! Name → person resolution.
//!
//! Several people can share a name. Resolution reports every match; picking
//! one is left to the caller (the CLI prompts for an id).

use crate::dataset::Dataset;
use crate::ids::PersonId;

/// A person offered to the user when a name is ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonCandidate {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<u16>,
}

/// Outcome of looking a name up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameResolution {
    /// No person has this name.
    NotFound,
    /// Exactly one person has this name.
    Unique(PersonId),
    /// Several people share the name, listed in id order.
    Ambiguous(Vec<PersonCandidate>),
}

impl NameResolution {
    /// Pick a person by id from this resolution.
    ///
    /// Only ids that were actually offered are accepted; anything else
    /// (including a valid id for a different person) yields `None`.
    #[must_use]
    pub fn choose(&self, input: &str) -> Option<PersonId> {
        let input = input.trim();
        match self {
            Self::NotFound => None,
            Self::Unique(id) => (id.as_str() == input).then(|| id.clone()),
            Self::Ambiguous(candidates) => candidates
                .iter()
                .find(|c| c.id.as_str() == input)
                .map(|c| c.id.clone()),
        }
    }
}

impl Dataset {
    /// Resolve a user-supplied name (case-insensitive).
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> NameResolution {
        let mut ids = self.person_ids_for_name(name);
        match ids.len() {
            0 => NameResolution::NotFound,
            1 => NameResolution::Unique(ids.remove(0)),
            _ => NameResolution::Ambiguous(
                ids.into_iter()
                    .filter_map(|id| self.person(&id))
                    .map(|p| PersonCandidate {
                        id: p.id.clone(),
                        name: p.name.clone(),
                        birth: p.birth,
                    })
                    .collect(),
            ),
        }
    }
}
