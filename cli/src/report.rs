//! Human-readable rendering of a search result.

use degrees_dataset::{Dataset, MovieId, PersonId};
use degrees_search::Path;

/// Render the lines printed for a found path.
///
/// First line is the hop count; then one line per hop naming both people
/// and the movie linking them. Ids missing from the dataset print as-is.
#[must_use]
pub fn render_path(
    dataset: &Dataset,
    source: &PersonId,
    path: &Path<MovieId, PersonId>,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(path.len() + 1);
    lines.push(format!("{} degrees of separation.", path.len()));

    let mut previous = source;
    for (i, (movie, person)) in path.iter().enumerate() {
        lines.push(format!(
            "{}: {} and {} starred in {}",
            i + 1,
            person_name(dataset, previous),
            person_name(dataset, person),
            movie_title(dataset, movie),
        ));
        previous = person;
    }
    lines
}

fn person_name<'a>(dataset: &'a Dataset, id: &'a PersonId) -> &'a str {
    dataset.person(id).map_or(id.as_str(), |p| p.name.as_str())
}

fn movie_title<'a>(dataset: &'a Dataset, id: &'a MovieId) -> &'a str {
    dataset.movie(id).map_or(id.as_str(), |m| m.title.as_str())
}
