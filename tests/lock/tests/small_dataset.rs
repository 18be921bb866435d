//! End-to-end searches over the checked-in `data/small` fixture.

use degrees_dataset::{load_dir, Dataset, MovieId, NameResolution, PersonId};
use degrees_search::shortest_path;
use lock_tests::small_dataset_dir;

fn small() -> Dataset {
    load_dir(&small_dataset_dir()).unwrap()
}

fn id_of(d: &Dataset, name: &str) -> PersonId {
    match d.resolve_name(name) {
        NameResolution::Unique(id) => id,
        other => panic!("{name}: {other:?}"),
    }
}

fn hop(movie: &str, person: &str) -> (MovieId, PersonId) {
    (MovieId::new(movie), PersonId::new(person))
}

#[test]
fn fixture_loads_completely() {
    let d = small();
    assert_eq!(d.people_count(), 16);
    assert_eq!(d.movie_count(), 5);
    let apollo = d.movie(&MovieId::new("112384")).unwrap();
    assert_eq!(apollo.title, "Apollo 13");
    assert_eq!(apollo.stars.len(), 4);
}

#[test]
fn bacon_and_hanks_share_apollo_13() {
    let d = small();
    let path = shortest_path(&d, &id_of(&d, "Kevin Bacon"), &id_of(&d, "Tom Hanks"))
        .unwrap()
        .unwrap();
    assert_eq!(path, vec![hop("112384", "158")]);
}

#[test]
fn cruise_reaches_hanks_through_bacon() {
    let d = small();
    let path = shortest_path(&d, &id_of(&d, "Tom Cruise"), &id_of(&d, "Tom Hanks"))
        .unwrap()
        .unwrap();
    assert_eq!(path, vec![hop("104257", "102"), hop("112384", "158")]);
}

#[test]
fn elwes_reaches_hanks_through_robin_wright() {
    let d = small();
    let path = shortest_path(&d, &id_of(&d, "Cary Elwes"), &id_of(&d, "Tom Hanks"))
        .unwrap()
        .unwrap();
    assert_eq!(path, vec![hop("93779", "705"), hop("109830", "158")]);
}

#[test]
fn emma_watson_is_not_connected() {
    let d = small();
    let emma = id_of(&d, "Emma Watson");
    assert_eq!(shortest_path(&d, &emma, &id_of(&d, "Tom Hanks")).unwrap(), None);
    assert_eq!(shortest_path(&d, &id_of(&d, "Kevin Bacon"), &emma).unwrap(), None);
    assert_eq!(shortest_path(&d, &emma, &emma).unwrap(), Some(Vec::new()));
}

#[test]
fn everyone_with_a_movie_is_within_four_hops() {
    let d = small();
    let bacon = id_of(&d, "Kevin Bacon");
    let costars = [
        "129", "144", "158", "1597", "163", "1697", "193", "197", "200", "398", "420", "596520",
        "641", "705",
    ];
    for id in costars {
        let target = PersonId::new(id);
        let there = shortest_path(&d, &bacon, &target).unwrap().unwrap();
        let back = shortest_path(&d, &target, &bacon).unwrap().unwrap();
        assert!(there.len() <= 4, "{id}: {there:?}");
        assert_eq!(there.len(), back.len(), "{id}");
    }
}
