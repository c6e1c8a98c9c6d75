use indexmap::IndexMap;
use std::collections::HashMap;
use weft_core::{Collection, Map, MapEntry};
use weft_map::{IterativeMap, MapBackingSet, MapSet};

fn seeded() -> MapBackingSet<IndexMap<&'static str, i32>> {
    let mut store = MapBackingSet::new(IndexMap::new());
    store.put_all([("a", 1), ("b", 2), ("c", 3)]).unwrap();
    store
}

#[test]
fn map_set_satisfies_the_set_and_map_laws() {
    let mut store = seeded();
    weft_testkit::assert_collection_laws(&store);
    weft_testkit::assert_map_laws(&store.as_map());
}

#[test]
fn the_two_faces_stay_consistent_through_interleaved_mutation() {
    let mut store = seeded();

    store.as_map().insert("d", 4).unwrap();
    assert!(store.contains(&MapEntry::new("d", 4)));

    Collection::remove(&mut store, &MapEntry::new("a", 1)).unwrap();
    assert_eq!(store.as_map().get(&"a"), None);

    store.put("b", 20).unwrap();
    assert!(!store.contains(&MapEntry::new("b", 2)));
    assert!(store.contains(&MapEntry::new("b", 20)));
    assert_eq!(store.as_map().get(&"b"), Some(20));
}

#[test]
fn backing_sets_over_different_map_types_agree() {
    let mut over_index = MapBackingSet::new(IndexMap::<&str, i32>::new());
    let mut over_hash = MapBackingSet::new(HashMap::<&str, i32>::new());
    for (k, v) in [("x", 1), ("y", 2)] {
        over_index.put(k, v).unwrap();
        over_hash.put(k, v).unwrap();
    }
    weft_testkit::assert_sets_agree(&over_index, &over_hash);
    weft_testkit::assert_maps_agree(&over_index.as_map(), &over_hash.as_map());

    over_hash.put("y", 9).unwrap();
    weft_testkit::assert_sets_differ(&over_index, &over_hash);
}

#[test]
fn iterative_map_agrees_with_an_indexed_map_absent_duplicates() {
    let backing = vec![MapEntry::new(1u8, "one"), MapEntry::new(2u8, "two")];
    let scanning = IterativeMap::new(backing);

    let mut indexed: IndexMap<u8, &str> = IndexMap::new();
    Map::insert(&mut indexed, 1, "one").unwrap();
    Map::insert(&mut indexed, 2, "two").unwrap();

    weft_testkit::assert_map_laws(&scanning);
    weft_testkit::assert_maps_agree(&scanning, &indexed);
}

#[test]
fn entry_set_views_of_equal_stores_agree_with_plain_entry_sets() {
    let store = seeded();
    let plain: indexmap::IndexSet<MapEntry<&str, i32>> = [
        MapEntry::new("a", 1),
        MapEntry::new("b", 2),
        MapEntry::new("c", 3),
    ]
    .into_iter()
    .collect();
    weft_testkit::assert_sets_agree(&store, &plain);
}
