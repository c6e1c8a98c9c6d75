//! Conformance assertion helpers for Weft container implementations.
//!
//! Shared across the workspace's test suites: every `Collection`, `Set`,
//! and `Map` implementation runs these checks to prove it satisfies the
//! contract laws, and every pair of structurally equal containers — built
//! through whatever construction path — must agree under the contract
//! algorithms.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt::Debug;
use std::hash::Hash;

use weft_core::{contract, Collection, Map};

/// Assert the basic collection laws: `len` agrees with iteration,
/// `is_empty` agrees with `len`, and every iterated element is contained.
pub fn assert_collection_laws<C>(collection: &C)
where
    C: Collection + ?Sized,
    C::Item: Debug,
{
    assert_eq!(
        collection.iter().count(),
        collection.len(),
        "len disagrees with iteration"
    );
    assert_eq!(
        collection.is_empty(),
        collection.len() == 0,
        "is_empty disagrees with len"
    );
    for item in collection.iter() {
        assert!(
            collection.contains(&item),
            "iterated element {item:?} not contained"
        );
    }
}

/// Assert that two sets holding the same elements satisfy the full set
/// contract: mutual equality and identical hashes, regardless of how
/// either set was constructed.
pub fn assert_sets_agree<A, B>(a: &A, b: &B)
where
    A: Collection + ?Sized,
    B: Collection<Item = A::Item> + ?Sized,
    A::Item: Hash + Debug,
{
    assert!(contract::set_eq(a, b), "sets expected to be equal");
    assert!(contract::set_eq(b, a), "set equality must be symmetric");
    assert_eq!(
        contract::set_hash(a),
        contract::set_hash(b),
        "equal sets must hash identically"
    );
}

/// Assert that two sets with different elements compare unequal.
pub fn assert_sets_differ<A, B>(a: &A, b: &B)
where
    A: Collection + ?Sized,
    B: Collection<Item = A::Item> + ?Sized,
{
    assert!(!contract::set_eq(a, b), "sets expected to differ");
}

/// Assert the basic map laws: `len` agrees with entry iteration, every
/// entry is reachable through `get`/`contains_key`, and the key and value
/// streams align with the entry stream.
pub fn assert_map_laws<M>(map: &M)
where
    M: Map + ?Sized,
    M::Key: Debug,
    M::Value: Debug,
{
    assert_eq!(
        map.entries().count(),
        map.len(),
        "len disagrees with entry iteration"
    );
    assert_eq!(
        map.is_empty(),
        map.len() == 0,
        "is_empty disagrees with len"
    );
    for entry in map.entries() {
        assert!(
            map.contains_key(entry.key()),
            "entry key {:?} not reported as contained",
            entry.key()
        );
        assert_eq!(
            map.get(entry.key()).as_ref(),
            Some(entry.value()),
            "get disagrees with the entry stream"
        );
        assert!(
            map.contains_value(entry.value()),
            "entry value {:?} not reported as contained",
            entry.value()
        );
    }
    let keys: Vec<M::Key> = map.keys().collect();
    let values: Vec<M::Value> = map.values().collect();
    let entries: Vec<_> = map.entries().collect();
    assert_eq!(keys.len(), entries.len());
    assert_eq!(values.len(), entries.len());
    for (index, entry) in entries.iter().enumerate() {
        assert_eq!(&keys[index], entry.key(), "keys out of step with entries");
        assert_eq!(
            &values[index],
            entry.value(),
            "values out of step with entries"
        );
    }
}

/// Assert that two maps holding the same entries agree under the map
/// contract algorithms.
pub fn assert_maps_agree<A, B>(a: &A, b: &B)
where
    A: Map + ?Sized,
    B: Map<Key = A::Key, Value = A::Value> + ?Sized,
    A::Key: Hash + Debug,
    A::Value: Hash + Debug,
{
    assert!(contract::map_eq(a, b), "maps expected to be equal");
    assert!(contract::map_eq(b, a), "map equality must be symmetric");
    assert_eq!(
        contract::map_hash(a),
        contract::map_hash(b),
        "equal maps must hash identically"
    );
}
