//! Canonical contract algorithms, implemented once.
//!
//! Every container in the workspace delegates its equality, hashing, and
//! rendering to these free functions, so two structurally equal containers
//! behave identically regardless of which implementation produced them.
//! Each function is parametrized over the *minimal* capability it needs
//! (iterate, size, lookup) rather than any concrete backing type.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::traits::{Collection, Map, Seq};

/// Hash a single value with the process-stable default hasher.
///
/// The building block for the aggregate hashes below; also used by
/// [`MapEntry`](crate::MapEntry)'s `Hash` impl so entry hashing agrees
/// between the set-shaped and map-shaped views of the same store.
pub fn element_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Set hash: the wrapping sum of the element hashes.
///
/// Order-free by construction, so any two sets holding equal elements hash
/// identically no matter how they are stored or iterated.
pub fn set_hash<C>(set: &C) -> u64
where
    C: Collection + ?Sized,
    C::Item: Hash,
{
    let mut total = 0u64;
    for item in set.iter() {
        total = total.wrapping_add(element_hash(&item));
    }
    total
}

/// Set equality: same size and one-sided containment.
///
/// For containers with set semantics (no duplicate elements), equal sizes
/// plus `b` containing every element of `a` implies mutual containment.
pub fn set_eq<A, B>(a: &A, b: &B) -> bool
where
    A: Collection + ?Sized,
    B: Collection<Item = A::Item> + ?Sized,
{
    a.len() == b.len() && a.iter().all(|item| b.contains(&item))
}

/// Order-sensitive sequence equality.
pub fn seq_eq<A, B>(a: &A, b: &B) -> bool
where
    A: Seq + ?Sized,
    B: Seq<Item = A::Item> + ?Sized,
{
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

/// Order-sensitive sequence hash.
pub fn seq_hash<S>(seq: &S) -> u64
where
    S: Seq + ?Sized,
    S::Item: Hash,
{
    let mut total = 1u64;
    for item in seq.iter() {
        total = total.wrapping_mul(31).wrapping_add(element_hash(&item));
    }
    total
}

/// Map equality, defined through the entry set: same size and every entry
/// of `a` stored identically in `b`.
pub fn map_eq<A, B>(a: &A, b: &B) -> bool
where
    A: Map + ?Sized,
    B: Map<Key = A::Key, Value = A::Value> + ?Sized,
{
    a.len() == b.len()
        && a.entries()
            .all(|entry| b.get(entry.key()).as_ref() == Some(entry.value()))
}

/// Map hash, defined through the entry set: the wrapping sum of the entry
/// hashes, matching [`set_hash`] over any entry-set view of the same map.
pub fn map_hash<M>(map: &M) -> u64
where
    M: Map + ?Sized,
    M::Key: Hash,
    M::Value: Hash,
{
    let mut total = 0u64;
    for entry in map.entries() {
        total = total.wrapping_add(element_hash(&entry));
    }
    total
}

/// Render elements as `[a, b, c]`.
pub fn display_collection<T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display,
    I: IntoIterator<Item = T>,
{
    f.write_str("[")?;
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

/// Render a map as `{k=v, k2=v2}`.
pub fn display_map<M>(f: &mut fmt::Formatter<'_>, map: &M) -> fmt::Result
where
    M: Map + ?Sized,
    M::Key: fmt::Display,
    M::Value: fmt::Display,
{
    f.write_str("{")?;
    for (index, entry) in map.entries().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{entry}")?;
    }
    f.write_str("}")
}

/// Collect a collection's elements into a fresh `Vec`.
pub fn to_vec<C>(collection: &C) -> Vec<C::Item>
where
    C: Collection + ?Sized,
{
    collection.iter().collect()
}

/// Copy a collection's elements into the front of `buf`, returning the
/// number written.
///
/// When `buf` is longer than the collection, the slot just past the last
/// element is set to `None` to mark the end; when it is shorter, only the
/// leading `buf.len()` elements are copied.
pub fn fill_slice<C>(collection: &C, buf: &mut [Option<C::Item>]) -> usize
where
    C: Collection + ?Sized,
{
    let mut written = 0;
    for item in collection.iter() {
        if written == buf.len() {
            return written;
        }
        buf[written] = Some(item);
        written += 1;
    }
    if written < buf.len() {
        buf[written] = None;
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapEntry;
    use indexmap::{IndexMap, IndexSet};
    use proptest::prelude::*;
    use std::collections::HashSet;

    // ── Set contract ────────────────────────────────────────────

    #[test]
    fn equal_sets_agree_across_implementations() {
        let a: IndexSet<i32> = [3, 1, 2].into_iter().collect();
        let b: HashSet<i32> = [1, 2, 3].into_iter().collect();
        assert!(set_eq(&a, &b));
        assert!(set_eq(&b, &a));
        assert_eq!(set_hash(&a), set_hash(&b));
    }

    #[test]
    fn unequal_sets_disagree() {
        let a: IndexSet<i32> = [1, 2].into_iter().collect();
        let b: IndexSet<i32> = [1, 3].into_iter().collect();
        assert!(!set_eq(&a, &b));
        let c: IndexSet<i32> = [1].into_iter().collect();
        assert!(!set_eq(&a, &c));
    }

    // ── Sequence contract ───────────────────────────────────────

    #[test]
    fn seq_contract_is_order_sensitive() {
        let a = vec![1, 2, 3];
        let b = vec![1, 2, 3];
        let c = vec![3, 2, 1];
        assert!(seq_eq(&a, &b));
        assert_eq!(seq_hash(&a), seq_hash(&b));
        assert!(!seq_eq(&a, &c));
    }

    // ── Map contract ────────────────────────────────────────────

    #[test]
    fn map_contract_via_entries() {
        let mut a: IndexMap<&str, i32> = IndexMap::new();
        a.insert("x", 1);
        a.insert("y", 2);
        let mut b: IndexMap<&str, i32> = IndexMap::new();
        b.insert("y", 2);
        b.insert("x", 1);
        assert!(map_eq(&a, &b));
        assert_eq!(map_hash(&a), map_hash(&b));

        b.insert("x", 9);
        assert!(!map_eq(&a, &b));
    }

    #[test]
    fn map_hash_matches_entry_set_hash() {
        let mut map: IndexMap<&str, i32> = IndexMap::new();
        map.insert("x", 1);
        let entries: IndexSet<MapEntry<&str, i32>> =
            [MapEntry::new("x", 1)].into_iter().collect();
        assert_eq!(map_hash(&map), set_hash(&entries));
    }

    // ── fill_slice ──────────────────────────────────────────────

    #[test]
    fn fill_slice_marks_end_when_room_remains() {
        let items = vec![1, 2];
        let mut buf = [Some(9); 4];
        assert_eq!(fill_slice(&items, &mut buf), 2);
        assert_eq!(buf[2], None);
        assert_eq!(buf[3], Some(9));
    }

    #[test]
    fn fill_slice_truncates_when_short() {
        let items = vec![1, 2, 3];
        let mut buf = [None; 2];
        assert_eq!(fill_slice(&items, &mut buf), 2);
        assert_eq!(buf, [Some(1), Some(2)]);
    }

    proptest! {
        #[test]
        fn set_contract_is_order_free(items in proptest::collection::vec(-500i32..500, 0..64)) {
            let forward: IndexSet<i32> = items.as_slice().iter().copied().collect();
            let mut reversed_items = items.clone();
            reversed_items.reverse();
            let reversed: IndexSet<i32> = reversed_items.into_iter().collect();

            prop_assert!(set_eq(&forward, &reversed));
            prop_assert_eq!(set_hash(&forward), set_hash(&reversed));
        }
    }
}
