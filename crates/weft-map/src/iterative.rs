//! Maps implemented by scanning an entry source.

use std::hash::Hash;

use indexmap::IndexSet;

use weft_core::{Map, MapEntry, ViewError};

use crate::source::EntrySource;

/// A [`Map`] whose only capability over its backing is "iterate entries
/// and remove the ones named" — no key index anywhere.
///
/// Built for sources that expose entries but no direct lookup: every
/// operation is a linear scan. The backing sequence may contain duplicate
/// keys; the map presents a first-occurrence view of it:
///
/// - [`entries`](Map::entries) and [`keys`](Map::keys) yield each key's
///   **first** occurrence only, skipping later entries for an already-seen
///   key (the set of yielded keys is tracked during the pass);
/// - [`get`](Map::get) returns the value of the first matching entry;
/// - [`len`](Map::len) counts distinct keys, not backing entries.
///
/// Removal flattens: [`remove`](Map::remove) deletes **every** entry whose
/// key matches — not just the first — and returns the first removed value
/// as representative. Callers must not assume a single entry was affected
/// when the source held duplicates. [`insert`](Map::insert) is the same
/// sweep followed by an append, so a freshly inserted key is unique in the
/// source even if it was duplicated before.
///
/// # Examples
///
/// ```
/// use weft_core::{Map, MapEntry};
/// use weft_map::IterativeMap;
///
/// let backing = vec![
///     MapEntry::new("a", 1),
///     MapEntry::new("b", 2),
///     MapEntry::new("a", 3),
/// ];
/// let mut map = IterativeMap::new(backing);
///
/// assert_eq!(map.len(), 2); // distinct keys only
/// assert_eq!(map.get(&"a"), Some(1)); // first occurrence
/// assert_eq!(map.remove(&"a").unwrap(), Some(1)); // removes BOTH "a" entries
/// assert_eq!(map.source().len(), 1);
/// ```
pub struct IterativeMap<S> {
    source: S,
}

impl<S> IterativeMap<S> {
    /// Build a map over `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The backing source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Unwrap, returning the backing source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S> IterativeMap<S>
where
    S: EntrySource,
    S::Key: PartialEq + Clone,
    S::Value: Clone,
{
    /// Remove every entry whose key equals `key`, returning the first
    /// removed value.
    fn sweep(&mut self, key: &S::Key) -> Option<S::Value> {
        let mut first = None;
        self.source.retain(&mut |held_key, held_value| {
            if held_key == key {
                if first.is_none() {
                    first = Some(held_value.clone());
                }
                false
            } else {
                true
            }
        });
        first
    }
}

impl<S> Map for IterativeMap<S>
where
    S: EntrySource,
    S::Key: Eq + Hash + Clone,
    S::Value: PartialEq + Clone,
{
    type Key = S::Key;
    type Value = S::Value;

    fn len(&self) -> usize {
        self.entries().count()
    }

    fn is_empty(&self) -> bool {
        self.source.entries().next().is_none()
    }

    fn get(&self, key: &Self::Key) -> Option<Self::Value> {
        self.source
            .entries()
            .find(|entry| entry.key() == key)
            .map(MapEntry::into_value)
    }

    fn insert(
        &mut self,
        key: Self::Key,
        value: Self::Value,
    ) -> Result<Option<Self::Value>, ViewError> {
        let displaced = self.sweep(&key);
        self.source.append(key, value);
        Ok(displaced)
    }

    fn remove(&mut self, key: &Self::Key) -> Result<Option<Self::Value>, ViewError> {
        Ok(self.sweep(key))
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        self.source.clear();
        Ok(())
    }

    fn entries(&self) -> Box<dyn Iterator<Item = MapEntry<Self::Key, Self::Value>> + '_> {
        Box::new(FirstOccurrence {
            inner: self.source.entries(),
            seen: IndexSet::new(),
        })
    }
}

/// Filters an entry stream down to each key's first occurrence.
struct FirstOccurrence<'a, K, V> {
    inner: Box<dyn Iterator<Item = MapEntry<K, V>> + 'a>,
    seen: IndexSet<K>,
}

impl<K: Eq + Hash + Clone, V> Iterator for FirstOccurrence<'_, K, V> {
    type Item = MapEntry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.inner.by_ref() {
            if self.seen.insert(entry.key().clone()) {
                return Some(entry);
            }
        }
        None
    }
}
