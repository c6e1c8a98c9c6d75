//! The set face of a map.

use std::fmt;

use weft_core::{contract, Collection, Map, MapEntry, Set, ViewError};

use crate::map_set::MapSet;

/// A full [`MapSet`] over any [`Map`].
///
/// The inverse of [`AsMap`](crate::AsMap): where that derives a map from a
/// set of entries, this derives the entry set from a key-indexed map.
/// Together they make the two representations freely convertible with no
/// information loss and O(1) re-wrapping.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use weft_core::{Collection, Map, MapEntry};
/// use weft_map::{MapBackingSet, MapSet};
///
/// let mut store = MapBackingSet::new(IndexMap::<&str, i32>::new());
/// store.put("a", 1).unwrap();
/// assert!(store.contains(&MapEntry::new("a", 1)));
/// assert_eq!(store.as_map().get(&"a"), Some(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapBackingSet<M> {
    backing: M,
}

impl<M> MapBackingSet<M> {
    /// Expose `backing` as a set of entries.
    pub fn new(backing: M) -> Self {
        Self { backing }
    }

    /// The backing map.
    pub fn backing(&self) -> &M {
        &self.backing
    }

    /// Unwrap, returning the backing map.
    pub fn into_inner(self) -> M {
        self.backing
    }
}

impl<M> Collection for MapBackingSet<M>
where
    M: Map,
    M::Key: Clone,
    M::Value: Clone,
{
    type Item = MapEntry<M::Key, M::Value>;

    fn len(&self) -> usize {
        self.backing.len()
    }

    fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Self::Item> + '_> {
        self.backing.entries()
    }

    fn contains(&self, entry: &Self::Item) -> bool {
        self.backing.get(entry.key()).as_ref() == Some(entry.value())
    }

    /// Entry insertion is [`MapSet::add`]: the result reports whether the
    /// stored value changed.
    fn insert(&mut self, entry: Self::Item) -> Result<bool, ViewError> {
        let (key, value) = entry.into_pair();
        let probe = value.clone();
        let displaced = self.backing.insert(key, value)?;
        Ok(displaced.as_ref() != Some(&probe))
    }

    fn remove(&mut self, entry: &Self::Item) -> Result<bool, ViewError> {
        if !self.contains(entry) {
            return Ok(false);
        }
        Ok(self.backing.remove(entry.key())?.is_some())
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        self.backing.clear()
    }
}

impl<M> Set for MapBackingSet<M>
where
    M: Map,
    M::Key: Clone,
    M::Value: Clone,
{
}

impl<M> MapSet for MapBackingSet<M>
where
    M: Map,
    M::Key: Clone,
    M::Value: Clone,
{
    type Key = M::Key;
    type Value = M::Value;

    fn put(
        &mut self,
        key: Self::Key,
        value: Self::Value,
    ) -> Result<Option<Self::Value>, ViewError> {
        self.backing.insert(key, value)
    }

    fn get_value(&self, key: &Self::Key) -> Option<Self::Value> {
        self.backing.get(key)
    }

    fn remove_key(&mut self, key: &Self::Key) -> Result<Option<Self::Value>, ViewError> {
        self.backing.remove(key)
    }

    fn contains_key(&self, key: &Self::Key) -> bool {
        self.backing.contains_key(key)
    }

    fn contains_value(&self, value: &Self::Value) -> bool {
        self.backing.contains_value(value)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = Self::Key> + '_> {
        self.backing.keys()
    }

    fn values(&self) -> Box<dyn Iterator<Item = Self::Value> + '_> {
        self.backing.values()
    }
}

impl<M> fmt::Display for MapBackingSet<M>
where
    M: Map,
    M::Key: Clone + fmt::Display,
    M::Value: Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        contract::display_map(f, &self.backing)
    }
}
