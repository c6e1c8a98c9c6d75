//! Contract impls for caller-supplied backing stores.
//!
//! Consumers bring their own storage — a growable sequence, a hash table,
//! an insertion-ordered index — and these adapters make it speak the
//! framework contracts so the view types can wrap it directly.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::entry::MapEntry;
use crate::error::ViewError;
use crate::traits::{Collection, Map, Seq, Set};

// ── Vec: bag semantics ──────────────────────────────────────────

impl<T: PartialEq + Clone> Collection for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = T> + '_> {
        Box::new(self.as_slice().iter().cloned())
    }

    fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }

    fn insert(&mut self, item: T) -> Result<bool, ViewError> {
        self.push(item);
        Ok(true)
    }

    fn remove(&mut self, item: &T) -> Result<bool, ViewError> {
        match self.as_slice().iter().position(|held| held == item) {
            Some(index) => {
                Vec::remove(self, index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        Vec::clear(self);
        Ok(())
    }
}

impl<T: PartialEq + Clone> Seq for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = T> + '_> {
        Box::new(self.as_slice().iter().cloned())
    }
}

impl<T: PartialEq + Clone> Seq for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<T> {
        <[T]>::get(self, index).cloned()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = T> + '_> {
        Box::new(<[T]>::iter(self).cloned())
    }
}

// ── Hash-indexed sets ───────────────────────────────────────────

impl<T: Eq + Hash + Clone> Collection for IndexSet<T> {
    type Item = T;

    fn len(&self) -> usize {
        IndexSet::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = T> + '_> {
        Box::new(IndexSet::iter(self).cloned())
    }

    fn contains(&self, item: &T) -> bool {
        IndexSet::contains(self, item)
    }

    fn insert(&mut self, item: T) -> Result<bool, ViewError> {
        Ok(IndexSet::insert(self, item))
    }

    fn remove(&mut self, item: &T) -> Result<bool, ViewError> {
        // shift_remove keeps iteration order deterministic after removal.
        Ok(IndexSet::shift_remove(self, item))
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        IndexSet::clear(self);
        Ok(())
    }
}

impl<T: Eq + Hash + Clone> Set for IndexSet<T> {}

impl<T: Eq + Hash + Clone> Collection for HashSet<T> {
    type Item = T;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = T> + '_> {
        Box::new(HashSet::iter(self).cloned())
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn insert(&mut self, item: T) -> Result<bool, ViewError> {
        Ok(HashSet::insert(self, item))
    }

    fn remove(&mut self, item: &T) -> Result<bool, ViewError> {
        Ok(HashSet::remove(self, item))
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        HashSet::clear(self);
        Ok(())
    }
}

impl<T: Eq + Hash + Clone> Set for HashSet<T> {}

// ── Hash-indexed maps ───────────────────────────────────────────

impl<K, V> Map for IndexMap<K, V>
where
    K: Eq + Hash + Clone,
    V: PartialEq + Clone,
{
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn get(&self, key: &K) -> Option<V> {
        IndexMap::get(self, key).cloned()
    }

    fn contains_key(&self, key: &K) -> bool {
        IndexMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Result<Option<V>, ViewError> {
        Ok(IndexMap::insert(self, key, value))
    }

    fn remove(&mut self, key: &K) -> Result<Option<V>, ViewError> {
        Ok(IndexMap::shift_remove(self, key))
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        IndexMap::clear(self);
        Ok(())
    }

    fn entries(&self) -> Box<dyn Iterator<Item = MapEntry<K, V>> + '_> {
        Box::new(
            IndexMap::iter(self).map(|(key, value)| MapEntry::new(key.clone(), value.clone())),
        )
    }
}

impl<K, V> Map for HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: PartialEq + Clone,
{
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, key: &K) -> Option<V> {
        HashMap::get(self, key).cloned()
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Result<Option<V>, ViewError> {
        Ok(HashMap::insert(self, key, value))
    }

    fn remove(&mut self, key: &K) -> Result<Option<V>, ViewError> {
        Ok(HashMap::remove(self, key))
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        HashMap::clear(self);
        Ok(())
    }

    fn entries(&self) -> Box<dyn Iterator<Item = MapEntry<K, V>> + '_> {
        Box::new(
            HashMap::iter(self).map(|(key, value)| MapEntry::new(key.clone(), value.clone())),
        )
    }
}
