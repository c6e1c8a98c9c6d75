//! The map face of a `MapSet`.

use weft_core::{Collection, Map, MapEntry, ViewError};

use crate::map_set::MapSet;

/// A full [`Map`] view over any [`MapSet`].
///
/// Pure forwarding: every operation routes to the map-set's single backing
/// store, so mutations through this view are immediately observable
/// through the set face and vice versa. Wrapping is O(1) and carries no
/// state of its own.
pub struct AsMap<'a, S: MapSet> {
    map_set: &'a mut S,
}

impl<'a, S: MapSet> AsMap<'a, S> {
    /// View `map_set` as a map.
    pub fn new(map_set: &'a mut S) -> Self {
        Self { map_set }
    }
}

impl<S: MapSet> Map for AsMap<'_, S> {
    type Key = S::Key;
    type Value = S::Value;

    fn len(&self) -> usize {
        self.map_set.len()
    }

    fn is_empty(&self) -> bool {
        self.map_set.is_empty()
    }

    fn get(&self, key: &Self::Key) -> Option<Self::Value> {
        self.map_set.get_value(key)
    }

    fn contains_key(&self, key: &Self::Key) -> bool {
        self.map_set.contains_key(key)
    }

    fn contains_value(&self, value: &Self::Value) -> bool {
        self.map_set.contains_value(value)
    }

    fn insert(
        &mut self,
        key: Self::Key,
        value: Self::Value,
    ) -> Result<Option<Self::Value>, ViewError> {
        self.map_set.put(key, value)
    }

    fn remove(&mut self, key: &Self::Key) -> Result<Option<Self::Value>, ViewError> {
        self.map_set.remove_key(key)
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        self.map_set.clear()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = MapEntry<Self::Key, Self::Value>> + '_> {
        self.map_set.iter()
    }

    fn keys(&self) -> Box<dyn Iterator<Item = Self::Key> + '_> {
        self.map_set.keys()
    }

    fn values(&self) -> Box<dyn Iterator<Item = Self::Value> + '_> {
        self.map_set.values()
    }
}
