//! The dual set/map contract.

use weft_core::{MapEntry, Set, ViewError};

use crate::as_map::AsMap;

/// A store exposed simultaneously as a set of entries and as a map.
///
/// The set face is the supertrait: a `MapSet` *is* a
/// [`Set`](weft_core::Set) of [`MapEntry`] values, with entry-level
/// membership, iteration, and removal. The map face adds key-indexed
/// operations, and [`as_map`](MapSet::as_map) wraps the whole thing as a
/// [`Map`](weft_core::Map) in O(1).
///
/// Invariant: the two faces are always mutually consistent. There is one
/// backing store; every operation of either face forwards to it.
pub trait MapSet: Set<Item = MapEntry<Self::Key, Self::Value>> {
    /// The key type.
    type Key: PartialEq + Clone;
    /// The value type.
    type Value: PartialEq + Clone;

    /// Store `value` under `key`, returning the displaced value.
    fn put(
        &mut self,
        key: Self::Key,
        value: Self::Value,
    ) -> Result<Option<Self::Value>, ViewError>;

    /// The value stored under `key`, if any.
    fn get_value(&self, key: &Self::Key) -> Option<Self::Value>;

    /// Remove the entry under `key`, returning its value.
    fn remove_key(&mut self, key: &Self::Key) -> Result<Option<Self::Value>, ViewError>;

    /// `true` if a value is stored under `key`.
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get_value(key).is_some()
    }

    /// `true` if any entry holds `value`.
    fn contains_value(&self, value: &Self::Value) -> bool {
        self.iter().any(|entry| entry.value() == value)
    }

    /// Store `value` under `key`, reporting whether the call changed the
    /// stored value — not merely whether the key was new.
    fn add(&mut self, key: Self::Key, value: Self::Value) -> Result<bool, ViewError>
    where
        Self: Sized,
    {
        let probe = value.clone();
        let displaced = self.put(key, value)?;
        Ok(displaced.as_ref() != Some(&probe))
    }

    /// Remove the entry `(key, value)` iff both parts match the stored
    /// entry, reporting whether anything was removed.
    fn remove_entry(&mut self, key: &Self::Key, value: &Self::Value) -> Result<bool, ViewError>
    where
        Self: Sized,
    {
        self.remove(&MapEntry::new(key.clone(), value.clone()))
    }

    /// Iterate the keys.
    fn keys(&self) -> Box<dyn Iterator<Item = Self::Key> + '_> {
        Box::new(self.iter().map(MapEntry::into_key))
    }

    /// Iterate the values.
    fn values(&self) -> Box<dyn Iterator<Item = Self::Value> + '_> {
        Box::new(self.iter().map(MapEntry::into_value))
    }

    /// Store every `(key, value)` pair.
    fn put_all<I>(&mut self, pairs: I) -> Result<(), ViewError>
    where
        Self: Sized,
        I: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        for (key, value) in pairs {
            self.put(key, value)?;
        }
        Ok(())
    }

    /// The map face of this store. O(1); pure forwarding.
    fn as_map(&mut self) -> AsMap<'_, Self>
    where
        Self: Sized,
    {
        AsMap::new(self)
    }
}

impl<S: MapSet + ?Sized> MapSet for &mut S {
    type Key = S::Key;
    type Value = S::Value;

    fn put(
        &mut self,
        key: Self::Key,
        value: Self::Value,
    ) -> Result<Option<Self::Value>, ViewError> {
        (**self).put(key, value)
    }
    fn get_value(&self, key: &Self::Key) -> Option<Self::Value> {
        (**self).get_value(key)
    }
    fn remove_key(&mut self, key: &Self::Key) -> Result<Option<Self::Value>, ViewError> {
        (**self).remove_key(key)
    }
    fn contains_key(&self, key: &Self::Key) -> bool {
        (**self).contains_key(key)
    }
    fn contains_value(&self, value: &Self::Value) -> bool {
        (**self).contains_value(value)
    }
    fn keys(&self) -> Box<dyn Iterator<Item = Self::Key> + '_> {
        (**self).keys()
    }
    fn values(&self) -> Box<dyn Iterator<Item = Self::Value> + '_> {
        (**self).values()
    }
}

impl<S: MapSet + ?Sized> MapSet for Box<S> {
    type Key = S::Key;
    type Value = S::Value;

    fn put(
        &mut self,
        key: Self::Key,
        value: Self::Value,
    ) -> Result<Option<Self::Value>, ViewError> {
        (**self).put(key, value)
    }
    fn get_value(&self, key: &Self::Key) -> Option<Self::Value> {
        (**self).get_value(key)
    }
    fn remove_key(&mut self, key: &Self::Key) -> Result<Option<Self::Value>, ViewError> {
        (**self).remove_key(key)
    }
    fn contains_key(&self, key: &Self::Key) -> bool {
        (**self).contains_key(key)
    }
    fn contains_value(&self, value: &Self::Value) -> bool {
        (**self).contains_value(value)
    }
    fn keys(&self) -> Box<dyn Iterator<Item = Self::Key> + '_> {
        (**self).keys()
    }
    fn values(&self) -> Box<dyn Iterator<Item = Self::Value> + '_> {
        (**self).values()
    }
}
