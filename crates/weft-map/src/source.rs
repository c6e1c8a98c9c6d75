//! The minimal entry-source capability.

use weft_core::MapEntry;

/// The minimal capability [`IterativeMap`](crate::IterativeMap) demands of
/// its backing: iterate `(key, value)` entries, remove entries by
/// predicate, append, and clear.
///
/// Any external registry that can enumerate its entries and delete the
/// ones it is told to can be adapted to this trait without changes to the
/// map built on top. Nothing here requires a key index — lookup stays on
/// the map's side, by scanning.
pub trait EntrySource {
    /// The key type.
    type Key;
    /// The value type.
    type Value;

    /// Iterate the entries in source order, duplicates and all.
    fn entries(&self) -> Box<dyn Iterator<Item = MapEntry<Self::Key, Self::Value>> + '_>;

    /// Keep only the entries for which `keep` answers `true`.
    fn retain(&mut self, keep: &mut dyn FnMut(&Self::Key, &Self::Value) -> bool);

    /// Append an entry at the end of the source order.
    fn append(&mut self, key: Self::Key, value: Self::Value);

    /// Remove every entry.
    fn clear(&mut self);
}

impl<K: Clone, V: Clone> EntrySource for Vec<MapEntry<K, V>> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> Box<dyn Iterator<Item = MapEntry<K, V>> + '_> {
        Box::new(self.as_slice().iter().cloned())
    }

    fn retain(&mut self, keep: &mut dyn FnMut(&K, &V) -> bool) {
        Vec::retain(self, |entry| keep(entry.key(), entry.value()));
    }

    fn append(&mut self, key: K, value: V) {
        self.push(MapEntry::new(key, value));
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<S: EntrySource + ?Sized> EntrySource for &mut S {
    type Key = S::Key;
    type Value = S::Value;

    fn entries(&self) -> Box<dyn Iterator<Item = MapEntry<Self::Key, Self::Value>> + '_> {
        (**self).entries()
    }

    fn retain(&mut self, keep: &mut dyn FnMut(&Self::Key, &Self::Value) -> bool) {
        (**self).retain(keep)
    }

    fn append(&mut self, key: Self::Key, value: Self::Value) {
        (**self).append(key, value)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}
