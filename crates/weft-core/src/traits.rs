//! The core container traits and their forwarding (delegation) impls.

use crate::entry::MapEntry;
use crate::error::ViewError;

/// A finite collection of elements with membership semantics.
///
/// This is the root contract of the framework — the moral equivalent of a
/// standard collection interface, shaped for live views:
///
/// - [`iter`](Collection::iter) yields **owned** elements. Views compute
///   their elements per pass (a transformed set applies its function during
///   iteration), so borrowed iteration is unavailable by construction.
///   Backing adapters satisfy this by cloning cheap element values.
/// - Mutators return `Result` so a structurally disallowed operation fails
///   with [`ViewError::Unsupported`] instead of panicking, and a
///   write-through translation failure surfaces as
///   [`ViewError::NoInverse`].
/// - Membership queries are total: `contains` and `remove` of an element
///   the container cannot possibly hold answer `false` / `Ok(false)`.
///
/// # Object safety
///
/// The required methods are object-safe; `dyn Collection<Item = E>` works.
/// The bulk conveniences are `Self: Sized` and fall away on trait objects.
pub trait Collection {
    /// The element type. Equality drives membership, so `PartialEq` is
    /// part of the contract.
    type Item: PartialEq;

    /// Number of elements currently held.
    fn len(&self) -> usize;

    /// `true` if the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the elements.
    ///
    /// Views must yield each pass's current state of the backing container
    /// (live iteration, not a snapshot).
    fn iter(&self) -> Box<dyn Iterator<Item = Self::Item> + '_>;

    /// `true` if an equal element is held.
    ///
    /// Default implementation scans [`iter`](Collection::iter); backings
    /// with an index override it.
    fn contains(&self, item: &Self::Item) -> bool {
        self.iter().any(|held| held == *item)
    }

    /// Insert an element, reporting whether the collection changed.
    fn insert(&mut self, item: Self::Item) -> Result<bool, ViewError>;

    /// Remove one occurrence of an equal element, reporting whether the
    /// collection changed. An absent element is `Ok(false)`, never an error.
    fn remove(&mut self, item: &Self::Item) -> Result<bool, ViewError>;

    /// Remove every element.
    fn clear(&mut self) -> Result<(), ViewError>;

    /// Insert every element of `items`, reporting whether anything changed.
    ///
    /// Stops at the first failing insert; elements inserted before the
    /// failure stay inserted.
    fn insert_all<I>(&mut self, items: I) -> Result<bool, ViewError>
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Item>,
    {
        let mut changed = false;
        for item in items {
            changed |= self.insert(item)?;
        }
        Ok(changed)
    }

    /// Remove one occurrence of each listed element.
    fn remove_all(&mut self, items: &[Self::Item]) -> Result<bool, ViewError>
    where
        Self: Sized,
    {
        let mut changed = false;
        for item in items {
            changed |= self.remove(item)?;
        }
        Ok(changed)
    }

    /// Remove every element not listed in `keep`.
    fn retain_all(&mut self, keep: &[Self::Item]) -> Result<bool, ViewError>
    where
        Self: Sized,
    {
        let victims: Vec<Self::Item> =
            self.iter().filter(|held| !keep.contains(held)).collect();
        let mut changed = false;
        for victim in &victims {
            changed |= self.remove(victim)?;
        }
        Ok(changed)
    }

    /// `true` if every listed element is held.
    fn contains_all(&self, items: &[Self::Item]) -> bool
    where
        Self: Sized,
    {
        items.iter().all(|item| self.contains(item))
    }
}

/// A [`Collection`] with set semantics: at most one occurrence per element.
///
/// Marker trait carrying the set laws rather than extra methods. Two sets
/// holding equal elements must agree under [`contract::set_eq`] and hash
/// identically under [`contract::set_hash`] regardless of how either was
/// constructed — the contract algorithms guarantee this for any
/// implementation that iterates its true membership.
///
/// [`contract::set_eq`]: crate::contract::set_eq
/// [`contract::set_hash`]: crate::contract::set_hash
pub trait Set: Collection {}

/// A read-only, fixed-order sequence of elements.
///
/// The list contract needed by matrix row views. Like [`Collection`],
/// access yields owned elements so that derived sequences (a mirrored row)
/// can compute them on demand.
pub trait Seq {
    /// The element type.
    type Item: PartialEq;

    /// Number of elements.
    fn len(&self) -> usize;

    /// `true` if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<Self::Item>;

    /// Iterate the elements in order.
    fn iter(&self) -> Box<dyn Iterator<Item = Self::Item> + '_> {
        Box::new((0..self.len()).filter_map(move |index| self.get(index)))
    }
}

/// A key-indexed store of values.
///
/// Same conventions as [`Collection`]: owned access (`get` returns a
/// computed/cloned value), `Result`-returning mutators, total lookups.
pub trait Map {
    /// The key type.
    type Key: PartialEq;
    /// The value type.
    type Value: PartialEq;

    /// Number of entries.
    fn len(&self) -> usize;

    /// `true` if the map holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value stored under `key`, if any.
    fn get(&self, key: &Self::Key) -> Option<Self::Value>;

    /// `true` if a value is stored under `key`.
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    /// `true` if any entry holds `value`.
    ///
    /// Default implementation scans [`entries`](Map::entries).
    fn contains_value(&self, value: &Self::Value) -> bool {
        self.entries().any(|entry| entry.value() == value)
    }

    /// Store `value` under `key`, returning the displaced value.
    fn insert(
        &mut self,
        key: Self::Key,
        value: Self::Value,
    ) -> Result<Option<Self::Value>, ViewError>;

    /// Remove the entry under `key`, returning its value.
    fn remove(&mut self, key: &Self::Key) -> Result<Option<Self::Value>, ViewError>;

    /// Remove every entry.
    fn clear(&mut self) -> Result<(), ViewError>;

    /// Iterate the entries as [`MapEntry`] snapshots.
    fn entries(&self) -> Box<dyn Iterator<Item = MapEntry<Self::Key, Self::Value>> + '_>;

    /// Iterate the keys.
    fn keys(&self) -> Box<dyn Iterator<Item = Self::Key> + '_> {
        Box::new(self.entries().map(MapEntry::into_key))
    }

    /// Iterate the values.
    fn values(&self) -> Box<dyn Iterator<Item = Self::Value> + '_> {
        Box::new(self.entries().map(MapEntry::into_value))
    }

    /// Copy every entry of `other` into this map.
    fn insert_all<M>(&mut self, other: &M) -> Result<(), ViewError>
    where
        Self: Sized,
        M: Map<Key = Self::Key, Value = Self::Value> + ?Sized,
    {
        for entry in other.entries() {
            let (key, value) = entry.into_pair();
            self.insert(key, value)?;
        }
        Ok(())
    }
}

// ── Forwarding impls ────────────────────────────────────────────
//
// The delegation base layer: mutable references and boxes forward every
// operation to the backing instance, so any decorator that can hand out a
// backing reference satisfies the whole contract at once.

impl<C: Collection + ?Sized> Collection for &mut C {
    type Item = C::Item;

    fn len(&self) -> usize {
        (**self).len()
    }
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
    fn iter(&self) -> Box<dyn Iterator<Item = Self::Item> + '_> {
        (**self).iter()
    }
    fn contains(&self, item: &Self::Item) -> bool {
        (**self).contains(item)
    }
    fn insert(&mut self, item: Self::Item) -> Result<bool, ViewError> {
        (**self).insert(item)
    }
    fn remove(&mut self, item: &Self::Item) -> Result<bool, ViewError> {
        (**self).remove(item)
    }
    fn clear(&mut self) -> Result<(), ViewError> {
        (**self).clear()
    }
}

impl<C: Collection + ?Sized> Collection for Box<C> {
    type Item = C::Item;

    fn len(&self) -> usize {
        (**self).len()
    }
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
    fn iter(&self) -> Box<dyn Iterator<Item = Self::Item> + '_> {
        (**self).iter()
    }
    fn contains(&self, item: &Self::Item) -> bool {
        (**self).contains(item)
    }
    fn insert(&mut self, item: Self::Item) -> Result<bool, ViewError> {
        (**self).insert(item)
    }
    fn remove(&mut self, item: &Self::Item) -> Result<bool, ViewError> {
        (**self).remove(item)
    }
    fn clear(&mut self) -> Result<(), ViewError> {
        (**self).clear()
    }
}

impl<S: Set + ?Sized> Set for &mut S {}
impl<S: Set + ?Sized> Set for Box<S> {}

impl<S: Seq + ?Sized> Seq for &S {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }
    fn get(&self, index: usize) -> Option<Self::Item> {
        (**self).get(index)
    }
    fn iter(&self) -> Box<dyn Iterator<Item = Self::Item> + '_> {
        (**self).iter()
    }
}

impl<S: Seq + ?Sized> Seq for &mut S {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }
    fn get(&self, index: usize) -> Option<Self::Item> {
        (**self).get(index)
    }
    fn iter(&self) -> Box<dyn Iterator<Item = Self::Item> + '_> {
        (**self).iter()
    }
}

impl<S: Seq + ?Sized> Seq for Box<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }
    fn get(&self, index: usize) -> Option<Self::Item> {
        (**self).get(index)
    }
    fn iter(&self) -> Box<dyn Iterator<Item = Self::Item> + '_> {
        (**self).iter()
    }
}

impl<M: Map + ?Sized> Map for &mut M {
    type Key = M::Key;
    type Value = M::Value;

    fn len(&self) -> usize {
        (**self).len()
    }
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
    fn get(&self, key: &Self::Key) -> Option<Self::Value> {
        (**self).get(key)
    }
    fn contains_key(&self, key: &Self::Key) -> bool {
        (**self).contains_key(key)
    }
    fn contains_value(&self, value: &Self::Value) -> bool {
        (**self).contains_value(value)
    }
    fn insert(
        &mut self,
        key: Self::Key,
        value: Self::Value,
    ) -> Result<Option<Self::Value>, ViewError> {
        (**self).insert(key, value)
    }
    fn remove(&mut self, key: &Self::Key) -> Result<Option<Self::Value>, ViewError> {
        (**self).remove(key)
    }
    fn clear(&mut self) -> Result<(), ViewError> {
        (**self).clear()
    }
    fn entries(&self) -> Box<dyn Iterator<Item = MapEntry<Self::Key, Self::Value>> + '_> {
        (**self).entries()
    }
}

impl<M: Map + ?Sized> Map for Box<M> {
    type Key = M::Key;
    type Value = M::Value;

    fn len(&self) -> usize {
        (**self).len()
    }
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
    fn get(&self, key: &Self::Key) -> Option<Self::Value> {
        (**self).get(key)
    }
    fn contains_key(&self, key: &Self::Key) -> bool {
        (**self).contains_key(key)
    }
    fn contains_value(&self, value: &Self::Value) -> bool {
        (**self).contains_value(value)
    }
    fn insert(
        &mut self,
        key: Self::Key,
        value: Self::Value,
    ) -> Result<Option<Self::Value>, ViewError> {
        (**self).insert(key, value)
    }
    fn remove(&mut self, key: &Self::Key) -> Result<Option<Self::Value>, ViewError> {
        (**self).remove(key)
    }
    fn clear(&mut self) -> Result<(), ViewError> {
        (**self).clear()
    }
    fn entries(&self) -> Box<dyn Iterator<Item = MapEntry<Self::Key, Self::Value>> + '_> {
        (**self).entries()
    }
}
