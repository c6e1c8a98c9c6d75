//! Removal-only decorators.

use crate::entry::MapEntry;
use crate::error::ViewError;
use crate::traits::{Collection, Map, Set};

/// A view that permits deletion but not insertion.
///
/// Models the standard constraint on a map's derived key/value/entry views:
/// elements may be removed through them (removal writes through to the
/// backing store) but cannot be inserted independently. Works over any
/// [`Collection`], [`Set`], or [`Map`]; only `insert` is rewritten to fail
/// with [`ViewError::Unsupported`], every other operation forwards.
///
/// # Examples
///
/// ```
/// use indexmap::IndexSet;
/// use weft_core::{Collection, Removal, ViewError};
///
/// let backing: IndexSet<i32> = [1, 2].into_iter().collect();
/// let mut view = Removal::new(backing);
/// assert!(view.remove(&1).unwrap());
/// assert!(matches!(view.insert(3), Err(ViewError::Unsupported { .. })));
/// assert_eq!(view.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Removal<C> {
    backing: C,
}

impl<C> Removal<C> {
    /// Wrap a backing container.
    pub fn new(backing: C) -> Self {
        Self { backing }
    }

    /// The wrapped container.
    pub fn backing(&self) -> &C {
        &self.backing
    }

    /// Unwrap, returning the backing container.
    pub fn into_inner(self) -> C {
        self.backing
    }
}

impl<C: Collection> Collection for Removal<C> {
    type Item = C::Item;

    fn len(&self) -> usize {
        self.backing.len()
    }

    fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Self::Item> + '_> {
        self.backing.iter()
    }

    fn contains(&self, item: &Self::Item) -> bool {
        self.backing.contains(item)
    }

    fn insert(&mut self, _item: Self::Item) -> Result<bool, ViewError> {
        Err(ViewError::Unsupported {
            op: "insert into a removal-only view",
        })
    }

    fn remove(&mut self, item: &Self::Item) -> Result<bool, ViewError> {
        self.backing.remove(item)
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        self.backing.clear()
    }
}

impl<S: Set> Set for Removal<S> {}

impl<M: Map> Map for Removal<M> {
    type Key = M::Key;
    type Value = M::Value;

    fn len(&self) -> usize {
        self.backing.len()
    }

    fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    fn get(&self, key: &Self::Key) -> Option<Self::Value> {
        self.backing.get(key)
    }

    fn contains_key(&self, key: &Self::Key) -> bool {
        self.backing.contains_key(key)
    }

    fn contains_value(&self, value: &Self::Value) -> bool {
        self.backing.contains_value(value)
    }

    fn insert(
        &mut self,
        _key: Self::Key,
        _value: Self::Value,
    ) -> Result<Option<Self::Value>, ViewError> {
        Err(ViewError::Unsupported {
            op: "insert into a removal-only map view",
        })
    }

    fn remove(&mut self, key: &Self::Key) -> Result<Option<Self::Value>, ViewError> {
        self.backing.remove(key)
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        self.backing.clear()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = MapEntry<Self::Key, Self::Value>> + '_> {
        self.backing.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn map_view_allows_remove_and_clear_only() {
        let mut backing: IndexMap<&str, i32> = IndexMap::new();
        Map::insert(&mut backing, "a", 1).unwrap();
        Map::insert(&mut backing, "b", 2).unwrap();

        let mut view = Removal::new(&mut backing);
        assert!(matches!(
            Map::insert(&mut view, "c", 3),
            Err(ViewError::Unsupported { .. })
        ));
        assert_eq!(Map::remove(&mut view, &"a").unwrap(), Some(1));
        Map::clear(&mut view).unwrap();
        assert!(backing.is_empty());
    }

    #[test]
    fn failed_insert_leaves_backing_untouched() {
        let mut view = Removal::new(vec![1, 2]);
        assert!(view.insert(3).is_err());
        assert_eq!(view.backing(), &vec![1, 2]);
    }
}
