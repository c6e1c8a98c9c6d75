//! The read-only wrapper.

use std::fmt;

use weft_core::{Collection, Map, MapEntry, Set, ViewError};

use crate::bilist::BiList;
use crate::cell::Cell;
use crate::error::GridError;
use crate::matrix::Matrix;

/// A read-only wrapper around any container contract.
///
/// Reads forward untouched; every mutator fails with an
/// unsupported-operation error. Derived views are read-only recursively:
/// a cursor over a frozen matrix rejects `set`, and the cell set of a
/// frozen container rejects removal, because both ultimately route their
/// writes through the frozen wrapper.
///
/// Freezing an already-frozen value returns it unchanged — the inherent
/// [`frozen`](Frozen::frozen) method shadows
/// [`MatrixExt::frozen`](crate::MatrixExt::frozen), so no double wrapper
/// is ever built.
///
/// # Examples
///
/// ```
/// use weft_grid::{BiList, DenseMatrix, GridError, MatrixExt};
///
/// let mut frozen = DenseMatrix::from_rows([vec![1, 2]]).unwrap().frozen();
/// assert_eq!(frozen.get(0, 1), Some(&2));
/// assert!(matches!(frozen.set(0, 1, 9), Err(GridError::Unsupported { .. })));
/// ```
pub struct Frozen<M> {
    backing: M,
}

impl<M> Frozen<M> {
    /// Wrap `backing` read-only.
    pub fn new(backing: M) -> Self {
        Self { backing }
    }

    /// The backing container.
    pub fn backing(&self) -> &M {
        &self.backing
    }

    /// Unwrap, returning the backing container.
    pub fn into_inner(self) -> M {
        self.backing
    }

    /// Freezing a frozen value is the identity.
    pub fn frozen(self) -> Frozen<M> {
        self
    }
}

impl<M: Collection> Collection for Frozen<M> {
    type Item = M::Item;

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
            op: "insert into a frozen container",
        })
    }

    fn remove(&mut self, _item: &Self::Item) -> Result<bool, ViewError> {
        Err(ViewError::Unsupported {
            op: "remove from a frozen container",
        })
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        Err(ViewError::Unsupported {
            op: "clear a frozen container",
        })
    }
}

impl<S: Set> Set for Frozen<S> {}

impl<B: BiList> BiList for Frozen<B> {
    fn get(&self, row: usize, column: usize) -> Option<&Self::Item> {
        self.backing.get(row, column)
    }

    fn set(
        &mut self,
        _row: usize,
        _column: usize,
        _element: Self::Item,
    ) -> Result<Option<Self::Item>, GridError> {
        Err(GridError::Unsupported {
            op: "set on a frozen container",
        })
    }

    fn remove_at(
        &mut self,
        _row: usize,
        _column: usize,
    ) -> Result<Option<Self::Item>, GridError> {
        Err(GridError::Unsupported {
            op: "remove a cell from a frozen container",
        })
    }

    fn cells(&self) -> Box<dyn Iterator<Item = Cell<Self::Item>> + '_> {
        self.backing.cells()
    }
}

impl<M: Matrix> Matrix for Frozen<M> {
    fn height(&self) -> usize {
        self.backing.height()
    }

    fn width(&self) -> usize {
        self.backing.width()
    }
}

impl<M: Map> Map for Frozen<M> {
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
            op: "insert into a frozen map",
        })
    }

    fn remove(&mut self, _key: &Self::Key) -> Result<Option<Self::Value>, ViewError> {
        Err(ViewError::Unsupported {
            op: "remove from a frozen map",
        })
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        Err(ViewError::Unsupported {
            op: "clear a frozen map",
        })
    }

    fn entries(&self) -> Box<dyn Iterator<Item = MapEntry<Self::Key, Self::Value>> + '_> {
        self.backing.entries()
    }
}

impl<M: fmt::Display> fmt::Display for Frozen<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.backing.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::DenseMatrix;
    use crate::matrix::MatrixExt;
    use indexmap::IndexSet;

    fn counted() -> DenseMatrix<usize> {
        DenseMatrix::from_rows([vec![0, 1], vec![2, 3]]).unwrap()
    }

    // ── Reads forward ───────────────────────────────────────────

    #[test]
    fn reads_forward_to_the_backing() {
        let frozen = counted().frozen();
        assert_eq!(frozen.get(1, 0), Some(&2));
        assert_eq!(frozen.len(), 4);
        assert!(frozen.contains(&3));
        assert_eq!(frozen.width(), 2);
        assert_eq!(frozen.to_string(), "[[0, 1], [2, 3]]");
    }

    // ── Mutators fail ───────────────────────────────────────────

    #[test]
    fn every_mutator_is_rejected() {
        let mut frozen = counted().frozen();
        assert!(matches!(frozen.insert(9), Err(ViewError::Unsupported { .. })));
        assert!(matches!(
            Collection::remove(&mut frozen, &0),
            Err(ViewError::Unsupported { .. })
        ));
        assert!(matches!(frozen.clear(), Err(ViewError::Unsupported { .. })));
        assert!(matches!(
            frozen.set(0, 0, 9),
            Err(GridError::Unsupported { .. })
        ));
        assert!(matches!(
            frozen.remove_at(0, 0),
            Err(GridError::Unsupported { .. })
        ));
    }

    // ── Recursion into derived views ────────────────────────────

    #[test]
    fn derived_views_are_read_only_recursively() {
        let mut frozen = counted().frozen();

        {
            let mut cursor = frozen.cursor();
            cursor.next();
            assert!(matches!(
                cursor.set(9),
                Err(GridError::Unsupported { .. })
            ));
        }

        let mut cells = frozen.cell_set();
        assert!(matches!(
            cells.remove(&crate::Cell::new(0, 0, 0)),
            Err(ViewError::Unsupported { .. })
        ));
        assert!(matches!(cells.clear(), Err(ViewError::Unsupported { .. })));
    }

    #[test]
    fn refreezing_does_not_nest() {
        let frozen = counted().frozen().frozen();
        // Still a single wrapper over the dense matrix.
        assert_eq!(frozen.into_inner().get(0, 0), Some(&0));
    }

    #[test]
    fn freezes_plain_sets_too() {
        let backing: IndexSet<i32> = [1, 2].into_iter().collect();
        let mut frozen = Frozen::new(backing);
        assert!(frozen.contains(&1));
        assert!(matches!(frozen.insert(3), Err(ViewError::Unsupported { .. })));
    }
}
