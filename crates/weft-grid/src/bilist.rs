//! The `BiList` contract and its live cell-set projection.

use weft_core::{Collection, Set, ViewError};

use crate::cell::Cell;
use crate::error::GridError;

/// A collection whose elements are addressable by `(row, column)` in
/// addition to plain membership.
///
/// At most one element occupies a given position at any time: `set`
/// overwrites. Iteration — both the element iterator inherited from
/// [`Collection`] and the [`cells`](BiList::cells) iterator — is row-major
/// ascending: all of row 0 left to right, then row 1, and so on.
pub trait BiList: Collection {
    /// The element at `(row, column)`, or `None` if the position is vacant
    /// or out of bounds.
    fn get(&self, row: usize, column: usize) -> Option<&Self::Item>;

    /// Store `element` at `(row, column)`, returning the displaced element.
    fn set(
        &mut self,
        row: usize,
        column: usize,
        element: Self::Item,
    ) -> Result<Option<Self::Item>, GridError>;

    /// Vacate `(row, column)`, returning the removed element.
    ///
    /// Fixed-shape containers reject this with
    /// [`GridError::Unsupported`].
    fn remove_at(&mut self, row: usize, column: usize)
        -> Result<Option<Self::Item>, GridError>;

    /// Iterate the occupied positions as [`Cell`] snapshots, row-major
    /// ascending.
    fn cells(&self) -> Box<dyn Iterator<Item = Cell<Self::Item>> + '_>;

    /// A live set projection of the occupied cells.
    ///
    /// See [`CellSet`] for the projection's semantics.
    fn cell_set(&mut self) -> CellSet<'_, Self>
    where
        Self: Sized,
    {
        CellSet::new(self)
    }
}

impl<B: BiList + ?Sized> BiList for &mut B {
    fn get(&self, row: usize, column: usize) -> Option<&Self::Item> {
        (**self).get(row, column)
    }
    fn set(
        &mut self,
        row: usize,
        column: usize,
        element: Self::Item,
    ) -> Result<Option<Self::Item>, GridError> {
        (**self).set(row, column, element)
    }
    fn remove_at(
        &mut self,
        row: usize,
        column: usize,
    ) -> Result<Option<Self::Item>, GridError> {
        (**self).remove_at(row, column)
    }
    fn cells(&self) -> Box<dyn Iterator<Item = Cell<Self::Item>> + '_> {
        (**self).cells()
    }
}

impl<B: BiList + ?Sized> BiList for Box<B> {
    fn get(&self, row: usize, column: usize) -> Option<&Self::Item> {
        (**self).get(row, column)
    }
    fn set(
        &mut self,
        row: usize,
        column: usize,
        element: Self::Item,
    ) -> Result<Option<Self::Item>, GridError> {
        (**self).set(row, column, element)
    }
    fn remove_at(
        &mut self,
        row: usize,
        column: usize,
    ) -> Result<Option<Self::Item>, GridError> {
        (**self).remove_at(row, column)
    }
    fn cells(&self) -> Box<dyn Iterator<Item = Cell<Self::Item>> + '_> {
        (**self).cells()
    }
}

/// A live `Set` of [`Cell`]s projecting a [`BiList`]'s occupied positions.
///
/// The projection is not a snapshot: it reads through to the container on
/// every operation, and removals write through.
///
/// - `contains(cell)` holds iff the element currently stored at the cell's
///   position equals the cell's recorded element — a stale cell whose
///   position has since been overwritten is not a member.
/// - `remove(cell)` vacates the position only under the same match,
///   preventing removal through a stale snapshot.
/// - `insert` is unsupported: cells are not freely insertable; use
///   [`BiList::set`] on the container.
pub struct CellSet<'a, B: BiList> {
    bilist: &'a mut B,
}

impl<'a, B: BiList> CellSet<'a, B> {
    /// Project `bilist`'s occupied cells.
    pub fn new(bilist: &'a mut B) -> Self {
        Self { bilist }
    }
}

impl<B> Collection for CellSet<'_, B>
where
    B: BiList,
    B::Item: Clone,
{
    type Item = Cell<B::Item>;

    fn len(&self) -> usize {
        self.bilist.len()
    }

    fn is_empty(&self) -> bool {
        self.bilist.is_empty()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Self::Item> + '_> {
        self.bilist.cells()
    }

    fn contains(&self, cell: &Self::Item) -> bool {
        self.bilist.get(cell.row(), cell.column()) == Some(cell.element())
    }

    fn insert(&mut self, _cell: Self::Item) -> Result<bool, ViewError> {
        Err(ViewError::Unsupported {
            op: "insert into a cell set; store through the container instead",
        })
    }

    fn remove(&mut self, cell: &Self::Item) -> Result<bool, ViewError> {
        if self.bilist.get(cell.row(), cell.column()) != Some(cell.element()) {
            return Ok(false);
        }
        match self.bilist.remove_at(cell.row(), cell.column()) {
            Ok(removed) => Ok(removed.is_some()),
            Err(GridError::Unsupported { op }) => Err(ViewError::Unsupported { op }),
            Err(_) => Ok(false),
        }
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        self.bilist.clear()
    }
}

impl<B> Set for CellSet<'_, B>
where
    B: BiList,
    B::Item: Clone,
{
}
