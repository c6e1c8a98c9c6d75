//! The horizontal mirror view.

use std::fmt;
use std::marker::PhantomData;

use weft_commute::{CommutedSet, Commuter, NoInverse};
use weft_core::{Collection, ViewError};

use crate::bilist::{BiList, CellSet};
use crate::cell::Cell;
use crate::contract;
use crate::error::GridError;
use crate::matrix::Matrix;

/// A matrix viewed with its columns reversed.
///
/// Every addressed operation on column `c` delegates to column
/// `width - 1 - c` of the backing matrix; nothing is copied, and mutations
/// through either face are visible through the other.
///
/// # Involution
///
/// Mirroring is its own inverse, and the type keeps that structural:
/// calling [`mirrored`](Mirrored::mirrored) on a `Mirrored` value returns
/// the original backing matrix itself — one unwrap, never a double
/// wrapper.
///
/// ```
/// use weft_grid::{DenseMatrix, MatrixExt};
///
/// let m = DenseMatrix::from_rows([vec![1, 2, 3]]).unwrap();
/// let round_trip = m.clone().mirrored().mirrored();
/// assert_eq!(round_trip, m);
/// ```
pub struct Mirrored<M> {
    backing: M,
}

impl<M> Mirrored<M> {
    /// View `backing` with its columns reversed.
    pub fn new(backing: M) -> Self {
        Self { backing }
    }

    /// The backing matrix.
    pub fn backing(&self) -> &M {
        &self.backing
    }

    /// Unwrap, returning the backing matrix.
    pub fn into_inner(self) -> M {
        self.backing
    }

    /// The mirror of this mirror: the original backing matrix.
    ///
    /// This inherent method shadows
    /// [`MatrixExt::mirrored`](crate::MatrixExt::mirrored), which is what
    /// makes the double mirror unwrap instead of nesting.
    pub fn mirrored(self) -> M {
        self.backing
    }
}

impl<M: Matrix> Mirrored<M>
where
    M::Item: Clone,
{
    fn flip(&self, column: usize) -> usize {
        self.backing.width() - 1 - column
    }

    /// The live cell set of the mirrored view, as a write-through
    /// [`CommutedSet`] over the backing matrix's cell set.
    ///
    /// The commuter is the self-inverse column flip ([`CellFlip`]):
    /// forward application translates a backing cell into view
    /// coordinates, and reverse application — the same flip — translates a
    /// view cell back before it reaches the backing.
    pub fn cell_set(&mut self) -> CommutedSet<CellSet<'_, M>, CellFlip<M::Item>> {
        let width = self.backing.width();
        CommutedSet::new(self.backing.cell_set(), CellFlip::new(width))
    }
}

impl<M: Matrix> Collection for Mirrored<M>
where
    M::Item: Clone,
{
    type Item = M::Item;

    fn len(&self) -> usize {
        self.backing.len()
    }

    fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Self::Item> + '_> {
        Box::new(self.cells().map(Cell::into_element))
    }

    fn contains(&self, item: &Self::Item) -> bool {
        // Membership is position-free; ask the backing directly.
        self.backing.contains(item)
    }

    fn insert(&mut self, item: Self::Item) -> Result<bool, ViewError> {
        self.backing.insert(item)
    }

    fn remove(&mut self, item: &Self::Item) -> Result<bool, ViewError> {
        self.backing.remove(item)
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        self.backing.clear()
    }
}

impl<M: Matrix> BiList for Mirrored<M>
where
    M::Item: Clone,
{
    fn get(&self, row: usize, column: usize) -> Option<&Self::Item> {
        if column >= self.backing.width() {
            return None;
        }
        self.backing.get(row, self.flip(column))
    }

    fn set(
        &mut self,
        row: usize,
        column: usize,
        element: Self::Item,
    ) -> Result<Option<Self::Item>, GridError> {
        if column >= self.backing.width() {
            return Err(GridError::OutOfBounds {
                row,
                column,
                height: self.backing.height(),
                width: self.backing.width(),
            });
        }
        let flipped = self.flip(column);
        self.backing.set(row, flipped, element)
    }

    fn remove_at(
        &mut self,
        row: usize,
        column: usize,
    ) -> Result<Option<Self::Item>, GridError> {
        if column >= self.backing.width() {
            return Err(GridError::OutOfBounds {
                row,
                column,
                height: self.backing.height(),
                width: self.backing.width(),
            });
        }
        let flipped = self.flip(column);
        self.backing.remove_at(row, flipped)
    }

    fn cells(&self) -> Box<dyn Iterator<Item = Cell<Self::Item>> + '_> {
        let width = self.backing.width();
        let len = self.backing.len();
        Box::new((0..len).filter_map(move |index| {
            let row = index / width;
            let column = index % width;
            self.get(row, column)
                .map(|element| Cell::new(row, column, element.clone()))
        }))
    }
}

impl<M: Matrix> Matrix for Mirrored<M>
where
    M::Item: Clone,
{
    fn height(&self) -> usize {
        self.backing.height()
    }

    fn width(&self) -> usize {
        self.backing.width()
    }
}

impl<M: Matrix> fmt::Display for Mirrored<M>
where
    M::Item: Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        contract::display_matrix(f, self)
    }
}

/// The self-inverse column flip on [`Cell`]s of a fixed-width matrix.
///
/// Applying the flip twice is the identity, so `disapply` reuses `apply`
/// and never fails.
pub struct CellFlip<E> {
    width: usize,
    _marker: PhantomData<fn(&Cell<E>) -> Cell<E>>,
}

impl<E> CellFlip<E> {
    /// The column flip for a matrix of the given width.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            _marker: PhantomData,
        }
    }
}

impl<E: Clone> Commuter for CellFlip<E> {
    type Input = Cell<E>;
    type Output = Cell<E>;

    fn apply(&self, input: &Cell<E>) -> Cell<E> {
        Cell::new(
            input.row(),
            self.width - 1 - input.column(),
            input.element().clone(),
        )
    }

    fn disapply(&self, output: &Cell<E>) -> Result<Cell<E>, NoInverse> {
        Ok(self.apply(output))
    }
}
