//! Row-major dense matrix storage.

use std::fmt;

use weft_core::{Collection, ViewError};

use crate::bilist::BiList;
use crate::cell::Cell;
use crate::contract;
use crate::error::GridError;
use crate::matrix::Matrix;

/// A [`Matrix`] backed by a row-major `Vec`.
///
/// Every position always holds an element; construction fills the whole
/// grid. The shape is fixed for the value's lifetime: only in-place
/// [`set`](BiList::set) mutates, and structural operations fail with an
/// unsupported-operation error.
///
/// # Examples
///
/// ```
/// use weft_core::Collection;
/// use weft_grid::{BiList, DenseMatrix, Matrix};
///
/// let mut m = DenseMatrix::new(2, 3, 0).unwrap();
/// m.set(1, 2, 9).unwrap();
/// assert_eq!(m.get(1, 2), Some(&9));
/// assert_eq!(m.len(), 6);
/// assert_eq!(m.width(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseMatrix<E> {
    height: usize,
    width: usize,
    data: Vec<E>,
}

impl<E> DenseMatrix<E> {
    /// Create a `height` x `width` matrix with every position holding a
    /// clone of `fill`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is zero, or
    /// `Err(GridError::TooLarge)` if `height * width` overflows.
    pub fn new(height: usize, width: usize, fill: E) -> Result<Self, GridError>
    where
        E: Clone,
    {
        let len = Self::checked_len(height, width)?;
        Ok(Self {
            height,
            width,
            data: vec![fill; len],
        })
    }

    /// Build a matrix from rows of elements.
    ///
    /// The width is taken from the first row; a later row of a different
    /// length is `Err(GridError::BadShape)`. Empty input, or an empty
    /// first row, is `Err(GridError::EmptyGrid)`.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = E>,
    {
        let mut data = Vec::new();
        let mut width = 0;
        let mut height = 0;
        for (index, row) in rows.into_iter().enumerate() {
            let before = data.len();
            data.extend(row);
            let len = data.len() - before;
            if index == 0 {
                width = len;
            } else if len != width {
                return Err(GridError::BadShape {
                    row: index,
                    len,
                    width,
                });
            }
            height = index + 1;
        }
        if height == 0 || width == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    fn checked_len(height: usize, width: usize) -> Result<usize, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::EmptyGrid);
        }
        height
            .checked_mul(width)
            .ok_or(GridError::TooLarge { height, width })
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.height && column < self.width).then(|| row * self.width + column)
    }

    fn out_of_bounds(&self, row: usize, column: usize) -> GridError {
        GridError::OutOfBounds {
            row,
            column,
            height: self.height,
            width: self.width,
        }
    }
}

impl<E: PartialEq + Clone> Collection for DenseMatrix<E> {
    type Item = E;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_empty(&self) -> bool {
        // Construction rejects zero dimensions.
        false
    }

    fn iter(&self) -> Box<dyn Iterator<Item = E> + '_> {
        Box::new(self.data.as_slice().iter().cloned())
    }

    fn contains(&self, item: &E) -> bool {
        self.data.contains(item)
    }

    fn insert(&mut self, _item: E) -> Result<bool, ViewError> {
        Err(ViewError::Unsupported {
            op: "insert into a fixed matrix",
        })
    }

    fn remove(&mut self, _item: &E) -> Result<bool, ViewError> {
        Err(ViewError::Unsupported {
            op: "remove from a fixed matrix",
        })
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        Err(ViewError::Unsupported {
            op: "clear a fixed matrix",
        })
    }
}

impl<E: PartialEq + Clone> BiList for DenseMatrix<E> {
    fn get(&self, row: usize, column: usize) -> Option<&E> {
        self.index(row, column).map(|i| &self.data[i])
    }

    fn set(&mut self, row: usize, column: usize, element: E) -> Result<Option<E>, GridError> {
        match self.index(row, column) {
            Some(i) => Ok(Some(std::mem::replace(&mut self.data[i], element))),
            None => Err(self.out_of_bounds(row, column)),
        }
    }

    fn remove_at(&mut self, row: usize, column: usize) -> Result<Option<E>, GridError> {
        let _ = (row, column);
        Err(GridError::Unsupported {
            op: "remove a cell from a fixed matrix",
        })
    }

    fn cells(&self) -> Box<dyn Iterator<Item = Cell<E>> + '_> {
        let width = self.width;
        Box::new(
            self.data
                .iter()
                .enumerate()
                .map(move |(i, element)| Cell::new(i / width, i % width, element.clone())),
        )
    }
}

impl<E: PartialEq + Clone> Matrix for DenseMatrix<E> {
    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }
}

impl<E: PartialEq + Clone + fmt::Display> fmt::Display for DenseMatrix<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        contract::display_matrix(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    fn counted(height: usize, width: usize) -> DenseMatrix<usize> {
        let mut m = DenseMatrix::new(height, width, 0).unwrap();
        for i in 0..height * width {
            m.set(i / width, i % width, i).unwrap();
        }
        m
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            DenseMatrix::new(0, 3, 'x'),
            Err(GridError::EmptyGrid)
        ));
        assert!(matches!(
            DenseMatrix::new(3, 0, 'x'),
            Err(GridError::EmptyGrid)
        ));
    }

    #[test]
    fn new_rejects_overflowing_dimensions() {
        assert!(matches!(
            DenseMatrix::new(usize::MAX, 2, 0u8),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn from_rows_validates_shape() {
        let m = DenseMatrix::from_rows([vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.get(1, 0), Some(&3));
        assert!(matches!(
            DenseMatrix::from_rows([vec![1, 2], vec![3]]),
            Err(GridError::BadShape { row: 1, len: 1, width: 2 })
        ));
        assert!(matches!(
            DenseMatrix::from_rows(Vec::<Vec<i32>>::new()),
            Err(GridError::EmptyGrid)
        ));
    }

    // ── Addressing ──────────────────────────────────────────────

    #[test]
    fn set_overwrites_and_returns_the_displaced_element() {
        let mut m = DenseMatrix::new(2, 2, 'a').unwrap();
        assert_eq!(m.set(0, 1, 'b').unwrap(), Some('a'));
        assert_eq!(m.set(0, 1, 'c').unwrap(), Some('b'));
        assert_eq!(m.get(0, 1), Some(&'c'));
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut m = DenseMatrix::new(2, 2, 0).unwrap();
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
        assert!(matches!(
            m.set(0, 2, 1),
            Err(GridError::OutOfBounds { column: 2, .. })
        ));
    }

    // ── Fixed shape ─────────────────────────────────────────────

    #[test]
    fn structural_mutation_is_disabled() {
        let mut m = counted(2, 2);
        assert!(matches!(m.insert(9), Err(ViewError::Unsupported { .. })));
        assert!(matches!(
            Collection::remove(&mut m, &0),
            Err(ViewError::Unsupported { .. })
        ));
        assert!(matches!(m.clear(), Err(ViewError::Unsupported { .. })));
        assert!(matches!(
            m.remove_at(0, 0),
            Err(GridError::Unsupported { .. })
        ));
        assert_eq!(m.len(), 4);
    }

    // ── Iteration order ─────────────────────────────────────────

    #[test]
    fn iteration_is_row_major() {
        let m = counted(2, 3);
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
        compliance::assert_row_major(&m);
        compliance::assert_iter_matches_cells(&m);
    }

    #[test]
    fn shape_invariant_holds() {
        let m = counted(3, 4);
        assert_eq!(m.len(), m.height() * m.width());
    }

    #[test]
    fn display_renders_rows() {
        let m = counted(2, 2);
        assert_eq!(m.to_string(), "[[0, 1], [2, 3]]");
    }
}
