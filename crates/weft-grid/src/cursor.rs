//! Bidirectional row-major traversal with write-back.

use weft_core::Collection;

use crate::error::GridError;
use crate::matrix::Matrix;

/// A bidirectional cursor over a [`Matrix`] in row-major order.
///
/// The cursor sits between positions, like a standard list iterator:
/// [`next`](Cursor::next) yields the element after the cursor and advances,
/// [`previous`](Cursor::previous) yields the element before it and retreats.
/// Position `i` addresses `(i / width, i % width)`.
///
/// [`set`](Cursor::set) rewrites the cell most recently returned by
/// `next`/`previous`; it may be called repeatedly for the same cell, but
/// calling it before any traversal fails with
/// [`GridError::NoCursorElement`].
///
/// # Examples
///
/// ```
/// use weft_grid::{DenseMatrix, Matrix};
///
/// let mut m = DenseMatrix::from_rows([vec![0, 1, 2], vec![3, 4, 5]]).unwrap();
/// let mut cursor = m.cursor();
/// assert_eq!(cursor.next(), Some(&0));
/// assert_eq!(cursor.next(), Some(&1));
/// cursor.set(10).unwrap(); // rewrites the cell that yielded 1
/// assert_eq!(cursor.previous(), Some(&10));
/// ```
pub struct Cursor<'a, M: Matrix> {
    matrix: &'a mut M,
    cursor: usize,
    last: Option<usize>,
}

impl<'a, M: Matrix> Cursor<'a, M> {
    /// A cursor positioned before the first element of `matrix`.
    pub fn new(matrix: &'a mut M) -> Self {
        Self {
            matrix,
            cursor: 0,
            last: None,
        }
    }

    /// `true` if a call to [`next`](Cursor::next) would yield an element.
    pub fn has_next(&self) -> bool {
        self.cursor < self.matrix.len()
    }

    /// `true` if a call to [`previous`](Cursor::previous) would yield one.
    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    /// The element after the cursor, advancing past it.
    pub fn next(&mut self) -> Option<&M::Item> {
        if !self.has_next() {
            return None;
        }
        let index = self.cursor;
        self.cursor += 1;
        self.last = Some(index);
        let width = self.matrix.width();
        self.matrix.get(index / width, index % width)
    }

    /// The element before the cursor, retreating before it.
    pub fn previous(&mut self) -> Option<&M::Item> {
        if !self.has_previous() {
            return None;
        }
        self.cursor -= 1;
        let index = self.cursor;
        self.last = Some(index);
        let width = self.matrix.width();
        self.matrix.get(index / width, index % width)
    }

    /// Row index of the element a call to `next` would yield.
    pub fn next_row_index(&self) -> usize {
        self.cursor / self.matrix.width()
    }

    /// Column index of the element a call to `next` would yield.
    pub fn next_column_index(&self) -> usize {
        self.cursor % self.matrix.width()
    }

    /// Row index of the element a call to `previous` would yield, or
    /// `None` at the front.
    pub fn previous_row_index(&self) -> Option<usize> {
        self.cursor
            .checked_sub(1)
            .map(|index| index / self.matrix.width())
    }

    /// Column index of the element a call to `previous` would yield, or
    /// `None` at the front.
    pub fn previous_column_index(&self) -> Option<usize> {
        self.cursor
            .checked_sub(1)
            .map(|index| index % self.matrix.width())
    }

    /// Rewrite the cell most recently returned by `next`/`previous`,
    /// returning the displaced element.
    pub fn set(&mut self, element: M::Item) -> Result<Option<M::Item>, GridError> {
        match self.last {
            None => Err(GridError::NoCursorElement),
            Some(index) => {
                let width = self.matrix.width();
                self.matrix.set(index / width, index % width, element)
            }
        }
    }
}
