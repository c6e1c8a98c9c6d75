//! Read-only row views.

use std::fmt;

use weft_core::{contract as core_contract, Seq};

use crate::bilist::BiList;
use crate::matrix::Matrix;

/// One row of a [`Matrix`] as a read-only fixed-length sequence.
///
/// A live view: elements are read through the matrix on access, so a view
/// over a mirrored matrix yields the mirrored order without any copying.
pub struct Row<'a, M: Matrix> {
    matrix: &'a M,
    row: usize,
}

impl<'a, M: Matrix> Row<'a, M> {
    pub(crate) fn new(matrix: &'a M, row: usize) -> Self {
        Self { matrix, row }
    }

    /// The row index within the matrix.
    pub fn index(&self) -> usize {
        self.row
    }
}

impl<M: Matrix> Clone for Row<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: Matrix> Copy for Row<'_, M> {}

impl<M: Matrix> Seq for Row<'_, M>
where
    M::Item: Clone,
{
    type Item = M::Item;

    fn len(&self) -> usize {
        self.matrix.width()
    }

    fn get(&self, index: usize) -> Option<M::Item> {
        self.matrix.get(self.row, index).cloned()
    }
}

impl<M: Matrix> PartialEq for Row<'_, M>
where
    M::Item: Clone,
{
    fn eq(&self, other: &Self) -> bool {
        core_contract::seq_eq(self, other)
    }
}

impl<M: Matrix> fmt::Display for Row<'_, M>
where
    M::Item: Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        core_contract::display_collection(f, Seq::iter(self))
    }
}

/// A [`Matrix`] as a read-only sequence of [`Row`]s.
pub struct Rows<'a, M: Matrix> {
    matrix: &'a M,
}

impl<'a, M: Matrix> Rows<'a, M> {
    pub(crate) fn new(matrix: &'a M) -> Self {
        Self { matrix }
    }
}

impl<'a, M: Matrix> Seq for Rows<'a, M>
where
    M::Item: Clone,
{
    type Item = Row<'a, M>;

    fn len(&self) -> usize {
        self.matrix.height()
    }

    fn get(&self, index: usize) -> Option<Row<'a, M>> {
        (index < self.matrix.height()).then(|| Row::new(self.matrix, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::DenseMatrix;

    fn counted() -> DenseMatrix<usize> {
        DenseMatrix::from_rows([vec![0, 1, 2], vec![3, 4, 5]]).unwrap()
    }

    #[test]
    fn rows_expose_fixed_length_sequences() {
        let m = counted();
        let rows = m.rows();
        assert_eq!(Seq::len(&rows), 2);
        let row = Seq::get(&rows, 1).unwrap();
        assert_eq!(Seq::len(&row), 3);
        assert_eq!(Seq::get(&row, 0), Some(3));
        assert_eq!(Seq::get(&row, 3), None);
        assert!(Seq::get(&rows, 2).is_none());
    }

    #[test]
    fn row_views_are_live() {
        let mut m = counted();
        m.set(0, 0, 42).unwrap();
        let row = m.row(0).unwrap();
        assert_eq!(Seq::get(&row, 0), Some(42));
    }

    #[test]
    fn row_display() {
        let m = counted();
        assert_eq!(m.row(1).unwrap().to_string(), "[3, 4, 5]");
    }
}
