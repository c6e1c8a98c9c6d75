//! The fixed-shape `Matrix` contract.

use crate::bilist::BiList;
use crate::cursor::Cursor;
use crate::frozen::Frozen;
use crate::mirror::Mirrored;
use crate::rows::{Row, Rows};

/// A [`BiList`] with fixed `height` and `width`.
///
/// The shape invariant: `len() == height() * width()` at all times. Every
/// position is always occupied — absence is represented by a caller-chosen
/// sentinel element, never by omission. Structural mutation (`insert`,
/// `remove`, `remove_at`, `clear`) is disabled and fails with an
/// unsupported-operation error; only in-place [`set`](BiList::set) is
/// permitted.
pub trait Matrix: BiList {
    /// Number of rows.
    fn height(&self) -> usize;

    /// Number of columns.
    fn width(&self) -> usize;

    /// The row at `row` as a read-only fixed-length sequence, or `None`
    /// past the last row.
    fn row(&self, row: usize) -> Option<Row<'_, Self>>
    where
        Self: Sized,
    {
        if row < self.height() {
            Some(Row::new(self, row))
        } else {
            None
        }
    }

    /// A read-only view of the matrix as a sequence of rows.
    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows::new(self)
    }

    /// A bidirectional row-major cursor with write-back. See [`Cursor`].
    fn cursor(&mut self) -> Cursor<'_, Self>
    where
        Self: Sized,
    {
        Cursor::new(self)
    }
}

impl<M: Matrix + ?Sized> Matrix for &mut M {
    fn height(&self) -> usize {
        (**self).height()
    }
    fn width(&self) -> usize {
        (**self).width()
    }
}

impl<M: Matrix + ?Sized> Matrix for Box<M> {
    fn height(&self) -> usize {
        (**self).height()
    }
    fn width(&self) -> usize {
        (**self).width()
    }
}

/// Owned structural transforms, available on every sized matrix.
pub trait MatrixExt: Matrix + Sized {
    /// Consume the matrix into its horizontal mirror.
    ///
    /// Mirroring a [`Mirrored`] value unwraps it instead of nesting:
    /// `m.mirrored().mirrored()` is `m` itself, moved back out.
    fn mirrored(self) -> Mirrored<Self> {
        Mirrored::new(self)
    }

    /// Consume the matrix into a read-only wrapper.
    ///
    /// Freezing a [`Frozen`] value returns it unchanged rather than
    /// double-wrapping.
    fn frozen(self) -> Frozen<Self> {
        Frozen::new(self)
    }
}

impl<M: Matrix + Sized> MatrixExt for M {}
