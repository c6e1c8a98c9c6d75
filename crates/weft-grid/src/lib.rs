//! Two-dimensional addressable containers and their structural views.
//!
//! This crate defines the [`BiList`] trait — a collection whose elements
//! are addressable by `(row, column)` in addition to plain membership —
//! and its fixed-shape specialization [`Matrix`], along with concrete
//! backings and derived views:
//!
//! - [`DenseMatrix`]: row-major `Vec` storage where every position always
//!   holds an element (absence is a caller-chosen sentinel value).
//! - [`SparseBiList`]: variable-size storage holding only occupied
//!   positions, iterated in row-major order.
//! - [`Cursor`]: bidirectional row-major traversal with write-back.
//! - [`CellSet`]: a live set projection of a container's occupied cells.
//! - [`Mirrored`]: the horizontal mirror — reads and writes delegate to the
//!   flipped column of the backing matrix; mirroring twice returns the
//!   original backing value.
//! - [`Frozen`]: a read-only wrapper whose derived views are read-only
//!   recursively.
//!
//! # Iteration order
//!
//! All row-major: index `i` addresses `(i / width, i % width)`. Every
//! implementation's [`cells`](BiList::cells) iterator and the [`Cursor`]
//! honor this mapping, which is what makes the contract algorithms in
//! [`contract`] implementation-independent.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod bilist;
mod cell;
pub mod contract;
mod cursor;
mod dense;
mod error;
mod frozen;
mod matrix;
mod mirror;
mod rows;
mod sparse;

#[cfg(test)]
pub(crate) mod compliance;

pub use bilist::{BiList, CellSet};
pub use cell::Cell;
pub use cursor::Cursor;
pub use dense::DenseMatrix;
pub use error::GridError;
pub use frozen::Frozen;
pub use matrix::{Matrix, MatrixExt};
pub use mirror::{CellFlip, Mirrored};
pub use rows::{Row, Rows};
pub use sparse::SparseBiList;
