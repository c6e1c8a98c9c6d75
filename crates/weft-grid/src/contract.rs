//! Canonical contract algorithms for two-dimensional containers.
//!
//! Counterparts of [`weft_core::contract`] for the grid contracts: any two
//! structurally equal containers agree under these functions regardless of
//! implementation, because everything is defined through the row-major
//! [`cells`](crate::BiList::cells) projection.

use std::fmt;
use std::hash::Hash;

use weft_core::contract::element_hash;
use weft_core::Seq;

use crate::bilist::BiList;
use crate::matrix::Matrix;

/// Matrix equality: same shape and equal elements position by position.
///
/// Both iterate row-major, so comparing the cell streams compares the row
/// lists. For comparing a matrix against a general (possibly sparse)
/// [`BiList`], fall back to [`bilist_eq`].
pub fn matrix_eq<A, B>(a: &A, b: &B) -> bool
where
    A: Matrix + ?Sized,
    B: Matrix<Item = A::Item> + ?Sized,
{
    a.width() == b.width()
        && a.height() == b.height()
        && a.cells().zip(b.cells()).all(|(x, y)| x == y)
}

/// Cell-set equality between any two 2D containers.
///
/// Holds iff both hold the same number of occupied positions and every
/// occupied position of `a` stores an equal element in `b`.
pub fn bilist_eq<A, B>(a: &A, b: &B) -> bool
where
    A: BiList + ?Sized,
    B: BiList<Item = A::Item> + ?Sized,
{
    a.len() == b.len()
        && a.cells()
            .all(|cell| b.get(cell.row(), cell.column()) == Some(cell.element()))
}

/// Cell-set hash: the wrapping sum of the cell hashes.
///
/// Follows the order-free sum rule of
/// [`weft_core::contract::set_hash`], so two structurally equal containers
/// hash identically no matter how they are stored, and the hash agrees
/// with that of any cell-set view over the same container.
pub fn bilist_hash<B>(bilist: &B) -> u64
where
    B: BiList + ?Sized,
    B::Item: Hash,
{
    let mut total = 0u64;
    for cell in bilist.cells() {
        total = total.wrapping_add(element_hash(&cell));
    }
    total
}

/// Render a matrix through its row list, as `[[a, b], [c, d]]`.
pub fn display_matrix<M>(f: &mut fmt::Formatter<'_>, matrix: &M) -> fmt::Result
where
    M: Matrix,
    M::Item: Clone + fmt::Display,
{
    weft_core::contract::display_collection(f, matrix.rows().iter())
}
