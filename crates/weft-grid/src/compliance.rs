//! Contract compliance helpers for 2D container implementations.
//!
//! Shared by the backend test modules (dense, sparse, mirrored, frozen)
//! to verify the invariants every implementation must satisfy.

use std::fmt::Debug;

use weft_core::Collection;

use crate::bilist::BiList;
use crate::matrix::Matrix;

/// Assert the row-major law: the `i`-th yielded cell addresses
/// `(i / width, i % width)`, every position is covered exactly once, and
/// the cell stream agrees with `get`.
pub fn assert_row_major<M>(matrix: &M)
where
    M: Matrix,
    M::Item: Clone + Debug,
{
    let width = matrix.width();
    let mut count = 0;
    for (index, cell) in matrix.cells().enumerate() {
        assert_eq!(
            (cell.row(), cell.column()),
            (index / width, index % width),
            "cell {index} out of row-major order"
        );
        assert_eq!(
            matrix.get(cell.row(), cell.column()),
            Some(cell.element()),
            "cell {index} disagrees with get"
        );
        count += 1;
    }
    assert_eq!(count, matrix.len(), "cells() must cover every position");
    assert_eq!(
        matrix.len(),
        matrix.height() * matrix.width(),
        "shape invariant violated"
    );
}

/// Assert that element iteration matches the cell stream's elements.
pub fn assert_iter_matches_cells<B>(bilist: &B)
where
    B: BiList,
    B::Item: Clone + Debug,
{
    let from_cells: Vec<B::Item> = bilist.cells().map(|c| c.into_element()).collect();
    let from_iter: Vec<B::Item> = bilist.iter().collect();
    assert_eq!(from_cells, from_iter);
}
