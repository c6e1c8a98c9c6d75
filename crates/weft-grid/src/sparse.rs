//! Variable-size sparse storage keyed by position.

use std::collections::BTreeMap;
use std::fmt;

use weft_core::{contract as core_contract, Collection, ViewError};

use crate::bilist::BiList;
use crate::cell::Cell;
use crate::error::GridError;

/// A variable-size [`BiList`] holding only occupied positions.
///
/// Backed by an ordered map keyed on `(row, column)`, so iteration is
/// row-major ascending without bookkeeping. Positions are unbounded:
/// `set` at any address inserts, `remove_at` vacates, and `len` counts the
/// occupied positions only.
///
/// # Examples
///
/// ```
/// use weft_core::Collection;
/// use weft_grid::{BiList, SparseBiList};
///
/// let mut grid = SparseBiList::new();
/// grid.set(0, 0, "a").unwrap();
/// grid.set(7, 3, "b").unwrap();
/// assert_eq!(grid.len(), 2);
/// assert_eq!(grid.remove_at(7, 3).unwrap(), Some("b"));
/// assert_eq!(grid.get(7, 3), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseBiList<E> {
    cells: BTreeMap<(usize, usize), E>,
}

impl<E> SparseBiList<E> {
    /// An empty container.
    pub fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }
}

impl<E: PartialEq + Clone> Collection for SparseBiList<E> {
    type Item = E;

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = E> + '_> {
        Box::new(self.cells.values().cloned())
    }

    fn contains(&self, item: &E) -> bool {
        self.cells.values().any(|held| held == item)
    }

    fn insert(&mut self, _item: E) -> Result<bool, ViewError> {
        Err(ViewError::Unsupported {
            op: "insert without a position; use set(row, column, element)",
        })
    }

    fn remove(&mut self, item: &E) -> Result<bool, ViewError> {
        let position = self
            .cells
            .iter()
            .find(|(_, held)| *held == item)
            .map(|(&position, _)| position);
        match position {
            Some(position) => {
                self.cells.remove(&position);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        self.cells.clear();
        Ok(())
    }
}

impl<E: PartialEq + Clone> BiList for SparseBiList<E> {
    fn get(&self, row: usize, column: usize) -> Option<&E> {
        self.cells.get(&(row, column))
    }

    fn set(&mut self, row: usize, column: usize, element: E) -> Result<Option<E>, GridError> {
        Ok(self.cells.insert((row, column), element))
    }

    fn remove_at(&mut self, row: usize, column: usize) -> Result<Option<E>, GridError> {
        Ok(self.cells.remove(&(row, column)))
    }

    fn cells(&self) -> Box<dyn Iterator<Item = Cell<E>> + '_> {
        Box::new(
            self.cells
                .iter()
                .map(|(&(row, column), element)| Cell::new(row, column, element.clone())),
        )
    }
}

impl<E: PartialEq + Clone + fmt::Display> fmt::Display for SparseBiList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        core_contract::display_collection(f, self.cells())
    }
}
