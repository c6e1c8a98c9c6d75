//! Concatenated presentation of several backing collections.

use std::fmt;

use smallvec::SmallVec;

use crate::contract;
use crate::error::ViewError;
use crate::traits::Collection;

/// Several backing collections presented as one logical collection.
///
/// Nothing is copied: iteration chains the parts in order, `len` sums,
/// and `contains`/`remove` probe each part in turn until one claims the
/// element. `insert` is unsupported — there is no rule for choosing which
/// part should receive a new element.
///
/// The parts live in a `SmallVec`, so the common case of concatenating a
/// handful of collections stays off the heap.
///
/// # Examples
///
/// ```
/// use weft_core::{Collection, Concat};
///
/// let joined = Concat::new([vec![1, 2], vec![3]]);
/// assert_eq!(joined.len(), 3);
/// assert!(joined.contains(&3));
/// assert_eq!(joined.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct Concat<C> {
    parts: SmallVec<[C; 4]>,
}

impl<C> Concat<C> {
    /// Present `parts` as one collection, in order.
    pub fn new<I: IntoIterator<Item = C>>(parts: I) -> Self {
        Self {
            parts: parts.into_iter().collect(),
        }
    }

    /// The backing parts, in presentation order.
    pub fn parts(&self) -> &[C] {
        &self.parts
    }

    /// Append another backing part.
    pub fn push(&mut self, part: C) {
        self.parts.push(part);
    }

    /// Unwrap into the backing parts.
    pub fn into_parts(self) -> SmallVec<[C; 4]> {
        self.parts
    }
}

impl<C: Collection> Collection for Concat<C> {
    type Item = C::Item;

    fn len(&self) -> usize {
        self.parts.iter().map(Collection::len).sum()
    }

    fn is_empty(&self) -> bool {
        self.parts.iter().all(Collection::is_empty)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Self::Item> + '_> {
        Box::new(self.parts.iter().flat_map(Collection::iter))
    }

    fn contains(&self, item: &Self::Item) -> bool {
        self.parts.iter().any(|part| part.contains(item))
    }

    fn insert(&mut self, _item: Self::Item) -> Result<bool, ViewError> {
        Err(ViewError::Unsupported {
            op: "insert into a concatenated collection",
        })
    }

    fn remove(&mut self, item: &Self::Item) -> Result<bool, ViewError> {
        for part in &mut self.parts {
            if part.remove(item)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        for part in &mut self.parts {
            part.clear()?;
        }
        Ok(())
    }
}

impl<C: Collection> fmt::Display for Concat<C>
where
    C::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        contract::display_collection(f, self.iter())
    }
}
