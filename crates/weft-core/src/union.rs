//! Disjoint unions of backing sets.

use std::hash::Hash;

use smallvec::SmallVec;

use crate::contract;
use crate::error::ViewError;
use crate::traits::{Collection, Set};

/// Several pairwise-disjoint backing sets presented as one set.
///
/// Disjointness is a construction contract, not a runtime check: callers
/// must only combine sets that share no elements. Under that contract the
/// union is itself a valid set, membership and removal resolve by probing
/// each backing set in turn until one claims the element, and
/// [`hash_value`](DisjointUnion::hash_value) is simply the sum of the
/// backing sets' hashes.
///
/// # Examples
///
/// ```
/// use indexmap::IndexSet;
/// use weft_core::{Collection, DisjointUnion};
///
/// let evens: IndexSet<i32> = [0, 2].into_iter().collect();
/// let odds: IndexSet<i32> = [1, 3].into_iter().collect();
/// let union = DisjointUnion::new([evens, odds]);
/// assert_eq!(union.len(), 4);
/// assert!(union.contains(&3));
/// ```
#[derive(Clone, Debug)]
pub struct DisjointUnion<S> {
    parts: SmallVec<[S; 4]>,
}

impl<S> DisjointUnion<S> {
    /// Present `parts` as one set. The parts must be pairwise disjoint.
    pub fn new<I: IntoIterator<Item = S>>(parts: I) -> Self {
        Self {
            parts: parts.into_iter().collect(),
        }
    }

    /// The backing sets, in probe order.
    pub fn parts(&self) -> &[S] {
        &self.parts
    }

    /// Unwrap into the backing sets.
    pub fn into_parts(self) -> SmallVec<[S; 4]> {
        self.parts
    }
}

impl<S: Set> DisjointUnion<S>
where
    S::Item: Hash,
{
    /// The set hash of the union: the sum of the backing sets' hashes.
    ///
    /// Equals [`contract::set_hash`] of the union itself, because the sum
    /// over disjoint parts is the sum over all elements.
    pub fn hash_value(&self) -> u64 {
        self.parts
            .iter()
            .fold(0u64, |total, part| total.wrapping_add(contract::set_hash(part)))
    }
}

impl<S: Set> Collection for DisjointUnion<S> {
    type Item = S::Item;

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
            op: "insert into a disjoint union",
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

impl<S: Set> Set for DisjointUnion<S> {}
