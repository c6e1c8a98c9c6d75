//! A counted bag with collection semantics.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::contract;
use crate::error::ViewError;
use crate::traits::Collection;

/// A bag that stores each distinct element once with an occurrence count.
///
/// Iteration yields each element as many times as it is held, in first-seen
/// order. Equality compares counts (two multisets are equal when every
/// element occurs the same number of times in both) and
/// [`hash_value`](Multiset::hash_value) is a sum over (element, count)
/// pairs, so equal multisets hash identically regardless of insertion
/// order.
///
/// # Examples
///
/// ```
/// use weft_core::{Collection, Multiset};
///
/// let mut bag = Multiset::new();
/// bag.add("a", 2);
/// bag.add("b", 1);
/// assert_eq!(bag.len(), 3);
/// assert_eq!(bag.count(&"a"), 2);
/// assert_eq!(bag.iter().collect::<Vec<_>>(), vec!["a", "a", "b"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Multiset<T: Eq + Hash> {
    counts: IndexMap<T, usize>,
    total: usize,
}

impl<T: Eq + Hash> Multiset<T> {
    /// An empty multiset.
    pub fn new() -> Self {
        Self {
            counts: IndexMap::new(),
            total: 0,
        }
    }

    /// Occurrences of `item`.
    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Number of distinct elements.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Add `occurrences` of `item`, returning the previous count.
    pub fn add(&mut self, item: T, occurrences: usize) -> usize {
        self.total += occurrences;
        let slot = self.counts.entry(item).or_insert(0);
        let previous = *slot;
        *slot += occurrences;
        previous
    }

    /// Remove up to `occurrences` of `item`, returning the previous count.
    pub fn remove_occurrences(&mut self, item: &T, occurrences: usize) -> usize {
        let Some(slot) = self.counts.get_mut(item) else {
            return 0;
        };
        let previous = *slot;
        let removed = occurrences.min(previous);
        self.total -= removed;
        if removed == previous {
            self.counts.shift_remove(item);
        } else {
            *slot = previous - removed;
        }
        previous
    }

    /// Set the count of `item` outright, returning the previous count.
    pub fn set_count(&mut self, item: T, count: usize) -> usize {
        let previous = if count == 0 {
            self.counts.shift_remove(&item).unwrap_or(0)
        } else {
            self.counts.insert(item, count).unwrap_or(0)
        };
        self.total = self.total - previous + count;
        previous
    }

    /// Iterate the distinct (element, count) pairs in first-seen order.
    pub fn counted(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.counts.iter().map(|(item, &count)| (item, count))
    }

    /// Order-free hash over the (element, count) pairs.
    pub fn hash_value(&self) -> u64 {
        let mut total = 0u64;
        for (item, count) in self.counted() {
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            item.hash(&mut hasher);
            count.hash(&mut hasher);
            total = total.wrapping_add(hasher.finish());
        }
        total
    }
}

impl<T: Eq + Hash> PartialEq for Multiset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total && self.counts == other.counts
    }
}

impl<T: Eq + Hash> Eq for Multiset<T> {}

impl<T: Eq + Hash + Clone> Collection for Multiset<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.total
    }

    fn iter(&self) -> Box<dyn Iterator<Item = T> + '_> {
        Box::new(
            self.counts
                .iter()
                .flat_map(|(item, &count)| std::iter::repeat(item).take(count).cloned()),
        )
    }

    fn contains(&self, item: &T) -> bool {
        self.count(item) > 0
    }

    fn insert(&mut self, item: T) -> Result<bool, ViewError> {
        self.add(item, 1);
        Ok(true)
    }

    fn remove(&mut self, item: &T) -> Result<bool, ViewError> {
        Ok(self.remove_occurrences(item, 1) > 0)
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        self.counts.clear();
        self.total = 0;
        Ok(())
    }
}

impl<T: Eq + Hash + Clone + fmt::Display> fmt::Display for Multiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        contract::display_collection(f, self.iter())
    }
}

impl<T: Eq + Hash> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut bag = Self::new();
        for item in items {
            bag.add(item, 1);
        }
        bag
    }
}

/// Snapshot a collection's current elements into a [`Multiset`].
///
/// A deliberate point-in-time copy: later mutations of `collection` are
/// not reflected in the returned bag.
pub fn copy_to_multiset<C>(collection: &C) -> Multiset<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Eq + Hash,
{
    collection.iter().collect()
}
