//! Write-through commuted set views.

use weft_core::{Collection, Set, ViewError};

use crate::commuter::Commuter;
use crate::iter::TransformedIter;

/// A live, write-through set view backed by a set and a [`Commuter`].
///
/// Reads apply the forward function per pass. Writes translate the view
/// element back into the backing element type:
///
/// - `insert(e)` computes `disapply(&e)` and inserts the result into the
///   backing set. A [`NoInverse`](weft_core::NoInverse) failure surfaces as
///   [`ViewError::NoInverse`] and leaves the backing untouched.
/// - `contains`/`remove` likewise attempt `disapply` and treat failure as
///   *not present* — `false` / `Ok(false)` — rather than propagating.
///
/// For a commuter that is a true bijection on its domain, the view
/// round-trips: after `insert(x)`, `contains(&x)` holds and the backing
/// contains `disapply(&x)`.
///
/// # Examples
///
/// ```
/// use indexmap::IndexSet;
/// use weft_commute::{CommutedSet, FnCommuter};
/// use weft_core::{Collection, ViewError};
///
/// let parse = FnCommuter::new(
///     |n: &i32| n.to_string(),
///     |s: &String| s.parse::<i32>().map_err(|_| weft_commute::NoInverse),
/// );
/// let mut view = CommutedSet::new(IndexSet::<i32>::new(), parse);
///
/// view.insert("42".to_string()).unwrap();
/// assert!(view.backing().contains(&42));
/// assert_eq!(view.insert("not a number".into()), Err(ViewError::NoInverse));
/// assert_eq!(view.backing().len(), 1);
/// ```
pub struct CommutedSet<S, C> {
    backing: S,
    commuter: C,
}

impl<S, C> CommutedSet<S, C>
where
    S: Set,
    C: Commuter<Input = S::Item>,
    C::Output: PartialEq,
{
    /// View `backing` through `commuter`.
    pub fn new(backing: S, commuter: C) -> Self {
        Self { backing, commuter }
    }

    /// The backing set.
    pub fn backing(&self) -> &S {
        &self.backing
    }

    /// The commuter.
    pub fn commuter(&self) -> &C {
        &self.commuter
    }

    /// Unwrap, returning the backing set.
    pub fn into_inner(self) -> S {
        self.backing
    }
}

impl<S, C> Collection for CommutedSet<S, C>
where
    S: Set,
    C: Commuter<Input = S::Item>,
    C::Output: PartialEq,
{
    type Item = C::Output;

    fn len(&self) -> usize {
        self.backing.len()
    }

    fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Self::Item> + '_> {
        Box::new(TransformedIter::new(self.backing.iter(), |item| {
            self.commuter.apply(item)
        }))
    }

    fn contains(&self, item: &Self::Item) -> bool {
        match self.commuter.disapply(item) {
            Ok(backing_item) => self.backing.contains(&backing_item),
            Err(_) => false,
        }
    }

    fn insert(&mut self, item: Self::Item) -> Result<bool, ViewError> {
        let backing_item = self.commuter.disapply(&item)?;
        self.backing.insert(backing_item)
    }

    fn remove(&mut self, item: &Self::Item) -> Result<bool, ViewError> {
        match self.commuter.disapply(item) {
            Ok(backing_item) => self.backing.remove(&backing_item),
            Err(_) => Ok(false),
        }
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        self.backing.clear()
    }
}

impl<S, C> Set for CommutedSet<S, C>
where
    S: Set,
    C: Commuter<Input = S::Item>,
    C::Output: PartialEq,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::FnCommuter;
    use indexmap::IndexSet;
    use proptest::prelude::*;
    use weft_core::contract;
    use weft_core::NoInverse;

    type Shift = FnCommuter<
        i64,
        i64,
        fn(&i64) -> i64,
        fn(&i64) -> Result<i64, NoInverse>,
    >;

    fn shift() -> Shift {
        let apply: fn(&i64) -> i64 = |n| n + 5;
        let disapply: fn(&i64) -> Result<i64, NoInverse> = |n| Ok(n - 5);
        FnCommuter::new(apply, disapply)
    }

    fn evens_only() -> Shift {
        let apply: fn(&i64) -> i64 = |n| n * 2;
        let disapply: fn(&i64) -> Result<i64, NoInverse> =
            |n| if n % 2 == 0 { Ok(n / 2) } else { Err(NoInverse) };
        FnCommuter::new(apply, disapply)
    }

    // ── Round trip ──────────────────────────────────────────────

    #[test]
    fn bijection_round_trips() {
        let mut view = CommutedSet::new(IndexSet::<i64>::new(), shift());
        assert!(view.insert(12).unwrap());
        assert!(view.contains(&12));
        assert!(view.backing().contains(&7));
        assert!(!view.insert(12).unwrap());
    }

    // ── No-inverse locality ─────────────────────────────────────

    #[test]
    fn failed_insert_leaves_the_backing_unchanged() {
        let mut view = CommutedSet::new(IndexSet::<i64>::new(), evens_only());
        view.insert(4).unwrap();
        let before = view.backing().clone();
        assert_eq!(view.insert(3), Err(ViewError::NoInverse));
        assert_eq!(view.backing(), &before);
    }

    #[test]
    fn lookup_treats_no_inverse_as_absent() {
        let mut view = CommutedSet::new(IndexSet::<i64>::new(), evens_only());
        view.insert(4).unwrap();
        assert!(!view.contains(&3));
        assert!(!view.remove(&3).unwrap());
        assert_eq!(view.len(), 1);
    }

    // ── Set contract across the view boundary ───────────────────

    #[test]
    fn view_and_plain_set_obey_the_same_contract() {
        let mut view = CommutedSet::new(IndexSet::<i64>::new(), shift());
        view.insert(10).unwrap();
        view.insert(11).unwrap();

        let plain: IndexSet<i64> = [10, 11].into_iter().collect();
        assert!(contract::set_eq(&view, &plain));
        assert!(contract::set_eq(&plain, &view));
        assert_eq!(contract::set_hash(&view), contract::set_hash(&plain));
    }

    proptest! {
        #[test]
        fn round_trip_holds_for_arbitrary_elements(items in proptest::collection::vec(-1000i64..1000, 0..32)) {
            let mut view = CommutedSet::new(IndexSet::<i64>::new(), shift());
            for &item in &items {
                view.insert(item).unwrap();
            }
            for &item in &items {
                prop_assert!(view.contains(&item));
                prop_assert!(view.backing().contains(&(item - 5)));
            }
            prop_assert_eq!(
                view.len(),
                items.iter().collect::<std::collections::HashSet<_>>().len()
            );
        }
    }
}
