//! Ready-made commuters and transform builders.

use std::marker::PhantomData;

use weft_core::{MapEntry, NoInverse};

use crate::commuter::Commuter;

/// A [`Commuter`] built from a closure pair.
///
/// # Examples
///
/// ```
/// use weft_commute::{Commuter, FnCommuter};
///
/// let double = FnCommuter::new(
///     |n: &i32| n * 2,
///     |n: &i32| {
///         if n % 2 == 0 { Ok(n / 2) } else { Err(weft_commute::NoInverse) }
///     },
/// );
/// assert_eq!(double.apply(&3), 6);
/// assert_eq!(double.disapply(&6), Ok(3));
/// assert!(double.disapply(&7).is_err());
/// ```
pub struct FnCommuter<F, T, A, D> {
    apply: A,
    disapply: D,
    _marker: PhantomData<fn(&F) -> T>,
}

impl<F, T, A, D> FnCommuter<F, T, A, D>
where
    A: Fn(&F) -> T,
    D: Fn(&T) -> Result<F, NoInverse>,
{
    /// Pair a forward closure with its reverse.
    pub fn new(apply: A, disapply: D) -> Self {
        Self {
            apply,
            disapply,
            _marker: PhantomData,
        }
    }
}

impl<F, T, A, D> Commuter for FnCommuter<F, T, A, D>
where
    A: Fn(&F) -> T,
    D: Fn(&T) -> Result<F, NoInverse>,
{
    type Input = F;
    type Output = T;

    fn apply(&self, input: &F) -> T {
        (self.apply)(input)
    }

    fn disapply(&self, output: &T) -> Result<F, NoInverse> {
        (self.disapply)(output)
    }
}

/// A self-inverse transform: applying it twice is the identity.
///
/// The reverse direction reuses the forward closure, so `disapply` never
/// fails. Index flips (a horizontal mirror's column translation) are the
/// canonical use.
pub struct Involution<T, F> {
    f: F,
    _marker: PhantomData<fn(&T) -> T>,
}

impl<T, F: Fn(&T) -> T> Involution<T, F> {
    /// Wrap a self-inverse closure.
    ///
    /// The caller asserts `f(&f(&x)) == x` for all `x`; nothing checks it.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<T, F: Fn(&T) -> T> Commuter for Involution<T, F> {
    type Input = T;
    type Output = T;

    fn apply(&self, input: &T) -> T {
        (self.f)(input)
    }

    fn disapply(&self, output: &T) -> Result<T, NoInverse> {
        Ok((self.f)(output))
    }
}

/// The identity commuter.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity<T>(PhantomData<fn(&T) -> T>);

impl<T> Identity<T> {
    /// The identity transform on `T`.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Clone> Commuter for Identity<T> {
    type Input = T;
    type Output = T;

    fn apply(&self, input: &T) -> T {
        input.clone()
    }

    fn disapply(&self, output: &T) -> Result<T, NoInverse> {
        Ok(output.clone())
    }
}

/// Lifts a key commuter over map entries, passing values through.
///
/// Forward application rewrites only the key of a `(key, value)` entry.
/// Reverse application reconstructs a *detached* entry — the result is a
/// fresh snapshot, not attached to any backing store.
pub struct KeyCommuter<C, V> {
    inner: C,
    _marker: PhantomData<fn(&V) -> V>,
}

impl<C: Commuter, V: Clone> KeyCommuter<C, V> {
    /// Lift `inner` from keys to whole entries.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<C: Commuter, V: Clone> Commuter for KeyCommuter<C, V> {
    type Input = MapEntry<C::Input, V>;
    type Output = MapEntry<C::Output, V>;

    fn apply(&self, input: &Self::Input) -> Self::Output {
        MapEntry::new(self.inner.apply(input.key()), input.value().clone())
    }

    fn disapply(&self, output: &Self::Output) -> Result<Self::Input, NoInverse> {
        Ok(MapEntry::new(
            self.inner.disapply(output.key())?,
            output.value().clone(),
        ))
    }
}

/// One-way counterpart of [`KeyCommuter`]: a plain entry transform that
/// rewrites the key and passes the value through.
pub fn key_transform<K1, K2, V: Clone>(
    f: impl Fn(&K1) -> K2,
) -> impl Fn(&MapEntry<K1, V>) -> MapEntry<K2, V> {
    move |entry| MapEntry::new(f(entry.key()), entry.value().clone())
}
