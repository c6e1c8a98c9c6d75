//! The two-way function trait.

use weft_core::NoInverse;

/// A function paired with a reverse function.
///
/// Forward application is total. Reverse application either returns the
/// unique input that forward-maps to the given output, or fails with
/// [`NoInverse`] when no such input exists — the function is not surjective
/// at that point, or the transform records no invertible relationship.
///
/// Both directions take their argument by reference and produce an owned
/// result, so live views can re-derive elements per pass without consuming
/// the backing.
///
/// # Laws
///
/// For every input `x` in the backing domain,
/// `disapply(&apply(&x)) == Ok(x)`. Implementations that violate this
/// produce views whose `insert`/`contains` disagree.
pub trait Commuter {
    /// The domain (backing element) type.
    type Input;
    /// The codomain (view element) type.
    type Output;

    /// Apply the forward function. Never fails.
    fn apply(&self, input: &Self::Input) -> Self::Output;

    /// Apply the reverse function.
    ///
    /// Returns the input that forward-maps to `output`, or [`NoInverse`].
    fn disapply(&self, output: &Self::Output) -> Result<Self::Input, NoInverse>;
}

impl<C: Commuter + ?Sized> Commuter for &C {
    type Input = C::Input;
    type Output = C::Output;

    fn apply(&self, input: &Self::Input) -> Self::Output {
        (**self).apply(input)
    }

    fn disapply(&self, output: &Self::Output) -> Result<Self::Input, NoInverse> {
        (**self).disapply(output)
    }
}

impl<C: Commuter + ?Sized> Commuter for Box<C> {
    type Input = C::Input;
    type Output = C::Output;

    fn apply(&self, input: &Self::Input) -> Self::Output {
        (**self).apply(input)
    }

    fn disapply(&self, output: &Self::Output) -> Result<Self::Input, NoInverse> {
        (**self).disapply(output)
    }
}
