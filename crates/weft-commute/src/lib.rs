//! The bidirectional transformation engine of the Weft view framework.
//!
//! Any container can be reshaped into "the same data, different element
//! type" without copying, as long as a transformation is supplied:
//!
//! - a one-way function gives a readable view ([`TransformedSet`]);
//! - a [`Commuter`] — a function paired with a reverse function — gives a
//!   *write-through* view ([`CommutedSet`]), where writes are translated
//!   back into the backing element type.
//!
//! Write-through is possible exactly when the transformation is invertible
//! at the written value. The failure mode for a non-invertible write is
//! explicit and local: the single operation fails with
//! [`ViewError::NoInverse`](weft_core::ViewError::NoInverse) and the
//! backing container is untouched.
//!
//! # Examples
//!
//! ```
//! use indexmap::IndexSet;
//! use weft_commute::{CommutedSet, FnCommuter};
//! use weft_core::Collection;
//!
//! // A bijection between i32 and its successor.
//! let shift = FnCommuter::new(|n: &i32| n + 1, |n: &i32| Ok(n - 1));
//! let backing: IndexSet<i32> = [1, 2].into_iter().collect();
//! let mut view = CommutedSet::new(backing, shift);
//!
//! assert!(view.contains(&2)); // 1 maps forward to 2
//! view.insert(10).unwrap();   // stored in the backing as 9
//! assert!(view.backing().contains(&9));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod combinators;
mod commuted;
mod commuter;
mod iter;
mod transformed;

pub use combinators::{key_transform, FnCommuter, Identity, Involution, KeyCommuter};
pub use commuted::CommutedSet;
pub use commuter::Commuter;
pub use iter::TransformedIter;
pub use transformed::TransformedSet;

pub use weft_core::NoInverse;
