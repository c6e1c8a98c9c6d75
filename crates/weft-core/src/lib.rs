//! Container contracts and the delegation layer for the Weft view framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! container traits every view in the workspace speaks — [`Collection`],
//! [`Set`], [`Seq`], and [`Map`] — along with the forwarding impls that give
//! decorators a full contract for free, the canonical contract algorithms in
//! [`contract`], and the shared decorator types ([`Removal`], [`Concat`],
//! [`DisjointUnion`], [`Multiset`]).
//!
//! # Design
//!
//! Everything here is a *view contract*: implementations are thin wrappers
//! over caller-supplied backing storage, and iteration yields owned elements
//! computed per pass, so a live view can reshape its backing without copying
//! it. Element types are expected to be cheap `Clone` values with
//! well-defined equality.
//!
//! Mutations return `Result` so that structurally disallowed operations
//! (read-only wrappers, one-way views, fixed-shape containers) fail
//! synchronously and locally with [`ViewError::Unsupported`] instead of
//! panicking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod adapters;
mod concat;
pub mod contract;
mod entry;
mod error;
mod multiset;
mod removal;
mod traits;
mod union;

pub use concat::Concat;
pub use entry::MapEntry;
pub use error::{NoInverse, ViewError};
pub use multiset::{copy_to_multiset, Multiset};
pub use removal::Removal;
pub use traits::{Collection, Map, Seq, Set};
pub use union::DisjointUnion;
