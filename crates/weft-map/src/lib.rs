//! Set/map duality for the Weft view framework.
//!
//! One logical store, two faces: a [`MapSet`] is simultaneously a
//! [`Set`](weft_core::Set) of `(key, value)` entries and — through
//! [`MapSet::as_map`] — a key-indexed [`Map`](weft_core::Map). Any
//! successful mutation through either face is immediately observable
//! through the other, because both forward to the same backing store.
//!
//! The two representations convert freely and in O(1):
//!
//! - [`MapBackingSet`] derives a full `MapSet` from any `Map`;
//! - [`AsMap`] derives a full `Map` view from any `MapSet`.
//!
//! [`IterativeMap`] covers the opposite extreme: a source that exposes
//! *only* entry iteration and removal — an external registry, say — and no
//! key index at all. The map scans per operation and tolerates duplicate
//! keys in the source.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod as_map;
mod backing;
mod iterative;
mod map_set;
mod source;

pub use as_map::AsMap;
pub use backing::MapBackingSet;
pub use iterative::IterativeMap;
pub use map_set::MapSet;
pub use source::EntrySource;
