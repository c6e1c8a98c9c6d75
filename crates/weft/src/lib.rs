//! Weft: live container views over caller-supplied storage.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Weft sub-crates. For most users, adding `weft` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use weft::prelude::*;
//!
//! // A 2x3 matrix, addressed by (row, column).
//! let mut m = DenseMatrix::from_rows([vec![0, 1, 2], vec![3, 4, 5]]).unwrap();
//! m.set(1, 2, 50).unwrap();
//!
//! // A horizontal mirror is a live view, not a copy...
//! let mut mirror = m.mirrored();
//! assert_eq!(mirror.get(1, 0), Some(&50));
//! mirror.set(0, 0, 20).unwrap();
//!
//! // ...and mirroring twice hands the original matrix back.
//! let m = mirror.mirrored();
//! assert_eq!(m.get(0, 2), Some(&20));
//!
//! // One store, two faces: a set of entries that is also a map.
//! let mut store = MapBackingSet::new(indexmap::IndexMap::<&str, i32>::new());
//! store.put("a", 1).unwrap();
//! assert!(store.contains(&MapEntry::new("a", 1)));
//! assert_eq!(store.as_map().get(&"a"), Some(1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`base`] | `weft-core` | Container contracts, forwarding, contract algorithms, decorators |
//! | [`commute`] | `weft-commute` | Two-way transformations and transformed set views |
//! | [`grid`] | `weft-grid` | 2D addressable containers and structural views |
//! | [`map`] | `weft-map` | Set/map duality and entry-scan maps |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Container contracts, forwarding impls, contract algorithms, and shared
/// decorators (`weft-core`).
pub use weft_core as base;

/// Two-way transformations and the transformed/commuted set views
/// (`weft-commute`).
pub use weft_commute as commute;

/// Two-dimensional addressable containers and their structural views
/// (`weft-grid`).
pub use weft_grid as grid;

/// Set/map duality and entry-scan maps (`weft-map`).
pub use weft_map as map;

/// Common imports for typical Weft usage.
///
/// ```rust
/// use weft::prelude::*;
/// ```
pub mod prelude {
    // Contracts
    pub use weft_core::{Collection, Map, MapEntry, Seq, Set};

    // Errors
    pub use weft_core::{NoInverse, ViewError};

    // Decorators
    pub use weft_core::{Concat, DisjointUnion, Multiset, Removal};

    // Transformations
    pub use weft_commute::{CommutedSet, Commuter, FnCommuter, Involution, TransformedSet};

    // Grid
    pub use weft_grid::{
        BiList, Cell, DenseMatrix, Frozen, GridError, Matrix, MatrixExt, Mirrored, SparseBiList,
    };

    // Set/map duality
    pub use weft_map::{AsMap, EntrySource, IterativeMap, MapBackingSet, MapSet};
}
