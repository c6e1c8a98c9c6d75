//! Benchmark crate for the Weft view framework.
//!
//! Holds no library code of its own; see the `benches/` directory for the
//! criterion micro-benchmarks covering view traversal, write-through
//! translation, and entry-scan lookup.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
