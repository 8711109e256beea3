/*!
# Utilities

Provides supporting data structures for the algorithms in this crate, currently the
[`DisjointSetUnion`] used for cycle detection during Kruskal's algorithm.
*/

pub mod dsu;

pub use dsu::DisjointSetUnion;
