/*!
`wgraphs` is a graph data structure & algorithms library designed for graphs that are
- **w**eighted : Every edge carries a non-negative integer weight
- **w**ide open about labels : Nodes are numbered `0` to `n - 1`, with an optional
  payload-labelled layer on top

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the
graph. As most common graphs do not exceed `2^32` nodes, this should normally suffice and save
space as compared to `u64/usize`. **Weights** are `u64`; since they are unsigned, algorithms
that require non-negative weights (Dijkstra) are correct for every representable input.
For **edges**, we use a simple tuple-struct `Edge(Node, Node, Weight)`.

### Directed storage

Edges are stored directed: adding `(u, v, w)` inserts only `u -> v`. Callers that want
undirected behavior add both orientations explicitly. Adding an edge that already exists
overwrites its weight.

### Available Representations

See the [`repr`] module for the graph storage backends:

- [`AdjMap`](crate::repr::AdjMap) — hash-map neighborhoods, constant-time weight lookup
- [`SparseAdjArray`](crate::repr::SparseAdjArray) — inline small-vector neighborhoods,
  insertion-ordered and compact for low-degree graphs

Both store one [`WeightedNeighborhood`](crate::repr::WeightedNeighborhood) per node in a dense
arena indexed by node id.

### Labelled graphs

[`LabeledGraph`](crate::graph::LabeledGraph) wraps any representation and identifies nodes by a
user payload (`Clone + Eq + Hash`) instead of an index: equal payloads are the same node. The
payload is interned to a stable node id at insertion, so all algorithms still run on indices.

# Design

Algorithms are provided as traits implemented on the graph itself, making them usable without
configuring anything beforehand: `graph.bfs(u)`, `graph.dijkstra(u)`, `graph.kruskal()`.
Random graph generators in [`gens`] use a *Builder* / *Setter* pattern instead, as they carry
parameters.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, all storage
  backends, and the labelled layer,
- [`algo`] includes algorithm traits implemented on graphs themselves such as BFS/DFS
  (`graph.bfs(start_node)`), Dijkstra shortest paths, and Kruskal/Prim spanning trees,
- [`gens`] includes random graph generators for weighted trees and `G(n,p)` digraphs,
- [`utils`] includes supporting structures such as the disjoint-set-union used by Kruskal.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

# When to use

You should only use this library if your graphs are weighted, you require reachability,
shortest-distance, or minimum-spanning-tree queries, and you want a small dependency. For a
more extensive general-purpose graph library, check out
[petgraph](https://crates.io/crates/petgraph).
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod graph;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `wgraphs::prelude` includes definitions for nodes and edges, all basic graph operation
/// traits, all implemented representations, and the labelled graph layer.
pub mod prelude {
    pub use super::{edge::*, graph::*, node::*, ops::*, repr::*};
}

pub use edge::{Edge, NumEdges, Weight, INFINITE_WEIGHT};
pub use node::{Node, NodeBitSet, NumNodes, INVALID_NODE};
