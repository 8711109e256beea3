/*!
# Graph Representations

A graph is represented by parameterizing [`WeightedDigraph`] with a
[`WeightedNeighborhood`] type, which controls how the adjacency of a single node is stored.

## Provided Representations

- [`AdjMap`] — hash-map neighborhoods, constant-time weight lookup and overwrite.
- [`SparseAdjArray`] — inline small-vector neighborhoods, insertion-ordered and compact
  for low-degree graphs.

Each representation makes different trade-offs in terms of memory usage and
lookup/iteration performance.
*/

use crate::{ops::*, *};

mod directed;
mod neighborhood;

pub use directed::*;
pub use neighborhood::*;

/// Trait for methods on the weighted Neighborhood of a specified Node.
///
/// A neighborhood maps each neighbor to the weight of the connecting edge; inserting a
/// neighbor twice keeps only the latest weight.
pub trait WeightedNeighborhood: Clone + Default {
    /// Creates an empty Neighborhood
    fn new() -> Self {
        Self::default()
    }

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all neighbors in the Neighborhood with their edge weights
    fn neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the weight of the edge to `v` if `v` is in the Neighborhood
    fn weight_to(&self, v: Node) -> Option<Weight>;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.weight_to(v).is_some()
    }

    /// Adds a neighbor to the Neighborhood or overwrites the weight of an existing one.
    /// Returns the previous weight if the neighbor was present before.
    fn set_neighbor(&mut self, v: Node, w: Weight) -> Option<Weight>;
}
