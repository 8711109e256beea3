/*!
Graph traversal algorithms.

This module provides:
- Generic traversal iterators (BFS, DFS) over any weighted graph representation.
- A high-level [`Traversal`] trait that exposes traversal algorithms directly as methods
  on graph data structures.

Traversals ignore edge weights; they answer reachability questions. The frontier data
structure is pluggable, so breadth-first and depth-first search share one implementation.
*/

use super::*;
use std::collections::VecDeque;

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited" nodes during a
/// traversal. Different implementations determine the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: Node) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, u: Node);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<Node>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<Node> {
    fn init(u: Node) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Node) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit "frontier" (queue or stack) of nodes to visit and a bitset of
/// visited nodes. Nodes are marked visited when they enter the frontier, which guarantees
/// termination on cyclic graphs and that every reachable node is yielded exactly once.
///
/// The order in which the neighbors of a node enter the frontier is the iteration order
/// of the underlying [`WeightedNeighborhood`](crate::repr::WeightedNeighborhood) and thus
/// implementation-defined; only the set of yielded nodes is part of the contract.
pub struct TraversalSearch<'a, G, S>
where
    G: WeightedAdjacencyList,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
}

/// A BFS traversal iterator over the graph, visiting nodes in breadth-first order from a
/// given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

/// A DFS traversal iterator over the graph, visiting nodes in depth-first order from a
/// given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: WeightedAdjacencyList,
    S: NodeSequencer,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(start),
        }
    }

    /// Consumes the traversal search and returns true iff the requested node is visited,
    /// i.e. if there exists a directed path of zero or more edges from the start node
    /// to `u`. In particular, the start node is always reachable from itself.
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        self.any(|v| v == u)
    }
}

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: WeightedAdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        for (v, _) in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.sequencer.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequencer.cardinality(), Some(self.graph.len()))
    }
}

/// Provides convenient traversal methods (BFS, DFS) on every graph representation.
pub trait Traversal: WeightedAdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start` in
    /// **breadth-first search (BFS) order**.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = SparseAdjArray::from_edges(3, [(0, 1, 5), (1, 2, 2)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start` in
    /// **depth-first search (DFS) order**.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = SparseAdjArray::from_edges(3, [(0, 1, 5), (1, 2, 2)]);
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }
}

impl<G> Traversal for G where G: WeightedAdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    //  / 2 --- \
    // 1         4 - 3
    //  \ 0 - 5 /
    fn diamond() -> SparseAdjArray {
        SparseAdjArray::from_edges(
            6,
            [
                (1, 2, 1),
                (1, 0, 1),
                (4, 3, 1),
                (0, 5, 1),
                (2, 4, 1),
                (5, 4, 1),
            ],
        )
    }

    #[test]
    fn bfs_order() {
        let graph = diamond();

        {
            let order: Vec<Node> = graph.bfs(1).collect();
            assert_eq!(order, vec![1, 2, 0, 4, 5, 3]);
        }

        {
            let order: Vec<Node> = BFS::new(&graph, 5).collect();
            assert_eq!(order, [5, 4, 3]);
        }
    }

    #[test]
    fn dfs_order() {
        let graph = diamond();

        {
            let order: Vec<Node> = graph.dfs(1).collect();
            assert_eq!(order, vec![1, 0, 5, 4, 3, 2]);
        }

        {
            let order: Vec<Node> = graph.dfs(5).collect();
            assert_eq!(order, [5, 4, 3]);
        }
    }

    #[test]
    fn reachability_is_directional() {
        let graph = SparseAdjArray::from_edges(4, [(0, 1, 3), (1, 2, 4), (3, 2, 1)]);

        assert!(graph.bfs(0).is_node_reachable(2));
        assert!(graph.dfs(0).is_node_reachable(2));
        assert!(!graph.bfs(0).is_node_reachable(3));
        assert!(!graph.dfs(2).is_node_reachable(0));
    }

    #[test]
    fn node_reaches_itself() {
        // no self-loop or cycle required
        let graph = SparseAdjArray::new(3);
        assert!(graph.bfs(1).is_node_reachable(1));
        assert!(graph.dfs(1).is_node_reachable(1));
    }

    #[test]
    fn terminates_on_cycles() {
        let graph = SparseAdjArray::from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2]);
        assert!(graph.bfs(1).is_node_reachable(0));
    }

    #[test]
    fn bfs_and_dfs_agree_on_reachability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12345);

        for _ in 0..10 {
            let edges = Gnp::new().nodes(30).prob(0.08).generate(rng);
            let graph = AdjMap::from_edges(30, edges);

            for s in graph.vertices() {
                let from_s: Vec<bool> = {
                    let mut reached = graph.vertex_bitset_unset();
                    for u in graph.bfs(s) {
                        reached.set_bit(u);
                    }
                    graph.vertices().map(|u| reached.get_bit(u)).collect_vec()
                };

                for d in graph.vertices() {
                    assert_eq!(graph.dfs(s).is_node_reachable(d), from_s[d as usize]);
                }
            }
        }
    }
}
