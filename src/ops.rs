use std::ops::Range;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns a range of vertices.
    /// In contrast to `self.vertices()`, the range returned by `self.vertices_range()` does
    /// not borrow self and hence may be used where additional references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for weighted neighborhoods & edges
pub trait WeightedAdjacencyList: GraphNodeOrder + GraphEdgeOrder + Sized {
    /// Returns an iterator over the (outgoing) neighbors of a given vertex together with the
    /// weight of the connecting edge.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |(v, w)| Edge(u, v, w))
    }

    /// Returns an iterator over all edges in the graph
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range().flat_map(move |u| self.edges_of(u))
    }

    /// Returns the sum of all edge weights in the graph
    fn total_weight(&self) -> Weight {
        self.edges().map(|e| e.weight()).sum()
    }
}

/// Trait to test existence of certain edges in a graph.
pub trait AdjacencyTest {
    /// Returns the weight of the edge `(u, v)` if it exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns *true* if the edge `(u, v)` exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight_of(u, v).is_some()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to grow the node set of a graph
pub trait GraphNodeEditing {
    /// Adds a singleton node to the graph and returns its id
    fn add_node(&mut self) -> Node;
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing {
    /// Adds the edge `(u, v)` with weight `w` to the graph, overwriting the weight of an
    /// existing `(u, v)` edge. Returns the previous weight if the edge was already present.
    /// ** Panics if `u >= n || v >= n` **
    fn set_edge(&mut self, u: Node, v: Node, w: Weight) -> Option<Weight>;

    /// Adds all edges in the collection, overwriting existing weights
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.set_edge(u, v, w);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
