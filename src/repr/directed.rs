/*!
# Directed Weighted Graph Representation

[`WeightedDigraph`] stores one [`WeightedNeighborhood`] per node in a dense arena indexed
by node id, plus a cached edge count. Edges are directed: only outgoing neighborhoods are
stored. The concrete backends are selected via the type aliases below.
*/

use crate::testing::test_graph_ops;

use super::*;

/// A directed weighted graph storing only **outgoing neighborhoods**.
///
/// # Type parameters
/// - `Nbs`: [`WeightedNeighborhood`] implementation used for outgoing adjacency.
#[derive(Debug, Clone)]
pub struct WeightedDigraph<Nbs>
where
    Nbs: WeightedNeighborhood,
{
    out_nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Directed weighted graph using hash-map neighborhoods.
pub type AdjMap = WeightedDigraph<MapNeighborhood>;

/// Directed weighted graph using sparse inline-vector neighborhoods.
pub type SparseAdjArray = WeightedDigraph<SparseNeighborhood>;

impl<Nbs> GraphNodeOrder for WeightedDigraph<Nbs>
where
    Nbs: WeightedNeighborhood,
{
    fn number_of_nodes(&self) -> NumNodes {
        self.out_nbs.len() as NumNodes
    }
}

impl<Nbs> GraphEdgeOrder for WeightedDigraph<Nbs>
where
    Nbs: WeightedNeighborhood,
{
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs> WeightedAdjacencyList for WeightedDigraph<Nbs>
where
    Nbs: WeightedNeighborhood,
{
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.out_nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs> AdjacencyTest for WeightedDigraph<Nbs>
where
    Nbs: WeightedNeighborhood,
{
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        assert!(v < self.number_of_nodes());
        self.out_nbs[u as usize].weight_to(v)
    }
}

impl<Nbs> GraphNew for WeightedDigraph<Nbs>
where
    Nbs: WeightedNeighborhood,
{
    fn new(n: NumNodes) -> Self {
        Self {
            out_nbs: vec![Nbs::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs> GraphNodeEditing for WeightedDigraph<Nbs>
where
    Nbs: WeightedNeighborhood,
{
    fn add_node(&mut self) -> Node {
        self.out_nbs.push(Nbs::new());
        (self.out_nbs.len() - 1) as Node
    }
}

impl<Nbs> GraphEdgeEditing for WeightedDigraph<Nbs>
where
    Nbs: WeightedNeighborhood,
{
    fn set_edge(&mut self, u: Node, v: Node, w: Weight) -> Option<Weight> {
        assert!(v < self.number_of_nodes());
        let prev = self.out_nbs[u as usize].set_neighbor(v, w);
        if prev.is_none() {
            self.num_edges += 1;
        }
        prev
    }
}

// ---------- Testing ----------

test_graph_ops!(test_adj_map, AdjMap);
test_graph_ops!(test_sparse_adj_array, SparseAdjArray);
