/*!
Minimum spanning trees via Kruskal's and Prim's algorithms.

Both algorithms treat every stored edge as a candidate. Since storage is directed, callers
that want classical undirected MST behavior add each edge in both orientations; the
algorithms themselves never traverse an edge backwards.

- [`SpanningTrees::kruskal`] sorts all edges ascending by weight (stable, so ties keep
  their encounter order) and selects an edge iff its endpoints are in different components
  of a [`DisjointSetUnion`].
- [`SpanningTrees::prim`] grows the tree from a root node (the first inserted node by
  default), repeatedly selecting the cheapest edge crossing from the tree into the
  remainder of the graph. On a disconnected graph the result spans only the component
  reachable from the root.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use itertools::Itertools;
use stream_bitset::prelude::*;

use super::*;

/// Result aggregate of a spanning-tree computation: a node set and an edge list.
///
/// Edges always connect nodes present in the node set, as [`SpanningTree::add_edge`]
/// inserts both endpoints. The total weight of all added edges is kept up to date.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    nodes: NodeBitSet,
    edges: Vec<Edge>,
    total_weight: Weight,
}

impl SpanningTree {
    /// Creates an empty spanning tree over the node universe `0..n`
    pub fn new(n: NumNodes) -> Self {
        Self {
            nodes: NodeBitSet::new(n),
            edges: Vec::new(),
            total_weight: 0,
        }
    }

    /// Adds a node to the tree's node set.
    /// Returns *true* if the node was present before.
    /// ** Panics if `u >= n` **
    pub fn add_node(&mut self, u: Node) -> bool {
        self.nodes.set_bit(u)
    }

    /// Adds an edge to the tree, inserting both endpoints into the node set.
    /// ** Panics if an endpoint is `>= n` **
    pub fn add_edge(&mut self, e: Edge) {
        self.nodes.set_bit(e.source());
        self.nodes.set_bit(e.target());
        self.total_weight += e.weight();
        self.edges.push(e);
    }

    /// Returns an iterator over the nodes of the tree in increasing order
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter_set_bits()
    }

    /// Returns *true* if `u` is part of the tree.
    /// ** Panics if `u >= n` **
    pub fn contains_node(&self, u: Node) -> bool {
        self.nodes.get_bit(u)
    }

    /// Returns the number of nodes in the tree
    pub fn number_of_nodes(&self) -> NumNodes {
        self.nodes.cardinality()
    }

    /// Returns the number of edges in the tree
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Returns the edges of the tree in the order they were selected
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the sum of all edge weights in the tree
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }
}

/// Provides minimum-spanning-tree methods on every graph representation.
pub trait SpanningTrees: WeightedAdjacencyList + Sized {
    /// Computes a minimum spanning tree using **Kruskal's algorithm**: all edges are
    /// processed ascending by weight (stable order on ties) and an edge is selected iff
    /// its endpoints are not yet connected within the tree, checked by a
    /// disjoint-set-union structure.
    ///
    /// The resulting node set contains exactly the endpoints of the selected edges.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjMap::from_edges(
    ///     4,
    ///     [(0, 1, 1), (0, 2, 3), (1, 2, 1), (1, 3, 4), (2, 3, 1)],
    /// );
    ///
    /// let mst = g.kruskal();
    /// assert_eq!(mst.number_of_edges(), 3);
    /// assert_eq!(mst.total_weight(), 3);
    /// ```
    fn kruskal(&self) -> SpanningTree {
        let mut edges = self.edges().collect_vec();
        edges.sort_by_key(Edge::weight);

        let mut components = DisjointSetUnion::new(self.number_of_nodes());
        let mut tree = SpanningTree::new(self.number_of_nodes());

        for e in edges {
            if components.union(e.source(), e.target()) {
                tree.add_edge(e);
            }
        }

        tree
    }

    /// Computes a minimum spanning tree using **Prim's algorithm**, growing from node `0`
    /// (the first inserted node). Returns an empty tree for an empty graph.
    ///
    /// On a disconnected graph, the tree spans only the component reachable from the
    /// root. Among equal-minimum-weight crossing edges, the first found is taken.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjMap::from_edges(
    ///     4,
    ///     [(0, 1, 1), (0, 2, 3), (1, 2, 1), (1, 3, 4), (2, 3, 1)],
    /// );
    ///
    /// let mst = g.prim();
    /// assert_eq!(mst.number_of_nodes(), 4);
    /// assert_eq!(mst.total_weight(), 3);
    /// ```
    fn prim(&self) -> SpanningTree {
        if self.is_empty() {
            return SpanningTree::new(0);
        }
        self.prim_from(0)
    }

    /// Computes a minimum spanning tree using **Prim's algorithm**, growing from `root`.
    /// ** Panics if `root >= n` **
    fn prim_from(&self, root: Node) -> SpanningTree {
        let mut tree = SpanningTree::new(self.number_of_nodes());
        let mut visited = self.vertex_bitset_unset();

        visited.set_bit(root);
        tree.add_node(root);

        let mut crossing: BinaryHeap<Reverse<(Weight, Node, Node)>> = BinaryHeap::new();
        for (v, w) in self.neighbors_of(root) {
            crossing.push(Reverse((w, root, v)));
        }

        while let Some(Reverse((w, u, v))) = crossing.pop() {
            // the edge stopped crossing when v joined the tree
            if visited.set_bit(v) {
                continue;
            }

            tree.add_edge(Edge(u, v, w));

            for (x, wx) in self.neighbors_of(v) {
                if !visited.get_bit(x) {
                    crossing.push(Reverse((wx, v, x)));
                }
            }
        }

        tree
    }
}

impl<G> SpanningTrees for G where G: WeightedAdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    /// The directed example graph: nodes {A=0, B=1, C=2, D=3} with edges
    /// A->B(1), A->C(3), B->C(1), B->D(4), C->D(1)
    fn sample_graph() -> AdjMap {
        AdjMap::from_edges(4, [(0, 1, 1), (0, 2, 3), (1, 2, 1), (1, 3, 4), (2, 3, 1)])
    }

    /// Connected symmetric graph: a random spanning tree plus extra `G(n,p)` edges,
    /// every edge present in both orientations with equal weight
    fn random_connected_graph<R: rand::Rng>(rng: &mut R, n: NumNodes) -> AdjMap {
        let tree = RandomTree::new().nodes(n).max_weight(20).generate(rng);
        let extra = Gnp::new().nodes(n).prob(0.1).max_weight(20).generate(rng);

        AdjMap::from_edges(
            n,
            tree.into_iter()
                .chain(extra)
                .flat_map(|e| [e, e.reverse()]),
        )
    }

    #[test]
    fn kruskal_on_sample_graph() {
        let mst = sample_graph().kruskal();

        assert_eq!(mst.number_of_nodes(), 4);
        assert_eq!(mst.number_of_edges(), 3);
        assert_eq!(mst.total_weight(), 3);
        assert_eq!(
            mst.edges().iter().copied().sorted().collect_vec(),
            vec![Edge(0, 1, 1), Edge(1, 2, 1), Edge(2, 3, 1)]
        );
    }

    #[test]
    fn prim_on_sample_graph() {
        let mst = sample_graph().prim();

        assert_eq!(mst.number_of_nodes(), 4);
        assert_eq!(mst.number_of_edges(), 3);
        assert_eq!(mst.total_weight(), 3);
        assert_eq!(
            mst.edges(),
            &[Edge(0, 1, 1), Edge(1, 2, 1), Edge(2, 3, 1)][..]
        );
        assert!((0..4).all(|u| mst.contains_node(u)));
    }

    #[test]
    fn empty_and_singleton_graphs() {
        let empty = AdjMap::new(0);
        assert_eq!(empty.kruskal().number_of_edges(), 0);
        assert_eq!(empty.prim().number_of_edges(), 0);

        let singleton = AdjMap::new(1);
        assert_eq!(singleton.kruskal().number_of_nodes(), 0);
        let prim = singleton.prim();
        assert_eq!(prim.number_of_edges(), 0);
        assert_eq!(prim.number_of_nodes(), 1); // the root is always part of the tree
    }

    #[test]
    fn disconnected_graph_spans_reachable_component() {
        // two components: {0, 1, 2} and {3, 4}
        let graph = SparseAdjArray::from_edges(
            5,
            [(0, 1, 2), (1, 0, 2), (1, 2, 1), (2, 1, 1), (3, 4, 5), (4, 3, 5)],
        );

        let prim = graph.prim();
        assert_eq!(prim.number_of_nodes(), 3);
        assert_eq!(prim.number_of_edges(), 2);
        assert_eq!(prim.total_weight(), 3);
        assert!(!prim.contains_node(3));

        // kruskal yields a spanning forest instead
        let kruskal = graph.kruskal();
        assert_eq!(kruskal.number_of_nodes(), 5);
        assert_eq!(kruskal.number_of_edges(), 3);
        assert_eq!(kruskal.total_weight(), 8);
    }

    #[test]
    fn tie_breaking_keeps_total_weight_equal() {
        // all weights equal: every spanning tree is minimal
        let graph = AdjMap::from_edges(
            4,
            [(0, 1, 2), (1, 2, 2), (2, 3, 2), (3, 0, 2), (0, 2, 2)]
                .iter()
                .flat_map(|e| [Edge::from(e), Edge::from(e).reverse()]),
        );

        let kruskal = graph.kruskal();
        let prim = graph.prim();

        assert_eq!(kruskal.number_of_edges(), 3);
        assert_eq!(prim.number_of_edges(), 3);
        assert_eq!(kruskal.total_weight(), 6);
        assert_eq!(prim.total_weight(), 6);
    }

    #[test]
    fn kruskal_and_prim_agree_on_random_connected_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31337);

        for n in [2 as NumNodes, 5, 20, 50] {
            for _ in 0..10 {
                let graph = random_connected_graph(rng, n);

                let kruskal = graph.kruskal();
                let prim = graph.prim();

                // a spanning tree of a connected graph has exactly n - 1 edges
                assert_eq!(kruskal.number_of_nodes(), n);
                assert_eq!(prim.number_of_nodes(), n);
                assert_eq!(kruskal.number_of_edges(), n - 1);
                assert_eq!(prim.number_of_edges(), n - 1);

                // the trees may differ on ties but never in total weight
                assert_eq!(kruskal.total_weight(), prim.total_weight());

                // selected edges exist in the graph with their stated weight
                for &Edge(u, v, w) in kruskal.edges().iter().chain(prim.edges()) {
                    assert_eq!(graph.weight_of(u, v), Some(w));
                }

                // and neither result contains a cycle
                for tree in [&kruskal, &prim] {
                    let mut dsu = DisjointSetUnion::new(n);
                    for &Edge(u, v, _) in tree.edges() {
                        assert!(dsu.union(u, v));
                    }
                }
            }
        }
    }
}
