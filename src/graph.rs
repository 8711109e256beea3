/*!
# Labelled Graphs

[`LabeledGraph`] identifies nodes by a user payload instead of an index: two equal payloads
denote the same node. Payloads are interned to a stable [`Node`] id at insertion, so the
index-based algorithms of [`algo`](crate::algo) run unchanged underneath; the payload map
is consulted only at the API boundary.

The payload type must be `Clone + Eq + Hash`. Payload values must be unique per node by
definition — inserting an equal payload twice yields the same node.
*/

use std::hash::Hash;

use fxhash::FxHashMap;

use crate::{algo::*, ops::*, repr::*, Node, NumEdges, NumNodes, Weight};

/// A directed weighted graph whose nodes are identified by payload values.
///
/// Lookups by payload that miss return `None`/`false` instead of failing; asking about an
/// unknown node means absence, not an error.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut g = LabeledGraph::<&str>::new();
/// g.set_edge("A", "B", 1);
/// g.set_edge("A", "C", 3);
/// g.set_edge("B", "C", 1);
/// g.set_edge("B", "D", 4);
/// g.set_edge("C", "D", 1);
///
/// assert!(g.is_path_bfs(&"A", &"D"));
/// assert_eq!(g.distance(&"A", &"D"), Some(3)); // A -> B -> C -> D
/// assert_eq!(g.kruskal().total_weight(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct LabeledGraph<T, G = AdjMap> {
    labels: Vec<T>,
    index: FxHashMap<T, Node>,
    graph: G,
}

impl<T, G> LabeledGraph<T, G>
where
    T: Clone + Eq + Hash,
    G: GraphNew + GraphNodeEditing + GraphEdgeEditing + WeightedAdjacencyList + AdjacencyTest,
{
    /// Creates an empty graph
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            index: FxHashMap::default(),
            graph: G::new(0),
        }
    }

    /// Returns the number of nodes of the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }

    /// Returns the number of edges of the graph
    pub fn number_of_edges(&self) -> NumEdges {
        self.graph.number_of_edges()
    }

    /// Returns *true* if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Adds a node with the given payload and returns its id. If a node with an equal
    /// payload already exists, its id is returned and the graph is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let mut g = LabeledGraph::<&str>::new();
    /// let a = g.add_node("A");
    /// assert_eq!(g.add_node("A"), a);
    /// assert_eq!(g.number_of_nodes(), 1);
    /// ```
    pub fn add_node(&mut self, label: T) -> Node {
        if let Some(&u) = self.index.get(&label) {
            return u;
        }

        let u = self.graph.add_node();
        self.index.insert(label.clone(), u);
        self.labels.push(label);
        u
    }

    /// Returns the id of the node with the given payload, if present
    pub fn node_of(&self, label: &T) -> Option<Node> {
        self.index.get(label).copied()
    }

    /// Returns the payload of a node.
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> &T {
        &self.labels[u as usize]
    }

    /// Returns an iterator over all payloads in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &T> + '_ {
        self.labels.iter()
    }

    /// Returns *true* if a node with the given payload exists
    pub fn contains(&self, label: &T) -> bool {
        self.index.contains_key(label)
    }

    /// Adds the directed edge `from -> to` with the given weight, inserting both endpoint
    /// nodes if they are not present yet. If the edge already exists, its weight is
    /// overwritten and the previous weight returned.
    pub fn set_edge(&mut self, from: T, to: T, weight: Weight) -> Option<Weight> {
        let u = self.add_node(from);
        let v = self.add_node(to);
        self.graph.set_edge(u, v, weight)
    }

    /// Returns the weight of the edge `from -> to`, or `None` if either payload is absent
    /// or the edge does not exist
    pub fn weight_between(&self, from: &T, to: &T) -> Option<Weight> {
        self.graph
            .weight_of(self.node_of(from)?, self.node_of(to)?)
    }

    /// Returns a reference to the underlying index-based graph
    pub fn as_graph(&self) -> &G {
        &self.graph
    }

    /// Returns *true* iff a directed path of zero or more edges leads from `from` to
    /// `to`, determined by a **depth-first search**. Returns *false* if either payload
    /// is absent. Every present node reaches itself.
    pub fn is_path_dfs(&self, from: &T, to: &T) -> bool {
        match (self.node_of(from), self.node_of(to)) {
            (Some(s), Some(t)) => self.graph.dfs(s).is_node_reachable(t),
            _ => false,
        }
    }

    /// Returns *true* iff a directed path of zero or more edges leads from `from` to
    /// `to`, determined by a **breadth-first search**. Returns *false* if either payload
    /// is absent. Every present node reaches itself.
    pub fn is_path_bfs(&self, from: &T, to: &T) -> bool {
        match (self.node_of(from), self.node_of(to)) {
            (Some(s), Some(t)) => self.graph.bfs(s).is_node_reachable(t),
            _ => false,
        }
    }

    /// Returns the minimum total edge weight of any directed path from `from` to `to`
    /// using **Dijkstra's algorithm**, or `None` if either payload is absent or no path
    /// exists. The distance of a node to itself is `Some(0)`.
    pub fn distance(&self, from: &T, to: &T) -> Option<Weight> {
        self.graph
            .dijkstra_distance(self.node_of(from)?, self.node_of(to)?)
    }

    /// Computes a minimum spanning tree using **Kruskal's algorithm**.
    /// See [`SpanningTrees::kruskal`].
    pub fn kruskal(&self) -> SpanningTree {
        self.graph.kruskal()
    }

    /// Computes a minimum spanning tree using **Prim's algorithm**, growing from the
    /// first inserted node. See [`SpanningTrees::prim`].
    pub fn prim(&self) -> SpanningTree {
        self.graph.prim()
    }

    /// Resolves the edges of a spanning tree back to payload references.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g: LabeledGraph<&str> = [("A", "B", 2), ("B", "C", 1)].into_iter().collect();
    ///
    /// let mst = g.kruskal();
    /// let mut edges: Vec<_> = g.labeled_edges(&mst).collect();
    /// edges.sort();
    /// assert_eq!(edges, vec![(&"A", &"B", 2), (&"B", &"C", 1)]);
    /// ```
    pub fn labeled_edges<'a>(
        &'a self,
        tree: &'a SpanningTree,
    ) -> impl Iterator<Item = (&'a T, &'a T, Weight)> + 'a {
        tree.edges()
            .iter()
            .map(move |e| (self.label_of(e.source()), self.label_of(e.target()), e.weight()))
    }
}

impl<T, G> Default for LabeledGraph<T, G>
where
    T: Clone + Eq + Hash,
    G: GraphNew + GraphNodeEditing + GraphEdgeEditing + WeightedAdjacencyList + AdjacencyTest,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, G> FromIterator<(T, T, Weight)> for LabeledGraph<T, G>
where
    T: Clone + Eq + Hash,
    G: GraphNew + GraphNodeEditing + GraphEdgeEditing + WeightedAdjacencyList + AdjacencyTest,
{
    fn from_iter<I: IntoIterator<Item = (T, T, Weight)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (from, to, weight) in iter {
            graph.set_edge(from, to, weight);
        }
        graph
    }
}
