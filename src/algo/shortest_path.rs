/*!
Single-source shortest paths via Dijkstra's algorithm.

Edge weights in this crate are unsigned, so the non-negativity precondition of Dijkstra's
algorithm holds for every representable graph. The algorithm is exposed in two flavors:

- [`ShortestPaths::dijkstra`] computes the full shortest-path tree of a source node and
  returns a queryable [`ShortestPathTree`].
- [`ShortestPaths::dijkstra_distance`] answers a single source/target distance query and
  stops as soon as the target is settled.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use super::*;

/// Result of a Dijkstra run: the shortest-path tree of a source node.
///
/// Distances are stored densely per node, with [`INFINITE_WEIGHT`] marking unreachable
/// nodes; parents use [`INVALID_NODE`] for the source and unreached nodes. The public
/// accessors translate both encodings into `Option`s.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: Node,
    dists: Vec<Weight>,
    parents: Vec<Node>,
}

impl ShortestPathTree {
    /// Returns the source node this tree was computed for
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the minimum total edge weight of any directed path from the source to `u`,
    /// or `None` if `u` is unreachable. The distance of the source itself is `Some(0)`.
    /// ** Panics if `u >= n` **
    pub fn distance_to(&self, u: Node) -> Option<Weight> {
        let d = self.dists[u as usize];
        (d != INFINITE_WEIGHT).then_some(d)
    }

    /// Returns the predecessor of `u` on a shortest path from the source, or `None` if
    /// `u` is the source or unreachable.
    /// ** Panics if `u >= n` **
    pub fn predecessor_of(&self, u: Node) -> Option<Node> {
        let p = self.parents[u as usize];
        (p != INVALID_NODE).then_some(p)
    }

    /// Reconstructs a shortest path from the source to `u`, including both endpoints.
    /// Returns `None` if `u` is unreachable; the path for the source itself is `[source]`.
    /// ** Panics if `u >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjMap::from_edges(4, [(0, 1, 1), (1, 2, 1), (0, 2, 5), (2, 3, 1)]);
    ///
    /// let tree = g.dijkstra(0);
    /// assert_eq!(tree.path_to(3), Some(vec![0, 1, 2, 3]));
    /// assert_eq!(tree.distance_to(3), Some(3));
    /// ```
    pub fn path_to(&self, u: Node) -> Option<Vec<Node>> {
        self.distance_to(u)?;

        let mut path = vec![u];
        let mut node = u;
        while let Some(p) = self.predecessor_of(node) {
            path.push(p);
            node = p;
        }

        path.reverse();
        Some(path)
    }
}

/// Runs Dijkstra from `source`. If `target` is set, the search stops once the target is
/// settled, leaving the remaining distances partial.
fn dijkstra_search<G>(graph: &G, source: Node, target: Option<Node>) -> ShortestPathTree
where
    G: WeightedAdjacencyList,
{
    let mut dists = vec![INFINITE_WEIGHT; graph.len()];
    let mut parents = vec![INVALID_NODE; graph.len()];
    let mut queue: BinaryHeap<Reverse<(Weight, Node)>> = BinaryHeap::new();

    dists[source as usize] = 0;
    queue.push(Reverse((0, source)));

    while let Some(Reverse((d, u))) = queue.pop() {
        // stale entry, u was settled with a smaller distance
        if d > dists[u as usize] {
            continue;
        }

        if target == Some(u) {
            break;
        }

        for (v, w) in graph.neighbors_of(u) {
            let dv = d.saturating_add(w);
            if dv < dists[v as usize] {
                dists[v as usize] = dv;
                parents[v as usize] = u;
                queue.push(Reverse((dv, v)));
            }
        }
    }

    ShortestPathTree {
        source,
        dists,
        parents,
    }
}

/// Provides shortest-path methods on every graph representation.
///
/// Weights are unsigned, so Dijkstra's requirement of non-negative edge weights is met by
/// construction.
pub trait ShortestPaths: WeightedAdjacencyList + Sized {
    /// Computes the full shortest-path tree from `source`.
    /// ** Panics if `source >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjMap::from_edges(3, [(0, 1, 2), (1, 2, 2), (0, 2, 7)]);
    ///
    /// let tree = g.dijkstra(0);
    /// assert_eq!(tree.distance_to(0), Some(0));
    /// assert_eq!(tree.distance_to(2), Some(4));
    /// ```
    fn dijkstra(&self, source: Node) -> ShortestPathTree {
        dijkstra_search(self, source, None)
    }

    /// Returns the minimum total edge weight of any directed path from `source` to
    /// `target`, or `None` if `target` is unreachable. The search stops as soon as the
    /// target is settled. `dijkstra_distance(u, u)` is `Some(0)` for every node `u`.
    /// ** Panics if `source >= n || target >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjMap::from_edges(3, [(0, 1, 2), (1, 2, 2)]);
    ///
    /// assert_eq!(g.dijkstra_distance(0, 2), Some(4));
    /// assert_eq!(g.dijkstra_distance(2, 0), None);
    /// ```
    fn dijkstra_distance(&self, source: Node, target: Node) -> Option<Weight> {
        assert!(target < self.number_of_nodes());
        dijkstra_search(self, source, Some(target)).distance_to(target)
    }
}

impl<G> ShortestPaths for G where G: WeightedAdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn sample_graph() -> AdjMap {
        // A=0, B=1, C=2, D=3
        AdjMap::from_edges(4, [(0, 1, 1), (0, 2, 3), (1, 2, 1), (1, 3, 4), (2, 3, 1)])
    }

    #[test]
    fn shortest_distance() {
        let graph = sample_graph();

        assert_eq!(graph.dijkstra_distance(0, 3), Some(3)); // 0 -> 1 -> 2 -> 3
        assert_eq!(graph.dijkstra_distance(0, 2), Some(2)); // 0 -> 1 -> 2
        assert_eq!(graph.dijkstra_distance(1, 3), Some(2)); // 1 -> 2 -> 3
        assert_eq!(graph.dijkstra_distance(3, 0), None); // edges are directed
    }

    #[test]
    fn source_distance_is_zero() {
        let graph = sample_graph();
        for u in graph.vertices() {
            assert_eq!(graph.dijkstra_distance(u, u), Some(0));
            assert_eq!(graph.dijkstra(u).path_to(u), Some(vec![u]));
        }
    }

    #[test]
    fn unreachable_is_none() {
        let graph = AdjMap::from_edges(3, [(0, 1, 1)]);
        assert_eq!(graph.dijkstra_distance(0, 2), None);
        assert_eq!(graph.dijkstra(0).distance_to(2), None);
        assert_eq!(graph.dijkstra(0).path_to(2), None);
        assert_eq!(graph.dijkstra(0).predecessor_of(2), None);
    }

    #[test]
    fn overwriting_an_edge_changes_the_distance() {
        let mut graph = AdjMap::from_edges(2, [(0, 1, 10)]);
        assert_eq!(graph.dijkstra_distance(0, 1), Some(10));

        graph.set_edge(0, 1, 2);
        assert_eq!(graph.dijkstra_distance(0, 1), Some(2));
    }

    #[test]
    fn path_edges_exist_and_sum_up() {
        let graph = sample_graph();
        let tree = graph.dijkstra(0);

        let path = tree.path_to(3).unwrap();
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&3));

        let mut total = 0;
        for uv in path.windows(2) {
            total += graph.weight_of(uv[0], uv[1]).unwrap();
        }
        assert_eq!(Some(total), tree.distance_to(3));
    }

    #[test]
    fn unit_weights_match_bfs_hop_count() {
        let rng = &mut Pcg64Mcg::seed_from_u64(99);

        for _ in 0..10 {
            let edges: Vec<Edge> = Gnp::new()
                .nodes(25)
                .prob(0.1)
                .generate(rng)
                .into_iter()
                .map(|Edge(u, v, _)| Edge(u, v, 1))
                .collect();
            let graph = AdjMap::from_edges(25, edges);

            // on unit weights, Dijkstra degenerates to BFS level counting
            for s in graph.vertices() {
                let tree = graph.dijkstra(s);
                let mut hops = vec![INFINITE_WEIGHT; graph.len()];
                hops[s as usize] = 0;
                for u in graph.bfs(s).collect::<Vec<_>>() {
                    for (v, _) in graph.neighbors_of(u) {
                        if hops[v as usize] == INFINITE_WEIGHT {
                            hops[v as usize] = hops[u as usize] + 1;
                        }
                    }
                }

                for u in graph.vertices() {
                    let expected = (hops[u as usize] != INFINITE_WEIGHT)
                        .then_some(hops[u as usize]);
                    assert_eq!(tree.distance_to(u), expected);
                }
            }
        }
    }
}
