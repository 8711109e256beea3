/*!
# Random Graph Generators

This module provides builder-style generators for random weighted graphs. The typical
usage workflow is:

1. Create a generator instance (e.g. `Gnp::new()`).
2. Set parameters using the fluent methods (e.g. `.nodes(n).prob(p)`).
3. Generate edges via `generate()`.

Generators produce plain edge lists; feed them to
[`GraphFromScratch::from_edges`](crate::ops::GraphFromScratch) to obtain a graph. Edges are
directed as generated — callers wanting symmetric graphs add each edge in both
orientations.

Supported models:
- [`RandomTree`]: a uniformly random spanning tree over `n` nodes with random weights
- [`Gnp`]: the Erdős–Rényi model with independent edge probability and random weights
*/

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use stream_bitset::prelude::*;

use crate::prelude::*;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the maximum edge weight.
pub trait MaxWeightGen {
    /// Sets the maximum edge weight; generated weights are uniform in `1..=max_weight`.
    fn max_weight(self, w: Weight) -> Self;
}

/// General trait for a configurable random edge generator.
pub trait EdgeGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng;
}

/// Generator for a random spanning **tree**.
///
/// The generator performs random walks over the node set and attaches each walk to the
/// already-connected part, which yields exactly `n - 1` edges connecting all `n` nodes.
/// Edges are oriented away from the root (default `0`); weights are uniform in
/// `1..=max_weight` (default `1`).
///
/// # Examples
/// ```
/// use wgraphs::gens::*;
///
/// let mut rng = rand::rng();
/// let edges = RandomTree::new().nodes(5).generate(&mut rng);
///
/// assert_eq!(edges.len(), 4); // always n - 1 edges
/// ```
#[derive(Debug, Copy, Clone)]
pub struct RandomTree {
    n: NumNodes,
    root: Node,
    max_weight: Weight,
}

impl Default for RandomTree {
    fn default() -> Self {
        Self {
            n: 0,
            root: 0,
            max_weight: 1,
        }
    }
}

impl RandomTree {
    /// Creates a new tree generator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root node all edges are oriented away from.
    ///
    /// # Panics
    /// Panics if `root >= n` when used in generation.
    pub fn root(mut self, root: Node) -> Self {
        self.root = root;
        self
    }
}

impl NumNodesGen for RandomTree {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl MaxWeightGen for RandomTree {
    fn max_weight(mut self, w: Weight) -> Self {
        self.max_weight = w;
        self
    }
}

impl EdgeGenerator for RandomTree {
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");
        assert!(self.root < self.n);
        assert!(self.max_weight > 0);

        let mut edges = Vec::with_capacity(self.n as usize - 1);
        if self.n == 1 {
            return edges;
        }

        let node_gen = Uniform::new(0 as Node, self.n).unwrap();
        let weight_gen = Uniform::new_inclusive(1 as Weight, self.max_weight).unwrap();

        let mut connected = NodeBitSet::new_with_bits_set(self.n, [self.root]);
        let mut on_path = NodeBitSet::new(self.n);
        let mut path: Vec<Node> = Vec::new();

        while !connected.are_all_set() {
            on_path.clear_all();
            path.clear();

            loop {
                let u = node_gen.sample(rng);

                if path.is_empty() && connected.get_bit(u) {
                    continue;
                }

                if on_path.set_bit(u) {
                    // avoid loops within the walk
                    continue;
                }

                path.push(u);

                if connected.set_bit(u) {
                    // the walk hit the tree: attach it, edges oriented away from the tree
                    for uv in path.windows(2).rev() {
                        edges.push(Edge(uv[1], uv[0], weight_gen.sample(rng)));
                    }
                    break;
                }
            }
        }

        edges
    }
}

/// `G(n,p)` graphs generate every possible directed edge `(u, v)` with `u != v` in a graph
/// with `n` nodes with probability `p` independent from each other. Weights are uniform in
/// `1..=max_weight` (default `1`).
///
/// # Examples
/// ```
/// use wgraphs::gens::*;
///
/// let mut rng = rand::rng();
/// let edges = Gnp::new().nodes(10).prob(1.0).generate(&mut rng);
///
/// assert_eq!(edges.len(), 90); // all ordered pairs
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Gnp {
    n: NumNodes,
    p: f64,
    max_weight: Weight,
}

impl Default for Gnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: 0.0,
            max_weight: 1,
        }
    }
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob));
        self.p = prob;
        self
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl MaxWeightGen for Gnp {
    fn max_weight(mut self, w: Weight) -> Self {
        self.max_weight = w;
        self
    }
}

impl EdgeGenerator for Gnp {
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");
        assert!(self.max_weight > 0);

        let weight_gen = Uniform::new_inclusive(1 as Weight, self.max_weight).unwrap();

        let mut edges = Vec::new();
        for u in 0..self.n {
            for v in 0..self.n {
                if u != v && rng.random_bool(self.p) {
                    edges.push(Edge(u, v, weight_gen.sample(rng)));
                }
            }
        }

        edges
    }
}
