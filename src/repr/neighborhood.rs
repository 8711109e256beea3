use fxhash::FxHashMap;
use smallvec::SmallVec;

use super::*;

/// Neighborhood backed by a `FxHashMap<Node, Weight>`.
///
/// Lookup and overwrite are constant-time; iteration order is arbitrary.
#[derive(Debug, Clone, Default)]
pub struct MapNeighborhood {
    weights: FxHashMap<Node, Weight>,
}

impl WeightedNeighborhood for MapNeighborhood {
    fn num_of_neighbors(&self) -> NumNodes {
        self.weights.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.weights.iter().map(|(&v, &w)| (v, w))
    }

    fn weight_to(&self, v: Node) -> Option<Weight> {
        self.weights.get(&v).copied()
    }

    fn set_neighbor(&mut self, v: Node, w: Weight) -> Option<Weight> {
        self.weights.insert(v, w)
    }
}

/// Neighborhood backed by a `SmallVec<[(Node, Weight); 4]>`.
///
/// Up to four neighbors are stored inline without heap allocation. Lookup and overwrite
/// scan linearly, which beats hashing for the low degrees this backend targets. Iteration
/// follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct SparseNeighborhood {
    weights: SmallVec<[(Node, Weight); 4]>,
}

impl WeightedNeighborhood for SparseNeighborhood {
    fn num_of_neighbors(&self) -> NumNodes {
        self.weights.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.weights.iter().copied()
    }

    fn weight_to(&self, v: Node) -> Option<Weight> {
        self.weights
            .iter()
            .find_map(|&(u, w)| (u == v).then_some(w))
    }

    fn set_neighbor(&mut self, v: Node, w: Weight) -> Option<Weight> {
        match self.weights.iter_mut().find(|entry| entry.0 == v) {
            Some(entry) => Some(std::mem::replace(&mut entry.1, w)),
            None => {
                self.weights.push((v, w));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn overwrite_keeps_latest<N: WeightedNeighborhood>() {
        let mut nbs = N::new();
        assert_eq!(nbs.num_of_neighbors(), 0);

        assert_eq!(nbs.set_neighbor(3, 10), None);
        assert_eq!(nbs.set_neighbor(5, 20), None);
        assert_eq!(nbs.set_neighbor(3, 7), Some(10));

        assert_eq!(nbs.num_of_neighbors(), 2);
        assert_eq!(nbs.weight_to(3), Some(7));
        assert_eq!(nbs.weight_to(5), Some(20));
        assert_eq!(nbs.weight_to(4), None);
        assert!(nbs.has_neighbor(5));
        assert!(!nbs.has_neighbor(6));

        let sorted = nbs.neighbors().sorted().collect_vec();
        assert_eq!(sorted, vec![(3, 7), (5, 20)]);
    }

    #[test]
    fn map_neighborhood() {
        overwrite_keeps_latest::<MapNeighborhood>();
    }

    #[test]
    fn sparse_neighborhood() {
        overwrite_keeps_latest::<SparseNeighborhood>();
    }

    #[test]
    fn sparse_insertion_order() {
        let mut nbs = SparseNeighborhood::new();
        nbs.set_neighbor(9, 1);
        nbs.set_neighbor(2, 2);
        nbs.set_neighbor(7, 3);
        assert_eq!(
            nbs.neighbors().collect_vec(),
            vec![(9, 1), (2, 2), (7, 3)]
        );
    }
}
