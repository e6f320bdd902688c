//! Dataset provider for the visualizers
//!
//! Random arrays, random binary search trees and the fixed teaching graph.
//! A provider owns a seedable ChaCha20 generator so that a given seed always
//! reproduces the same datasets.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::ops::RangeInclusive;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::algorithm::dynamic_programming::KnapsackProblem;
use crate::algorithm::traits::{AlgorithmError, NodeId};
use crate::config::{DatasetConfig, KnapsackConfig, TreeLayout, VisualizerConfig};
use crate::data_structures::graph::{Graph, Position};
use crate::data_structures::tree::BinarySearchTree;

/// Layout of the canonical graph: `(id, x, y)`
const CANONICAL_NODES: [(usize, f64, f64); 7] = [
    (0, 400.0, 100.0),
    (1, 250.0, 250.0),
    (2, 550.0, 250.0),
    (3, 150.0, 400.0),
    (4, 350.0, 400.0),
    (5, 450.0, 400.0),
    (6, 650.0, 400.0),
];

/// Edges of the canonical graph; `4 - 5` is the cross connection
const CANONICAL_EDGES: [(usize, usize); 7] = [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6), (4, 5)];

/// The fixed 7-node, 7-edge teaching graph used by every graph visualizer
pub fn canonical_graph() -> Result<Graph, AlgorithmError> {
    let mut graph = Graph::new();
    for (id, x, y) in CANONICAL_NODES {
        graph.add_node(NodeId(id), Position::new(x, y))?;
    }
    for (source, target) in CANONICAL_EDGES {
        graph.add_edge(NodeId(source), NodeId(target))?;
    }
    Ok(graph)
}

/// Seedable source of visualizer datasets
#[derive(Debug, Clone)]
pub struct DatasetProvider {
    rng: ChaCha20Rng,
    dataset: DatasetConfig,
    layout: TreeLayout,
    knapsack: KnapsackConfig,
}

impl DatasetProvider {
    /// Provider seeded from system entropy
    pub fn new(config: &VisualizerConfig) -> Self {
        Self::with_rng(ChaCha20Rng::from_entropy(), config)
    }

    /// Reproducible provider
    pub fn seeded(seed: u64, config: &VisualizerConfig) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed), config)
    }

    fn with_rng(rng: ChaCha20Rng, config: &VisualizerConfig) -> Self {
        Self {
            rng,
            dataset: config.dataset.clone(),
            layout: config.layout.clone(),
            knapsack: config.knapsack.clone(),
        }
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.dataset
    }

    fn random_values(&mut self, len: usize, range: RangeInclusive<i64>) -> Vec<i64> {
        (0..len).map(|_| self.rng.gen_range(range.clone())).collect()
    }

    /// Unsorted array for the sorting visualizers
    pub fn sorting_array(&mut self) -> Vec<i64> {
        let range = self.dataset.sorting_range();
        self.random_values(self.dataset.sorting_length, range)
    }

    /// Array for the search visualizers, ascending when `sorted`
    pub fn search_array(&mut self, sorted: bool) -> Vec<i64> {
        let range = self.dataset.search_range();
        let mut array = self.random_values(self.dataset.search_length, range);
        if sorted {
            array.sort_unstable();
        }
        array
    }

    /// Target that is a member of `array` with the configured probability
    pub fn search_target(&mut self, array: &[i64]) -> i64 {
        if self.rng.gen_bool(self.dataset.hit_probability()) {
            if let Some(&member) = array.choose(&mut self.rng) {
                return member;
            }
        }
        self.rng.gen_range(self.dataset.search_range())
    }

    /// Search array together with its target
    pub fn search_dataset(&mut self, sorted: bool) -> (Vec<i64>, i64) {
        let array = self.search_array(sorted);
        let target = self.search_target(&array);
        (array, target)
    }

    /// Random BST of distinct keys, laid out for drawing
    ///
    /// Duplicate draws are discarded and redrawn, so ids stay sequential.
    pub fn random_bst(&mut self) -> BinarySearchTree {
        let size = self.dataset.tree_size;
        let range = self.dataset.tree_range();
        let max_attempts = size.saturating_mul(100).max(100);

        let mut tree = BinarySearchTree::new();
        let mut attempts = 0;
        while tree.len() < size && attempts < max_attempts {
            attempts += 1;
            let value = self.rng.gen_range(range.clone());
            if let Err(err) = tree.insert(value) {
                debug!("redrawing tree key: {err}");
            }
        }
        if tree.len() < size {
            warn!("random tree has {} of {} requested keys", tree.len(), size);
        }

        tree.layout(&self.layout);
        tree
    }

    /// The classic knapsack instance at the configured capacity
    pub fn knapsack(&self) -> KnapsackProblem {
        KnapsackProblem::classic().with_capacity(self.knapsack.capacity)
    }
}

impl Default for DatasetProvider {
    fn default() -> Self {
        Self::new(&VisualizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(seed: u64) -> DatasetProvider {
        DatasetProvider::seeded(seed, &VisualizerConfig::default())
    }

    #[test]
    fn test_canonical_graph_shape() {
        let graph = canonical_graph().unwrap();
        assert_eq!(graph.node_count(), 7);
        assert_eq!(graph.edge_count(), 7);
        assert_eq!(graph.node(NodeId(6)).unwrap().position, Position::new(650.0, 400.0));
        assert_eq!(graph.neighbors(NodeId(4)), vec![NodeId(1), NodeId(5)]);
    }

    #[test]
    fn test_sorting_array_respects_bounds() {
        let array = provider(1).sorting_array();
        assert_eq!(array.len(), 10);
        assert!(array.iter().all(|v| (10..=109).contains(v)));
    }

    #[test]
    fn test_search_array_sorted_on_request() {
        let mut provider = provider(2);
        let sorted = provider.search_array(true);
        assert_eq!(sorted.len(), 15);
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        assert!(sorted.iter().all(|v| (1..=100).contains(v)));
    }

    #[test]
    fn test_seed_reproduces_datasets() {
        let (a, b) = (provider(7).search_dataset(false), provider(7).search_dataset(false));
        assert_eq!(a, b);
        assert_ne!(provider(7).sorting_array(), provider(8).sorting_array());
    }

    #[test]
    fn test_targets_hit_roughly_seventy_percent() {
        let mut provider = provider(3);
        let hits = (0..1000)
            .filter(|_| {
                let (array, target) = provider.search_dataset(false);
                array.contains(&target)
            })
            .count();
        // 70% by choice plus chance collisions of the random fallback
        assert!((650..=850).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn test_hand_built_config_never_panics_on_draw() {
        let mut config = VisualizerConfig::default();
        config.dataset.target_hit_probability = 1.5;
        config.dataset.sorting_min = 90;
        config.dataset.sorting_max = 20;
        config.dataset.search_min = 40;
        config.dataset.search_max = -40;
        let mut provider = DatasetProvider::seeded(9, &config);

        let array = provider.sorting_array();
        assert!(array.iter().all(|v| (20..=90).contains(v)));
        for _ in 0..20 {
            let (array, target) = provider.search_dataset(false);
            assert!(array.iter().all(|v| (-40..=40).contains(v)));
            assert!(array.contains(&target));
        }
    }

    #[test]
    fn test_random_bst_has_distinct_keys_and_layout() {
        let tree = provider(4).random_bst();
        assert_eq!(tree.len(), 10);
        let values = tree.values_in_order();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(tree.root().unwrap().position, Position::new(400.0, 50.0));
        assert_eq!(tree.root().unwrap().id, NodeId(0));
    }

    #[test]
    fn test_knapsack_uses_configured_capacity() {
        let mut config = VisualizerConfig::default();
        config.knapsack.capacity = 10;
        let problem = DatasetProvider::seeded(0, &config).knapsack();
        assert_eq!(problem.capacity, 10);
        assert_eq!(problem.items.len(), 4);
    }
}
