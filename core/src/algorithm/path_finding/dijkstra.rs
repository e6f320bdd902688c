//! Dijkstra's shortest paths with unit edge weights
//!
//! Every step carries a snapshot of the tentative distances known so far;
//! unreachable nodes never appear in the map. The frontier of a relaxation
//! step holds the single neighbour whose distance was just improved.
//!
//! # Determinism
//! The node with the smallest tentative distance is finalized next, ties
//! going to the lowest id. Neighbours are relaxed in ascending id order.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::BTreeMap;

use log::debug;

use crate::algorithm::path_finding::VisitLog;
use crate::algorithm::step::{Frontier, GraphStep, StepSequence};
use crate::algorithm::traits::{
    AlgorithmCategory, AlgorithmComplexity, AlgorithmError, AlgorithmInfo, NodeId, StepGenerator,
};
use crate::data_structures::graph::Graph;

/// Weight applied to every edge
pub const UNIT_WEIGHT: u32 = 1;

/// Single-source shortest paths
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl Dijkstra {
    pub const ID: &'static str = "dijkstra";

    pub fn new() -> Self {
        Self
    }

    /// Unvisited node with the smallest known distance, lowest id on ties
    fn closest_unvisited(distances: &BTreeMap<NodeId, u32>, visited: &VisitLog) -> Option<NodeId> {
        // BTreeMap iterates ascending by id, so min_by_key keeps the lowest id.
        distances
            .iter()
            .filter(|(node, _)| !visited.contains(**node))
            .min_by_key(|(_, distance)| **distance)
            .map(|(node, _)| *node)
    }
}

impl StepGenerator for Dijkstra {
    type Input = Graph;
    type Params = NodeId;
    type Step = GraphStep;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo::new(
            Self::ID,
            "Dijkstra's Algorithm",
            AlgorithmCategory::Graph,
            AlgorithmComplexity::new("O(V^2)", "O(V^2)", "O(V^2)", "O(V)"),
        )
    }

    fn generate(&self, graph: &Graph, start: &NodeId) -> Result<StepSequence<GraphStep>, AlgorithmError> {
        let start = graph.require(*start)?.id;

        let mut steps = Vec::new();
        let mut visited = VisitLog::default();
        let mut distances = BTreeMap::from([(start, 0u32)]);

        steps.push(
            GraphStep::new(
                Vec::new(),
                None,
                Frontier::Empty,
                "Initialize distances to Infinity, start node to 0",
            )
            .with_distances(distances.clone()),
        );

        while let Some(current) = Self::closest_unvisited(&distances, &visited) {
            visited.insert(current);
            let base = distances.get(&current).copied().unwrap_or_default();

            steps.push(
                GraphStep::new(
                    visited.snapshot(),
                    Some(current),
                    Frontier::Empty,
                    format!("Visiting node {current} (Distance: {base})"),
                )
                .with_distances(distances.clone()),
            );

            for neighbor in graph.neighbors(current) {
                if visited.contains(neighbor) {
                    continue;
                }
                let candidate = base.saturating_add(UNIT_WEIGHT);
                let improves = distances.get(&neighbor).map_or(true, |&known| candidate < known);
                if improves {
                    distances.insert(neighbor, candidate);
                    steps.push(
                        GraphStep::new(
                            visited.snapshot(),
                            Some(current),
                            Frontier::Relaxed(vec![neighbor]),
                            format!("Updating distance for node {neighbor} to {candidate}"),
                        )
                        .with_distances(distances.clone()),
                    );
                }
            }
        }

        steps.push(
            GraphStep::new(visited.snapshot(), None, Frontier::Empty, "Finished")
                .with_distances(distances),
        );
        debug!("Dijkstra from {} settled {} nodes in {} steps", start, visited.len(), steps.len());
        Ok(StepSequence::new(steps))
    }
}
