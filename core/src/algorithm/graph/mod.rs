//! Graph algorithm dispatch
//!
//! [`GraphAlgorithm`] selects one of the graph step generators by catalog id
//! so a session can switch algorithms at runtime without changing its step
//! type.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod mst;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use self::mst::Prim;

use crate::algorithm::path_finding::{BreadthFirstSearch, DepthFirstSearch, Dijkstra};
use crate::algorithm::step::{GraphStep, StepSequence};
use crate::algorithm::traits::{parse_variant, AlgorithmError, AlgorithmInfo, NodeId, StepGenerator};
use crate::data_structures::graph::Graph;

/// Graph algorithms available to the visualizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphAlgorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Prim,
}

impl GraphAlgorithm {
    pub const ALL: [GraphAlgorithm; 4] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::Prim];

    pub fn id(self) -> &'static str {
        match self {
            Self::Bfs => BreadthFirstSearch::ID,
            Self::Dfs => DepthFirstSearch::ID,
            Self::Dijkstra => Dijkstra::ID,
            Self::Prim => Prim::ID,
        }
    }
}

impl fmt::Display for GraphAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info().name)
    }
}

impl FromStr for GraphAlgorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL, Self::id)
    }
}

impl StepGenerator for GraphAlgorithm {
    type Input = Graph;
    type Params = NodeId;
    type Step = GraphStep;

    fn info(&self) -> AlgorithmInfo {
        match self {
            Self::Bfs => BreadthFirstSearch.info(),
            Self::Dfs => DepthFirstSearch.info(),
            Self::Dijkstra => Dijkstra.info(),
            Self::Prim => Prim.info(),
        }
    }

    fn generate(&self, graph: &Graph, start: &NodeId) -> Result<StepSequence<GraphStep>, AlgorithmError> {
        match self {
            Self::Bfs => BreadthFirstSearch.generate(graph, start),
            Self::Dfs => DepthFirstSearch.generate(graph, start),
            Self::Dijkstra => Dijkstra.generate(graph, start),
            Self::Prim => Prim.generate(graph, start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::canonical_graph;

    #[test]
    fn test_parse_by_catalog_id() {
        assert_eq!("dijkstra".parse::<GraphAlgorithm>(), Ok(GraphAlgorithm::Dijkstra));
        assert_eq!(" BFS ".parse::<GraphAlgorithm>(), Ok(GraphAlgorithm::Bfs));
        assert!("kruskal".parse::<GraphAlgorithm>().is_err());
    }

    #[test]
    fn test_generators_are_idempotent() {
        let graph = canonical_graph().unwrap();
        for algorithm in GraphAlgorithm::ALL {
            let a = algorithm.generate(&graph, &NodeId(0)).unwrap();
            let b = algorithm.generate(&graph, &NodeId(0)).unwrap();
            assert_eq!(a, b, "{algorithm}");
        }
    }

    #[test]
    fn test_visited_is_monotonic() {
        let graph = canonical_graph().unwrap();
        for algorithm in GraphAlgorithm::ALL {
            let steps = algorithm.generate(&graph, &NodeId(3)).unwrap();
            for pair in steps.as_slice().windows(2) {
                assert!(pair[1].visited.starts_with(&pair[0].visited), "{algorithm}");
            }
            assert!(steps.last().unwrap().current.is_none());
        }
    }
}
