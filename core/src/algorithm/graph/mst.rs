//! Prim's minimum spanning tree over layout distances
//!
//! Edge weight is the Euclidean distance between the endpoints' layout
//! positions. Each round scans the edge list for the shortest edge crossing
//! the cut between the tree and the rest of the graph (cut property); ties go
//! to the edge declared first. On a disconnected graph the tree spans the
//! start node's component and the run ends there.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;

use crate::algorithm::path_finding::VisitLog;
use crate::algorithm::step::{Frontier, GraphStep, StepSequence};
use crate::algorithm::traits::{
    AlgorithmCategory, AlgorithmComplexity, AlgorithmError, AlgorithmInfo, NodeId, StepGenerator,
};
use crate::data_structures::graph::{Edge, Graph};

/// Prim's algorithm with an edge-list scan per round
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim;

impl Prim {
    pub const ID: &'static str = "prim";

    pub fn new() -> Self {
        Self
    }

    /// Shortest edge with exactly one endpoint in the tree
    fn lightest_crossing_edge(graph: &Graph, tree: &VisitLog) -> Option<Edge> {
        let mut best: Option<(Edge, f64)> = None;
        for edge in graph.edges() {
            if tree.contains(edge.source) == tree.contains(edge.target) {
                continue;
            }
            let Some(weight) = graph.edge_length(edge) else {
                continue;
            };
            // Strict comparison keeps the earliest edge on ties.
            if best.map_or(true, |(_, w)| weight < w) {
                best = Some((*edge, weight));
            }
        }
        best.map(|(edge, _)| edge)
    }
}

impl StepGenerator for Prim {
    type Input = Graph;
    type Params = NodeId;
    type Step = GraphStep;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo::new(
            Self::ID,
            "Prim's Algorithm",
            AlgorithmCategory::Graph,
            AlgorithmComplexity::new("O(V * E)", "O(V * E)", "O(V * E)", "O(V)"),
        )
    }

    fn generate(&self, graph: &Graph, start: &NodeId) -> Result<StepSequence<GraphStep>, AlgorithmError> {
        let start = graph.require(*start)?.id;

        let mut steps = Vec::new();
        let mut tree = VisitLog::default();
        let mut mst_edges: Vec<Edge> = Vec::new();

        tree.insert(start);
        steps.push(
            GraphStep::new(tree.snapshot(), Some(start), Frontier::Empty, "Start with arbitrary node")
                .with_mst_edges(Vec::new()),
        );

        while tree.len() < graph.node_count() {
            let Some(edge) = Self::lightest_crossing_edge(graph, &tree) else {
                debug!("Prim stopped early: no edge leaves the tree of {} nodes", tree.len());
                break;
            };
            let next = if tree.contains(edge.source) { edge.target } else { edge.source };
            tree.insert(next);
            mst_edges.push(edge);

            steps.push(
                GraphStep::new(
                    tree.snapshot(),
                    Some(next),
                    Frontier::Empty,
                    format!("Added node {next} to MST via shortest edge"),
                )
                .with_mst_edges(mst_edges.clone()),
            );
        }

        steps.push(
            GraphStep::new(tree.snapshot(), None, Frontier::Empty, "MST Completed")
                .with_mst_edges(mst_edges),
        );
        debug!("Prim from {} spanned {} nodes in {} steps", start, tree.len(), steps.len());
        Ok(StepSequence::new(steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::graph::Position;
    use crate::dataset::canonical_graph;

    fn total_length(graph: &Graph, edges: &[Edge]) -> f64 {
        edges.iter().filter_map(|e| graph.edge_length(e)).sum()
    }

    #[test]
    fn test_prim_spans_canonical_graph() {
        let graph = canonical_graph().unwrap();
        let steps = Prim.generate(&graph, &NodeId(0)).unwrap();

        let first = steps.first().unwrap();
        assert_eq!(first.current, Some(NodeId(0)));
        assert_eq!(first.visited, vec![NodeId(0)]);

        let last = steps.last().unwrap();
        let edges = last.mst_edges.clone().unwrap();
        assert_eq!(edges.len(), graph.node_count() - 1);
        assert_eq!(last.visited.len(), graph.node_count());
        assert_eq!(last.description, "MST Completed");
        // The cross edge 4-5 pulls node 2 in through 5, so 0-2 is left out
        assert!(edges.iter().any(|e| e.connects(NodeId(4), NodeId(5))));
        assert!(edges.iter().any(|e| e.connects(NodeId(2), NodeId(5))));
        assert!(!edges.iter().any(|e| e.connects(NodeId(0), NodeId(2))));
    }

    #[test]
    fn test_prim_matches_brute_force_on_square() {
        // Unit square with both diagonals; the MST has weight 3.
        let mut graph = Graph::new();
        let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        for (i, (x, y)) in corners.into_iter().enumerate() {
            graph.add_node(NodeId(i), Position::new(x, y)).unwrap();
        }
        for (a, b) in [(0, 2), (1, 3), (0, 1), (1, 2), (2, 3), (3, 0)] {
            graph.add_edge(NodeId(a), NodeId(b)).unwrap();
        }

        let steps = Prim.generate(&graph, &NodeId(0)).unwrap();
        let edges = steps.last().unwrap().mst_edges.clone().unwrap();
        assert!((total_length(&graph, &edges) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_prim_ties_follow_edge_order() {
        let mut graph = Graph::new();
        graph.add_node(NodeId(0), Position::new(0.0, 0.0)).unwrap();
        graph.add_node(NodeId(1), Position::new(-1.0, 0.0)).unwrap();
        graph.add_node(NodeId(2), Position::new(1.0, 0.0)).unwrap();
        graph.add_edge(NodeId(0), NodeId(2)).unwrap();
        graph.add_edge(NodeId(0), NodeId(1)).unwrap();

        let steps = Prim.generate(&graph, &NodeId(0)).unwrap();
        assert_eq!(steps[1].current, Some(NodeId(2)));
    }

    #[test]
    fn test_prim_stops_on_disconnected_graph() {
        let mut graph = Graph::new();
        graph.add_node(NodeId(0), Position::new(0.0, 0.0)).unwrap();
        graph.add_node(NodeId(1), Position::new(5.0, 0.0)).unwrap();

        let steps = Prim.generate(&graph, &NodeId(0)).unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps.last().unwrap().mst_edges, Some(Vec::new()));
    }
}
