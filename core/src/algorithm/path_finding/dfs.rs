//! Depth-first search with an explicit stack
//!
//! Neighbours are pushed in descending id order so they are popped, and
//! visited, in ascending order. A node may sit on the stack more than once;
//! stale entries are skipped when popped.

use log::debug;

use crate::algorithm::path_finding::VisitLog;
use crate::algorithm::step::{Frontier, GraphStep, StepSequence};
use crate::algorithm::traits::{
    AlgorithmCategory, AlgorithmComplexity, AlgorithmError, AlgorithmInfo, NodeId, StepGenerator,
};
use crate::data_structures::graph::Graph;

/// Depth-first traversal from a start node
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl DepthFirstSearch {
    pub const ID: &'static str = "dfs";

    pub fn new() -> Self {
        Self
    }
}

impl StepGenerator for DepthFirstSearch {
    type Input = Graph;
    type Params = NodeId;
    type Step = GraphStep;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo::new(
            Self::ID,
            "Depth-First Search",
            AlgorithmCategory::Graph,
            AlgorithmComplexity::new("O(V + E)", "O(V + E)", "O(V + E)", "O(V)"),
        )
    }

    fn generate(&self, graph: &Graph, start: &NodeId) -> Result<StepSequence<GraphStep>, AlgorithmError> {
        let start = graph.require(*start)?.id;

        let mut steps = Vec::new();
        let mut visited = VisitLog::default();
        let mut stack = vec![start];

        steps.push(GraphStep::new(Vec::new(), None, Frontier::Stack(stack.clone()), "Start DFS"));

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            steps.push(GraphStep::new(
                visited.snapshot(),
                Some(current),
                Frontier::Stack(stack.clone()),
                format!("Visiting node {current}"),
            ));

            for neighbor in graph.neighbors(current).into_iter().rev() {
                if !visited.contains(neighbor) {
                    stack.push(neighbor);
                    steps.push(GraphStep::new(
                        visited.snapshot(),
                        Some(current),
                        Frontier::Stack(stack.clone()),
                        format!("Adding neighbor {neighbor} to stack"),
                    ));
                }
            }
        }

        steps.push(GraphStep::new(visited.snapshot(), None, Frontier::Empty, "Finished"));
        debug!("DFS from {} reached {} nodes in {} steps", start, visited.len(), steps.len());
        Ok(StepSequence::new(steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::canonical_graph;

    fn ids(raw: &[usize]) -> Vec<NodeId> {
        raw.iter().map(|&i| NodeId(i)).collect()
    }

    #[test]
    fn test_dfs_visits_deepest_first_in_ascending_order() {
        let graph = canonical_graph().unwrap();
        let steps = DepthFirstSearch.generate(&graph, &NodeId(0)).unwrap();

        let visits: Vec<_> = steps
            .iter()
            .filter(|s| s.description.starts_with("Visiting"))
            .filter_map(|s| s.current)
            .collect();
        assert_eq!(visits, ids(&[0, 1, 3, 4, 5, 2, 6]));

        let last = steps.last().unwrap();
        assert_eq!(last.current, None);
        assert_eq!(last.visited.len(), 7);
        assert!(last.frontier.is_empty());
    }

    #[test]
    fn test_dfs_pushes_descending() {
        let graph = canonical_graph().unwrap();
        let steps = DepthFirstSearch.generate(&graph, &NodeId(0)).unwrap();
        assert_eq!(steps[0].frontier, Frontier::Stack(ids(&[0])));
        // Visit 0, then push 2 and 1 so 1 ends on top
        assert_eq!(steps[3].frontier, Frontier::Stack(ids(&[2, 1])));
    }

    #[test]
    fn test_dfs_single_node_graph() {
        let mut graph = Graph::new();
        graph.add_node(NodeId(7), Default::default()).unwrap();
        let steps = DepthFirstSearch.generate(&graph, &NodeId(7)).unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps.last().unwrap().visited, ids(&[7]));
    }
}
