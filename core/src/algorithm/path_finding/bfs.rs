//! Breadth-first search
//!
//! Emits one step per dequeue and one per enqueue. The frontier is a FIFO
//! queue listed front first.

use std::collections::VecDeque;

use log::debug;

use crate::algorithm::path_finding::VisitLog;
use crate::algorithm::step::{Frontier, GraphStep, StepSequence};
use crate::algorithm::traits::{
    AlgorithmCategory, AlgorithmComplexity, AlgorithmError, AlgorithmInfo, NodeId, StepGenerator,
};
use crate::data_structures::graph::Graph;

/// Breadth-first traversal from a start node
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirstSearch;

impl BreadthFirstSearch {
    pub const ID: &'static str = "bfs";

    pub fn new() -> Self {
        Self
    }
}

fn queue_of(queue: &VecDeque<NodeId>) -> Frontier {
    Frontier::Queue(queue.iter().copied().collect())
}

impl StepGenerator for BreadthFirstSearch {
    type Input = Graph;
    type Params = NodeId;
    type Step = GraphStep;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo::new(
            Self::ID,
            "Breadth-First Search",
            AlgorithmCategory::Graph,
            AlgorithmComplexity::new("O(V + E)", "O(V + E)", "O(V + E)", "O(V)"),
        )
    }

    fn generate(&self, graph: &Graph, start: &NodeId) -> Result<StepSequence<GraphStep>, AlgorithmError> {
        let start = graph.require(*start)?.id;

        let mut steps = Vec::new();
        let mut visited = VisitLog::default();
        let mut queue = VecDeque::from([start]);

        steps.push(GraphStep::new(Vec::new(), None, queue_of(&queue), "Start BFS"));
        visited.insert(start);

        while let Some(current) = queue.pop_front() {
            steps.push(GraphStep::new(
                visited.snapshot(),
                Some(current),
                queue_of(&queue),
                format!("Visiting node {current}"),
            ));

            for neighbor in graph.neighbors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                    steps.push(GraphStep::new(
                        visited.snapshot(),
                        Some(current),
                        queue_of(&queue),
                        format!("Adding neighbor {neighbor} to queue"),
                    ));
                }
            }
        }

        steps.push(GraphStep::new(visited.snapshot(), None, Frontier::Empty, "Finished"));
        debug!("BFS from {} reached {} nodes in {} steps", start, visited.len(), steps.len());
        Ok(StepSequence::new(steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::canonical_graph;
    use crate::data_structures::graph::Position;

    fn ids(raw: &[usize]) -> Vec<NodeId> {
        raw.iter().map(|&i| NodeId(i)).collect()
    }

    #[test]
    fn test_bfs_visits_level_by_level() {
        let graph = canonical_graph().unwrap();
        let steps = BreadthFirstSearch.generate(&graph, &NodeId(0)).unwrap();

        let first = steps.first().unwrap();
        assert!(first.visited.is_empty());
        assert_eq!(first.frontier, Frontier::Queue(ids(&[0])));

        let visits: Vec<_> = steps
            .iter()
            .filter(|s| s.description.starts_with("Visiting"))
            .filter_map(|s| s.current)
            .collect();
        assert_eq!(visits, ids(&[0, 1, 2, 3, 4, 5, 6]));

        let last = steps.last().unwrap();
        assert_eq!(last.current, None);
        assert_eq!(last.visited, ids(&[0, 1, 2, 3, 4, 5, 6]));
        assert_eq!(last.description, "Finished");
    }

    #[test]
    fn test_bfs_enqueue_steps_show_queue_front_first() {
        let graph = canonical_graph().unwrap();
        let steps = BreadthFirstSearch.generate(&graph, &NodeId(0)).unwrap();
        // Start, visit 0, enqueue 1, enqueue 2
        assert_eq!(steps[3].frontier, Frontier::Queue(ids(&[1, 2])));
        assert_eq!(steps[3].description, "Adding neighbor 2 to queue");
    }

    #[test]
    fn test_bfs_stops_at_component_boundary() {
        let mut graph = Graph::new();
        for i in 0..3 {
            graph.add_node(NodeId(i), Position::default()).unwrap();
        }
        graph.add_edge(NodeId(0), NodeId(1)).unwrap();

        let steps = BreadthFirstSearch.generate(&graph, &NodeId(0)).unwrap();
        assert_eq!(steps.last().unwrap().visited, ids(&[0, 1]));
    }

    #[test]
    fn test_bfs_rejects_unknown_start() {
        let graph = canonical_graph().unwrap();
        assert_eq!(
            BreadthFirstSearch.generate(&graph, &NodeId(42)),
            Err(AlgorithmError::InvalidNode(NodeId(42)))
        );
    }
}
