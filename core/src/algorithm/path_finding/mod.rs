//! Graph exploration step generators
//!
//! Breadth-first, depth-first and unit-weight Dijkstra over the small layout
//! graphs of the visualizer. All three share the same determinism rules:
//! neighbours are considered in ascending id order and ties are broken by the
//! lowest id.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use std::collections::HashSet;

pub use self::bfs::BreadthFirstSearch;
pub use self::dfs::DepthFirstSearch;
pub use self::dijkstra::Dijkstra;

use crate::algorithm::traits::NodeId;

/// Visited set that remembers first-visit order
#[derive(Debug, Default, Clone)]
pub(crate) struct VisitLog {
    order: Vec<NodeId>,
    seen: HashSet<NodeId>,
}

impl VisitLog {
    /// Marks `node` visited; returns `false` if it already was
    pub fn insert(&mut self, node: NodeId) -> bool {
        if !self.seen.insert(node) {
            return false;
        }
        self.order.push(node);
        true
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.seen.contains(&node)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Owned copy for a step snapshot
    pub fn snapshot(&self) -> Vec<NodeId> {
        self.order.clone()
    }
}
