//! Small undirected graph with baked 2D layout
//!
//! Graphs in the visualizer are tiny, hand-laid-out teaching examples. Node
//! identity is the [`NodeId`]; positions are presentation data that the
//! Prim generator also uses as Euclidean edge weights.

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, NodeId};

/// 2D position in layout coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.squared_distance_to(other).sqrt()
    }

    #[inline]
    pub fn squared_distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Graph vertex with a fixed layout position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Position,
}

/// Undirected edge; `source`/`target` only record how it was declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    #[inline]
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }

    /// The endpoint opposite to `node`, if `node` is an endpoint
    #[inline]
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.source == node {
            Some(self.target)
        } else if self.target == node {
            Some(self.source)
        } else {
            None
        }
    }

    /// Same endpoints regardless of declaration direction
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// Undirected graph stored as node and edge lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node; ids must be unique
    pub fn add_node(&mut self, id: NodeId, position: Position) -> Result<(), AlgorithmError> {
        if self.contains(id) {
            return Err(AlgorithmError::DuplicateNode(id));
        }
        self.nodes.push(Node { id, position });
        Ok(())
    }

    /// Adds an undirected edge between two existing nodes
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> Result<(), AlgorithmError> {
        for endpoint in [source, target] {
            if !self.contains(endpoint) {
                return Err(AlgorithmError::InvalidNode(endpoint));
            }
        }
        if self.edges.iter().any(|e| e.connects(source, target)) {
            return Err(AlgorithmError::DuplicateEdge(source, target));
        }
        self.edges.push(Edge::new(source, target));
        Ok(())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Node ids in ascending order
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<_> = self.nodes.iter().map(|n| n.id).collect();
        ids.sort_unstable();
        ids
    }

    /// Neighbours of `id` in ascending id order, without duplicates
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let mut neighbors: Vec<_> = self.edges.iter().filter_map(|e| e.other(id)).collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    /// Euclidean layout length of an edge
    pub fn edge_length(&self, edge: &Edge) -> Option<f64> {
        let source = self.node(edge.source)?;
        let target = self.node(edge.target)?;
        Some(source.position.distance_to(&target.position))
    }

    /// Fails with [`AlgorithmError::InvalidNode`] when `id` is not in the graph
    pub fn require(&self, id: NodeId) -> Result<&Node, AlgorithmError> {
        self.node(id).ok_or(AlgorithmError::InvalidNode(id))
    }
}
