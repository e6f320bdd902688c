//! Binary search tree with layout coordinates
//!
//! Keys are unique: inserting a value that is already present is rejected.
//! Node ids are assigned sequentially on insertion and are independent of the
//! stored value.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, NodeId};
use crate::config::TreeLayout;
use crate::data_structures::graph::{Graph, Position};

/// Binary tree node, exclusively owned by its parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub value: i64,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
    pub position: Position,
}

impl TreeNode {
    pub fn new(id: NodeId, value: i64) -> Self {
        Self {
            id,
            value,
            left: None,
            right: None,
            position: Position::default(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Binary search tree keyed by `value`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BinarySearchTree {
    root: Option<Box<TreeNode>>,
    len: usize,
    next_id: usize,
}

impl BinarySearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree by inserting `values` in order, skipping duplicates
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
        let mut tree = Self::new();
        for value in values {
            // Repeated keys are dropped.
            let _ = tree.insert(value);
        }
        tree
    }

    /// Inserts a key and returns the id of the new node
    pub fn insert(&mut self, value: i64) -> Result<NodeId, AlgorithmError> {
        let id = NodeId(self.next_id);
        insert_into(&mut self.root, id, value)?;
        self.next_id += 1;
        self.len += 1;
        Ok(id)
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, value: i64) -> bool {
        self.find(value).is_some()
    }

    pub fn find(&self, value: i64) -> Option<&TreeNode> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Keys in ascending order
    pub fn values_in_order(&self) -> Vec<i64> {
        fn walk(node: Option<&TreeNode>, out: &mut Vec<i64>) {
            if let Some(node) = node {
                walk(node.left.as_deref(), out);
                out.push(node.value);
                walk(node.right.as_deref(), out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(self.root(), &mut out);
        out
    }

    pub fn height(&self) -> usize {
        fn depth(node: Option<&TreeNode>) -> usize {
            node.map_or(0, |n| 1 + depth(n.left.as_deref()).max(depth(n.right.as_deref())))
        }
        depth(self.root())
    }

    /// Places every node by recursive halving of the horizontal offset
    pub fn layout(&mut self, layout: &TreeLayout) {
        fn place(node: Option<&mut Box<TreeNode>>, at: Position, offset: f64, layout: &TreeLayout) {
            let Some(node) = node else { return };
            node.position = at;
            let y = at.y + layout.level_height;
            let next = offset / layout.offset_divisor;
            place(node.left.as_mut(), Position::new(at.x - offset, y), next, layout);
            place(node.right.as_mut(), Position::new(at.x + offset, y), next, layout);
        }
        place(
            self.root.as_mut(),
            Position::new(layout.root_x, layout.root_y),
            layout.initial_offset,
            layout,
        );
    }

    /// Flattens the tree into renderable nodes and parent-to-child edges
    pub fn to_graph(&self) -> Graph {
        fn collect(node: &TreeNode, graph: &mut Graph) -> Result<(), AlgorithmError> {
            graph.add_node(node.id, node.position)?;
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                collect(child, graph)?;
                graph.add_edge(node.id, child.id)?;
            }
            Ok(())
        }

        let mut graph = Graph::new();
        if let Some(root) = self.root() {
            // Ids are unique by construction, so this cannot fail.
            if let Err(err) = collect(root, &mut graph) {
                log::warn!("tree flattening stopped early: {err}");
            }
        }
        graph
    }
}

fn insert_into(
    slot: &mut Option<Box<TreeNode>>,
    id: NodeId,
    value: i64,
) -> Result<(), AlgorithmError> {
    match slot {
        None => {
            *slot = Some(Box::new(TreeNode::new(id, value)));
            Ok(())
        }
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => insert_into(&mut node.left, id, value),
            Ordering::Greater => insert_into(&mut node.right, id, value),
            Ordering::Equal => Err(AlgorithmError::DuplicateKey(value)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut tree = BinarySearchTree::new();
        assert_eq!(tree.insert(50), Ok(NodeId(0)));
        assert_eq!(tree.insert(30), Ok(NodeId(1)));
        assert_eq!(tree.insert(50), Err(AlgorithmError::DuplicateKey(50)));
        assert_eq!(tree.insert(70), Ok(NodeId(2)));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_ordering_invariant() {
        let tree = BinarySearchTree::from_values([42, 7, 99, 7, 13, 64, 1]);
        assert_eq!(tree.values_in_order(), vec![1, 7, 13, 42, 64, 99]);
        assert_eq!(tree.len(), 6);
        assert!(tree.contains(13));
        assert!(!tree.contains(14));
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_layout_halves_offsets() {
        let mut tree = BinarySearchTree::from_values([50, 25, 75, 10]);
        tree.layout(&TreeLayout::default());

        let root = tree.root().unwrap();
        assert_eq!(root.position, Position::new(400.0, 50.0));
        let left = root.left.as_deref().unwrap();
        assert_eq!(left.position, Position::new(200.0, 110.0));
        let right = root.right.as_deref().unwrap();
        assert_eq!(right.position, Position::new(600.0, 110.0));
        let grandchild = left.left.as_deref().unwrap();
        assert!((grandchild.position.x - (200.0 - 200.0 / 1.8)).abs() < 1e-9);
        assert_eq!(grandchild.position.y, 170.0);
    }

    #[test]
    fn test_to_graph_links_parents_to_children() {
        let tree = BinarySearchTree::from_values([2, 1, 3]);
        let graph = tree.to_graph();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(NodeId(0)), vec![NodeId(1), NodeId(2)]);
        assert_eq!(BinarySearchTree::new().to_graph().node_count(), 0);
    }
}
