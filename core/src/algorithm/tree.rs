//! Binary search tree step generators
//!
//! Traversals record every node visit in the chosen order. BST search
//! records each node checked on the way down; only the found node ever
//! enters `visited`.

use std::fmt;

use log::debug;

use crate::algorithm::step::{StepSequence, TreeStep};
use crate::algorithm::traits::{
    AlgorithmCategory, AlgorithmComplexity, AlgorithmError, AlgorithmInfo, NodeId, StepGenerator,
    TraversalOrder,
};
use crate::data_structures::tree::{BinarySearchTree, TreeNode};

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Preorder => "preorder",
            Self::Inorder => "inorder",
            Self::Postorder => "postorder",
        })
    }
}

/// Pre-, in- or post-order traversal
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeTraversal;

impl TreeTraversal {
    pub const ID: &'static str = "tree_traversal";
}

struct Walk {
    order: TraversalOrder,
    visited: Vec<NodeId>,
    steps: Vec<TreeStep>,
}

impl Walk {
    fn visit(&mut self, node: &TreeNode) {
        self.visited.push(node.id);
        self.steps.push(TreeStep {
            visited: self.visited.clone(),
            current: Some(node.id),
            description: format!("Visit {}", node.value),
        });
    }

    fn traverse(&mut self, node: Option<&TreeNode>) {
        let Some(node) = node else { return };
        if self.order == TraversalOrder::Preorder {
            self.visit(node);
        }
        self.traverse(node.left.as_deref());
        if self.order == TraversalOrder::Inorder {
            self.visit(node);
        }
        self.traverse(node.right.as_deref());
        if self.order == TraversalOrder::Postorder {
            self.visit(node);
        }
    }
}

impl StepGenerator for TreeTraversal {
    type Input = BinarySearchTree;
    type Params = TraversalOrder;
    type Step = TreeStep;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo::new(
            Self::ID,
            "Tree Traversal",
            AlgorithmCategory::Tree,
            AlgorithmComplexity::new("O(n)", "O(n)", "O(n)", "O(h)"),
        )
    }

    fn generate(
        &self,
        tree: &BinarySearchTree,
        order: &TraversalOrder,
    ) -> Result<StepSequence<TreeStep>, AlgorithmError> {
        let mut walk = Walk {
            order: *order,
            visited: Vec::with_capacity(tree.len()),
            steps: Vec::with_capacity(tree.len() + 1),
        };
        walk.traverse(tree.root());

        walk.steps.push(TreeStep {
            visited: walk.visited,
            current: None,
            description: "Finished traversal".to_owned(),
        });
        debug!("{} traversal generated {} steps", order, walk.steps.len());
        Ok(StepSequence::new(walk.steps))
    }
}

/// Descent from the root looking for a key
#[derive(Debug, Clone, Copy, Default)]
pub struct BstSearch;

impl BstSearch {
    pub const ID: &'static str = "bst_search";
}

impl StepGenerator for BstSearch {
    type Input = BinarySearchTree;
    type Params = i64;
    type Step = TreeStep;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo::new(
            Self::ID,
            "Binary Search Tree",
            AlgorithmCategory::Tree,
            AlgorithmComplexity::new("O(1)", "O(log n)", "O(n)", "O(1)"),
        )
    }

    fn generate(&self, tree: &BinarySearchTree, target: &i64) -> Result<StepSequence<TreeStep>, AlgorithmError> {
        let target = *target;
        let mut steps = Vec::new();

        let Some(mut node) = tree.root() else {
            steps.push(TreeStep {
                visited: Vec::new(),
                current: None,
                description: format!("Tree is empty. {target} not found."),
            });
            return Ok(StepSequence::new(steps));
        };

        loop {
            steps.push(TreeStep {
                visited: Vec::new(),
                current: Some(node.id),
                description: format!("Checking node {}", node.value),
            });

            if node.value == target {
                steps.push(TreeStep {
                    visited: vec![node.id],
                    current: Some(node.id),
                    description: format!("Found {target}!"),
                });
                break;
            }

            let (child, relation, side) = if target < node.value {
                (node.left.as_deref(), '<', "left")
            } else {
                (node.right.as_deref(), '>', "right")
            };
            match child {
                Some(next) => node = next,
                None => {
                    steps.push(TreeStep {
                        visited: Vec::new(),
                        current: Some(node.id),
                        description: format!(
                            "{target} {relation} {}, but no {side} child. Not found.",
                            node.value
                        ),
                    });
                    break;
                }
            }
        }

        debug!("BST search for {} generated {} steps", target, steps.len());
        Ok(StepSequence::new(steps))
    }
}
