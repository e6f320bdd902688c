//! Data structures rendered by the visualizers
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod graph;
pub mod tree;
pub mod bounded;

pub use self::bounded::{BoundedQueue, BoundedStack, ContainerError, ContainerKind};
pub use self::graph::{Edge, Graph, Node, Position};
pub use self::tree::{BinarySearchTree, TreeNode};
