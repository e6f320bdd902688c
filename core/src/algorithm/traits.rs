//! Core algorithm trait definitions for the Algoscope visualizer
//!
//! This module establishes the contract every visualized algorithm honours:
//! a pure step generator that turns an input dataset plus algorithm-specific
//! parameters into an immutable, replayable [`StepSequence`].
//!
//! # Key Design Principles
//! - Generators are deterministic for identical input and parameters
//! - Generators never mutate caller-owned data
//! - Every accepted input yields at least one (terminal) step
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::step::{Playable, StepSequence};

/// Universal algorithm identifier for type-safe dispatch
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AlgorithmId(String);

impl AlgorithmId {
    pub fn new(name: &str) -> Self {
        Self(name.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Node identifier ensuring type safety and preventing mixing with other numeric types
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error types for algorithm operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlgorithmError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid node: {0}")]
    InvalidNode(NodeId),

    #[error("Node {0} already exists")]
    DuplicateNode(NodeId),

    #[error("Edge {0} - {1} already exists")]
    DuplicateEdge(NodeId, NodeId),

    #[error("Key {0} is already present in the tree")]
    DuplicateKey(i64),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Broad family an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmCategory {
    Sorting,
    Searching,
    Graph,
    Tree,
    Backtracking,
    DynamicProgramming,
    DataStructure,
}

impl Display for AlgorithmCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Sorting => "sorting",
            Self::Searching => "searching",
            Self::Graph => "graph",
            Self::Tree => "tree",
            Self::Backtracking => "backtracking",
            Self::DynamicProgramming => "dynamic programming",
            Self::DataStructure => "data structure",
        };
        f.write_str(label)
    }
}

/// Algorithm complexity information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmComplexity {
    pub time_complexity: String,
    pub space_complexity: String,
    pub best_case: String,
    pub average_case: String,
    pub worst_case: String,
}

impl AlgorithmComplexity {
    /// Builds a complexity record; `time_complexity` mirrors the average case
    pub fn new(best: &str, average: &str, worst: &str, space: &str) -> Self {
        Self {
            time_complexity: average.to_owned(),
            space_complexity: space.to_owned(),
            best_case: best.to_owned(),
            average_case: average.to_owned(),
            worst_case: worst.to_owned(),
        }
    }
}

/// Descriptive record exposed by every visualized algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    pub id: AlgorithmId,
    pub name: String,
    pub category: AlgorithmCategory,
    pub complexity: AlgorithmComplexity,
}

impl AlgorithmInfo {
    pub fn new(
        id: &str,
        name: &str,
        category: AlgorithmCategory,
        complexity: AlgorithmComplexity,
    ) -> Self {
        Self {
            id: AlgorithmId::new(id),
            name: name.to_owned(),
            category,
            complexity,
        }
    }
}

/// Pure step generator
///
/// # Invariants
/// - Deterministic for identical `input` and `params`
/// - No I/O and no mutation of `input`
/// - At least one step for every input that is accepted
pub trait StepGenerator: Debug + Send + Sync {
    /// Dataset the generator consumes (borrowed form)
    type Input: ?Sized + ToOwned;

    /// Algorithm-specific parameters (search target, start node, traversal order)
    type Params: Clone + Debug + Send + Sync;

    /// Snapshot type emitted per visual transition
    type Step: Playable;

    /// Returns the descriptive record of the algorithm
    fn info(&self) -> AlgorithmInfo;

    /// Produces the complete step sequence for one run
    fn generate(
        &self,
        input: &Self::Input,
        params: &Self::Params,
    ) -> Result<StepSequence<Self::Step>, AlgorithmError>;
}

/// Parses a catalog identifier into one of a fixed set of variants
pub(crate) fn parse_variant<T: Copy>(
    id: &str,
    variants: &[T],
    id_of: impl Fn(T) -> &'static str,
) -> Result<T, AlgorithmError> {
    let wanted = id.trim().to_ascii_lowercase();
    variants
        .iter()
        .copied()
        .find(|variant| id_of(*variant) == wanted)
        .ok_or(AlgorithmError::UnknownAlgorithm(wanted))
}

/// Traversal order for tree visits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    #[default]
    Preorder,
    Inorder,
    Postorder,
}

impl FromStr for TraversalOrder {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preorder" => Ok(Self::Preorder),
            "inorder" => Ok(Self::Inorder),
            "postorder" => Ok(Self::Postorder),
            other => Err(AlgorithmError::InvalidParameter {
                name: "order".to_owned(),
                reason: format!("expected preorder, inorder or postorder, got '{other}'"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_id_uniqueness() {
        let id1 = AlgorithmId::new("bubble_sort");
        let id2 = AlgorithmId::new("heap_sort");
        let id3 = AlgorithmId::new("bubble_sort");

        assert_ne!(id1, id2);
        assert_eq!(id1, id3);
        assert_eq!(id1.to_string(), "bubble_sort");
    }

    #[test]
    fn test_node_id_type_safety() {
        let node1 = NodeId(42);
        let node2 = NodeId(42);
        let node3 = NodeId(43);

        assert_eq!(node1, node2);
        assert_ne!(node1, node3);
        assert!(node1 < node3);
        assert_eq!(node1.as_usize(), 42);
        assert_eq!(node3.to_string(), "43");
    }

    #[test]
    fn test_traversal_order_parsing() {
        assert_eq!("Inorder".parse::<TraversalOrder>(), Ok(TraversalOrder::Inorder));
        assert_eq!(" postorder ".parse::<TraversalOrder>(), Ok(TraversalOrder::Postorder));
        assert!(matches!(
            "levelorder".parse::<TraversalOrder>(),
            Err(AlgorithmError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_parse_variant_reports_unknown_id() {
        let variants = [1u8, 2u8];
        let id_of = |v: u8| if v == 1 { "one" } else { "two" };

        assert_eq!(parse_variant("TWO", &variants, id_of), Ok(2));
        assert_eq!(
            parse_variant("three", &variants, id_of),
            Err(AlgorithmError::UnknownAlgorithm("three".to_owned()))
        );
    }
}
