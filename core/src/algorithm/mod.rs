//! Algoscope algorithm framework
//!
//! Step generators for every visualized algorithm family, the step and
//! sequence model they emit, and the catalog that names them.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod traits;
pub mod step;
pub mod sorting;
pub mod searching;
pub mod path_finding;
pub mod graph;
pub mod tree;
pub mod backtracking;
pub mod dynamic_programming;
pub mod catalog;

pub use self::traits::*;
pub use self::step::*;
pub use self::sorting::SortingAlgorithm;
pub use self::searching::SearchAlgorithm;
pub use self::path_finding::{BreadthFirstSearch, DepthFirstSearch, Dijkstra};
pub use self::graph::{GraphAlgorithm, Prim};
pub use self::tree::{BstSearch, TreeTraversal};
pub use self::backtracking::{NQueensError, NQueensSolver, NQueensVisualizer, QueensEvent, SolverStatus};
pub use self::dynamic_programming::{Item, Knapsack, KnapsackProblem, KnapsackStep};
