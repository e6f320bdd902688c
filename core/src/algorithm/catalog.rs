//! Registry of every visualized algorithm
//!
//! The navigation shell lists entries from [`all`] and resolves routes with
//! [`find`]. Entries are ordered by category, then as presented to learners.

use crate::algorithm::backtracking;
use crate::algorithm::dynamic_programming::Knapsack;
use crate::algorithm::graph::GraphAlgorithm;
use crate::algorithm::searching::SearchAlgorithm;
use crate::algorithm::sorting::SortingAlgorithm;
use crate::algorithm::traits::{
    AlgorithmCategory, AlgorithmComplexity, AlgorithmError, AlgorithmInfo, StepGenerator,
};
use crate::algorithm::tree::{BstSearch, TreeTraversal};

fn data_structures() -> [AlgorithmInfo; 2] {
    let constant = || AlgorithmComplexity::new("O(1)", "O(1)", "O(1)", "O(n)");
    [
        AlgorithmInfo::new("stack", "Stack", AlgorithmCategory::DataStructure, constant()),
        AlgorithmInfo::new("queue", "Queue", AlgorithmCategory::DataStructure, constant()),
    ]
}

/// Every catalog entry
pub fn all() -> Vec<AlgorithmInfo> {
    let mut entries = Vec::new();
    entries.extend(SortingAlgorithm::ALL.iter().map(StepGenerator::info));
    entries.extend(SearchAlgorithm::ALL.iter().map(StepGenerator::info));
    entries.extend(GraphAlgorithm::ALL.iter().map(StepGenerator::info));
    entries.push(BstSearch.info());
    entries.push(TreeTraversal.info());
    entries.push(backtracking::info());
    entries.push(Knapsack.info());
    entries.extend(data_structures());
    entries
}

/// Looks an entry up by id, case-insensitively
pub fn find(id: &str) -> Result<AlgorithmInfo, AlgorithmError> {
    let wanted = id.trim().to_ascii_lowercase();
    all()
        .into_iter()
        .find(|info| info.id.as_str() == wanted)
        .ok_or(AlgorithmError::UnknownAlgorithm(wanted))
}

pub fn by_category(category: AlgorithmCategory) -> Vec<AlgorithmInfo> {
    all().into_iter().filter(|info| info.category == category).collect()
}
