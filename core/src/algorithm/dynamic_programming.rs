//! 0/1 knapsack by bottom-up dynamic programming
//!
//! `table[i][w]` is the best value using the first `i` items within weight
//! `w`. The generator emits one step per filled cell (row by row), then one
//! per backtracking decision from the bottom-right cell, then a terminal
//! summary step.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::step::{Playable, StepSequence};
use crate::algorithm::traits::{
    AlgorithmCategory, AlgorithmComplexity, AlgorithmError, AlgorithmInfo, StepGenerator,
};

/// Item that can be packed at most once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub weight: usize,
    pub value: u64,
}

impl Item {
    pub fn new(id: u32, name: &str, weight: usize, value: u64) -> Self {
        Self {
            id,
            name: name.to_owned(),
            weight,
            value,
        }
    }
}

/// Knapsack instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnapsackProblem {
    pub capacity: usize,
    pub items: Vec<Item>,
}

impl KnapsackProblem {
    pub fn new(capacity: usize, items: Vec<Item>) -> Self {
        Self { capacity, items }
    }

    /// Capacity 7 with Apple, Laptop, Guitar and Gold
    pub fn classic() -> Self {
        Self::new(
            7,
            vec![
                Item::new(1, "Apple", 1, 1),
                Item::new(2, "Laptop", 3, 4),
                Item::new(3, "Guitar", 4, 5),
                Item::new(4, "Gold", 5, 7),
            ],
        )
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

/// Which part of the run a step belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnapsackPhase {
    #[default]
    Filling,
    Backtracking,
    Done,
}

/// Values compared while filling a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChoice {
    /// `None` when the item is heavier than the column's capacity
    pub include: Option<u64>,
    pub exclude: u64,
}

/// Snapshot of the knapsack run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnapsackStep {
    pub table: Vec<Vec<u64>>,
    /// `(item row, capacity column)` under consideration
    pub cell: Option<(usize, usize)>,
    pub phase: KnapsackPhase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice: Option<CellChoice>,
    pub selected: Vec<u32>,
    pub description: String,
}

/// Rendering state of the knapsack visualizer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnapsackView {
    pub table: Vec<Vec<u64>>,
    pub cell: Option<(usize, usize)>,
    pub phase: KnapsackPhase,
    pub choice: Option<CellChoice>,
    pub selected: Vec<u32>,
    pub description: String,
}

impl Playable for KnapsackStep {
    type View = KnapsackView;

    fn project(&self, view: &mut KnapsackView) {
        view.table.clone_from(&self.table);
        view.cell = self.cell;
        view.phase = self.phase;
        view.choice = self.choice;
        view.selected.clone_from(&self.selected);
        view.description.clone_from(&self.description);
    }

    /// A reset shows the empty table of the same shape
    fn rewind(first: Option<&Self>) -> KnapsackView {
        let table = first
            .map(|step| step.table.iter().map(|row| vec![0; row.len()]).collect())
            .unwrap_or_default();
        KnapsackView {
            table,
            description: "Ready to solve 0/1 Knapsack.".to_owned(),
            ..KnapsackView::default()
        }
    }
}

/// Bottom-up 0/1 knapsack generator
#[derive(Debug, Clone, Copy, Default)]
pub struct Knapsack;

impl Knapsack {
    pub const ID: &'static str = "knapsack";

    /// Best value and the ids of the chosen items, without steps
    pub fn solve(problem: &KnapsackProblem) -> (u64, Vec<u32>) {
        let table = fill(problem, |_, _, _, _| {});
        let selected = select(problem, &table, |_, _, _, _| {});
        let best = table
            .last()
            .and_then(|row| row.get(problem.capacity))
            .copied()
            .unwrap_or_default();
        (best, selected)
    }
}

/// Fills the table, reporting each cell as `(table, i, w, choice)`
fn fill(
    problem: &KnapsackProblem,
    mut on_cell: impl FnMut(&[Vec<u64>], usize, usize, CellChoice),
) -> Vec<Vec<u64>> {
    let n = problem.items.len();
    let capacity = problem.capacity;
    let mut table = vec![vec![0u64; capacity + 1]; n + 1];

    for i in 1..=n {
        let item = &problem.items[i - 1];
        // Column 0 is never shown, but weightless items still count there
        table[i][0] = table[i - 1][0] + if item.weight == 0 { item.value } else { 0 };
        for w in 1..=capacity {
            let exclude = table[i - 1][w];
            let include = (item.weight <= w).then(|| item.value + table[i - 1][w - item.weight]);
            table[i][w] = include.map_or(exclude, |inc| inc.max(exclude));
            on_cell(&table, i, w, CellChoice { include, exclude });
        }
    }
    table
}

/// Walks back from `table[n][capacity]`, reporting `(i, w, taken, selected)`
fn select(
    problem: &KnapsackProblem,
    table: &[Vec<u64>],
    mut on_decision: impl FnMut(usize, usize, bool, &[u32]),
) -> Vec<u32> {
    let mut w = problem.capacity;
    let mut selected = Vec::new();
    for i in (1..=problem.items.len()).rev() {
        let item = &problem.items[i - 1];
        let taken = table[i][w] != table[i - 1][w];
        if taken {
            selected.push(item.id);
        }
        on_decision(i, w, taken, &selected);
        if taken {
            w -= item.weight;
        }
    }
    selected
}

impl StepGenerator for Knapsack {
    type Input = KnapsackProblem;
    type Params = ();
    type Step = KnapsackStep;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo::new(
            Self::ID,
            "0/1 Knapsack",
            AlgorithmCategory::DynamicProgramming,
            AlgorithmComplexity::new("O(nW)", "O(nW)", "O(nW)", "O(nW)"),
        )
    }

    fn generate(&self, problem: &KnapsackProblem, _params: &()) -> Result<StepSequence<KnapsackStep>, AlgorithmError> {
        let mut steps = Vec::new();

        let table = fill(problem, |table, i, w, choice| {
            let item = &problem.items[i - 1];
            let description = match choice.include {
                Some(include) => format!(
                    "Checking {}: Include ({}) vs Exclude ({})",
                    item.name, include, choice.exclude
                ),
                None => format!(
                    "Checking {}: Too heavy ({} > {}), skipping.",
                    item.name, item.weight, w
                ),
            };
            steps.push(KnapsackStep {
                table: table.to_vec(),
                cell: Some((i, w)),
                phase: KnapsackPhase::Filling,
                choice: Some(choice),
                selected: Vec::new(),
                description,
            });
        });

        let selected = select(problem, &table, |i, w, taken, selected| {
            let item = &problem.items[i - 1];
            let description = if taken {
                format!("{} is part of the best packing at capacity {}", item.name, w)
            } else {
                format!("{} is not needed at capacity {}", item.name, w)
            };
            steps.push(KnapsackStep {
                table: table.clone(),
                cell: Some((i, w)),
                phase: KnapsackPhase::Backtracking,
                choice: None,
                selected: selected.to_vec(),
                description,
            });
        });

        let best = table[problem.items.len()][problem.capacity];
        steps.push(KnapsackStep {
            description: format!("Max Value: {}. Items selected: {}", best, selected.len()),
            table,
            cell: None,
            phase: KnapsackPhase::Done,
            choice: None,
            selected,
        });

        debug!("Knapsack with capacity {} generated {} steps", problem.capacity, steps.len());
        Ok(StepSequence::new(steps))
    }
}
