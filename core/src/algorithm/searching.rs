//! Search step generators
//!
//! Searches reuse [`ArrayStep`]: `comparing` holds the probed index,
//! `swapping` the live `[left, right]` range of binary search, and the
//! terminal step's `sorted` holds the found index (empty when absent).
//!
//! Binary, jump and interpolation search expect an ascending array; the
//! dataset provider sorts their input before handing it over.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::step::{ArrayStep, ArrayTrace, StepSequence};
use crate::algorithm::traits::{
    parse_variant, AlgorithmCategory, AlgorithmComplexity, AlgorithmError, AlgorithmInfo,
    StepGenerator,
};

/// Search algorithms available to the visualizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    Linear,
    Binary,
    Jump,
    Interpolation,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 4] = [Self::Linear, Self::Binary, Self::Jump, Self::Interpolation];

    pub fn id(self) -> &'static str {
        match self {
            Self::Linear => "linear_search",
            Self::Binary => "binary_search",
            Self::Jump => "jump_search",
            Self::Interpolation => "interpolation_search",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "Linear Search",
            Self::Binary => "Binary Search",
            Self::Jump => "Jump Search",
            Self::Interpolation => "Interpolation Search",
        }
    }

    /// Whether the input has to be sorted ascending
    pub fn requires_sorted_input(self) -> bool {
        !matches!(self, Self::Linear)
    }

    fn complexity(self) -> AlgorithmComplexity {
        match self {
            Self::Linear => AlgorithmComplexity::new("O(1)", "O(n)", "O(n)", "O(1)"),
            Self::Binary => AlgorithmComplexity::new("O(1)", "O(log n)", "O(log n)", "O(1)"),
            Self::Jump => AlgorithmComplexity::new("O(1)", "O(sqrt n)", "O(sqrt n)", "O(1)"),
            Self::Interpolation => AlgorithmComplexity::new("O(1)", "O(log log n)", "O(n)", "O(1)"),
        }
    }

    pub fn steps(self, array: &[i64], target: i64) -> Vec<ArrayStep> {
        let trace = ArrayTrace::new(array);
        match self {
            Self::Linear => linear_search(trace, target),
            Self::Binary => binary_search(trace, target),
            Self::Jump => jump_search(trace, target),
            Self::Interpolation => interpolation_search(trace, target),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL, Self::id)
    }
}

impl StepGenerator for SearchAlgorithm {
    type Input = [i64];
    type Params = i64;
    type Step = ArrayStep;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo::new(self.id(), self.name(), AlgorithmCategory::Searching, self.complexity())
    }

    fn generate(&self, input: &[i64], target: &i64) -> Result<StepSequence<ArrayStep>, AlgorithmError> {
        let steps = self.steps(input, *target);
        let found = steps.last().and_then(|s| s.sorted.first().copied());
        log::debug!(
            "{} for {} generated {} steps (found at {:?})",
            self.name(),
            target,
            steps.len(),
            found
        );
        Ok(StepSequence::new(steps))
    }
}

fn probe(t: &mut ArrayTrace, index: usize) {
    t.compare(vec![index], Vec::new());
}

fn linear_search(mut t: ArrayTrace, target: i64) -> Vec<ArrayStep> {
    for i in 0..t.array.len() {
        probe(&mut t, i);
        if t.array[i] == target {
            return t.finish_search(Some(i));
        }
    }
    t.finish_search(None)
}

fn binary_search(mut t: ArrayTrace, target: i64) -> Vec<ArrayStep> {
    // Half-open [left, right) keeps the bounds unsigned.
    let (mut left, mut right) = (0, t.array.len());
    while left < right {
        let mid = left + (right - left - 1) / 2;
        t.record(vec![mid], (left..right).collect(), Vec::new());

        let value = t.array[mid];
        if value == target {
            return t.finish_search(Some(mid));
        }
        if value < target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    t.finish_search(None)
}

fn jump_search(mut t: ArrayTrace, target: i64) -> Vec<ArrayStep> {
    let n = t.array.len();
    if n == 0 {
        return t.finish_search(None);
    }
    let block = ((n as f64).sqrt() as usize).max(1);

    // Jump ahead block by block while the block's last element is too small.
    let mut prev = 0;
    let mut next = block;
    while t.array[next.min(n) - 1] < target {
        probe(&mut t, next.min(n) - 1);
        prev = next;
        next += block;
        if prev >= n {
            return t.finish_search(None);
        }
    }

    // Linear scan inside the block.
    while t.array[prev] < target {
        probe(&mut t, prev);
        prev += 1;
        if prev == next.min(n) {
            return t.finish_search(None);
        }
    }

    probe(&mut t, prev);
    let found = (t.array[prev] == target).then_some(prev);
    t.finish_search(found)
}

fn interpolation_search(mut t: ArrayTrace, target: i64) -> Vec<ArrayStep> {
    let n = t.array.len();
    if n == 0 {
        return t.finish_search(None);
    }
    let (mut low, mut high) = (0usize, n - 1);

    while low <= high && target >= t.array[low] && target <= t.array[high] {
        if low == high {
            probe(&mut t, low);
            let found = (t.array[low] == target).then_some(low);
            return t.finish_search(found);
        }

        let (lo, hi) = (t.array[low], t.array[high]);
        let pos = if hi == lo {
            low
        } else {
            // Differences of extreme keys overflow i64
            let offset = (high - low) as i128 * (i128::from(target) - i128::from(lo))
                / (i128::from(hi) - i128::from(lo));
            low + offset as usize
        };

        probe(&mut t, pos);
        let value = t.array[pos];
        if value == target {
            return t.finish_search(Some(pos));
        }
        if value < target {
            low = pos + 1;
        } else if pos == 0 {
            break;
        } else {
            high = pos - 1;
        }
    }
    t.finish_search(None)
}
