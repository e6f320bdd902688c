//! Comparison sort step generators
//!
//! Each sort works on a private copy of the input and records one
//! [`ArrayStep`] per comparison and per swap or overwrite. The terminal step
//! always marks every index as sorted.
//!
//! # Determinism
//! - Quicksort partitions around the last element (Lomuto)
//! - Mergesort is top-down with a stable merge (`<=` favours the left run)
//! - Shell sort halves its gap starting from `n / 2`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::step::{ArrayStep, ArrayTrace, StepSequence};
use crate::algorithm::traits::{
    parse_variant, AlgorithmCategory, AlgorithmComplexity, AlgorithmError, AlgorithmInfo,
    StepGenerator,
};

/// Sorting algorithms available to the visualizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortingAlgorithm {
    Bubble,
    Insertion,
    Selection,
    Shell,
    CocktailShaker,
    Quick,
    Merge,
    Heap,
}

impl SortingAlgorithm {
    pub const ALL: [SortingAlgorithm; 8] = [
        Self::Bubble,
        Self::Insertion,
        Self::Selection,
        Self::Shell,
        Self::CocktailShaker,
        Self::Quick,
        Self::Merge,
        Self::Heap,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Bubble => "bubble_sort",
            Self::Insertion => "insertion_sort",
            Self::Selection => "selection_sort",
            Self::Shell => "shell_sort",
            Self::CocktailShaker => "cocktail_shaker_sort",
            Self::Quick => "quick_sort",
            Self::Merge => "merge_sort",
            Self::Heap => "heap_sort",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Selection => "Selection Sort",
            Self::Shell => "Shell Sort",
            Self::CocktailShaker => "Cocktail Shaker Sort",
            Self::Quick => "Quick Sort",
            Self::Merge => "Merge Sort",
            Self::Heap => "Heap Sort",
        }
    }

    fn complexity(self) -> AlgorithmComplexity {
        match self {
            Self::Bubble | Self::Insertion | Self::CocktailShaker => {
                AlgorithmComplexity::new("O(n)", "O(n^2)", "O(n^2)", "O(1)")
            }
            Self::Selection => AlgorithmComplexity::new("O(n^2)", "O(n^2)", "O(n^2)", "O(1)"),
            Self::Shell => AlgorithmComplexity::new("O(n log n)", "O(n^1.5)", "O(n^2)", "O(1)"),
            Self::Quick => AlgorithmComplexity::new("O(n log n)", "O(n log n)", "O(n^2)", "O(log n)"),
            Self::Merge => AlgorithmComplexity::new("O(n log n)", "O(n log n)", "O(n log n)", "O(n)"),
            Self::Heap => AlgorithmComplexity::new("O(n log n)", "O(n log n)", "O(n log n)", "O(1)"),
        }
    }

    /// Generates the steps for `input` without going through the trait
    pub fn steps(self, input: &[i64]) -> Vec<ArrayStep> {
        let trace = ArrayTrace::new(input);
        match self {
            Self::Bubble => bubble_sort(trace),
            Self::Insertion => insertion_sort(trace),
            Self::Selection => selection_sort(trace),
            Self::Shell => shell_sort(trace),
            Self::CocktailShaker => cocktail_shaker_sort(trace),
            Self::Quick => quick_sort(trace),
            Self::Merge => merge_sort(trace),
            Self::Heap => heap_sort(trace),
        }
    }
}

impl fmt::Display for SortingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortingAlgorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL, Self::id)
    }
}

impl StepGenerator for SortingAlgorithm {
    type Input = [i64];
    type Params = ();
    type Step = ArrayStep;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo::new(self.id(), self.name(), AlgorithmCategory::Sorting, self.complexity())
    }

    fn generate(&self, input: &[i64], _params: &()) -> Result<StepSequence<ArrayStep>, AlgorithmError> {
        let steps = self.steps(input);
        log::debug!("{} generated {} steps for {} elements", self.name(), steps.len(), input.len());
        Ok(StepSequence::new(steps))
    }
}

/// Indices `[from, to)` as a sorted-set snapshot
fn span(from: usize, to: usize) -> Vec<usize> {
    (from..to).collect()
}

fn bubble_sort(mut t: ArrayTrace) -> Vec<ArrayStep> {
    let n = t.array.len();
    for i in 0..n {
        // The last `i` positions already hold their final values.
        let settled: Vec<usize> = (0..i).map(|k| n - 1 - k).collect();
        for j in 0..n.saturating_sub(i + 1) {
            t.compare(vec![j, j + 1], settled.clone());
            if t.array[j] > t.array[j + 1] {
                t.array.swap(j, j + 1);
                t.mark(vec![j, j + 1], settled.clone());
            }
        }
    }
    t.finish_sorted()
}

fn insertion_sort(mut t: ArrayTrace) -> Vec<ArrayStep> {
    let n = t.array.len();
    for i in 1..n {
        let key = t.array[i];
        t.compare(vec![i], span(0, i));

        let mut j = i;
        while j > 0 && t.array[j - 1] > key {
            t.compare(vec![j - 1, j], span(0, i));
            t.array[j] = t.array[j - 1];
            t.mark(vec![j], span(0, i));
            j -= 1;
        }
        t.array[j] = key;
        t.mark(vec![j], span(0, i + 1));
    }
    t.finish_sorted()
}

fn selection_sort(mut t: ArrayTrace) -> Vec<ArrayStep> {
    let n = t.array.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            t.compare(vec![min_idx, j], span(0, i));
            if t.array[j] < t.array[min_idx] {
                min_idx = j;
                t.compare(vec![min_idx], span(0, i));
            }
        }
        if min_idx != i {
            t.array.swap(i, min_idx);
            t.mark(vec![i, min_idx], span(0, i));
        }
    }
    t.finish_sorted()
}

fn shell_sort(mut t: ArrayTrace) -> Vec<ArrayStep> {
    let n = t.array.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let temp = t.array[i];
            t.compare(vec![i, i - gap], Vec::new());

            let mut j = i;
            while j >= gap && t.array[j - gap] > temp {
                t.record(vec![j, j - gap], vec![j, j - gap], Vec::new());
                t.array[j] = t.array[j - gap];
                t.record(Vec::new(), Vec::new(), Vec::new());
                j -= gap;
            }
            t.array[j] = temp;
            t.mark(vec![j], Vec::new());
        }
        gap /= 2;
    }
    t.finish_sorted()
}

fn cocktail_shaker_sort(mut t: ArrayTrace) -> Vec<ArrayStep> {
    let n = t.array.len();
    let mut start = 0;
    let mut end = n;
    let mut settled = Vec::new();

    loop {
        let mut swapped = false;
        for i in start..end.saturating_sub(1) {
            t.compare(vec![i, i + 1], settled.clone());
            if t.array[i] > t.array[i + 1] {
                t.mark(vec![i, i + 1], settled.clone());
                t.array.swap(i, i + 1);
                t.record(Vec::new(), Vec::new(), settled.clone());
                swapped = true;
            }
        }
        if !swapped {
            break;
        }

        end -= 1;
        settled.push(end);

        swapped = false;
        for i in (start + 1..end).rev() {
            t.compare(vec![i, i - 1], settled.clone());
            if t.array[i] < t.array[i - 1] {
                t.mark(vec![i, i - 1], settled.clone());
                t.array.swap(i, i - 1);
                t.record(Vec::new(), Vec::new(), settled.clone());
                swapped = true;
            }
        }
        settled.push(start);
        start += 1;
        if !swapped {
            break;
        }
    }
    t.finish_sorted()
}

fn quick_sort(mut t: ArrayTrace) -> Vec<ArrayStep> {
    let n = t.array.len();
    if n > 1 {
        quick_sort_range(&mut t, 0, n - 1);
    }
    t.finish_sorted()
}

fn quick_sort_range(t: &mut ArrayTrace, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let pivot = partition(t, low, high);
    if pivot > low {
        quick_sort_range(t, low, pivot - 1);
    }
    quick_sort_range(t, pivot + 1, high);
}

/// Lomuto partition around `array[high]`; returns the pivot's final index
fn partition(t: &mut ArrayTrace, low: usize, high: usize) -> usize {
    let pivot = t.array[high];
    let mut store = low;
    for j in low..high {
        t.compare(vec![j, high], Vec::new());
        if t.array[j] < pivot {
            t.array.swap(store, j);
            t.mark(vec![store, j], Vec::new());
            store += 1;
        }
    }
    t.array.swap(store, high);
    t.mark(vec![store, high], Vec::new());
    store
}

fn merge_sort(mut t: ArrayTrace) -> Vec<ArrayStep> {
    let n = t.array.len();
    if n > 1 {
        merge_sort_range(&mut t, 0, n - 1);
    }
    t.finish_sorted()
}

fn merge_sort_range(t: &mut ArrayTrace, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    merge_sort_range(t, left, mid);
    merge_sort_range(t, mid + 1, right);
    merge(t, left, mid, right);
}

fn merge(t: &mut ArrayTrace, left: usize, mid: usize, right: usize) {
    let left_run = t.array[left..=mid].to_vec();
    let right_run = t.array[mid + 1..=right].to_vec();
    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        t.compare(vec![left + i, mid + 1 + j], Vec::new());
        if left_run[i] <= right_run[j] {
            t.array[k] = left_run[i];
            i += 1;
        } else {
            t.array[k] = right_run[j];
            j += 1;
        }
        t.mark(vec![k], Vec::new());
        k += 1;
    }
    for &value in left_run[i..].iter().chain(&right_run[j..]) {
        t.array[k] = value;
        t.mark(vec![k], Vec::new());
        k += 1;
    }
}

fn heap_sort(mut t: ArrayTrace) -> Vec<ArrayStep> {
    let n = t.array.len();
    for i in (0..n / 2).rev() {
        sift_down(&mut t, n, i, &[]);
    }

    let mut settled = Vec::new();
    for end in (1..n).rev() {
        t.mark(vec![0, end], settled.clone());
        t.array.swap(0, end);
        t.record(Vec::new(), Vec::new(), settled.clone());
        settled.push(end);
        sift_down(&mut t, end, 0, &settled);
    }
    t.finish_sorted()
}

/// Restores the max-heap property below `root` within `array[..len]`
fn sift_down(t: &mut ArrayTrace, len: usize, root: usize, settled: &[usize]) {
    let mut root = root;
    loop {
        let mut largest = root;
        for child in [2 * root + 1, 2 * root + 2] {
            if child < len {
                t.compare(vec![largest, child], settled.to_vec());
                if t.array[child] > t.array[largest] {
                    largest = child;
                }
            }
        }
        if largest == root {
            return;
        }
        t.mark(vec![root, largest], settled.to_vec());
        t.array.swap(root, largest);
        t.record(Vec::new(), Vec::new(), settled.to_vec());
        root = largest;
    }
}
