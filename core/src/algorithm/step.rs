//! Immutable step snapshots and step sequences
//!
//! Every algorithm run is materialized as an ordered, finite sequence of
//! steps. Each step owns a full snapshot of the visualization-relevant state
//! at that point in time; nothing in a step aliases a buffer that keeps
//! mutating, so sequences can be replayed in any order.
//!
//! The [`Playable`] trait ties a step type to the view a renderer consumes and
//! describes how a step is projected onto that view.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::ops::Index;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::algorithm::traits::NodeId;
use crate::data_structures::graph::Edge;

/// Step type that can be replayed by a playback controller
pub trait Playable: Clone + Debug + Send + Sync + 'static {
    /// Rendering state derived from the step at the cursor
    type View: Clone + Debug + Default + PartialEq + Send + Sync + 'static;

    /// Projects this step onto the view
    fn project(&self, view: &mut Self::View);

    /// View shown after an explicit reset
    fn rewind(_first: Option<&Self>) -> Self::View {
        Self::View::default()
    }
}

/// Ordered, immutable sequence of steps for one algorithm run
#[derive(Debug, PartialEq)]
pub struct StepSequence<S> {
    steps: Arc<[S]>,
}

impl<S> StepSequence<S> {
    pub fn new(steps: Vec<S>) -> Self {
        Self { steps: steps.into() }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&S> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    /// Index of the terminal step, `None` for an empty sequence
    pub fn last_index(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.steps
    }
}

impl<S: Serialize> StepSequence<S> {
    /// Serializes the sequence as a JSON array for the rendering layer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<S> Clone for StepSequence<S> {
    fn clone(&self) -> Self {
        Self {
            steps: Arc::clone(&self.steps),
        }
    }
}

impl<S> Default for StepSequence<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S> From<Vec<S>> for StepSequence<S> {
    fn from(steps: Vec<S>) -> Self {
        Self::new(steps)
    }
}

impl<S> FromIterator<S> for StepSequence<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<S> Index<usize> for StepSequence<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.steps[index]
    }
}

impl<'a, S> IntoIterator for &'a StepSequence<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl<S: Serialize> Serialize for StepSequence<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.collect_seq(self.steps.iter())
    }
}

impl<'de, S: Deserialize<'de>> Deserialize<'de> for StepSequence<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<S>::deserialize(deserializer).map(Self::new)
    }
}

// ---------------------------------------------------------------------------
// Array steps (sorting and searching)
// ---------------------------------------------------------------------------

/// Snapshot of an array algorithm
///
/// For searches `sorted` holds the found index and `swapping` the live search
/// range (binary search).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayStep {
    pub array: Vec<i64>,
    pub comparing: Vec<usize>,
    pub swapping: Vec<usize>,
    pub sorted: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Rendering class of a single array element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    Sorted,
    Swapping,
    Comparing,
    Idle,
}

impl ArrayStep {
    /// Resolves overlapping index sets: sorted > swapping > comparing
    pub fn highlight(&self, index: usize) -> Highlight {
        if self.sorted.contains(&index) {
            Highlight::Sorted
        } else if self.swapping.contains(&index) {
            Highlight::Swapping
        } else if self.comparing.contains(&index) {
            Highlight::Comparing
        } else {
            Highlight::Idle
        }
    }

    /// Every index set refers to a valid position of `array`
    pub fn indices_valid(&self) -> bool {
        let len = self.array.len();
        self.comparing
            .iter()
            .chain(&self.swapping)
            .chain(&self.sorted)
            .all(|&i| i < len)
    }
}

/// Rendering state of an array visualizer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayView {
    pub array: Vec<i64>,
    pub comparing: Vec<usize>,
    pub swapping: Vec<usize>,
    pub sorted: Vec<usize>,
}

impl Playable for ArrayStep {
    type View = ArrayView;

    fn project(&self, view: &mut ArrayView) {
        view.array.clone_from(&self.array);
        view.comparing.clone_from(&self.comparing);
        view.swapping.clone_from(&self.swapping);
        view.sorted.clone_from(&self.sorted);
    }

    /// Sorting mutates the visible array, so a reset restores the first snapshot
    fn rewind(first: Option<&Self>) -> ArrayView {
        ArrayView {
            array: first.map(|step| step.array.clone()).unwrap_or_default(),
            ..ArrayView::default()
        }
    }
}

/// Records array snapshots while an algorithm mutates its private copy
#[derive(Debug)]
pub(crate) struct ArrayTrace {
    pub array: Vec<i64>,
    steps: Vec<ArrayStep>,
}

impl ArrayTrace {
    pub fn new(input: &[i64]) -> Self {
        Self {
            array: input.to_vec(),
            steps: Vec::new(),
        }
    }

    pub fn record(&mut self, comparing: Vec<usize>, swapping: Vec<usize>, sorted: Vec<usize>) {
        self.steps.push(ArrayStep {
            array: self.array.clone(),
            comparing,
            swapping,
            sorted,
            description: None,
        });
    }

    pub fn compare(&mut self, comparing: Vec<usize>, sorted: Vec<usize>) {
        self.record(comparing, Vec::new(), sorted);
    }

    pub fn mark(&mut self, swapping: Vec<usize>, sorted: Vec<usize>) {
        self.record(Vec::new(), swapping, sorted);
    }

    /// Pushes the terminal step: every index sorted
    pub fn finish_sorted(mut self) -> Vec<ArrayStep> {
        let all = (0..self.array.len()).collect();
        self.record(Vec::new(), Vec::new(), all);
        self.steps
    }

    /// Pushes the terminal step of a search
    pub fn finish_search(mut self, found: Option<usize>) -> Vec<ArrayStep> {
        self.record(Vec::new(), Vec::new(), found.into_iter().collect());
        self.steps
    }
}

// ---------------------------------------------------------------------------
// Graph steps
// ---------------------------------------------------------------------------

/// Nodes awaiting a visit, tagged with the discipline that orders them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "nodes", rename_all = "snake_case")]
pub enum Frontier {
    #[default]
    Empty,
    /// FIFO queue (breadth-first search), front first
    Queue(Vec<NodeId>),
    /// LIFO stack (depth-first search), bottom first
    Stack(Vec<NodeId>),
    /// Neighbours whose tentative distance was just improved
    Relaxed(Vec<NodeId>),
}

impl Frontier {
    pub fn nodes(&self) -> &[NodeId] {
        match self {
            Self::Empty => &[],
            Self::Queue(nodes) | Self::Stack(nodes) | Self::Relaxed(nodes) => nodes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }
}

/// Snapshot of a graph algorithm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStep {
    pub visited: Vec<NodeId>,
    pub current: Option<NodeId>,
    pub frontier: Frontier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distances: Option<BTreeMap<NodeId, u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mst_edges: Option<Vec<Edge>>,
    pub description: String,
}

impl GraphStep {
    pub fn new(
        visited: Vec<NodeId>,
        current: Option<NodeId>,
        frontier: Frontier,
        description: impl Into<String>,
    ) -> Self {
        Self {
            visited,
            current,
            frontier,
            distances: None,
            mst_edges: None,
            description: description.into(),
        }
    }

    pub fn with_distances(mut self, distances: BTreeMap<NodeId, u32>) -> Self {
        self.distances = Some(distances);
        self
    }

    pub fn with_mst_edges(mut self, edges: Vec<Edge>) -> Self {
        self.mst_edges = Some(edges);
        self
    }
}

/// Rendering state of a graph visualizer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphView {
    pub visited: Vec<NodeId>,
    pub current: Option<NodeId>,
    pub frontier: Frontier,
    pub distances: BTreeMap<NodeId, u32>,
    pub mst_edges: Vec<Edge>,
    pub description: String,
}

impl Playable for GraphStep {
    type View = GraphView;

    /// `distances` and `mst_edges` persist until a later step replaces them
    fn project(&self, view: &mut GraphView) {
        view.visited.clone_from(&self.visited);
        view.current = self.current;
        view.frontier.clone_from(&self.frontier);
        view.description.clone_from(&self.description);
        if let Some(distances) = &self.distances {
            view.distances.clone_from(distances);
        }
        if let Some(edges) = &self.mst_edges {
            view.mst_edges.clone_from(edges);
        }
    }
}

// ---------------------------------------------------------------------------
// Tree steps
// ---------------------------------------------------------------------------

/// Snapshot of a tree algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStep {
    pub visited: Vec<NodeId>,
    pub current: Option<NodeId>,
    pub description: String,
}

/// Rendering state of a tree visualizer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeView {
    pub visited: Vec<NodeId>,
    pub current: Option<NodeId>,
    pub description: String,
}

impl Playable for TreeStep {
    type View = TreeView;

    fn project(&self, view: &mut TreeView) {
        view.visited.clone_from(&self.visited);
        view.current = self.current;
        view.description.clone_from(&self.description);
    }
}
