//! N-Queens backtracking as an explicit state machine
//!
//! [`NQueensSolver`] performs one transition per [`NQueensSolver::advance`]
//! call and reports it as a [`QueensEvent`] with a full board snapshot. The
//! recursion of the textbook solution is replaced by a stack of placed rows,
//! one per filled column, so the search can be paused, paced or cancelled
//! between any two transitions.
//!
//! [`NQueensVisualizer`] drives a solver on a tokio task, sleeping between
//! events according to the event kind and the current user delay.
//!
//! # Key Design Principles
//! - Queens are placed column by column, rows tried top to bottom
//! - A queen is safe iff no queen shares its row or a left diagonal
//! - The search stops at the first solution
//! - Cancellation is a solver state checked before every transition
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::algorithm::traits::{AlgorithmCategory, AlgorithmComplexity, AlgorithmInfo};
use crate::config::NQueensConfig;

pub const ID: &str = "n_queens";

/// Catalog record of the N-Queens visualizer
pub fn info() -> AlgorithmInfo {
    AlgorithmInfo::new(
        ID,
        "N-Queens",
        AlgorithmCategory::Backtracking,
        AlgorithmComplexity::new("O(n!)", "O(n!)", "O(n!)", "O(n^2)"),
    )
}

/// Errors of the N-Queens visualizer controls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NQueensError {
    #[error("Cannot change the board while the solver is running")]
    Busy,

    #[error("Board size {size} is outside {min}..={max}")]
    BoardSize { size: usize, min: usize, max: usize },

    #[error("No tokio runtime is available to drive the solver")]
    NoRuntime,
}

/// Content of a board square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Empty,
    Queen,
    /// Square currently under test; not a queen
    Checking,
}

/// Square board stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col]
        } else {
            Cell::Empty
        }
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col] = cell;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// `(row, col)` of every queen in row-major order
    pub fn queens(&self) -> Vec<(usize, usize)> {
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| (row, col)))
            .filter(|&(row, col)| self.get(row, col) == Cell::Queen)
            .collect()
    }

    /// Whether a queen at `(row, col)` is attacked by a queen in an earlier column
    pub fn is_safe(&self, row: usize, col: usize) -> bool {
        let queen = |r: usize, c: usize| self.get(r, c) == Cell::Queen;

        if (0..col).any(|c| queen(row, c)) {
            return false;
        }
        let mut upper = (0..=row).rev().zip((0..=col).rev());
        if upper.any(|(r, c)| queen(r, c)) {
            return false;
        }
        let mut lower = (row..self.size).zip((0..=col).rev());
        !lower.any(|(r, c)| queen(r, c))
    }
}

/// One transition of the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueensEventKind {
    Checking { row: usize, col: usize },
    Placed { row: usize, col: usize },
    Rejected { row: usize, col: usize },
    Backtracked { row: usize, col: usize },
    Solved,
    Exhausted,
    Cancelled,
}

impl QueensEventKind {
    /// Pause after this event for a given user delay
    pub fn pace(&self, delay: Duration) -> Duration {
        match self {
            Self::Checking { .. } => delay / 2,
            Self::Placed { .. } | Self::Backtracked { .. } => delay,
            Self::Solved => delay * 2,
            Self::Rejected { .. } | Self::Exhausted | Self::Cancelled => Duration::ZERO,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Checking { row, col } => format!("Checking ({row}, {col})"),
            Self::Placed { row, col } => format!("Placed Queen at ({row}, {col})"),
            Self::Rejected { row, col } => format!("Conflict at ({row}, {col})"),
            Self::Backtracked { row, col } => format!("Backtracking from ({row}, {col})"),
            Self::Solved => "Found a solution!".to_owned(),
            Self::Exhausted => "No solution found.".to_owned(),
            Self::Cancelled => "Solver stopped.".to_owned(),
        }
    }
}

/// Event plus the board right after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueensEvent {
    pub kind: QueensEventKind,
    pub board: Board,
    pub message: String,
}

/// Lifecycle of a solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverStatus {
    Running,
    Solved,
    Exhausted,
    Cancelled,
}

impl SolverStatus {
    pub fn is_terminal(self) -> bool {
        self != Self::Running
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Mark the next candidate square of the current column
    Check,
    /// Place or reject the marked square
    Decide,
}

/// Step-wise N-Queens solver
#[derive(Debug, Clone)]
pub struct NQueensSolver {
    board: Board,
    /// Row of the queen in each filled column
    placed: Vec<usize>,
    row: usize,
    phase: Phase,
    status: SolverStatus,
}

impl NQueensSolver {
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            placed: Vec::with_capacity(size),
            row: 0,
            phase: Phase::Check,
            status: SolverStatus::Running,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> SolverStatus {
        self.status
    }

    /// Stops the search; returns the cancellation event if it was running
    pub fn cancel(&mut self) -> Option<QueensEvent> {
        if self.status.is_terminal() {
            return None;
        }
        if self.phase == Phase::Decide {
            self.board.set(self.row, self.placed.len(), Cell::Empty);
        }
        self.status = SolverStatus::Cancelled;
        Some(self.event(QueensEventKind::Cancelled))
    }

    /// Performs one transition; `None` once the solver is in a terminal state
    pub fn advance(&mut self) -> Option<QueensEvent> {
        if self.status.is_terminal() {
            return None;
        }
        let n = self.board.size();
        let col = self.placed.len();

        let kind = match self.phase {
            Phase::Check if col >= n => {
                self.status = SolverStatus::Solved;
                QueensEventKind::Solved
            }
            Phase::Check if self.row >= n => match self.placed.pop() {
                // Column exhausted: lift the previous queen and try below it
                Some(prev_row) => {
                    let prev_col = self.placed.len();
                    self.board.set(prev_row, prev_col, Cell::Empty);
                    self.row = prev_row + 1;
                    QueensEventKind::Backtracked { row: prev_row, col: prev_col }
                }
                None => {
                    self.status = SolverStatus::Exhausted;
                    QueensEventKind::Exhausted
                }
            },
            Phase::Check => {
                self.board.set(self.row, col, Cell::Checking);
                self.phase = Phase::Decide;
                QueensEventKind::Checking { row: self.row, col }
            }
            Phase::Decide => {
                let row = self.row;
                self.phase = Phase::Check;
                if self.board.is_safe(row, col) {
                    self.board.set(row, col, Cell::Queen);
                    self.placed.push(row);
                    self.row = 0;
                    QueensEventKind::Placed { row, col }
                } else {
                    self.board.set(row, col, Cell::Empty);
                    self.row += 1;
                    QueensEventKind::Rejected { row, col }
                }
            }
        };
        Some(self.event(kind))
    }

    /// Runs to a terminal state and returns the number of transitions
    pub fn run_to_end(&mut self) -> usize {
        let mut transitions = 0;
        while self.advance().is_some() {
            transitions += 1;
        }
        transitions
    }

    fn event(&self, kind: QueensEventKind) -> QueensEvent {
        QueensEvent {
            kind,
            board: self.board.clone(),
            message: kind.message(),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let glyph = match cell {
                    Cell::Empty => '.',
                    Cell::Queen => 'Q',
                    Cell::Checking => '?',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Paced runner
// ---------------------------------------------------------------------------

/// What the N-Queens view renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueensFrame {
    pub board: Board,
    pub message: String,
    pub last_event: Option<QueensEventKind>,
    pub running: bool,
}

impl QueensFrame {
    fn ready(size: usize) -> Self {
        Self {
            board: Board::new(size),
            message: format!("Ready to solve {size}-Queens."),
            last_event: None,
            running: false,
        }
    }
}

#[derive(Debug)]
struct Pacing {
    delay: Duration,
    running: bool,
    /// Bumped by every start and reset; a task only touches the shared
    /// state while its own generation is current
    generation: u64,
}

/// Interactive N-Queens runner
///
/// At most one solver task exists at a time. The board size can only change
/// while idle; the delay may change at any time and is read before every
/// pause.
#[derive(Debug)]
pub struct NQueensVisualizer {
    config: NQueensConfig,
    size: usize,
    pacing: Arc<Mutex<Pacing>>,
    frames: Arc<watch::Sender<QueensFrame>>,
    stop: Option<watch::Sender<bool>>,
    task: Option<JoinHandle<SolverStatus>>,
}

impl NQueensVisualizer {
    pub fn new(config: NQueensConfig) -> Self {
        let size = config.default_size;
        let delay = config.clamp_delay(Duration::from_millis(config.default_delay_ms));
        let (frames, _) = watch::channel(QueensFrame::ready(size));
        Self {
            config,
            size,
            pacing: Arc::new(Mutex::new(Pacing {
                delay,
                running: false,
                generation: 0,
            })),
            frames: Arc::new(frames),
            stop: None,
            task: None,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn delay(&self) -> Duration {
        self.pacing.lock().delay
    }

    pub fn is_running(&self) -> bool {
        self.pacing.lock().running
    }

    pub fn subscribe(&self) -> watch::Receiver<QueensFrame> {
        self.frames.subscribe()
    }

    pub fn frame(&self) -> QueensFrame {
        self.frames.borrow().clone()
    }

    /// Changes the board size and clears the board
    pub fn set_size(&mut self, size: usize) -> Result<(), NQueensError> {
        if self.is_running() {
            return Err(NQueensError::Busy);
        }
        if !self.config.size_range().contains(&size) {
            return Err(NQueensError::BoardSize {
                size,
                min: self.config.min_size,
                max: self.config.max_size,
            });
        }
        self.size = size;
        self.frames.send_replace(QueensFrame::ready(size));
        Ok(())
    }

    /// Sets the base delay, clamped to the configured bounds
    pub fn set_delay(&self, delay: Duration) {
        self.pacing.lock().delay = self.config.clamp_delay(delay);
    }

    /// Spawns a solver task on the current tokio runtime
    pub fn start(&mut self) -> Result<(), NQueensError> {
        if self.is_running() {
            return Err(NQueensError::Busy);
        }
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| NQueensError::NoRuntime)?;

        let (stop_tx, stop_rx) = watch::channel(false);
        let generation = {
            let mut pacing = self.pacing.lock();
            pacing.running = true;
            pacing.generation += 1;
            pacing.generation
        };
        self.frames.send_replace(QueensFrame {
            board: Board::new(self.size),
            message: "Starting N-Queens Solver...".to_owned(),
            last_event: None,
            running: true,
        });

        let solver = NQueensSolver::new(self.size);
        let task = runtime.spawn(drive(
            solver,
            generation,
            Arc::clone(&self.pacing),
            Arc::clone(&self.frames),
            stop_rx,
        ));
        self.stop = Some(stop_tx);
        self.task = Some(task);
        info!("N-Queens solver started for n = {}", self.size);
        Ok(())
    }

    /// Requests the running solver to stop at its next suspension point
    pub fn stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(true);
            debug!("N-Queens stop requested");
        }
    }

    /// Stops any run and clears the board
    pub fn reset(&mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            task.abort();
        }
        {
            let mut pacing = self.pacing.lock();
            pacing.generation += 1;
            pacing.running = false;
        }
        self.frames.send_replace(QueensFrame::ready(self.size));
    }

    /// Waits for the current run to end and returns how it ended
    pub async fn wait(&mut self) -> Option<SolverStatus> {
        let task = self.task.take()?;
        task.await.ok()
    }
}

impl Drop for NQueensVisualizer {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn drive(
    mut solver: NQueensSolver,
    generation: u64,
    pacing: Arc<Mutex<Pacing>>,
    frames: Arc<watch::Sender<QueensFrame>>,
    mut stop: watch::Receiver<bool>,
) -> SolverStatus {
    // Returns false once a later start or reset has taken over the board
    let publish = |event: QueensEvent, running: bool| {
        let pacing = pacing.lock();
        if pacing.generation != generation {
            return false;
        }
        frames.send_replace(QueensFrame {
            board: event.board,
            message: event.message,
            last_event: Some(event.kind),
            running,
        });
        true
    };

    loop {
        if *stop.borrow() {
            if let Some(event) = solver.cancel() {
                publish(event, false);
            }
            break;
        }
        let Some(event) = solver.advance() else { break };

        let pause = event.kind.pace(pacing.lock().delay);
        if !publish(event, !solver.status().is_terminal()) {
            debug!("N-Queens run {generation} superseded");
            break;
        }

        tokio::select! {
            biased;
            changed = stop.changed() => {
                // A dropped sender also means nobody wants the run anymore.
                if changed.is_err() || *stop.borrow() {
                    if let Some(event) = solver.cancel() {
                        publish(event, false);
                    }
                    break;
                }
            }
            _ = tokio::time::sleep(pause) => {}
        }
    }

    {
        let mut pacing = pacing.lock();
        if pacing.generation == generation {
            pacing.running = false;
        }
    }
    let status = solver.status();
    debug!("N-Queens solver finished: {status:?}");
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_non_conflicting(board: &Board) {
        let queens = board.queens();
        for (i, &(r1, c1)) in queens.iter().enumerate() {
            for &(r2, c2) in &queens[i + 1..] {
                assert_ne!(r1, r2);
                assert_ne!(c1, c2);
                assert_ne!(r1.abs_diff(r2), c1.abs_diff(c2));
            }
        }
    }

    #[test]
    fn test_four_queens_solution() {
        let mut solver = NQueensSolver::new(4);
        solver.run_to_end();

        assert_eq!(solver.status(), SolverStatus::Solved);
        let board = solver.board();
        assert_eq!(board.queens().len(), 4);
        assert_non_conflicting(board);
        // First solution in column-major, top-to-bottom order
        assert_eq!(board.queens(), vec![(0, 2), (1, 0), (2, 3), (3, 1)]);
    }

    #[test]
    fn test_every_supported_size_solves() {
        for n in 4..=8 {
            let mut solver = NQueensSolver::new(n);
            solver.run_to_end();
            assert_eq!(solver.status(), SolverStatus::Solved, "n = {n}");
            assert_eq!(solver.board().queens().len(), n);
            assert_non_conflicting(solver.board());
        }
    }

    #[test]
    fn test_three_queens_is_exhausted() {
        let mut solver = NQueensSolver::new(3);
        solver.run_to_end();
        assert_eq!(solver.status(), SolverStatus::Exhausted);
        assert!(solver.board().queens().is_empty());
    }

    #[test]
    fn test_checking_mark_is_not_a_queen() {
        let mut solver = NQueensSolver::new(4);
        let event = solver.advance().unwrap();
        assert_eq!(event.kind, QueensEventKind::Checking { row: 0, col: 0 });
        assert_eq!(event.board.get(0, 0), Cell::Checking);
        assert!(event.board.queens().is_empty());

        let event = solver.advance().unwrap();
        assert_eq!(event.kind, QueensEventKind::Placed { row: 0, col: 0 });
        assert_eq!(event.message, "Placed Queen at (0, 0)");

        // Row 0 of column 1 conflicts, row 1 is on the diagonal
        solver.advance();
        let event = solver.advance().unwrap();
        assert_eq!(event.kind, QueensEventKind::Rejected { row: 0, col: 1 });
        assert_eq!(event.board.get(0, 1), Cell::Empty);
    }

    #[test]
    fn test_backtrack_lifts_queen() {
        let mut solver = NQueensSolver::new(4);
        let event = std::iter::from_fn(|| solver.advance())
            .find(|e| matches!(e.kind, QueensEventKind::Backtracked { .. }))
            .unwrap();
        let QueensEventKind::Backtracked { row, col } = event.kind else { unreachable!() };
        assert_eq!(event.board.get(row, col), Cell::Empty);
    }

    #[test]
    fn test_cancel_is_terminal() {
        let mut solver = NQueensSolver::new(6);
        solver.advance();
        let event = solver.cancel().unwrap();
        assert_eq!(event.kind, QueensEventKind::Cancelled);
        assert!(event.board.queens().is_empty());
        assert_eq!(event.board.get(0, 0), Cell::Empty);
        assert_eq!(solver.advance(), None);
        assert_eq!(solver.cancel(), None);
    }

    #[test]
    fn test_pacing_factors() {
        let delay = Duration::from_millis(500);
        assert_eq!(QueensEventKind::Checking { row: 0, col: 0 }.pace(delay), Duration::from_millis(250));
        assert_eq!(QueensEventKind::Placed { row: 0, col: 0 }.pace(delay), delay);
        assert_eq!(QueensEventKind::Backtracked { row: 0, col: 0 }.pace(delay), delay);
        assert_eq!(QueensEventKind::Solved.pace(delay), Duration::from_secs(1));
        assert_eq!(QueensEventKind::Rejected { row: 0, col: 0 }.pace(delay), Duration::ZERO);
    }

    #[test]
    fn test_board_size_only_changes_within_bounds() {
        let mut visualizer = NQueensVisualizer::new(NQueensConfig::default());
        assert_eq!(
            visualizer.set_size(9),
            Err(NQueensError::BoardSize { size: 9, min: 4, max: 8 })
        );
        visualizer.set_size(6).unwrap();
        assert_eq!(visualizer.frame().board.size(), 6);
        assert_eq!(visualizer.frame().message, "Ready to solve 6-Queens.");
    }

    #[test]
    fn test_start_without_runtime_fails() {
        let mut visualizer = NQueensVisualizer::new(NQueensConfig::default());
        assert_eq!(visualizer.start(), Err(NQueensError::NoRuntime));
        assert!(!visualizer.is_running());
    }

    #[test]
    fn test_delay_is_clamped() {
        let visualizer = NQueensVisualizer::new(NQueensConfig::default());
        visualizer.set_delay(Duration::from_millis(5));
        assert_eq!(visualizer.delay(), Duration::from_millis(50));
        visualizer.set_delay(Duration::from_secs(5));
        assert_eq!(visualizer.delay(), Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_visualizer_runs_to_solution() {
        let mut visualizer = NQueensVisualizer::new(NQueensConfig::default());
        visualizer.start().unwrap();
        assert!(visualizer.is_running());
        assert_eq!(visualizer.set_size(5), Err(NQueensError::Busy));
        assert_eq!(visualizer.start(), Err(NQueensError::Busy));

        assert_eq!(visualizer.wait().await, Some(SolverStatus::Solved));
        let frame = visualizer.frame();
        assert!(!frame.running);
        assert_eq!(frame.last_event, Some(QueensEventKind::Solved));
        assert_eq!(frame.board.queens().len(), 4);
        assert!(!visualizer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_at_next_suspension() {
        let mut visualizer = NQueensVisualizer::new(NQueensConfig::default());
        visualizer.start().unwrap();
        tokio::time::sleep(Duration::from_millis(1200)).await;

        visualizer.stop();
        assert_eq!(visualizer.wait().await, Some(SolverStatus::Cancelled));
        let frame = visualizer.frame();
        assert_eq!(frame.last_event, Some(QueensEventKind::Cancelled));
        assert!(frame.board.queens().len() < 4);
        assert!(!visualizer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_change_is_read_fresh() {
        let mut visualizer = NQueensVisualizer::new(NQueensConfig::default());
        let mut frames = visualizer.subscribe();
        visualizer.set_delay(Duration::from_millis(1000));
        visualizer.start().unwrap();

        loop {
            frames.changed().await.unwrap();
            let checking = QueensEventKind::Checking { row: 0, col: 0 };
            if frames.borrow_and_update().last_event == Some(checking) {
                break;
            }
        }
        visualizer.set_delay(Duration::from_millis(100));

        // The pause after the check was taken with the old delay
        frames.changed().await.unwrap();
        assert_eq!(
            frames.borrow_and_update().last_event,
            Some(QueensEventKind::Placed { row: 0, col: 0 })
        );
        let placed_at = tokio::time::Instant::now();

        frames.changed().await.unwrap();
        assert_eq!(
            frames.borrow_and_update().last_event,
            Some(QueensEventKind::Checking { row: 0, col: 1 })
        );
        assert!(placed_at.elapsed() < Duration::from_millis(200));

        visualizer.reset();
        assert!(!visualizer.is_running());
        assert_eq!(visualizer.frame().message, "Ready to solve 4-Queens.");
    }

    #[tokio::test]
    async fn test_superseded_run_leaves_board_alone() {
        let pacing = Arc::new(Mutex::new(Pacing {
            delay: Duration::ZERO,
            running: true,
            generation: 2,
        }));
        let (frames, receiver) = watch::channel(QueensFrame::ready(4));
        let (_stop_tx, stop_rx) = watch::channel(false);

        let status = drive(NQueensSolver::new(4), 1, Arc::clone(&pacing), Arc::new(frames), stop_rx).await;
        assert_eq!(status, SolverStatus::Running);
        assert_eq!(*receiver.borrow(), QueensFrame::ready(4));
        // The newer run still owns the running flag
        assert!(pacing.lock().running);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_then_restart_shows_only_new_run() {
        let mut visualizer = NQueensVisualizer::new(NQueensConfig::default());
        visualizer.start().unwrap();
        tokio::time::sleep(Duration::from_millis(700)).await;
        visualizer.reset();
        visualizer.set_size(5).unwrap();
        visualizer.start().unwrap();

        assert_eq!(visualizer.wait().await, Some(SolverStatus::Solved));
        let frame = visualizer.frame();
        assert_eq!(frame.board.size(), 5);
        assert_eq!(frame.board.queens().len(), 5);
        assert!(!visualizer.is_running());
    }

    #[test]
    fn test_inverted_delay_bounds_do_not_panic() {
        let config = NQueensConfig {
            min_delay_ms: 800,
            max_delay_ms: 200,
            ..NQueensConfig::default()
        };
        let visualizer = NQueensVisualizer::new(config);
        assert_eq!(visualizer.delay(), Duration::from_millis(200));
        visualizer.set_delay(Duration::from_millis(5));
        assert_eq!(visualizer.delay(), Duration::from_millis(200));
    }
}
