//! Cursor state machine over an immutable step sequence
//!
//! # Invariants
//! - `cursor` lies in `[0, len - 1]` for a non-empty sequence and is 0 otherwise
//! - The cursor only moves forward, one step at a time, except on reset/load
//! - "finished" holds exactly when `len > 0 && cursor == len - 1`
//! - Reaching the last step stops playback; it never wraps
//! - After `load` the view shows `steps[0]`; only `reset` rewinds to the
//!   empty view
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::time::Duration;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::algorithm::step::{Playable, StepSequence};
use crate::config::PlaybackConfig;

/// Everything a renderer needs for one redraw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame<V> {
    pub cursor: usize,
    pub len: usize,
    pub playing: bool,
    pub finished: bool,
    pub speed: u32,
    pub view: V,
}

/// View of a freshly loaded sequence: `steps[0]` projected onto an empty view
fn opening_view<S: Playable>(steps: &StepSequence<S>) -> S::View {
    let mut view = S::View::default();
    if let Some(first) = steps.first() {
        first.project(&mut view);
    }
    view
}

/// Playback state of one visualization instance
#[derive(Debug, Clone)]
pub struct PlaybackController<S: Playable> {
    config: PlaybackConfig,
    steps: StepSequence<S>,
    cursor: usize,
    playing: bool,
    speed: u32,
    view: S::View,
}

impl<S: Playable> PlaybackController<S> {
    pub fn new(config: PlaybackConfig) -> Self {
        Self::with_steps(config, StepSequence::empty())
    }

    pub fn with_steps(config: PlaybackConfig, steps: StepSequence<S>) -> Self {
        let speed = config.clamp_speed(config.default_speed);
        let view = opening_view(&steps);
        Self {
            config,
            steps,
            cursor: 0,
            playing: false,
            speed,
            view,
        }
    }

    /// Replaces the sequence after a dataset or parameter change
    pub fn load(&mut self, steps: StepSequence<S>) {
        debug!("loading {} steps", steps.len());
        self.steps = steps;
        self.cursor = 0;
        self.playing = false;
        self.view = opening_view(&self.steps);
    }

    /// Starts playback; returns whether the controller is now playing
    pub fn play(&mut self) -> bool {
        if self.steps.is_empty() || self.is_finished() {
            warn!("play ignored: nothing left to play");
            return false;
        }
        self.playing = true;
        true
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Stops and rewinds to the first step
    pub fn reset(&mut self) {
        self.playing = false;
        self.cursor = 0;
        self.view = S::rewind(self.steps.first());
    }

    /// Timer-driven advance; returns whether the cursor moved
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let moved = self.advance();
        if self.is_finished() {
            self.playing = false;
            debug!("playback finished at step {}", self.cursor);
        }
        trace!("tick: cursor = {}", self.cursor);
        moved
    }

    /// Manual advance while paused; returns whether the cursor moved
    pub fn step_forward(&mut self) -> bool {
        if self.playing {
            warn!("step forward ignored while playing");
            return false;
        }
        self.advance()
    }

    fn advance(&mut self) -> bool {
        let Some(last) = self.steps.last_index() else {
            return false;
        };
        if self.cursor >= last {
            return false;
        }
        self.cursor += 1;
        if let Some(step) = self.steps.get(self.cursor) {
            step.project(&mut self.view);
        }
        true
    }

    /// Sets the speed, clamped to the configured range
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = self.config.clamp_speed(speed);
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Delay between two ticks at the current speed
    pub fn interval(&self) -> Duration {
        self.config.interval_for(self.speed)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.steps.last_index() == Some(self.cursor)
    }

    pub fn steps(&self) -> &StepSequence<S> {
        &self.steps
    }

    pub fn current_step(&self) -> Option<&S> {
        self.steps.get(self.cursor)
    }

    pub fn view(&self) -> &S::View {
        &self.view
    }

    pub fn frame(&self) -> Frame<S::View> {
        Frame {
            cursor: self.cursor,
            len: self.steps.len(),
            playing: self.playing,
            finished: self.is_finished(),
            speed: self.speed,
            view: self.view.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::step::{ArrayStep, Frontier, GraphStep, GraphView, TreeStep};
    use crate::algorithm::{GraphAlgorithm, NodeId, SortingAlgorithm, StepGenerator};
    use crate::dataset::canonical_graph;

    fn sorting_controller() -> PlaybackController<ArrayStep> {
        let steps = SortingAlgorithm::Bubble.generate(&[3, 1, 2], &()).unwrap();
        PlaybackController::with_steps(PlaybackConfig::default(), steps)
    }

    #[test]
    fn test_stepping_visits_every_index_in_order() {
        let mut controller = sorting_controller();
        let len = controller.len();
        let mut seen = vec![controller.cursor()];
        while controller.step_forward() {
            seen.push(controller.cursor());
            assert_eq!(controller.is_finished(), controller.cursor() == len - 1);
        }
        assert_eq!(seen, (0..len).collect::<Vec<_>>());
        assert!(controller.is_finished());
        assert!(!controller.step_forward());
    }

    #[test]
    fn test_tick_stops_at_end_without_wrapping() {
        let mut controller = sorting_controller();
        assert!(controller.play());
        let mut ticks = 0;
        while controller.tick() {
            ticks += 1;
        }
        assert_eq!(ticks, controller.len() - 1);
        assert!(!controller.is_playing());
        assert!(controller.is_finished());
        assert_eq!(controller.view().sorted, vec![0, 1, 2]);

        // Finished sequences do not restart on play
        assert!(!controller.play());
    }

    #[test]
    fn test_step_forward_rejected_while_playing() {
        let mut controller = sorting_controller();
        controller.play();
        assert!(!controller.step_forward());
        assert_eq!(controller.cursor(), 0);
        controller.pause();
        assert!(controller.step_forward());
        assert_eq!(controller.cursor(), 1);
    }

    #[test]
    fn test_reset_rewinds_array_view() {
        let mut controller = sorting_controller();
        while controller.step_forward() {}
        assert_eq!(controller.view().array, vec![1, 2, 3]);

        controller.reset();
        assert_eq!(controller.cursor(), 0);
        assert!(!controller.is_playing());
        assert_eq!(controller.view().array, vec![3, 1, 2]);
        assert!(controller.view().sorted.is_empty());
    }

    #[test]
    fn test_load_forces_cursor_to_start() {
        let mut controller = sorting_controller();
        controller.play();
        controller.tick();
        controller.tick();

        let fresh = SortingAlgorithm::Insertion.generate(&[9, 8], &()).unwrap();
        controller.load(fresh);
        assert_eq!(controller.cursor(), 0);
        assert!(!controller.is_playing());
        assert_eq!(controller.view().array, vec![9, 8]);
    }

    #[test]
    fn test_first_step_is_shown_after_load() {
        let graph = canonical_graph().unwrap();
        let steps = GraphAlgorithm::Bfs.generate(&graph, &NodeId(0)).unwrap();
        let mut expected = GraphView::default();
        steps[0].project(&mut expected);

        let mut controller =
            PlaybackController::<GraphStep>::with_steps(PlaybackConfig::default(), steps.clone());
        assert_eq!(controller.view(), &expected);
        assert_eq!(controller.view().description, "Start BFS");
        assert_eq!(controller.view().frontier, Frontier::Queue(vec![NodeId(0)]));

        while controller.step_forward() {}
        controller.load(steps);
        assert_eq!(controller.cursor(), 0);
        assert_eq!(controller.view(), &expected);
    }

    #[test]
    fn test_every_description_is_rendered_once_during_playback() {
        let graph = canonical_graph().unwrap();
        let steps = GraphAlgorithm::Dfs.generate(&graph, &NodeId(0)).unwrap();
        let mut controller =
            PlaybackController::<GraphStep>::with_steps(PlaybackConfig::default(), steps.clone());

        let mut rendered = vec![controller.view().description.clone()];
        controller.play();
        while controller.tick() {
            rendered.push(controller.view().description.clone());
        }
        let generated: Vec<_> = steps.iter().map(|step| step.description.clone()).collect();
        assert_eq!(rendered, generated);
    }

    #[test]
    fn test_inverted_speed_range_does_not_panic() {
        let config = PlaybackConfig {
            min_speed: 50,
            max_speed: 10,
            ..PlaybackConfig::default()
        };
        let mut controller = PlaybackController::<ArrayStep>::new(config);
        controller.set_speed(200);
        assert!(controller.speed() <= 50);
        assert!(controller.interval() >= Duration::from_millis(10));
    }

    #[test]
    fn test_empty_sequence_is_inert() {
        let mut controller = PlaybackController::<TreeStep>::new(PlaybackConfig::default());
        assert!(!controller.play());
        assert!(!controller.tick());
        assert!(!controller.step_forward());
        assert!(!controller.is_finished());
        assert_eq!(controller.frame().len, 0);
    }

    #[test]
    fn test_speed_is_clamped_and_maps_to_interval() {
        let mut controller = sorting_controller();
        assert_eq!(controller.interval(), Duration::from_millis(550));
        controller.set_speed(250);
        assert_eq!(controller.speed(), 100);
        assert_eq!(controller.interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_graph_view_keeps_distances_between_steps() {
        let graph = canonical_graph().unwrap();
        let steps = GraphAlgorithm::Dijkstra.generate(&graph, &NodeId(0)).unwrap();
        let mut controller = PlaybackController::<GraphStep>::with_steps(PlaybackConfig::default(), steps);
        while controller.step_forward() {}
        assert_eq!(controller.view().distances.len(), 7);

        controller.reset();
        assert!(controller.view().distances.is_empty());
    }
}
