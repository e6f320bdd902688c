//! Timer-driven playback
//!
//! A [`Player`] shares its [`PlaybackController`] with one ticker task. The
//! task re-reads the interval before every sleep and re-checks `playing`
//! under the lock before every tick, so speed changes apply on the next tick
//! and no tick lands after a pause.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::algorithm::step::{Playable, StepSequence};
use crate::config::PlaybackConfig;
use crate::execution::playback::{Frame, PlaybackController};
use crate::execution::ticker::Ticker;

/// Errors raised by timer-driven playback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("Playback requires a running tokio runtime")]
    NoRuntime,
}

type SharedController<S> = Arc<Mutex<PlaybackController<S>>>;
type FrameSender<V> = Arc<watch::Sender<Frame<V>>>;

/// Playback controller driven by a tokio timer
#[derive(Debug)]
pub struct Player<S: Playable> {
    controller: SharedController<S>,
    frames: FrameSender<S::View>,
    ticker: Ticker,
}

impl<S: Playable> Player<S> {
    pub fn new(config: PlaybackConfig) -> Self {
        Self::with_steps(config, StepSequence::empty())
    }

    pub fn with_steps(config: PlaybackConfig, steps: StepSequence<S>) -> Self {
        let controller = PlaybackController::with_steps(config, steps);
        let (frames, _) = watch::channel(controller.frame());
        Self {
            controller: Arc::new(Mutex::new(controller)),
            frames: Arc::new(frames),
            ticker: Ticker::new(),
        }
    }

    /// Receiver of every published frame
    pub fn subscribe(&self) -> watch::Receiver<Frame<S::View>> {
        self.frames.subscribe()
    }

    pub fn frame(&self) -> Frame<S::View> {
        self.controller.lock().frame()
    }

    pub fn cursor(&self) -> usize {
        self.controller.lock().cursor()
    }

    pub fn is_playing(&self) -> bool {
        self.controller.lock().is_playing()
    }

    pub fn is_finished(&self) -> bool {
        self.controller.lock().is_finished()
    }

    /// Starts playback on the current tokio runtime
    ///
    /// Returns `Ok(false)` when there is nothing left to play.
    pub fn play(&mut self) -> Result<bool, PlaybackError> {
        let handle = Handle::try_current().map_err(|_| PlaybackError::NoRuntime)?;
        let started = self.controller.lock().play();
        if started {
            let controller = Arc::clone(&self.controller);
            let frames = Arc::clone(&self.frames);
            self.ticker.arm(&handle, run_ticks(controller, frames));
            debug!("playback started");
        }
        self.publish();
        Ok(started)
    }

    pub fn pause(&mut self) {
        self.ticker.cancel();
        self.controller.lock().pause();
        self.publish();
    }

    pub fn reset(&mut self) {
        self.ticker.cancel();
        self.controller.lock().reset();
        self.publish();
    }

    /// Manual advance; rejected while playing
    pub fn step_forward(&mut self) -> bool {
        let moved = self.controller.lock().step_forward();
        if moved {
            self.publish();
        }
        moved
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.controller.lock().set_speed(speed);
        self.publish();
    }

    /// Swaps in a regenerated sequence, stopping playback
    pub fn load(&mut self, steps: StepSequence<S>) {
        self.ticker.cancel();
        self.controller.lock().load(steps);
        self.publish();
    }

    fn publish(&self) {
        let frame = self.controller.lock().frame();
        self.frames.send_replace(frame);
    }
}

async fn run_ticks<S: Playable>(controller: SharedController<S>, frames: FrameSender<S::View>) {
    loop {
        let interval = controller.lock().interval();
        tokio::time::sleep(interval).await;

        let frame = {
            let mut controller = controller.lock();
            if !controller.is_playing() {
                break;
            }
            controller.tick();
            controller.frame()
        };
        let playing = frame.playing;
        frames.send_replace(frame);
        if !playing {
            debug!("ticker finished");
            break;
        }
    }
}
