//! ALGOSCOPE core
//!
//! Step generation and playback for an educational algorithm visualizer.
//! Every algorithm is a pure [`StepGenerator`](algorithm::StepGenerator)
//! that turns a dataset into an immutable sequence of snapshots; a
//! [`PlaybackController`](execution::PlaybackController) walks that sequence
//! and a tokio-driven [`Player`](execution::Player) animates it. N-Queens is
//! the exception: its solver is a paced state machine driven by its own task.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod dataset;
pub mod execution;

pub use crate::algorithm::{AlgorithmError, AlgorithmInfo, Playable, StepGenerator, StepSequence};
pub use crate::config::{ConfigError, VisualizerConfig};
pub use crate::dataset::DatasetProvider;
pub use crate::execution::{Frame, PlaybackController, PlaybackError, Player, Session};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs `env_logger` with an `info` default, overridable via `RUST_LOG`
///
/// Calling it again after a logger is installed is a no-op.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_ok() {
        log::debug!("algoscope-core {VERSION} logging initialized");
    }
}
