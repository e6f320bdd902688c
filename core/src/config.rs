//! Visualizer configuration
//!
//! All tunables of the playback engine, the dataset provider and the
//! interactive visualizers live here. Every section has a `Default` matching
//! the classroom presets and can be overridden from JSON; omitted fields keep
//! their defaults.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// Complete visualizer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub playback: PlaybackConfig,
    pub dataset: DatasetConfig,
    pub layout: TreeLayout,
    pub n_queens: NQueensConfig,
    pub knapsack: KnapsackConfig,
}

impl VisualizerConfig {
    /// Parses and validates a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.playback.validate()?;
        self.dataset.validate()?;
        self.layout.validate()?;
        self.n_queens.validate()?;
        self.knapsack.validate()
    }
}

/// Speed-to-interval mapping of the playback controller
///
/// `interval = base_interval_ms - speed * interval_per_speed_ms`, with speed
/// clamped to `[min_speed, max_speed]` and the result never below
/// `min_interval_ms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub default_speed: u32,
    pub min_speed: u32,
    pub max_speed: u32,
    pub base_interval_ms: u64,
    pub interval_per_speed_ms: u64,
    pub min_interval_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_speed: 50,
            min_speed: 1,
            max_speed: 100,
            base_interval_ms: 1000,
            interval_per_speed_ms: 9,
            min_interval_ms: 10,
        }
    }
}

impl PlaybackConfig {
    /// Never panics, even on an inverted range built by hand
    pub fn clamp_speed(&self, speed: u32) -> u32 {
        speed.max(self.min_speed).min(self.max_speed)
    }

    /// Tick interval for a speed; higher speed, shorter interval
    pub fn interval_for(&self, speed: u32) -> Duration {
        let speed = u64::from(self.clamp_speed(speed));
        let millis = self
            .base_interval_ms
            .saturating_sub(speed.saturating_mul(self.interval_per_speed_ms))
            .max(self.min_interval_ms);
        Duration::from_millis(millis)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_speed > self.max_speed {
            return Err(invalid("playback.min_speed", "must not exceed max_speed"));
        }
        if !(self.min_speed..=self.max_speed).contains(&self.default_speed) {
            return Err(invalid("playback.default_speed", "must lie within [min_speed, max_speed]"));
        }
        if self.min_interval_ms == 0 {
            return Err(invalid("playback.min_interval_ms", "must be positive"));
        }
        Ok(())
    }
}

/// Dataset provider presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub sorting_length: usize,
    pub sorting_min: i64,
    pub sorting_max: i64,
    pub search_length: usize,
    pub search_min: i64,
    pub search_max: i64,
    /// Probability that the drawn search target is taken from the array
    pub target_hit_probability: f64,
    pub tree_size: usize,
    pub tree_min: i64,
    pub tree_max: i64,
}

/// Non-empty range over two bounds given in either order
fn ordered(a: i64, b: i64) -> RangeInclusive<i64> {
    a.min(b)..=a.max(b)
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            sorting_length: 10,
            sorting_min: 10,
            sorting_max: 109,
            search_length: 15,
            search_min: 1,
            search_max: 100,
            target_hit_probability: 0.7,
            tree_size: 10,
            tree_min: 1,
            tree_max: 100,
        }
    }
}

impl DatasetConfig {
    pub fn sorting_range(&self) -> RangeInclusive<i64> {
        ordered(self.sorting_min, self.sorting_max)
    }

    pub fn search_range(&self) -> RangeInclusive<i64> {
        ordered(self.search_min, self.search_max)
    }

    pub fn tree_range(&self) -> RangeInclusive<i64> {
        ordered(self.tree_min, self.tree_max)
    }

    /// Hit probability usable by `gen_bool`; NaN counts as never
    pub fn hit_probability(&self) -> f64 {
        if self.target_hit_probability.is_nan() {
            0.0
        } else {
            self.target_hit_probability.clamp(0.0, 1.0)
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sorting_min > self.sorting_max {
            return Err(invalid("dataset.sorting_min", "range is inverted"));
        }
        if self.search_min > self.search_max {
            return Err(invalid("dataset.search_min", "range is inverted"));
        }
        if self.tree_min > self.tree_max {
            return Err(invalid("dataset.tree_min", "range is inverted"));
        }
        if !(0.0..=1.0).contains(&self.target_hit_probability) {
            return Err(invalid("dataset.target_hit_probability", "must lie within [0, 1]"));
        }
        // Tree keys are unique, so the value range must be able to supply them.
        let distinct = self.tree_max.abs_diff(self.tree_min).saturating_add(1);
        if (self.tree_size as u64) > distinct {
            return Err(invalid(
                "dataset.tree_size",
                format!("cannot draw {} distinct keys from {} values", self.tree_size, distinct),
            ));
        }
        Ok(())
    }
}

/// Recursive halving-offset tree layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeLayout {
    pub root_x: f64,
    pub root_y: f64,
    pub initial_offset: f64,
    pub level_height: f64,
    pub offset_divisor: f64,
}

impl Default for TreeLayout {
    fn default() -> Self {
        Self {
            root_x: 400.0,
            root_y: 50.0,
            initial_offset: 200.0,
            level_height: 60.0,
            offset_divisor: 1.8,
        }
    }
}

impl TreeLayout {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.offset_divisor <= 1.0 {
            return Err(invalid("layout.offset_divisor", "must be greater than 1"));
        }
        Ok(())
    }
}

/// N-Queens visualizer presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NQueensConfig {
    pub default_size: usize,
    pub min_size: usize,
    pub max_size: usize,
    pub default_delay_ms: u64,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for NQueensConfig {
    fn default() -> Self {
        Self {
            default_size: 4,
            min_size: 4,
            max_size: 8,
            default_delay_ms: 500,
            min_delay_ms: 50,
            max_delay_ms: 1000,
        }
    }
}

impl NQueensConfig {
    pub fn size_range(&self) -> RangeInclusive<usize> {
        self.min_size..=self.max_size
    }

    pub fn clamp_delay(&self, delay: Duration) -> Duration {
        delay
            .max(Duration::from_millis(self.min_delay_ms))
            .min(Duration::from_millis(self.max_delay_ms))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_size < 4 || self.max_size > 8 || self.min_size > self.max_size {
            return Err(invalid("n_queens.min_size", "board sizes must lie within 4..=8"));
        }
        if !self.size_range().contains(&self.default_size) {
            return Err(invalid("n_queens.default_size", "must lie within [min_size, max_size]"));
        }
        if self.min_delay_ms > self.max_delay_ms {
            return Err(invalid("n_queens.min_delay_ms", "range is inverted"));
        }
        Ok(())
    }
}

/// Knapsack visualizer presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnapsackConfig {
    pub capacity: usize,
    pub min_capacity: usize,
}

impl Default for KnapsackConfig {
    fn default() -> Self {
        Self {
            capacity: 7,
            min_capacity: 1,
        }
    }
}

impl KnapsackConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity < self.min_capacity {
            return Err(invalid("knapsack.capacity", "must be at least min_capacity"));
        }
        Ok(())
    }
}
