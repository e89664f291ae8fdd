//! Validated configuration for the hunter core.
//!
//! Every estimator threshold and window is exposed here with a default taken
//! from `constants`. Hosts can load a config from JSON and call `validate()`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors raised by configuration validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} must be non-zero")]
    Zero { field: &'static str },
    #[error("{low_field} ({low}) must not exceed {high_field} ({high})")]
    Inverted {
        low_field: &'static str,
        low: f64,
        high_field: &'static str,
        high: f64,
    },
}

/// Tuning for one hunter instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HunterConfig {
    /// Heat grid cells per axis.
    pub grid_size: usize,
    pub heat_deposit_rate: f64,
    pub heat_deposit_radius: i32,
    pub heat_max: f64,
    pub heat_decay_rate: f64,
    pub heat_decay_max_per_tick: f64,

    pub movement_history_len: usize,
    pub shot_history_len: usize,
    pub accuracy_dot_threshold: f64,
    pub accuracy_min_samples: usize,
    pub accuracy_neutral: f64,
    pub variance_min_samples: usize,
    pub variance_neutral: f64,
    pub variance_norm_fraction: f64,
    pub shot_rate_window_secs: f64,
    pub shot_rate_saturation: f64,
    pub adapt_rate: f64,

    pub lost_timeout_min: f64,
    pub lost_timeout_max: f64,
    pub hunt_repick_slow_secs: f64,
    pub hunt_repick_fast_secs: f64,
    pub search_repick_slow_secs: f64,
    pub search_repick_fast_secs: f64,
    pub arrive_radius: f64,

    pub target_sample_count: usize,
    pub hill_climb_steps: usize,
    pub search_random_blend: f64,
    pub edge_penalty_weight: f64,
    pub edge_margin_fraction: f64,
}

impl Default for HunterConfig {
    fn default() -> Self {
        Self {
            grid_size: HEAT_GRID_SIZE,
            heat_deposit_rate: HEAT_DEPOSIT_RATE,
            heat_deposit_radius: HEAT_DEPOSIT_RADIUS,
            heat_max: HEAT_MAX,
            heat_decay_rate: HEAT_DECAY_RATE,
            heat_decay_max_per_tick: HEAT_DECAY_MAX_PER_TICK,
            movement_history_len: MOVEMENT_HISTORY_LEN,
            shot_history_len: SHOT_HISTORY_LEN,
            accuracy_dot_threshold: ACCURACY_DOT_THRESHOLD,
            accuracy_min_samples: ACCURACY_MIN_SAMPLES,
            accuracy_neutral: ACCURACY_NEUTRAL,
            variance_min_samples: VARIANCE_MIN_SAMPLES,
            variance_neutral: VARIANCE_NEUTRAL,
            variance_norm_fraction: VARIANCE_NORM_FRACTION,
            shot_rate_window_secs: SHOT_RATE_WINDOW_SECS,
            shot_rate_saturation: SHOT_RATE_SATURATION,
            adapt_rate: HUNTER_ADAPT_RATE,
            lost_timeout_min: LOST_TIMEOUT_MIN,
            lost_timeout_max: LOST_TIMEOUT_MAX,
            hunt_repick_slow_secs: HUNT_REPICK_SLOW_SECS,
            hunt_repick_fast_secs: HUNT_REPICK_FAST_SECS,
            search_repick_slow_secs: SEARCH_REPICK_SLOW_SECS,
            search_repick_fast_secs: SEARCH_REPICK_FAST_SECS,
            arrive_radius: ARRIVE_RADIUS,
            target_sample_count: TARGET_SAMPLE_COUNT,
            hill_climb_steps: HILL_CLIMB_STEPS,
            search_random_blend: SEARCH_RANDOM_BLEND,
            edge_penalty_weight: EDGE_PENALTY_WEIGHT,
            edge_margin_fraction: EDGE_MARGIN_FRACTION,
        }
    }
}

impl HunterConfig {
    /// Check every field against its documented domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_zero("grid_size", self.grid_size)?;
        non_zero("movement_history_len", self.movement_history_len)?;
        non_zero("shot_history_len", self.shot_history_len)?;
        non_zero("target_sample_count", self.target_sample_count)?;
        if self.heat_deposit_radius < 0 {
            return Err(ConfigError::OutOfRange {
                field: "heat_deposit_radius",
                value: self.heat_deposit_radius as f64,
                min: 0.0,
                max: i32::MAX as f64,
            });
        }

        positive("heat_deposit_rate", self.heat_deposit_rate)?;
        positive("heat_max", self.heat_max)?;
        positive("heat_decay_rate", self.heat_decay_rate)?;
        positive("variance_norm_fraction", self.variance_norm_fraction)?;
        positive("shot_rate_window_secs", self.shot_rate_window_secs)?;
        positive("shot_rate_saturation", self.shot_rate_saturation)?;
        positive("adapt_rate", self.adapt_rate)?;
        positive("lost_timeout_min", self.lost_timeout_min)?;
        positive("hunt_repick_fast_secs", self.hunt_repick_fast_secs)?;
        positive("search_repick_fast_secs", self.search_repick_fast_secs)?;

        // Strictly below 1 so a single tick can never wipe or invert the grid.
        if !(self.heat_decay_max_per_tick > 0.0 && self.heat_decay_max_per_tick < 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "heat_decay_max_per_tick",
                value: self.heat_decay_max_per_tick,
                min: 0.0,
                max: 1.0,
            });
        }
        unit("accuracy_dot_threshold", self.accuracy_dot_threshold, -1.0)?;
        unit("accuracy_neutral", self.accuracy_neutral, 0.0)?;
        unit("variance_neutral", self.variance_neutral, 0.0)?;
        unit("search_random_blend", self.search_random_blend, 0.0)?;
        unit("edge_penalty_weight", self.edge_penalty_weight, 0.0)?;
        if !(self.edge_margin_fraction > 0.0 && self.edge_margin_fraction <= 0.5) {
            return Err(ConfigError::OutOfRange {
                field: "edge_margin_fraction",
                value: self.edge_margin_fraction,
                min: 0.0,
                max: 0.5,
            });
        }
        if self.arrive_radius < 0.0 || self.arrive_radius.is_nan() {
            return Err(ConfigError::NotPositive {
                field: "arrive_radius",
                value: self.arrive_radius,
            });
        }

        ordered(
            "lost_timeout_min",
            self.lost_timeout_min,
            "lost_timeout_max",
            self.lost_timeout_max,
        )?;
        ordered(
            "hunt_repick_fast_secs",
            self.hunt_repick_fast_secs,
            "hunt_repick_slow_secs",
            self.hunt_repick_slow_secs,
        )?;
        ordered(
            "search_repick_fast_secs",
            self.search_repick_fast_secs,
            "search_repick_slow_secs",
            self.search_repick_slow_secs,
        )?;
        Ok(())
    }
}

fn non_zero(field: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Zero { field });
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn unit(field: &'static str, value: f64, min: f64) -> Result<(), ConfigError> {
    if (min..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max: 1.0,
        })
    }
}

fn ordered(
    low_field: &'static str,
    low: f64,
    high_field: &'static str,
    high: f64,
) -> Result<(), ConfigError> {
    if low <= high {
        Ok(())
    } else {
        Err(ConfigError::Inverted {
            low_field,
            low,
            high_field,
            high,
        })
    }
}
