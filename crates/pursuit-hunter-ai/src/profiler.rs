//! Rolling profile of the prey's play style.
//!
//! Two bounded histories (movement samples and shots) feed three estimates:
//! aim steadiness, movement spread, and recent shot rate. Aggression and
//! focus approach targets derived from those estimates at a dt-scaled rate.

use std::collections::VecDeque;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use pursuit_core::config::HunterConfig;
use pursuit_core::constants::*;
use pursuit_core::types::{clamp_finite, Observation, WorldBounds};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveSample {
    pub position: DVec2,
    pub time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotSample {
    /// Unit direction, or zero when the host sent a degenerate vector.
    pub direction: DVec2,
    pub position: DVec2,
    pub time: f64,
}

/// Latest estimator outputs, kept for HUD/debug readout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimates {
    pub accuracy: f64,
    pub movement_variance: f64,
    pub shot_rate: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    movement: VecDeque<MoveSample>,
    shots: VecDeque<ShotSample>,
    estimates: Estimates,
    aggression: f64,
    focus: f64,
}

impl PlayerProfile {
    pub fn new(config: &HunterConfig) -> Self {
        Self {
            movement: VecDeque::with_capacity(config.movement_history_len),
            shots: VecDeque::with_capacity(config.shot_history_len),
            estimates: Estimates {
                accuracy: config.accuracy_neutral,
                movement_variance: config.variance_neutral,
                shot_rate: 0,
            },
            aggression: HUNTER_AGGRESSION_INITIAL,
            focus: HUNTER_FOCUS_INITIAL,
        }
    }

    pub fn clear(&mut self, config: &HunterConfig) {
        *self = Self::new(config);
    }

    pub fn movement(&self) -> &VecDeque<MoveSample> {
        &self.movement
    }

    pub fn shots(&self) -> &VecDeque<ShotSample> {
        &self.shots
    }

    pub fn estimates(&self) -> Estimates {
        self.estimates
    }

    /// In [`HUNTER_AGGRESSION_MIN`, `HUNTER_AGGRESSION_MAX`].
    pub fn aggression(&self) -> f64 {
        self.aggression
    }

    /// In [`HUNTER_FOCUS_MIN`, `HUNTER_FOCUS_MAX`].
    pub fn focus(&self) -> f64 {
        self.focus
    }

    /// Append this tick's samples, dropping the oldest past capacity.
    pub fn record(&mut self, obs: &Observation, config: &HunterConfig) {
        push_bounded(
            &mut self.movement,
            MoveSample {
                position: obs.position,
                time: obs.time,
            },
            config.movement_history_len,
        );
        if let Some(dir) = obs.shot {
            push_bounded(
                &mut self.shots,
                ShotSample {
                    direction: dir.normalize_or_zero(),
                    position: obs.position,
                    time: obs.time,
                },
                config.shot_history_len,
            );
        }
    }

    /// Fraction of consecutive shot pairs aimed almost the same way.
    pub fn accuracy_estimate(&self, config: &HunterConfig) -> f64 {
        let n = self.shots.len();
        if n < config.accuracy_min_samples.max(2) {
            return config.accuracy_neutral;
        }
        let steady = self
            .shots
            .iter()
            .zip(self.shots.iter().skip(1))
            .filter(|(a, b)| a.direction.dot(b.direction) > config.accuracy_dot_threshold)
            .count();
        steady as f64 / (n - 1) as f64
    }

    /// Mean squared distance from the centroid, normalized and clamped to [0, 1].
    pub fn movement_variance_estimate(&self, bounds: WorldBounds, config: &HunterConfig) -> f64 {
        let n = self.movement.len();
        if n < config.variance_min_samples.max(1) {
            return config.variance_neutral;
        }
        let inv = 1.0 / n as f64;
        let centroid = self.movement.iter().map(|s| s.position).sum::<DVec2>() * inv;
        let spread = self
            .movement
            .iter()
            .map(|s| s.position.distance_squared(centroid))
            .sum::<f64>()
            * inv;
        let scale = bounds.diagonal() * config.variance_norm_fraction;
        clamp_finite(spread / (scale * scale).max(f64::EPSILON), 0.0, 1.0)
    }

    /// Shots fired within the trailing window ending at `now`.
    pub fn shot_rate_estimate(&self, now: f64, config: &HunterConfig) -> usize {
        self.shots
            .iter()
            .filter(|s| s.time <= now && now - s.time <= config.shot_rate_window_secs)
            .count()
    }

    /// Recompute estimates and move aggression/focus toward their targets.
    pub fn adapt(&mut self, now: f64, dt: f64, bounds: WorldBounds, config: &HunterConfig) {
        let accuracy = self.accuracy_estimate(config);
        let variance = self.movement_variance_estimate(bounds, config);
        let shot_rate = self.shot_rate_estimate(now, config);
        self.estimates = Estimates {
            accuracy,
            movement_variance: variance,
            shot_rate,
        };

        let pressure = clamp_finite(shot_rate as f64 / config.shot_rate_saturation, 0.0, 1.0);
        // Heavy fire and predictable movement invite commitment; a steady aim
        // tempers it. Steady aim and erratic movement demand focus.
        let aggression_target =
            0.2 + 0.4 * pressure + 0.25 * (1.0 - variance) + 0.15 * (1.0 - accuracy);
        let focus_target = 0.2 + 0.45 * accuracy + 0.35 * variance;

        let k = clamp_finite(config.adapt_rate * dt, 0.0, 1.0);
        self.aggression = clamp_finite(
            self.aggression + (aggression_target - self.aggression) * k,
            HUNTER_AGGRESSION_MIN,
            HUNTER_AGGRESSION_MAX,
        );
        self.focus = clamp_finite(
            self.focus + (focus_target - self.focus) * k,
            HUNTER_FOCUS_MIN,
            HUNTER_FOCUS_MAX,
        );
    }

    /// Patience before abandoning a chase: shorter when focused.
    pub fn lost_timeout(&self, config: &HunterConfig) -> f64 {
        config.lost_timeout_max + (config.lost_timeout_min - config.lost_timeout_max) * self.focus
    }
}

fn push_bounded<T>(buf: &mut VecDeque<T>, item: T, cap: usize) {
    if cap == 0 {
        return;
    }
    while buf.len() >= cap {
        buf.pop_front();
    }
    buf.push_back(item);
}
