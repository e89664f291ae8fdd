//! Fundamental geometric, snapshot, and intent types.
//!
//! Screen-space convention: x grows to the right, y grows down the road.
//! Every vector is a `glam::DVec2`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectileOwner;

/// Horizontal extent of the drivable road.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneBounds {
    /// Road center x.
    pub center_x: f64,
    /// Half of the road width.
    pub half_width: f64,
}

impl LaneBounds {
    pub fn new(center_x: f64, half_width: f64) -> Self {
        Self {
            center_x,
            half_width,
        }
    }

    /// Left edge pulled inward by `margin`.
    pub fn left(&self, margin: f64) -> f64 {
        self.center_x - self.half_width + margin
    }

    /// Right edge pulled inward by `margin`.
    pub fn right(&self, margin: f64) -> f64 {
        self.center_x + self.half_width - margin
    }

    /// Clamp `x` into the road after shrinking both edges by `margin`.
    /// Degenerate (inverted) bounds collapse onto the road center.
    pub fn clamp_x(&self, x: f64, margin: f64) -> f64 {
        let (l, r) = (self.left(margin), self.right(margin));
        if l > r {
            return self.center_x;
        }
        x.clamp(l, r)
    }

    /// Half width guarded against zero for use as a divisor.
    pub fn safe_half_width(&self) -> f64 {
        if self.half_width.abs() > f64::EPSILON {
            self.half_width
        } else {
            1.0
        }
    }
}

/// Rectangular world extent for the hunter arena, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f64,
    pub height: f64,
}

impl WorldBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Length of the diagonal, never below 1.
    pub fn diagonal(&self) -> f64 {
        DVec2::new(self.width, self.height).length().max(1.0)
    }

    /// Clamp a point into the rectangle.
    pub fn clamp(&self, p: DVec2) -> DVec2 {
        DVec2::new(
            p.x.clamp(0.0, self.width.max(0.0)),
            p.y.clamp(0.0, self.height.max(0.0)),
        )
    }
}

/// Player kinematics as seen by an enemy brain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: DVec2,
    pub velocity: DVec2,
    pub speed: f64,
    pub max_speed: f64,
    /// Combo / heat signal in [0, 1]; absent is treated as zero.
    #[serde(default)]
    pub combo_heat: Option<f64>,
}

/// Kinematic and health state of the agent being decided for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    pub position: DVec2,
    pub vx: f64,
    pub hp: f64,
    pub hp_max: f64,
}

/// A live projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: DVec2,
    pub owner: ProjectileOwner,
}

/// Everything an enemy brain reads for one decision.
/// Built fresh by the host every tick; never mutated by the AI.
#[derive(Debug, Clone, Copy)]
pub struct WorldSnapshot<'a> {
    pub player: PlayerState,
    pub agent: AgentState,
    pub projectiles: &'a [Projectile],
    pub lane: LaneBounds,
}

/// Output of one brain update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SteeringIntent {
    /// Normalized lateral steering, always in [-1, 1].
    pub steer: f64,
    pub want_shoot: bool,
    pub want_nitro: bool,
}

/// Output of one hunter decision.
///
/// `(ax, ay)` is a unit direction scaled by the state's speed factor, so its
/// length never exceeds the largest configured speed factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HunterAction {
    pub ax: f64,
    pub ay: f64,
    pub desire_shoot: bool,
    pub desire_dash: bool,
}

impl HunterAction {
    pub fn acceleration(&self) -> DVec2 {
        DVec2::new(self.ax, self.ay)
    }
}

/// What the hunter learns about the prey in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Prey position this tick.
    pub position: DVec2,
    pub bounds: WorldBounds,
    /// Seconds since the previous observation.
    pub dt: f64,
    /// Monotonic simulation time in seconds.
    pub time: f64,
    /// Line of sight was confirmed this tick.
    pub visible: bool,
    /// Direction of a shot the prey fired this tick, if any.
    #[serde(default)]
    pub shot: Option<DVec2>,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Clamp helper that maps NaN to `lo` so a bad input can never escape a range.
pub fn clamp_finite(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() {
        lo
    } else {
        v.clamp(lo, hi)
    }
}

/// Returns `d` unless it is (near) zero, in which case returns 1.
pub fn safe_divisor(d: f64) -> f64 {
    if d.abs() > f64::EPSILON && d.is_finite() {
        d
    } else {
        1.0
    }
}
