//! Per-agent steering and combat brain.
//!
//! Pure decision logic: the only state a brain mutates is its own clock and
//! shot cooldown. Traits are recomputed from scratch on every update and
//! clamped where they are computed, so they never leave their ranges.

use rand::Rng;
use serde::{Deserialize, Serialize};

use pursuit_core::constants::*;
use pursuit_core::enums::ProjectileOwner;
use pursuit_core::types::{
    clamp_finite, safe_divisor, AgentState, PlayerState, Projectile, SteeringIntent, WorldSnapshot,
};

use crate::noise::{noise_at, signed_noise_at};

/// Steering/combat state owned by one enemy for its lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brain {
    seed: u32,
    /// Seconds of accumulated update time.
    clock: f64,
    aggression: f64,
    dodge: f64,
    aim: f64,
    lane_bias: f64,
    cooldown: f64,
}

impl Brain {
    /// Create a brain with a fixed noise seed.
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            clock: 0.0,
            aggression: BRAIN_AGGRESSION_INITIAL,
            dodge: BRAIN_DODGE_INITIAL,
            aim: BRAIN_AIM_INITIAL,
            lane_bias: 0.0,
            cooldown: 0.0,
        }
    }

    /// Create a brain seeded from the host's random source.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen())
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// In [`BRAIN_AGGRESSION_MIN`, `BRAIN_AGGRESSION_MAX`].
    pub fn aggression(&self) -> f64 {
        self.aggression
    }

    /// In [`BRAIN_DODGE_MIN`, `BRAIN_DODGE_MAX`].
    pub fn dodge(&self) -> f64 {
        self.dodge
    }

    /// In [`BRAIN_AIM_MIN`, `BRAIN_AIM_MAX`].
    pub fn aim(&self) -> f64 {
        self.aim
    }

    pub fn lane_bias(&self) -> f64 {
        self.lane_bias
    }

    pub fn cooldown(&self) -> f64 {
        self.cooldown
    }

    /// Set by the team coordinator. Clamped to the coordinator's range.
    pub fn set_lane_bias(&mut self, bias: f64) {
        self.lane_bias = clamp_finite(bias, -TEAM_LANE_BIAS_CLAMP, TEAM_LANE_BIAS_CLAMP);
    }

    /// Run one decision for this agent.
    pub fn update(&mut self, dt: f64, world: &WorldSnapshot<'_>) -> SteeringIntent {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.clock += dt;

        let p = &world.player;
        let e = &world.agent;

        let dx = p.position.x - e.position.x;
        let dist = dx.abs() + (p.position.y - e.position.y) * FORWARD_DISTANCE_WEIGHT;

        self.recompute_traits(p, e, dx, world.lane.half_width);

        let chaos = signed_noise_at(self.seed, self.clock, JITTER_BUCKET_HZ);

        let lead = (p.velocity.x * LEAD_VELOCITY_SCALE).clamp(-LEAD_CLAMP, LEAD_CLAMP);
        let target_x = p.position.x + lead * (LEAD_AIM_BASE + self.aim * (1.0 - LEAD_AIM_BASE));
        let mut steer_to = target_x + chaos * STEER_JITTER + self.lane_bias * LANE_BIAS_OFFSET;

        steer_to += dodge_push(e, world.projectiles, self.dodge, chaos) * DODGE_PUSH_DISTANCE;
        steer_to = world.lane.clamp_x(steer_to, STEER_ROAD_MARGIN);

        let raw = (steer_to - e.position.x) / STEER_RESPONSIVENESS;
        let steer = if raw.is_nan() { 0.0 } else { raw.clamp(-1.0, 1.0) };

        let want_shoot = self.decide_shot(dt, dx, dist, p.position.y < e.position.y);
        let want_nitro = self.decide_nitro(dist);

        SteeringIntent {
            steer,
            want_shoot,
            want_nitro,
        }
    }

    fn recompute_traits(&mut self, p: &PlayerState, e: &AgentState, dx: f64, half_width: f64) {
        let health_factor = clamp_finite(e.hp / safe_divisor(e.hp_max), 0.0, 1.0);
        let threat = player_threat(p);
        let half_width = if half_width.abs() > f64::EPSILON {
            half_width
        } else {
            DEFAULT_ROAD_HALF_WIDTH
        };
        let alignment = 1.0 - dx.abs() / half_width;

        self.aggression = clamp_finite(
            0.25 + (1.0 - health_factor) * 0.35 + threat * 0.35,
            BRAIN_AGGRESSION_MIN,
            BRAIN_AGGRESSION_MAX,
        );
        self.dodge = clamp_finite(0.35 + threat * 0.45, BRAIN_DODGE_MIN, BRAIN_DODGE_MAX);
        self.aim = clamp_finite(
            0.35 + (1.0 - threat) * 0.35 + alignment * 0.30,
            BRAIN_AIM_MIN,
            BRAIN_AIM_MAX,
        );
    }

    /// Two independent rolls on one draw: a lenient long-range check and a
    /// stricter check that needs alignment and closer range.
    fn decide_shot(&mut self, dt: f64, dx: f64, dist: f64, player_in_front: bool) -> bool {
        self.cooldown = (self.cooldown - dt).max(0.0);
        if self.cooldown > 0.0 {
            return false;
        }

        let aligned = dx.abs() < ALIGNED_DX;
        let alignment_factor = if aligned {
            ALIGNED_SHOT_FACTOR
        } else {
            UNALIGNED_SHOT_FACTOR
        };
        let frontal = if player_in_front { FRONTAL_PENALTY } else { 1.0 };
        let chance = self.aggression * alignment_factor * frontal;

        let r = noise_at(self.seed, self.clock, SHOT_BUCKET_HZ);
        let long_range = r < chance * LONG_RANGE_SHOT_GATE && dist < LONG_RANGE_SHOT_DISTANCE;
        let close = aligned && dist < CLOSE_SHOT_DISTANCE && r < chance * CLOSE_SHOT_GATE;

        let fire = long_range || close;
        if fire {
            self.cooldown = SHOT_COOLDOWN_BASE + (1.0 - self.aim) * SHOT_COOLDOWN_AIM_SCALE;
        }
        fire
    }

    fn decide_nitro(&self, dist: f64) -> bool {
        if self.aggression <= NITRO_AGGRESSION_THRESHOLD || dist <= NITRO_MIN_DISTANCE {
            return false;
        }
        let r = noise_at(
            self.seed.wrapping_add(NITRO_SEED_SALT),
            self.clock,
            NITRO_BUCKET_HZ,
        );
        r < NITRO_CHANCE
    }
}

/// Player threat in [0, 1]: speed ratio blended with the combo signal.
pub fn player_threat(p: &PlayerState) -> f64 {
    let speed_ratio = p.speed / safe_divisor(p.max_speed);
    let combo = p.combo_heat.unwrap_or(0.0);
    clamp_finite(
        speed_ratio * THREAT_SPEED_WEIGHT + combo * THREAT_COMBO_WEIGHT,
        0.0,
        1.0,
    )
}

/// Signed lateral push away from player projectiles closing on the agent.
///
/// Only projectiles within `DODGE_LOOKAHEAD` ahead and `DODGE_LATERAL_RADIUS`
/// to the side count. A dead-center projectile is dodged toward the side the
/// jitter `chaos` points to, or right when that is zero too.
pub fn dodge_push(agent: &AgentState, projectiles: &[Projectile], dodge: f64, chaos: f64) -> f64 {
    let mut push = 0.0;
    for b in projectiles {
        if b.owner != ProjectileOwner::Player {
            continue;
        }
        let dy = agent.position.y - b.position.y;
        if !(dy > 0.0 && dy < DODGE_LOOKAHEAD) {
            continue;
        }
        let ddx = agent.position.x - b.position.x;
        if ddx.abs() >= DODGE_LATERAL_RADIUS {
            continue;
        }
        let side = if ddx != 0.0 {
            ddx
        } else if chaos != 0.0 {
            chaos
        } else {
            1.0
        };
        push += sign(side) * (DODGE_PUSH_BASE + dodge) * DODGE_PUSH_GAIN;
    }
    push
}

fn sign(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}
