//! Hunter behavior finite state machine.
//!
//! Pure functions: one computes mode transitions, one turns a mode plus a
//! navigation target into a bounded action. No heat map or RNG in here.

use glam::DVec2;

use pursuit_core::constants::*;
use pursuit_core::enums::HunterMode;
use pursuit_core::types::HunterAction;

/// Input to the transition check.
#[derive(Debug, Clone, Copy)]
pub struct ModeContext {
    pub mode: HunterMode,
    /// Whether any sighting has been confirmed since the last reset.
    pub has_sighting: bool,
    pub since_seen_secs: f64,
    pub lost_timeout_secs: f64,
}

/// Output of the transition check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeUpdate {
    pub new_mode: HunterMode,
    pub mode_changed: bool,
}

/// Evaluate transitions for one decision.
///
/// A fresh sighting wins from any mode and losing it drops CHASE to HUNT.
/// HUNT keeps following heat until the next sighting.
pub fn evaluate(ctx: &ModeContext) -> ModeUpdate {
    let in_contact = ctx.has_sighting && ctx.since_seen_secs < ctx.lost_timeout_secs;

    let new_mode = match ctx.mode {
        _ if in_contact => HunterMode::Chase,
        HunterMode::Chase => HunterMode::Hunt,
        mode => mode,
    };

    ModeUpdate {
        new_mode,
        mode_changed: new_mode != ctx.mode,
    }
}

/// Input to the motion policy.
#[derive(Debug, Clone, Copy)]
pub struct MotionContext {
    pub mode: HunterMode,
    pub predator: DVec2,
    pub target: DVec2,
    pub aggression: f64,
    pub focus: f64,
}

/// Turn a mode and target into a unit direction scaled by the mode's speed.
pub fn motion(ctx: &MotionContext) -> HunterAction {
    let to_target = ctx.target - ctx.predator;
    let dist = to_target.length();
    let dir = if dist > f64::EPSILON && dist.is_finite() {
        to_target / dist
    } else {
        DVec2::ZERO
    };

    let (speed, desire_shoot, desire_dash) = match ctx.mode {
        HunterMode::Chase => {
            let a = ctx.aggression.clamp(0.0, 1.0);
            (
                lerp(CHASE_SPEED_BASE, CHASE_SPEED_BOOST, a),
                a > CHASE_SHOOT_AGGRESSION && dist < CHASE_SHOOT_RANGE,
                a > CHASE_DASH_AGGRESSION && dist < CHASE_DASH_RANGE,
            )
        }
        HunterMode::Hunt => {
            let f = ctx.focus.clamp(0.0, 1.0);
            (
                lerp(HUNT_SPEED_BASE, HUNT_SPEED_FOCUSED, f),
                f > HUNT_SHOOT_FOCUS && dist < HUNT_SHOOT_RANGE,
                f > HUNT_DASH_FOCUS && dist < HUNT_DASH_RANGE,
            )
        }
        HunterMode::Search => (SEARCH_SPEED, false, false),
    };

    let accel = dir * speed;
    HunterAction {
        ax: accel.x,
        ay: accel.y,
        desire_shoot,
        desire_dash,
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
