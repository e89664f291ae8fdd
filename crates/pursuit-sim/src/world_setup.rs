//! Entity spawn factories.
//!
//! Enemy stats per archetype and the lane-based spawn placement.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use pursuit_core::constants::*;
use pursuit_core::enums::{EnemyKind, ProjectileOwner};
use pursuit_core::types::LaneBounds;
use pursuit_squad_ai::Brain;

use crate::components::{Enemy, Position, Predator, Shot, Velocity};

/// Fixed stats for an enemy archetype.
pub struct EnemyProfile {
    pub hp: f64,
    pub armor: f64,
    pub radius: f64,
    pub fire_interval: f64,
}

pub fn enemy_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Raider => EnemyProfile {
            hp: 70.0,
            armor: 20.0,
            radius: 24.0,
            fire_interval: 0.34,
        },
        EnemyKind::Sniper => EnemyProfile {
            hp: 70.0,
            armor: 20.0,
            radius: 24.0,
            fire_interval: 0.26,
        },
        EnemyKind::Tank => EnemyProfile {
            hp: 120.0,
            armor: 40.0,
            radius: 30.0,
            fire_interval: 0.34,
        },
    }
}

/// Roll an archetype from the spawn mix.
pub fn roll_kind(rng: &mut ChaCha8Rng) -> EnemyKind {
    let r: f64 = rng.gen();
    if r < TANK_SPAWN_CHANCE {
        EnemyKind::Tank
    } else if r < TANK_SPAWN_CHANCE + SNIPER_SPAWN_CHANCE {
        EnemyKind::Sniper
    } else {
        EnemyKind::Raider
    }
}

/// Spawn an enemy in a random lane above the top of the world.
/// Every enemy gets its own brain seeded from the engine RNG.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: EnemyKind,
    lane: LaneBounds,
    difficulty: f64,
) -> Entity {
    let lane_w = lane.half_width * 2.0 / ROAD_LANES as f64;
    let index = rng.gen_range(0..ROAD_LANES);
    let x = lane.center_x - lane.half_width
        + lane_w * (index as f64 + 0.5)
        + rng.gen_range(-ENEMY_SPAWN_JITTER..ENEMY_SPAWN_JITTER);
    spawn_enemy_at(world, rng, kind, DVec2::new(x, ENEMY_SPAWN_Y), difficulty)
}

/// Spawn an enemy at an exact position.
pub fn spawn_enemy_at(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: EnemyKind,
    position: DVec2,
    difficulty: f64,
) -> Entity {
    let profile = enemy_profile(kind);
    let enemy = Enemy {
        kind,
        hp: profile.hp,
        hp_max: profile.hp,
        armor: profile.armor,
        radius: profile.radius,
        speed: rng.gen_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX) * difficulty,
        fire_cd: rng.gen_range(0.2..0.8),
        fire_interval: profile.fire_interval,
        nitro: NITRO_FUEL_MAX,
    };
    let brain = Brain::from_rng(rng);
    world.spawn((Position(position), Velocity::default(), enemy, brain))
}

pub fn spawn_shot(
    world: &mut World,
    owner: ProjectileOwner,
    position: DVec2,
    velocity: DVec2,
    damage: f64,
) -> Entity {
    world.spawn((
        Position(position),
        Velocity(velocity),
        Shot { owner, damage },
    ))
}

/// Velocity of a player shot with lateral component `vx`.
pub fn player_shot_velocity(vx: f64, player_speed: f64) -> DVec2 {
    DVec2::new(
        vx,
        -(PLAYER_SHOT_SPEED + player_speed.max(0.0) * PLAYER_SHOT_SPEED_SHARE),
    )
}

pub fn spawn_predator(world: &mut World, position: DVec2) -> Entity {
    world.spawn((Position(position), Velocity::default(), Predator::default()))
}
