//! Snapshot system: queries the ECS world and builds a `SimSnapshot`.
//!
//! This system is read-only. Entity lists are sorted by entity id so
//! two runs with the same seed serialize identically.

use glam::DVec2;
use hecs::World;
use pursuit_hunter_ai::Hunter;
use serde::{Deserialize, Serialize};

use pursuit_core::enums::{EnemyKind, HunterMode, ProjectileOwner};
use pursuit_core::events::SimEvent;
use pursuit_core::types::{HunterAction, SimTime};

use crate::components::{Enemy, Position, Predator, Shot, Velocity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: DVec2,
    pub velocity: DVec2,
    pub hp: f64,
    pub hp_max: f64,
    pub armor: f64,
    pub nitro: f64,
    pub lane_bias: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub owner: ProjectileOwner,
    pub position: DVec2,
    pub velocity: DVec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HunterView {
    pub mode: HunterMode,
    pub label: String,
    pub predator: DVec2,
    pub action: HunterAction,
    pub nav_target: Option<DVec2>,
    pub last_seen: Option<DVec2>,
    pub aggression: f64,
    pub focus: f64,
    pub lost_timeout: f64,
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub tick: u64,
    pub elapsed_secs: f64,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub hunter: Option<HunterView>,
    pub events: Vec<SimEvent>,
}

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    hunter: Option<&Hunter>,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    SimSnapshot {
        tick: time.tick,
        elapsed_secs: time.elapsed_secs,
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        hunter: hunter.map(|h| build_hunter(world, h)),
        events,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Position, &Velocity, &Enemy, &pursuit_squad_ai::Brain)>()
        .iter()
        .map(|(entity, (pos, vel, enemy, brain))| EnemyView {
            id: entity.id(),
            kind: enemy.kind,
            position: pos.0,
            velocity: vel.0,
            hp: enemy.hp,
            hp_max: enemy.hp_max,
            armor: enemy.armor,
            nitro: enemy.nitro,
            lane_bias: brain.lane_bias(),
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut shots: Vec<ProjectileView> = world
        .query::<(&Position, &Velocity, &Shot)>()
        .iter()
        .map(|(entity, (pos, vel, shot))| ProjectileView {
            id: entity.id(),
            owner: shot.owner,
            position: pos.0,
            velocity: vel.0,
        })
        .collect();
    shots.sort_by_key(|s| s.id);
    shots
}

fn build_hunter(world: &World, hunter: &Hunter) -> HunterView {
    let (predator, action) = world
        .query::<(&Position, &Predator)>()
        .iter()
        .next()
        .map(|(_, (pos, p))| (pos.0, p.action))
        .unwrap_or_default();

    HunterView {
        mode: hunter.mode(),
        label: hunter.state_label().to_string(),
        predator,
        action,
        nav_target: hunter.nav_target(),
        last_seen: hunter.last_seen(),
        aggression: hunter.aggression(),
        focus: hunter.focus(),
        lost_timeout: hunter.lost_timeout(),
    }
}
