//! ECS components for hecs entities.
//!
//! Components are plain data. Enemies also carry a `pursuit_squad_ai::Brain`
//! directly; it is despawned with them.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use pursuit_core::enums::{EnemyKind, ProjectileOwner};
use pursuit_core::types::HunterAction;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

/// Road enemy state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub hp: f64,
    pub hp_max: f64,
    pub armor: f64,
    /// Hit radius.
    pub radius: f64,
    /// Base forward speed.
    pub speed: f64,
    /// Seconds until the weapon is ready.
    pub fire_cd: f64,
    /// Seconds between shots.
    pub fire_interval: f64,
    pub nitro: f64,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Armor soaks up to `ARMOR_ABSORB` of the hit while it lasts.
    pub fn apply_damage(&mut self, damage: f64) {
        use pursuit_core::constants::ARMOR_ABSORB;

        let mut left = damage.max(0.0);
        if self.armor > 0.0 {
            let soaked = self.armor.min(left * ARMOR_ABSORB);
            self.armor -= soaked;
            left -= soaked;
        }
        self.hp = (self.hp - left).max(0.0);
    }
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shot {
    pub owner: ProjectileOwner,
    pub damage: f64,
}

/// The hunter-controlled predator in the arena.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Predator {
    /// Last action returned by the hunter.
    pub action: HunterAction,
}
