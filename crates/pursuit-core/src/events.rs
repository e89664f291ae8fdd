//! Events emitted by the harness for audio and HUD feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, HunterMode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    EnemySpawned { kind: EnemyKind, x: f64 },
    EnemyFired { x: f64, y: f64 },
    EnemyHit { kind: EnemyKind, hp_left: f64 },
    EnemyDestroyed { kind: EnemyKind, x: f64, y: f64 },
    /// Enemy left the bottom of the world alive.
    EnemyEscaped { kind: EnemyKind },
    PlayerHit { damage: f64 },
    HunterModeChanged { from: HunterMode, to: HunterMode },
}
