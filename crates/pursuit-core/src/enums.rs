//! Enumeration types used throughout the AI cores and the harness.

use serde::{Deserialize, Serialize};

/// Who fired a projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileOwner {
    #[default]
    Player,
    Enemy,
}

/// Hunter behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HunterMode {
    /// Wandering with weak heat bias. Initial state.
    #[default]
    Search,
    /// Heat-following sweep after losing the prey.
    Hunt,
    /// Direct pursuit of the last confirmed sighting.
    Chase,
}

impl HunterMode {
    /// HUD label.
    pub fn label(self) -> &'static str {
        match self {
            HunterMode::Search => "SEARCH",
            HunterMode::Hunt => "HUNT",
            HunterMode::Chase => "CHASE",
        }
    }
}

impl std::fmt::Display for HunterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Enemy archetype in the road game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Raider,
    Sniper,
    Tank,
}
