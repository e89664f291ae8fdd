//! Wave spawning system: trickles enemies onto the road.
//!
//! A spawn is a Bernoulli roll per tick with probability
//! `dt / (SPAWN_INTERVAL_BASE / difficulty)`, capped by `max_enemies`.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use pursuit_core::constants::SPAWN_INTERVAL_BASE;
use pursuit_core::events::SimEvent;
use pursuit_core::types::LaneBounds;

use crate::components::{Enemy, Position};
use crate::world_setup;

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    lane: LaneBounds,
    difficulty: f64,
    max_enemies: usize,
    dt: f64,
    events: &mut Vec<SimEvent>,
) {
    let active = world.query_mut::<&Enemy>().into_iter().count();
    if active >= max_enemies {
        return;
    }

    let interval = SPAWN_INTERVAL_BASE / difficulty;
    if rng.gen::<f64>() >= dt / interval {
        return;
    }

    let kind = world_setup::roll_kind(rng);
    let entity = world_setup::spawn_enemy(world, rng, kind, lane, difficulty);
    if let Ok(pos) = world.get::<&Position>(entity) {
        debug!(?kind, x = pos.0.x, "enemy spawned");
        events.push(SimEvent::EnemySpawned { kind, x: pos.0.x });
    }
}
