//! Cleanup system: removes destroyed enemies and those that left the road.

use hecs::{Entity, World};

use pursuit_core::constants::ENEMY_DESPAWN_MARGIN;
use pursuit_core::events::SimEvent;

use crate::components::{Enemy, Position};

/// Despawn dead enemies and enemies past `height + ENEMY_DESPAWN_MARGIN`.
/// Brains are components, so they go with their enemy.
pub fn run(
    world: &mut World,
    world_height: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();

    let limit = world_height + ENEMY_DESPAWN_MARGIN;
    for (entity, (pos, enemy)) in world.query_mut::<(&Position, &Enemy)>() {
        if !enemy.is_alive() {
            despawn_buffer.push(entity);
        } else if pos.0.y > limit {
            events.push(SimEvent::EnemyEscaped { kind: enemy.kind });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
