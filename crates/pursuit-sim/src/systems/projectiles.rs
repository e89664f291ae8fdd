//! Projectile system: integrates shots and resolves hits.
//!
//! Player shots damage the first live enemy they overlap. Enemy shots are
//! tested against the player position; the player's health belongs to the
//! host, so a hit only produces a `PlayerHit` event.

use glam::DVec2;
use hecs::{Entity, World};

use pursuit_core::constants::*;
use pursuit_core::enums::ProjectileOwner;
use pursuit_core::events::SimEvent;
use pursuit_core::types::WorldBounds;

use crate::components::{Enemy, Position, Shot, Velocity};

pub fn run(
    world: &mut World,
    player_position: DVec2,
    bounds: WorldBounds,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();

    let mut live: Vec<(Entity, DVec2, Shot)> = Vec::new();
    for (entity, (pos, vel, shot)) in world.query_mut::<(&mut Position, &Velocity, &Shot)>() {
        pos.0 += vel.0 * dt;
        if out_of_bounds(pos.0, bounds) {
            despawn_buffer.push(entity);
        } else {
            live.push((entity, pos.0, *shot));
        }
    }

    for (entity, at, shot) in live {
        match shot.owner {
            ProjectileOwner::Player => {
                if hit_enemy(world, at, shot.damage, events) {
                    despawn_buffer.push(entity);
                }
            }
            ProjectileOwner::Enemy => {
                if at.distance_squared(player_position) < PLAYER_HIT_RADIUS * PLAYER_HIT_RADIUS {
                    events.push(SimEvent::PlayerHit {
                        damage: shot.damage,
                    });
                    despawn_buffer.push(entity);
                }
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

fn out_of_bounds(p: DVec2, bounds: WorldBounds) -> bool {
    p.x < -PROJECTILE_MARGIN
        || p.x > bounds.width + PROJECTILE_MARGIN
        || p.y < -PROJECTILE_MARGIN
        || p.y > bounds.height + ENEMY_DESPAWN_MARGIN
}

/// Apply a player shot to the first live enemy it overlaps.
fn hit_enemy(world: &mut World, at: DVec2, damage: f64, events: &mut Vec<SimEvent>) -> bool {
    for (_entity, (pos, enemy)) in world.query_mut::<(&Position, &mut Enemy)>() {
        if !enemy.is_alive() || at.distance_squared(pos.0) >= enemy.radius * enemy.radius {
            continue;
        }
        enemy.apply_damage(damage);
        events.push(SimEvent::EnemyHit {
            kind: enemy.kind,
            hp_left: enemy.hp,
        });
        if !enemy.is_alive() {
            events.push(SimEvent::EnemyDestroyed {
                kind: enemy.kind,
                x: pos.0.x,
                y: pos.0.y,
            });
        }
        return true;
    }
    false
}
