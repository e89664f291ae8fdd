//! Squad AI system: runs every enemy brain and applies its intent.
//!
//! Brains see a shared list of player projectiles built once per tick.
//! Shots requested during the pass are spawned after the query ends.

use glam::DVec2;
use hecs::World;
use pursuit_squad_ai::Brain;

use pursuit_core::constants::*;
use pursuit_core::enums::ProjectileOwner;
use pursuit_core::events::SimEvent;
use pursuit_core::types::{AgentState, LaneBounds, PlayerState, Projectile, WorldSnapshot};

use crate::components::{Enemy, Position, Shot, Velocity};
use crate::systems::frame_blend;
use crate::world_setup;

pub fn run(
    world: &mut World,
    player: &PlayerState,
    lane: LaneBounds,
    dt: f64,
    events: &mut Vec<SimEvent>,
) {
    let incoming: Vec<Projectile> = world
        .query_mut::<(&Position, &Shot)>()
        .into_iter()
        .filter(|(_, (_, shot))| shot.owner == ProjectileOwner::Player)
        .map(|(_, (pos, shot))| Projectile {
            position: pos.0,
            owner: shot.owner,
        })
        .collect();

    let blend = frame_blend(ENEMY_STEER_BLEND, dt);
    let mut shots: Vec<DVec2> = Vec::new();

    for (_entity, (pos, vel, enemy, brain)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Enemy, &mut Brain)>()
    {
        if !enemy.is_alive() {
            continue;
        }
        enemy.fire_cd = (enemy.fire_cd - dt).max(0.0);

        let intent = brain.update(
            dt,
            &WorldSnapshot {
                player: *player,
                agent: AgentState {
                    position: pos.0,
                    vx: vel.0.x,
                    hp: enemy.hp,
                    hp_max: enemy.hp_max,
                },
                projectiles: &incoming,
                lane,
            },
        );

        let desired_vx = intent.steer * ENEMY_STEER_SPEED;
        vel.0.x += (desired_vx - vel.0.x) * blend;

        let mut speed = enemy.speed;
        if intent.want_nitro && enemy.nitro > 0.0 {
            speed *= NITRO_SPEED_FACTOR;
            enemy.nitro = (enemy.nitro - NITRO_BURN_RATE * dt).max(0.0);
        } else {
            enemy.nitro = (enemy.nitro + NITRO_REFILL_RATE * dt).min(NITRO_FUEL_MAX);
        }

        vel.0.y = speed * ENEMY_OWN_SPEED_SHARE + player.speed * ENEMY_PLAYER_SPEED_SHARE;
        pos.0 += vel.0 * dt;
        pos.0.x = lane.clamp_x(pos.0.x, ENEMY_ROAD_MARGIN);

        if intent.want_shoot && enemy.fire_cd <= 0.0 {
            enemy.fire_cd = enemy.fire_interval;
            shots.push(pos.0);
        }
    }

    for origin in shots {
        let aim = ((player.position.x - origin.x) / ENEMY_SHOT_AIM_SPAN).clamp(-1.0, 1.0);
        let muzzle = origin + DVec2::new(0.0, ENEMY_SHOT_MUZZLE_OFFSET);
        world_setup::spawn_shot(
            world,
            ProjectileOwner::Enemy,
            muzzle,
            DVec2::new(aim * ENEMY_SHOT_LATERAL_SPEED, ENEMY_SHOT_FORWARD_SPEED),
            ENEMY_SHOT_DAMAGE,
        );
        events.push(SimEvent::EnemyFired {
            x: muzzle.x,
            y: muzzle.y,
        });
    }
}
