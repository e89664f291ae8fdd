//! Tests for the simulation engine, spawn factories, and per-tick systems.

use glam::DVec2;

use pursuit_core::config::ConfigError;
use pursuit_core::constants::*;
use pursuit_core::enums::{EnemyKind, HunterMode, ProjectileOwner};
use pursuit_core::events::SimEvent;
use pursuit_core::types::PlayerState;

use crate::components::{Enemy, Position};
use crate::engine::{PlayerInput, SimConfig, SimulationEngine};
use crate::systems::frame_blend;
use crate::world_setup;

const DT: f64 = 1.0 / 60.0;

fn player_at(x: f64, y: f64, speed: f64) -> PlayerInput {
    PlayerInput {
        player: PlayerState {
            position: DVec2::new(x, y),
            velocity: DVec2::ZERO,
            speed,
            max_speed: 900.0,
            combo_heat: None,
        },
        fire: None,
        visible_to_hunter: false,
    }
}

fn quiet_config() -> SimConfig {
    SimConfig {
        max_enemies: 0,
        enable_hunter: false,
        ..Default::default()
    }
}

// ---- Config ----

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let bad = SimConfig {
        road_half_width: -5.0,
        ..Default::default()
    };
    assert_eq!(
        SimulationEngine::try_new(bad.clone()).err(),
        Some(ConfigError::NotPositive {
            field: "road_half_width",
            value: -5.0
        })
    );
    let engine = SimulationEngine::new(bad);
    assert_eq!(engine.config(), &SimConfig::default());
}

#[test]
fn test_road_outside_world_rejected() {
    let bad = SimConfig {
        road_x: 5000.0,
        ..Default::default()
    };
    assert!(matches!(
        bad.validate(),
        Err(ConfigError::OutOfRange { field: "road_x", .. })
    ));
}

#[test]
fn test_invalid_hunter_config_rejected() {
    let mut bad = SimConfig::default();
    bad.hunter.grid_size = 0;
    assert!(SimulationEngine::try_new(bad).is_err());
}

#[test]
fn test_sim_config_partial_json() {
    let config: SimConfig = serde_json::from_str(r#"{"seed": 7, "difficulty": 1.5}"#).unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.difficulty, 1.5);
    assert_eq!(config.max_enemies, DEFAULT_MAX_ENEMIES);
    assert!(config.validate().is_ok());
}

// ---- Components ----

#[test]
fn test_armor_absorbs_part_of_each_hit() {
    let profile = world_setup::enemy_profile(EnemyKind::Raider);
    let mut enemy = Enemy {
        kind: EnemyKind::Raider,
        hp: profile.hp,
        hp_max: profile.hp,
        armor: profile.armor,
        radius: profile.radius,
        speed: 500.0,
        fire_cd: 0.0,
        fire_interval: profile.fire_interval,
        nitro: NITRO_FUEL_MAX,
    };

    enemy.apply_damage(18.0);
    assert!((enemy.armor - 8.3).abs() < 1e-9);
    assert!((enemy.hp - 63.7).abs() < 1e-9);

    // Armor runs out partway through the second hit.
    enemy.apply_damage(18.0);
    assert_eq!(enemy.armor, 0.0);
    assert!((enemy.hp - 54.0).abs() < 1e-9);

    enemy.hp = 5.0;
    enemy.apply_damage(18.0);
    assert_eq!(enemy.hp, 0.0);
    assert!(!enemy.is_alive());
}

#[test]
fn test_enemy_profiles() {
    let tank = world_setup::enemy_profile(EnemyKind::Tank);
    assert_eq!((tank.hp, tank.armor, tank.radius), (120.0, 40.0, 30.0));
    let sniper = world_setup::enemy_profile(EnemyKind::Sniper);
    assert_eq!(sniper.fire_interval, 0.26);
    let raider = world_setup::enemy_profile(EnemyKind::Raider);
    assert_eq!(raider.fire_interval, 0.34);
}

#[test]
fn test_player_shot_velocity_scales_with_speed() {
    let v = world_setup::player_shot_velocity(30.0, 400.0);
    assert_eq!(v.x, 30.0);
    assert!((v.y + (1120.0 + 400.0 * 0.55)).abs() < 1e-9);
}

#[test]
fn test_frame_blend_matches_reference_rate() {
    assert!((frame_blend(0.08, 1.0 / 60.0) - 0.08).abs() < 1e-12);
    assert_eq!(frame_blend(0.08, 0.0), 0.0);
    let two_frames = frame_blend(0.08, 2.0 / 60.0);
    assert!((two_frames - (1.0 - 0.92f64 * 0.92)).abs() < 1e-12);
}

// ---- Spawning ----

#[test]
fn test_no_spawn_when_capped_at_zero() {
    let mut engine = SimulationEngine::new(quiet_config());
    let input = player_at(480.0, 600.0, 500.0);
    for _ in 0..600 {
        let snap = engine.tick(DT, &input);
        assert!(snap.enemies.is_empty());
    }
}

#[test]
fn test_enemies_spawn_in_lanes_and_respect_cap() {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: 9,
        enable_hunter: false,
        ..Default::default()
    });
    let input = player_at(480.0, 600.0, 500.0);
    let lane = engine.config().lane();

    let mut spawned = 0;
    for _ in 0..900 {
        let snap = engine.tick(DT, &input);
        assert!(snap.enemies.len() <= DEFAULT_MAX_ENEMIES);
        for event in &snap.events {
            if let SimEvent::EnemySpawned { x, .. } = event {
                spawned += 1;
                assert!(*x > lane.left(0.0) && *x < lane.right(0.0));
            }
        }
        for enemy in &snap.enemies {
            assert!(enemy.position.x >= lane.left(ENEMY_ROAD_MARGIN) - 1e-9);
            assert!(enemy.position.x <= lane.right(ENEMY_ROAD_MARGIN) + 1e-9);
            assert!(enemy.nitro >= 0.0 && enemy.nitro <= NITRO_FUEL_MAX);
        }
    }
    assert!(spawned > 0, "15 seconds of play should spawn enemies");
}

// ---- Team ----

#[test]
fn test_team_pass_assigns_mirrored_biases() {
    let mut engine = SimulationEngine::new(SimConfig {
        max_enemies: 2,
        enable_hunter: false,
        ..Default::default()
    });
    engine.spawn_enemy(EnemyKind::Raider, DVec2::new(400.0, 100.0));
    engine.spawn_enemy(EnemyKind::Raider, DVec2::new(560.0, 200.0));

    let snap = engine.tick(DT, &player_at(600.0, 650.0, 300.0));
    assert_eq!(snap.enemies.len(), 2);

    let lead = snap
        .enemies
        .iter()
        .min_by(|a, b| a.position.y.total_cmp(&b.position.y))
        .unwrap();
    let wing = snap
        .enemies
        .iter()
        .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
        .unwrap();
    assert!((lead.lane_bias - 0.175).abs() < 1e-9);
    assert!((wing.lane_bias + 0.175).abs() < 1e-9);
}

// ---- Projectiles ----

#[test]
fn test_player_shot_damages_enemy() {
    let mut engine = SimulationEngine::new(quiet_config());
    let enemy = engine.spawn_enemy(EnemyKind::Raider, DVec2::new(480.0, 300.0));
    world_setup::spawn_shot(
        engine.world_mut(),
        ProjectileOwner::Player,
        DVec2::new(480.0, 300.0),
        DVec2::ZERO,
        PLAYER_SHOT_DAMAGE,
    );

    let snap = engine.tick(1e-4, &player_at(480.0, 700.0, 0.0));
    assert!(snap.events.iter().any(|e| matches!(
        e,
        SimEvent::EnemyHit { kind: EnemyKind::Raider, hp_left } if (hp_left - 63.7).abs() < 1e-9
    )));
    assert!(snap.projectiles.is_empty(), "shot is consumed by the hit");
    assert!(engine.world().get::<&Enemy>(enemy).is_ok());
}

#[test]
fn test_destroyed_enemy_is_despawned() {
    let mut engine = SimulationEngine::new(quiet_config());
    let enemy = engine.spawn_enemy(EnemyKind::Tank, DVec2::new(480.0, 300.0));
    {
        let mut e = engine.world_mut().get::<&mut Enemy>(enemy).unwrap();
        e.hp = 1.0;
        e.armor = 0.0;
    }
    world_setup::spawn_shot(
        engine.world_mut(),
        ProjectileOwner::Player,
        DVec2::new(480.0, 300.0),
        DVec2::ZERO,
        PLAYER_SHOT_DAMAGE,
    );

    let snap = engine.tick(1e-4, &player_at(480.0, 700.0, 0.0));
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::EnemyDestroyed { kind: EnemyKind::Tank, .. })));
    assert!(snap.enemies.is_empty());
    assert_eq!(engine.enemy_count(), 0);
}

#[test]
fn test_enemy_shot_hits_player() {
    let mut engine = SimulationEngine::new(quiet_config());
    world_setup::spawn_shot(
        engine.world_mut(),
        ProjectileOwner::Enemy,
        DVec2::new(480.0, 590.0),
        DVec2::ZERO,
        ENEMY_SHOT_DAMAGE,
    );

    let snap = engine.tick(DT, &player_at(480.0, 600.0, 0.0));
    assert_eq!(snap.events, vec![SimEvent::PlayerHit { damage: 14.0 }]);
    assert!(snap.projectiles.is_empty());
}

#[test]
fn test_player_fire_spawns_shot_above_player() {
    let mut engine = SimulationEngine::new(quiet_config());
    let mut input = player_at(480.0, 600.0, 200.0);
    input.fire = Some(0.0);

    let snap = engine.tick(DT, &input);
    assert_eq!(snap.projectiles.len(), 1);
    let shot = &snap.projectiles[0];
    assert_eq!(shot.owner, ProjectileOwner::Player);
    assert!(shot.position.y < 600.0 - PLAYER_SHOT_MUZZLE_OFFSET);
    assert!((shot.velocity.y + (1120.0 + 200.0 * 0.55)).abs() < 1e-9);
}

#[test]
fn test_projectiles_leaving_world_are_removed() {
    let mut engine = SimulationEngine::new(quiet_config());
    let mut input = player_at(480.0, 600.0, 0.0);
    input.fire = Some(0.0);
    engine.tick(DT, &input);
    input.fire = None;

    // 600 + margin at 1120 px/s is well under two seconds.
    for _ in 0..120 {
        engine.tick(DT, &input);
    }
    assert!(engine.tick(DT, &input).projectiles.is_empty());
}

// ---- Cleanup ----

#[test]
fn test_enemy_past_bottom_escapes() {
    let mut engine = SimulationEngine::new(quiet_config());
    let y = DEFAULT_WORLD_HEIGHT + ENEMY_DESPAWN_MARGIN - 0.1;
    engine.spawn_enemy(EnemyKind::Sniper, DVec2::new(480.0, y));

    let snap = engine.tick(DT, &player_at(480.0, 600.0, 0.0));
    assert!(snap
        .events
        .contains(&SimEvent::EnemyEscaped { kind: EnemyKind::Sniper }));
    assert_eq!(engine.enemy_count(), 0);
}

#[test]
fn test_reset_wave_clears_enemies_and_shots() {
    let mut engine = SimulationEngine::new(quiet_config());
    for i in 0..3 {
        engine.spawn_enemy(EnemyKind::Raider, DVec2::new(400.0 + 40.0 * i as f64, 100.0));
    }
    let mut input = player_at(480.0, 600.0, 0.0);
    input.fire = Some(0.0);
    engine.tick(DT, &input);

    engine.reset_wave();
    assert_eq!(engine.enemy_count(), 0);
    let snap = engine.tick(DT, &player_at(480.0, 600.0, 0.0));
    assert!(snap.enemies.is_empty());
    assert!(snap.projectiles.is_empty());
}

#[test]
fn test_enemies_move_down_the_road() {
    let mut engine = SimulationEngine::new(quiet_config());
    let enemy = engine.spawn_enemy(EnemyKind::Raider, DVec2::new(480.0, 100.0));
    engine.tick(DT, &player_at(480.0, 600.0, 300.0));
    let y = engine.world().get::<&Position>(enemy).unwrap().0.y;
    assert!(y > 100.0);
}

// ---- Hunter ----

#[test]
fn test_sighting_switches_hunter_to_chase() {
    let mut engine = SimulationEngine::new(SimConfig {
        max_enemies: 0,
        ..Default::default()
    });
    assert_eq!(engine.hunter().unwrap().mode(), HunterMode::Search);

    let mut input = player_at(200.0, 200.0, 0.0);
    input.visible_to_hunter = true;
    let snap = engine.tick(DT, &input);

    assert!(snap.events.contains(&SimEvent::HunterModeChanged {
        from: HunterMode::Search,
        to: HunterMode::Chase,
    }));
    let view = snap.hunter.unwrap();
    assert_eq!(view.mode, HunterMode::Chase);
    assert_eq!(view.label, "CHASE");
    assert_eq!(view.last_seen, Some(DVec2::new(200.0, 200.0)));
}

#[test]
fn test_predator_closes_in_and_stays_in_bounds() {
    let mut engine = SimulationEngine::new(SimConfig {
        max_enemies: 0,
        ..Default::default()
    });
    let bounds = engine.config().bounds();
    let prey = DVec2::new(100.0, 100.0);
    let mut input = player_at(prey.x, prey.y, 0.0);
    input.visible_to_hunter = true;

    let start = engine.tick(DT, &input).hunter.unwrap().predator;
    let mut last = start;
    for _ in 0..120 {
        last = engine.tick(DT, &input).hunter.unwrap().predator;
        assert!(last.x >= 0.0 && last.x <= bounds.width);
        assert!(last.y >= 0.0 && last.y <= bounds.height);
    }
    assert!(last.distance(prey) < start.distance(prey));
}

#[test]
fn test_reset_hunter_returns_to_search_at_center() {
    let mut engine = SimulationEngine::new(SimConfig {
        max_enemies: 0,
        ..Default::default()
    });
    let mut input = player_at(100.0, 100.0, 0.0);
    input.visible_to_hunter = true;
    for _ in 0..30 {
        engine.tick(DT, &input);
    }

    engine.reset_hunter();
    let hunter = engine.hunter().unwrap();
    assert_eq!(hunter.mode(), HunterMode::Search);
    assert!(hunter.last_seen().is_none());
    assert_eq!(hunter.heat().total(), 0.0);

    let center = engine.config().bounds().center();
    let predator = engine
        .world()
        .query::<(&Position, &crate::components::Predator)>()
        .iter()
        .map(|(_, (pos, _))| pos.0)
        .next()
        .unwrap();
    assert_eq!(predator, center);
}

#[test]
fn test_snapshot_without_hunter() {
    let mut engine = SimulationEngine::new(quiet_config());
    assert!(engine.hunter().is_none());
    let snap = engine.tick(DT, &player_at(480.0, 600.0, 0.0));
    assert!(snap.hunter.is_none());
    assert_eq!(snap.tick, 1);
}

// ---- Time ----

#[test]
fn test_bad_dt_does_not_advance_clock() {
    let mut engine = SimulationEngine::new(quiet_config());
    let input = player_at(480.0, 600.0, 0.0);
    engine.tick(f64::NAN, &input);
    engine.tick(-1.0, &input);
    let snap = engine.tick(0.5, &input);
    assert_eq!(snap.tick, 3);
    assert_eq!(snap.elapsed_secs, 0.5);
}
