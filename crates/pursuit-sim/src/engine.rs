//! Simulation engine: the harness around the AI cores.
//!
//! `SimulationEngine` owns the hecs ECS world, runs all systems once per
//! host tick, and produces `SimSnapshot`s. Completely headless, so a fixed
//! seed and a fixed dt sequence replay exactly.

use glam::DVec2;
use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use pursuit_core::config::{ConfigError, HunterConfig};
use pursuit_core::constants::*;
use pursuit_core::enums::{EnemyKind, ProjectileOwner};
use pursuit_core::events::SimEvent;
use pursuit_core::types::{HunterAction, LaneBounds, PlayerState, SimTime, WorldBounds};
use pursuit_hunter_ai::Hunter;

use crate::components::{Enemy, Position, Predator, Shot, Velocity};
use crate::systems;
use crate::systems::hunter_ai::PreySignal;
use crate::systems::snapshot::SimSnapshot;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub road_x: f64,
    pub road_half_width: f64,
    pub world_width: f64,
    pub world_height: f64,
    /// Cap on live enemies; zero disables spawning.
    pub max_enemies: usize,
    /// Scales enemy speed and spawn rate.
    pub difficulty: f64,
    /// Host a hunter and its predator entity.
    pub enable_hunter: bool,
    pub hunter: HunterConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            road_x: DEFAULT_ROAD_X,
            road_half_width: DEFAULT_ROAD_HALF_WIDTH,
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            max_enemies: DEFAULT_MAX_ENEMIES,
            difficulty: 1.0,
            enable_hunter: true,
            hunter: HunterConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("road_half_width", self.road_half_width),
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("difficulty", self.difficulty),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if !(self.road_x >= 0.0 && self.road_x <= self.world_width) {
            return Err(ConfigError::OutOfRange {
                field: "road_x",
                value: self.road_x,
                min: 0.0,
                max: self.world_width,
            });
        }
        self.hunter.validate()
    }

    pub fn lane(&self) -> LaneBounds {
        LaneBounds::new(self.road_x, self.road_half_width)
    }

    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::new(self.world_width, self.world_height)
    }
}

/// Host input for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerInput {
    pub player: PlayerState,
    /// Lateral velocity of a shot the player fired this tick.
    #[serde(default)]
    pub fire: Option<f64>,
    /// The hunter has line of sight to the player this tick.
    #[serde(default)]
    pub visible_to_hunter: bool,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    config: SimConfig,
    rng: ChaCha8Rng,
    hunter: Option<Hunter>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create an engine, falling back to the default config when `config` is invalid.
    pub fn new(config: SimConfig) -> Self {
        match Self::try_new(config) {
            Ok(engine) => engine,
            Err(err) => {
                warn!(%err, "invalid sim config, using defaults");
                Self::build(SimConfig::default())
            }
        }
    }

    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut world = World::new();

        let hunter = if config.enable_hunter {
            let hunter_rng = ChaCha8Rng::seed_from_u64(rng.gen());
            // validate() already checked the hunter config.
            let hunter = Hunter::with_config(config.hunter.clone(), hunter_rng)
                .unwrap_or_else(|_| Hunter::from_seed(config.seed));
            world_setup::spawn_predator(&mut world, config.bounds().center());
            Some(hunter)
        } else {
            None
        };

        debug!(seed = config.seed, hunter = config.enable_hunter, "sim engine created");
        Self {
            world,
            time: SimTime::default(),
            config,
            rng,
            hunter,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    pub fn tick(&mut self, dt: f64, input: &PlayerInput) -> SimSnapshot {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.run_systems(dt, input);
        self.time.advance(dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.hunter.as_ref(), events)
    }

    fn run_systems(&mut self, dt: f64, input: &PlayerInput) {
        let lane = self.config.lane();
        let bounds = self.config.bounds();
        let player = &input.player;

        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            lane,
            self.config.difficulty,
            self.config.max_enemies,
            dt,
            &mut self.events,
        );

        let shot = input.fire.filter(|vx| vx.is_finite()).map(|vx| {
            let velocity = world_setup::player_shot_velocity(vx, player.speed);
            world_setup::spawn_shot(
                &mut self.world,
                ProjectileOwner::Player,
                player.position - DVec2::new(0.0, PLAYER_SHOT_MUZZLE_OFFSET),
                velocity,
                PLAYER_SHOT_DAMAGE,
            );
            velocity
        });

        systems::team::run(&mut self.world, player.position.x, lane);
        systems::squad_ai::run(&mut self.world, player, lane, dt, &mut self.events);
        systems::projectiles::run(
            &mut self.world,
            player.position,
            bounds,
            dt,
            &mut self.despawn_buffer,
            &mut self.events,
        );

        if let Some(hunter) = self.hunter.as_mut() {
            systems::hunter_ai::run(
                &mut self.world,
                hunter,
                PreySignal {
                    position: player.position,
                    visible: input.visible_to_hunter,
                    shot,
                },
                bounds,
                dt,
                self.time.elapsed_secs + dt,
                &mut self.events,
            );
        }

        systems::cleanup::run(
            &mut self.world,
            self.config.world_height,
            &mut self.despawn_buffer,
            &mut self.events,
        );
    }

    /// Despawn every enemy and in-flight shot. Brains go with their enemies.
    pub fn reset_wave(&mut self) {
        let doomed: Vec<Entity> = self
            .world
            .iter()
            .filter(|e| e.has::<Enemy>() || e.has::<Shot>())
            .map(|e| e.entity())
            .collect();
        debug!(count = doomed.len(), "wave reset");
        for entity in doomed {
            let _ = self.world.despawn(entity);
        }
    }

    /// Reset the hunter after the player dies; the predator returns to the center.
    pub fn reset_hunter(&mut self) {
        let Some(hunter) = self.hunter.as_mut() else {
            return;
        };
        hunter.reset();
        let center = self.config.bounds().center();
        for (_entity, (pos, vel, predator)) in self
            .world
            .query_mut::<(&mut Position, &mut Velocity, &mut Predator)>()
        {
            pos.0 = center;
            vel.0 = DVec2::ZERO;
            predator.action = HunterAction::default();
        }
    }

    /// Spawn an enemy of `kind` at `position`, bypassing the spawn roll.
    pub fn spawn_enemy(&mut self, kind: EnemyKind, position: DVec2) -> Entity {
        world_setup::spawn_enemy_at(
            &mut self.world,
            &mut self.rng,
            kind,
            position,
            self.config.difficulty,
        )
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn hunter(&self) -> Option<&Hunter> {
        self.hunter.as_ref()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of live enemies.
    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
