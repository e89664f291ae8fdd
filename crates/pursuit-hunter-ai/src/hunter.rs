//! The hunter: one stateful predator per arena.
//!
//! Owns its heat map, player profile, mode, and navigation target. The host
//! calls `observe_player` then `decide` once per tick; `reset` on death or
//! restart returns everything to the initial SEARCH state.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use pursuit_core::config::{ConfigError, HunterConfig};
use pursuit_core::constants::HEAT_FLOOR;
use pursuit_core::enums::HunterMode;
use pursuit_core::types::{HunterAction, Observation, WorldBounds};

use crate::fsm::{self, ModeContext, MotionContext};
use crate::heatmap::HeatMap;
use crate::profiler::PlayerProfile;
use crate::selector::select_target;

pub struct Hunter<R: Rng = ChaCha8Rng> {
    config: HunterConfig,
    rng: R,
    heat: HeatMap,
    profile: PlayerProfile,
    mode: HunterMode,
    elapsed_in_mode: f64,
    last_seen: Option<DVec2>,
    since_seen: f64,
    nav_target: Option<DVec2>,
    nav_elapsed: f64,
}

impl Hunter<ChaCha8Rng> {
    /// Reproducible hunter with default tuning.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Hunter seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Hunter<R> {
    /// Hunter with default tuning and the given random source.
    pub fn new(rng: R) -> Self {
        Self::build(HunterConfig::default(), rng)
    }

    /// Hunter with custom tuning. Fails if the config does not validate.
    pub fn with_config(config: HunterConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: HunterConfig, rng: R) -> Self {
        Self {
            heat: HeatMap::new(config.grid_size),
            profile: PlayerProfile::new(&config),
            config,
            rng,
            mode: HunterMode::Search,
            elapsed_in_mode: 0.0,
            last_seen: None,
            since_seen: 0.0,
            nav_target: None,
            nav_elapsed: 0.0,
        }
    }

    /// Fold one tick of prey evidence into memory.
    pub fn observe_player(&mut self, obs: &Observation) {
        let dt = sanitize_dt(obs.dt);
        let cfg = &self.config;

        // Heat is a trail, not sight: deposited whether or not the prey is visible.
        self.heat.deposit(
            obs.position,
            obs.bounds,
            cfg.heat_deposit_rate * dt,
            cfg.heat_deposit_radius,
            cfg.heat_max,
        );
        self.profile.record(obs, cfg);

        if obs.visible {
            self.last_seen = Some(obs.position);
            self.since_seen = 0.0;
        } else {
            self.since_seen += dt;
        }

        self.heat.decay(
            dt,
            cfg.heat_decay_rate,
            cfg.heat_decay_max_per_tick,
            HEAT_FLOOR,
        );
        self.profile.adapt(obs.time, dt, obs.bounds, cfg);
    }

    /// Update the mode and produce this tick's action.
    pub fn decide(&mut self, predator: DVec2, bounds: WorldBounds, dt: f64) -> HunterAction {
        let dt = sanitize_dt(dt);
        self.elapsed_in_mode += dt;

        let update = fsm::evaluate(&ModeContext {
            mode: self.mode,
            has_sighting: self.last_seen.is_some(),
            since_seen_secs: self.since_seen,
            lost_timeout_secs: self.lost_timeout(),
        });
        if update.mode_changed {
            debug!(
                from = %self.mode,
                to = %update.new_mode,
                since_seen = self.since_seen,
                lost_timeout = self.lost_timeout(),
                "hunter mode change"
            );
            self.enter(update.new_mode);
        }

        let target = match self.mode {
            HunterMode::Chase => self.last_seen.unwrap_or(predator),
            HunterMode::Hunt | HunterMode::Search => self.navigation_target(predator, bounds, dt),
        };

        fsm::motion(&MotionContext {
            mode: self.mode,
            predator,
            target,
            aggression: self.profile.aggression(),
            focus: self.profile.focus(),
        })
    }

    fn enter(&mut self, mode: HunterMode) {
        self.mode = mode;
        self.elapsed_in_mode = 0.0;
        self.nav_target = None;
        self.nav_elapsed = 0.0;
    }

    /// Current navigation target, re-picked when missing, stale, or reached.
    fn navigation_target(&mut self, predator: DVec2, bounds: WorldBounds, dt: f64) -> DVec2 {
        self.nav_elapsed += dt;
        let interval = self.repick_interval();
        let stale = match self.nav_target {
            None => true,
            Some(t) => {
                self.nav_elapsed >= interval || t.distance(predator) < self.config.arrive_radius
            }
        };
        if stale {
            let prefer_hot = self.mode == HunterMode::Hunt;
            let target = select_target(&self.heat, bounds, prefer_hot, &self.config, &mut self.rng);
            trace!(mode = %self.mode, x = target.x, y = target.y, "navigation target");
            self.nav_target = Some(target);
            self.nav_elapsed = 0.0;
        }
        self.nav_target.unwrap_or_else(|| bounds.center())
    }

    /// Seconds between target re-picks; higher focus re-picks sooner.
    pub fn repick_interval(&self) -> f64 {
        let f = self.profile.focus().clamp(0.0, 1.0);
        let (slow, fast) = match self.mode {
            HunterMode::Search => (
                self.config.search_repick_slow_secs,
                self.config.search_repick_fast_secs,
            ),
            _ => (
                self.config.hunt_repick_slow_secs,
                self.config.hunt_repick_fast_secs,
            ),
        };
        slow + (fast - slow) * f
    }

    /// Back to SEARCH with empty memory. The random source is kept.
    pub fn reset(&mut self) {
        self.heat.clear();
        self.profile.clear(&self.config);
        self.last_seen = None;
        self.since_seen = 0.0;
        self.enter(HunterMode::Search);
        debug!("hunter reset");
    }

    /// HUD label for the current mode.
    pub fn state_label(&self) -> &'static str {
        self.mode.label()
    }

    pub fn mode(&self) -> HunterMode {
        self.mode
    }

    pub fn elapsed_in_mode(&self) -> f64 {
        self.elapsed_in_mode
    }

    pub fn last_seen(&self) -> Option<DVec2> {
        self.last_seen
    }

    pub fn since_seen(&self) -> f64 {
        self.since_seen
    }

    pub fn nav_target(&self) -> Option<DVec2> {
        self.nav_target
    }

    pub fn lost_timeout(&self) -> f64 {
        self.profile.lost_timeout(&self.config)
    }

    pub fn aggression(&self) -> f64 {
        self.profile.aggression()
    }

    pub fn focus(&self) -> f64 {
        self.profile.focus()
    }

    pub fn heat(&self) -> &HeatMap {
        &self.heat
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn config(&self) -> &HunterConfig {
        &self.config
    }
}

fn sanitize_dt(dt: f64) -> f64 {
    if dt.is_finite() {
        dt.max(0.0)
    } else {
        0.0
    }
}
