//! Tuning constants for both AI cores and the headless harness.
//!
//! Values were tuned against the arcade pacing of the two games; hunter
//! values are the defaults behind `HunterConfig`.

// --- Squad brain: trait blending ---

pub const BRAIN_AGGRESSION_MIN: f64 = 0.15;
pub const BRAIN_AGGRESSION_MAX: f64 = 0.95;
pub const BRAIN_DODGE_MIN: f64 = 0.25;
pub const BRAIN_DODGE_MAX: f64 = 0.90;
pub const BRAIN_AIM_MIN: f64 = 0.25;
pub const BRAIN_AIM_MAX: f64 = 0.92;

/// Initial trait values for a freshly spawned brain.
pub const BRAIN_AGGRESSION_INITIAL: f64 = 0.45;
pub const BRAIN_DODGE_INITIAL: f64 = 0.55;
pub const BRAIN_AIM_INITIAL: f64 = 0.50;

/// Weight of the player's speed ratio in the threat signal.
pub const THREAT_SPEED_WEIGHT: f64 = 0.65;
/// Weight of the combo / heat signal in the threat signal.
pub const THREAT_COMBO_WEIGHT: f64 = 0.35;

/// Distance metric: forward separation counts this much relative to lateral.
pub const FORWARD_DISTANCE_WEIGHT: f64 = 0.15;

/// Fallback road half width used when aligning aim.
pub const DEFAULT_ROAD_HALF_WIDTH: f64 = 240.0;

// --- Squad brain: steering ---

/// Seconds of player lateral velocity to lead by.
pub const LEAD_VELOCITY_SCALE: f64 = 220.0;
/// Maximum lateral lead distance.
pub const LEAD_CLAMP: f64 = 180.0;
/// Fraction of the lead applied at zero aim.
pub const LEAD_AIM_BASE: f64 = 0.45;
/// Jitter amplitude in world units.
pub const STEER_JITTER: f64 = 16.0;
/// World units per unit of lane bias.
pub const LANE_BIAS_OFFSET: f64 = 40.0;
/// Clearance from the road edge for steering targets.
pub const STEER_ROAD_MARGIN: f64 = 22.0;
/// Lateral error mapping to full steer.
pub const STEER_RESPONSIVENESS: f64 = 160.0;

// --- Squad brain: projectile avoidance ---

/// How far ahead a projectile is considered incoming.
pub const DODGE_LOOKAHEAD: f64 = 260.0;
/// Lateral distance inside which a projectile is a threat.
pub const DODGE_LATERAL_RADIUS: f64 = 28.0;
pub const DODGE_PUSH_BASE: f64 = 0.8;
pub const DODGE_PUSH_GAIN: f64 = 1.6;
/// World units of lateral target shift per unit of push.
pub const DODGE_PUSH_DISTANCE: f64 = 90.0;

// --- Squad brain: combat ---

/// Lateral offset within which the agent counts as aligned with the player.
pub const ALIGNED_DX: f64 = 24.0;
pub const ALIGNED_SHOT_FACTOR: f64 = 0.9;
pub const UNALIGNED_SHOT_FACTOR: f64 = 0.35;
/// Shot chance multiplier when the player is already ahead of the agent.
pub const FRONTAL_PENALTY: f64 = 0.25;
pub const LONG_RANGE_SHOT_GATE: f64 = 0.55;
pub const LONG_RANGE_SHOT_DISTANCE: f64 = 520.0;
pub const CLOSE_SHOT_GATE: f64 = 0.85;
pub const CLOSE_SHOT_DISTANCE: f64 = 360.0;
pub const SHOT_COOLDOWN_BASE: f64 = 0.18;
pub const SHOT_COOLDOWN_AIM_SCALE: f64 = 0.12;

pub const NITRO_AGGRESSION_THRESHOLD: f64 = 0.65;
pub const NITRO_MIN_DISTANCE: f64 = 240.0;
pub const NITRO_CHANCE: f64 = 0.02;

/// Noise bucket rates (buckets per second) for each decision stream.
pub const JITTER_BUCKET_HZ: f64 = 1000.0;
pub const SHOT_BUCKET_HZ: f64 = 60.0;
pub const NITRO_BUCKET_HZ: f64 = 40.0;
/// Seed salt separating the nitro stream from the shot stream.
pub const NITRO_SEED_SALT: u32 = 77;

// --- Team coordinator ---

pub const TEAM_LANE_BIAS_GAIN: f64 = 0.35;
pub const TEAM_LANE_BIAS_CLAMP: f64 = 0.6;
/// Minimum lateral spacing between lead and wing.
pub const TEAM_MIN_SEPARATION: f64 = 80.0;
/// Lateral nudge applied to the wing per coordination pass.
pub const TEAM_NUDGE_STEP: f64 = 1.5;
pub const TEAM_ROAD_MARGIN: f64 = 40.0;

// --- Hunter: heat map ---

/// Cells per axis.
pub const HEAT_GRID_SIZE: usize = 64;
/// Heat per second deposited at the prey's cell.
pub const HEAT_DEPOSIT_RATE: f64 = 6.0;
/// Neighborhood radius in cells.
pub const HEAT_DEPOSIT_RADIUS: i32 = 2;
pub const HEAT_MAX: f64 = 50.0;
/// Fraction of heat lost per second.
pub const HEAT_DECAY_RATE: f64 = 0.35;
/// Largest fraction that may decay in one tick regardless of dt.
pub const HEAT_DECAY_MAX_PER_TICK: f64 = 0.25;
/// Cells below this are flushed to zero.
pub const HEAT_FLOOR: f64 = 1e-9;

// --- Hunter: profiling ---

pub const MOVEMENT_HISTORY_LEN: usize = 120;
pub const SHOT_HISTORY_LEN: usize = 32;
/// Consecutive shot directions with a dot product above this count as steady aim.
pub const ACCURACY_DOT_THRESHOLD: f64 = 0.95;
pub const ACCURACY_MIN_SAMPLES: usize = 4;
pub const ACCURACY_NEUTRAL: f64 = 0.5;
pub const VARIANCE_MIN_SAMPLES: usize = 12;
pub const VARIANCE_NEUTRAL: f64 = 0.5;
/// Movement spread (fraction of world diagonal) that saturates the variance estimate.
pub const VARIANCE_NORM_FRACTION: f64 = 0.25;
pub const SHOT_RATE_WINDOW_SECS: f64 = 3.0;
/// Shots per window that saturate shot pressure.
pub const SHOT_RATE_SATURATION: f64 = 6.0;
/// Approach rate (per second) of aggression and focus toward their targets.
pub const HUNTER_ADAPT_RATE: f64 = 0.8;

pub const HUNTER_AGGRESSION_MIN: f64 = 0.1;
pub const HUNTER_AGGRESSION_MAX: f64 = 1.0;
pub const HUNTER_FOCUS_MIN: f64 = 0.1;
pub const HUNTER_FOCUS_MAX: f64 = 1.0;
pub const HUNTER_AGGRESSION_INITIAL: f64 = 0.5;
pub const HUNTER_FOCUS_INITIAL: f64 = 0.5;

/// Lost timeout at zero focus (seconds).
pub const LOST_TIMEOUT_MAX: f64 = 4.0;
/// Lost timeout at full focus (seconds).
pub const LOST_TIMEOUT_MIN: f64 = 1.5;

// --- Hunter: navigation ---

pub const HUNT_REPICK_SLOW_SECS: f64 = 2.6;
pub const HUNT_REPICK_FAST_SECS: f64 = 0.9;
pub const SEARCH_REPICK_SLOW_SECS: f64 = 4.0;
pub const SEARCH_REPICK_FAST_SECS: f64 = 2.2;
/// Distance at which a navigation target counts as reached.
pub const ARRIVE_RADIUS: f64 = 24.0;

/// Random cells drawn per target selection.
pub const TARGET_SAMPLE_COUNT: usize = 128;
/// Neighbor-climbing steps taken from the best sample.
pub const HILL_CLIMB_STEPS: usize = 8;
/// Weight of the random component when sampling in SEARCH.
pub const SEARCH_RANDOM_BLEND: f64 = 0.6;
pub const EDGE_PENALTY_WEIGHT: f64 = 0.35;
/// Border band (fraction of grid size) over which the edge penalty fades out.
pub const EDGE_MARGIN_FRACTION: f64 = 0.12;

// --- Hunter: motion policy ---

pub const CHASE_SPEED_BASE: f64 = 1.0;
pub const CHASE_SPEED_BOOST: f64 = 1.45;
pub const CHASE_SHOOT_AGGRESSION: f64 = 0.45;
pub const CHASE_SHOOT_RANGE: f64 = 340.0;
pub const CHASE_DASH_AGGRESSION: f64 = 0.75;
pub const CHASE_DASH_RANGE: f64 = 150.0;

pub const HUNT_SPEED_BASE: f64 = 0.7;
pub const HUNT_SPEED_FOCUSED: f64 = 0.95;
pub const HUNT_SHOOT_FOCUS: f64 = 0.65;
pub const HUNT_SHOOT_RANGE: f64 = 220.0;
pub const HUNT_DASH_FOCUS: f64 = 0.85;
pub const HUNT_DASH_RANGE: f64 = 90.0;

pub const SEARCH_SPEED: f64 = 0.45;

// --- Harness: road game ---

pub const ROAD_LANES: usize = 5;
pub const ENEMY_SPAWN_Y: f64 = -80.0;
pub const ENEMY_SPAWN_JITTER: f64 = 10.0;
pub const ENEMY_SPEED_MIN: f64 = 420.0;
pub const ENEMY_SPEED_MAX: f64 = 640.0;
/// Lateral speed at full steer.
pub const ENEMY_STEER_SPEED: f64 = 180.0;
/// Per-tick blend of current lateral velocity toward the steered one.
pub const ENEMY_STEER_BLEND: f64 = 0.08;
pub const ENEMY_ROAD_MARGIN: f64 = 26.0;
/// Share of own speed and of player speed that advances an enemy down the screen.
pub const ENEMY_OWN_SPEED_SHARE: f64 = 0.65;
pub const ENEMY_PLAYER_SPEED_SHARE: f64 = 0.32;
pub const ENEMY_DESPAWN_MARGIN: f64 = 140.0;

pub const NITRO_FUEL_MAX: f64 = 60.0;
pub const NITRO_BURN_RATE: f64 = 24.0;
pub const NITRO_REFILL_RATE: f64 = 10.0;
pub const NITRO_SPEED_FACTOR: f64 = 1.12;

pub const ENEMY_SHOT_LATERAL_SPEED: f64 = 240.0;
pub const ENEMY_SHOT_AIM_SPAN: f64 = 220.0;
pub const ENEMY_SHOT_FORWARD_SPEED: f64 = 980.0;
pub const ENEMY_SHOT_MUZZLE_OFFSET: f64 = 20.0;
pub const PROJECTILE_MARGIN: f64 = 120.0;

/// Spawn mix thresholds on a uniform roll.
pub const TANK_SPAWN_CHANCE: f64 = 0.12;
pub const SNIPER_SPAWN_CHANCE: f64 = 0.16;

/// Predator top speed in the hunter arena (world units per second).
pub const PREDATOR_MAX_SPEED: f64 = 140.0;

pub const PLAYER_SHOT_SPEED: f64 = 1120.0;
/// Share of player speed added to a player shot's forward speed.
pub const PLAYER_SHOT_SPEED_SHARE: f64 = 0.55;
pub const PLAYER_SHOT_MUZZLE_OFFSET: f64 = 28.0;
pub const PLAYER_SHOT_DAMAGE: f64 = 18.0;
pub const ENEMY_SHOT_DAMAGE: f64 = 14.0;
pub const PLAYER_HIT_RADIUS: f64 = 22.0;
/// Share of each hit that armor soaks up while it lasts.
pub const ARMOR_ABSORB: f64 = 0.65;

/// Frame rate the per-frame blend factors were tuned at.
pub const REFERENCE_FPS: f64 = 60.0;
/// Mean seconds between spawns at difficulty 1.
pub const SPAWN_INTERVAL_BASE: f64 = 0.72;

pub const PREDATOR_DASH_FACTOR: f64 = 1.6;

// --- Harness: default arena ---

pub const DEFAULT_WORLD_WIDTH: f64 = 960.0;
pub const DEFAULT_WORLD_HEIGHT: f64 = 720.0;
pub const DEFAULT_ROAD_X: f64 = 480.0;
pub const DEFAULT_MAX_ENEMIES: usize = 7;
