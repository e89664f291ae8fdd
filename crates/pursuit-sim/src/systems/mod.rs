//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! Run order lives in `SimulationEngine::run_systems`.

pub mod cleanup;
pub mod hunter_ai;
pub mod projectiles;
pub mod snapshot;
pub mod squad_ai;
pub mod team;
pub mod wave_spawner;

/// Convert a per-frame blend factor tuned at `REFERENCE_FPS` into one for `dt`.
pub fn frame_blend(k: f64, dt: f64) -> f64 {
    use pursuit_core::constants::REFERENCE_FPS;

    let k = k.clamp(0.0, 1.0);
    1.0 - (1.0 - k).powf(dt.max(0.0) * REFERENCE_FPS)
}
