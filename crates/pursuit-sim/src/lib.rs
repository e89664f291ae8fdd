//! Headless harness for the pursuit AI cores.
//!
//! Owns a hecs ECS world, drives squad brains and the hunter once per tick
//! with a host-supplied dt, and produces `SimSnapshot`s. No rendering, audio
//! or input, so runs are deterministic under a fixed seed.

pub mod components;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{PlayerInput, SimConfig, SimulationEngine};
pub use systems::snapshot::SimSnapshot;
pub use pursuit_core as core;

#[cfg(test)]
mod tests;
