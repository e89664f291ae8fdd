//! Adaptive hunter AI for the arena game.
//!
//! A single stateful predator that remembers where the prey has been (heat
//! map), profiles how the prey plays, and cycles SEARCH → HUNT → CHASE.
//! Randomness is injected per instance so runs are reproducible under test.

pub mod fsm;
pub mod heatmap;
pub mod hunter;
pub mod profiler;
pub mod selector;

pub use hunter::Hunter;
pub use pursuit_core as core;
