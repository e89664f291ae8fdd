//! Squad steering AI for the road game.
//!
//! One `Brain` per enemy converts a `WorldSnapshot` into a steering intent;
//! the team coordinator spreads two or more brains across the road.
//! No ECS dependency; operates on plain data.

pub mod brain;
pub mod noise;
pub mod team;

pub use brain::Brain;
pub use pursuit_core as core;
pub use team::{coordinate_team, TeamAssignment, TeamMember};
