//! Team system: one coordination pass over live enemies before their brains run.

use hecs::World;
use pursuit_squad_ai::{coordinate_team, Brain, TeamAssignment, TeamMember};

use pursuit_core::types::LaneBounds;

use crate::components::{Enemy, Position};

pub fn run(world: &mut World, player_x: f64, lane: LaneBounds) -> Option<TeamAssignment> {
    let mut members: Vec<TeamMember<'_>> = world
        .query_mut::<(&mut Position, &mut Brain, &Enemy)>()
        .into_iter()
        .filter(|(_, (_, _, enemy))| enemy.is_alive())
        .map(|(_, (pos, brain, _))| TeamMember {
            position: &mut pos.0,
            brain,
        })
        .collect();
    coordinate_team(&mut members, player_x, lane)
}
