//! Hunter system: feeds the hunter an observation and moves the predator.

use glam::DVec2;
use hecs::World;
use pursuit_hunter_ai::Hunter;

use pursuit_core::constants::{PREDATOR_DASH_FACTOR, PREDATOR_MAX_SPEED};
use pursuit_core::events::SimEvent;
use pursuit_core::types::{Observation, WorldBounds};

use crate::components::{Position, Predator, Velocity};

/// What the host tells the hunter about the prey this tick.
#[derive(Debug, Clone, Copy)]
pub struct PreySignal {
    pub position: DVec2,
    pub visible: bool,
    pub shot: Option<DVec2>,
}

pub fn run(
    world: &mut World,
    hunter: &mut Hunter,
    prey: PreySignal,
    bounds: WorldBounds,
    dt: f64,
    time: f64,
    events: &mut Vec<SimEvent>,
) {
    hunter.observe_player(&Observation {
        position: prey.position,
        bounds,
        dt,
        time,
        visible: prey.visible,
        shot: prey.shot,
    });

    for (_entity, (pos, vel, predator)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Predator)>()
    {
        let before = hunter.mode();
        let action = hunter.decide(pos.0, bounds, dt);
        if hunter.mode() != before {
            events.push(SimEvent::HunterModeChanged {
                from: before,
                to: hunter.mode(),
            });
        }

        let mut speed = PREDATOR_MAX_SPEED;
        if action.desire_dash {
            speed *= PREDATOR_DASH_FACTOR;
        }
        vel.0 = action.acceleration() * speed;
        pos.0 = bounds.clamp(pos.0 + vel.0 * dt);
        predator.action = action;
    }
}
