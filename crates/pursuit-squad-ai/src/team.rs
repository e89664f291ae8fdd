//! Team coordinator: spreads squad agents across the road.
//!
//! The two rearmost agents (smallest y) become lead and wing. The lead leans
//! toward the player's side of the road, the wing mirrors it. When they
//! crowd each other the wing gets a small sideways nudge. That nudge is the
//! one place an agent's position moves outside physics integration.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use pursuit_core::constants::*;
use pursuit_core::types::{clamp_finite, LaneBounds};

use crate::brain::Brain;

/// Borrowed view of one active agent.
pub struct TeamMember<'a> {
    pub position: &'a mut DVec2,
    pub brain: &'a mut Brain,
}

/// What one coordination pass decided.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamAssignment {
    /// Index of the lead in the input slice.
    pub lead: usize,
    /// Index of the wing in the input slice.
    pub wing: usize,
    /// Bias given to the lead; the wing receives its negation.
    pub lead_bias: f64,
    /// Whether the wing was nudged for spacing.
    pub nudged: bool,
}

/// Assign lane biases to the lead and wing. No-op with fewer than two agents.
pub fn coordinate_team(
    members: &mut [TeamMember<'_>],
    player_x: f64,
    lane: LaneBounds,
) -> Option<TeamAssignment> {
    if members.len() < 2 {
        return None;
    }

    let mut order: Vec<usize> = (0..members.len()).collect();
    order.sort_by(|&a, &b| members[a].position.y.total_cmp(&members[b].position.y));
    let (lead, wing) = (order[0], order[1]);

    let offset = (player_x - lane.center_x) / lane.safe_half_width();
    let bias = clamp_finite(
        offset * TEAM_LANE_BIAS_GAIN,
        -TEAM_LANE_BIAS_CLAMP,
        TEAM_LANE_BIAS_CLAMP,
    );
    members[lead].brain.set_lane_bias(bias);
    members[wing].brain.set_lane_bias(-bias);

    let lead_x = members[lead].position.x;
    let wing_pos = &mut members[wing].position;
    let nudged = (wing_pos.x - lead_x).abs() < TEAM_MIN_SEPARATION;
    if nudged {
        let step = if wing_pos.x < lead_x {
            -TEAM_NUDGE_STEP
        } else {
            TEAM_NUDGE_STEP
        };
        wing_pos.x = lane.clamp_x(wing_pos.x + step, TEAM_ROAD_MARGIN);
    }

    Some(TeamAssignment {
        lead,
        wing,
        lead_bias: bias,
        nudged,
    })
}
