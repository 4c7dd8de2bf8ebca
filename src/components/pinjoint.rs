//! Rope-style joint between a vine segment and its predecessor.
//!
//! The joint is an inequality constraint: the follower may drift freely but
//! never farther than `rest_length` from the target. See
//! [`crate::systems::joints::solve_pin_joints`] for the solver.

use bevy_ecs::prelude::{Component, Entity};

#[derive(Component, Debug, Clone, Copy)]
pub struct PinJoint {
    /// Entity this one hangs from (previous segment or the anchor).
    pub target: Entity,
    /// Maximum allowed distance to the target.
    pub rest_length: f32,
}

impl PinJoint {
    pub fn new(target: Entity, rest_length: f32) -> Self {
        PinJoint {
            target,
            rest_length,
        }
    }
}
