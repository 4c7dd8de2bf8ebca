//! Rope constraint solving for vine chains and prize tethers.
//!
//! Both constraints are inequalities: a follower may move freely but never
//! drift farther than `rest_length` from its target. The solver makes a fixed
//! number of passes over all joints each frame so corrections propagate down a
//! chain; chain order within a pass does not matter after a few iterations.
//!
//! When a follower gets clamped, the outward radial part of its velocity is
//! removed so a taut rope does not accumulate speed against its anchor.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::pinjoint::PinJoint;
use crate::components::rigidbody::RigidBody;
use crate::components::tethers::Tethers;

/// Constraint relaxation passes per frame.
pub const SOLVER_ITERATIONS: usize = 4;

/// Clamp `pos` to within `rest` of `anchor`; returns the unit direction away
/// from the anchor when a correction was applied.
fn clamp_to_rope(pos: &mut Vector2, anchor: Vector2, rest: f32) -> Option<Vector2> {
    let delta = *pos - anchor;
    let dist = delta.length();
    if dist <= rest || dist <= f32::EPSILON {
        return None;
    }
    let outward = delta.scale_by(1.0 / dist);
    *pos = anchor + outward.scale_by(rest);
    Some(outward)
}

/// Remove the velocity component pointing away from the anchor.
fn kill_outward_velocity(body: &mut RigidBody, outward: Vector2) {
    let speed_out = body.velocity.dot(outward);
    if speed_out > 0.0 {
        body.velocity -= outward.scale_by(speed_out);
    }
}

/// Keep each vine segment within rope reach of its predecessor.
///
/// Joints whose target entity no longer exists (a cut segment) are removed;
/// the orphaned follower then falls freely.
pub fn solve_pin_joints(
    mut commands: Commands,
    joints: Query<(Entity, &PinJoint)>,
    mut positions: Query<&mut MapPosition>,
    mut bodies: Query<&mut RigidBody>,
) {
    let links: Vec<(Entity, Entity, f32)> = joints
        .iter()
        .map(|(entity, joint)| (entity, joint.target, joint.rest_length))
        .collect();

    for _ in 0..SOLVER_ITERATIONS {
        for &(follower, target, rest) in &links {
            let Ok(anchor) = positions.get(target).map(|p| p.pos) else {
                continue;
            };
            let Ok(mut position) = positions.get_mut(follower) else {
                continue;
            };
            if let Some(outward) = clamp_to_rope(&mut position.pos, anchor, rest) {
                if let Ok(mut body) = bodies.get_mut(follower) {
                    kill_outward_velocity(&mut body, outward);
                }
            }
        }
    }

    // joints pointing at despawned segments no longer constrain anything
    for (entity, joint) in joints.iter() {
        if positions.get(joint.target).is_err() {
            commands.entity(entity).remove::<PinJoint>();
        }
    }
}

/// Keep the prize within rope reach of every live tether link.
///
/// Links whose segment entity is gone are dropped first, so cutting the last
/// chain leaves the prize in free fall.
pub fn solve_tethers(
    mut query: Query<(&mut Tethers, &mut MapPosition, &mut RigidBody)>,
    segments: Query<&MapPosition, Without<Tethers>>,
) {
    for (mut tethers, mut position, mut body) in query.iter_mut() {
        tethers
            .links
            .retain(|link| segments.get(link.segment).is_ok());

        for _ in 0..SOLVER_ITERATIONS {
            for link in tethers.links.iter() {
                let Ok(anchor) = segments.get(link.segment).map(|p| p.pos) else {
                    continue;
                };
                if let Some(outward) = clamp_to_rope(&mut position.pos, anchor, link.rest_length) {
                    kill_outward_velocity(&mut body, outward);
                }
            }
        }
    }
}
