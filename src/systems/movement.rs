use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Integrate forces and velocity into positions.
///
/// Semi-implicit: acceleration first, then damping, then the position step.
/// Frozen bodies are skipped entirely.
pub fn movement(mut query: Query<(&mut MapPosition, &mut RigidBody)>, time: Res<WorldTime>) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }
    for (mut position, mut body) in query.iter_mut() {
        if body.frozen {
            continue;
        }
        let accel = body.total_acceleration();
        body.velocity += accel.scale_by(dt);
        if body.damping > 0.0 {
            let k = 1.0 / (1.0 + body.damping * dt);
            body.velocity = body.velocity.scale_by(k);
        }
        let step = body.velocity.scale_by(dt);
        position.pos = position.pos + step;
    }
}
