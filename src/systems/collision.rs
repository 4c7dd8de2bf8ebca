use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::events::collision::CollisionEvent;

/// Detect overlapping collider pairs and trigger [`CollisionEvent`]s.
///
/// A pair is only reported when at least one side's contact mask selects the
/// other side's category. The game wires a single pair this way: the
/// crocodile's mouth region against the prize.
pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider)>,
    mut commands: Commands,
) {
    let mut pairs: Vec<(Entity, Entity)> = Vec::new();

    for [(entity_a, position_a, collider_a), (entity_b, position_b, collider_b)] in
        query.iter_combinations()
    {
        if !(collider_a.wants_contact_with(collider_b)
            || collider_b.wants_contact_with(collider_a))
        {
            continue;
        }
        if collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            pairs.push((entity_a, entity_b));
        }
    }

    for (a, b) in pairs {
        commands.trigger(CollisionEvent { a, b });
    }
}
