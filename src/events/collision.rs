//! Collision event types and the prize-contact observer.
//!
//! The collision detector emits [`CollisionEvent`] whenever two entities with
//! compatible colliders overlap. The only contact pair the game configures is
//! crocodile mouth vs prize, handled by [`observe_prize_contact`].

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::crocodile::Crocodile;
use crate::components::prize::Prize;
use crate::events::levelend::{LevelEndEvent, LevelOutcome};

/// Event fired when two entities with BoxCollider overlap and at least one
/// side's contact mask selects the other.
///
/// No ordering guarantees are provided for `a` and `b`.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}

/// Global observer: the crocodile touching the prize ends the level.
///
/// Any pair that is not (prize, crocodile) is ignored. The level-end guard
/// itself lives in [`crate::events::levelend::observe_level_end`]; this
/// observer only classifies the contact.
pub fn observe_prize_contact(
    trigger: On<CollisionEvent>,
    mut commands: Commands,
    prizes: Query<(), With<Prize>>,
    crocodiles: Query<(), With<Crocodile>>,
) {
    let a = trigger.event().a;
    let b = trigger.event().b;

    let eaten = (prizes.get(a).is_ok() && crocodiles.get(b).is_ok())
        || (prizes.get(b).is_ok() && crocodiles.get(a).is_ok());
    if eaten {
        commands.trigger(LevelEndEvent {
            outcome: LevelOutcome::Eaten,
        });
    }
}
