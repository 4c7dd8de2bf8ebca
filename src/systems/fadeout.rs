//! Fade-out system.
//!
//! Counts [`FadeOut`](crate::components::fadeout::FadeOut) components down and
//! writes the corresponding alpha into the entity's
//! [`Tint`](crate::components::tint::Tint), inserting one when missing. The
//! component is purely visual; pairing it with a
//! [`Ttl`](crate::components::ttl::Ttl) removes the entity when the fade ends.

use bevy_ecs::prelude::*;

use crate::components::fadeout::FadeOut;
use crate::components::tint::Tint;
use crate::resources::worldtime::WorldTime;

pub fn fade_out_system(
    time: Res<WorldTime>,
    mut query: Query<(Entity, &mut FadeOut, Option<&mut Tint>)>,
    mut commands: Commands,
) {
    let dt = time.delta;
    for (entity, mut fade, tint) in query.iter_mut() {
        fade.remaining = (fade.remaining - dt).max(0.0);
        let alpha = fade.alpha();
        match tint {
            Some(mut tint) => tint.color.a = alpha,
            None => {
                commands.entity(entity).insert(Tint::new(255, 255, 255, alpha));
            }
        }
    }
}
