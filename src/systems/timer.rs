//! Countdown timer system.
//!
//! Advances [`Timer`](crate::components::timer::Timer) components and, on
//! expiry, triggers a [`TimerEvent`](crate::events::timer::TimerEvent) with
//! the timer's signal and despawns the timer entity. Each timer fires exactly
//! once.

use bevy_ecs::prelude::*;

use crate::components::timer::Timer;
use crate::events::timer::TimerEvent;
use crate::resources::worldtime::WorldTime;

pub fn update_timers(
    time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Timer)>,
    mut commands: Commands,
) {
    let dt = time.delta;
    for (entity, mut timer) in query.iter_mut() {
        timer.elapsed += dt;
        if timer.finished() {
            commands.trigger(TimerEvent {
                entity,
                signal: timer.signal.clone(),
            });
            commands.entity(entity).try_despawn();
        }
    }
}
