//! Timer expiration events.
//!
//! When a [`Timer`](crate::components::timer::Timer) component reaches its
//! duration, a [`TimerEvent`] is triggered and the timer entity is despawned.
//! The only timer the game schedules is the level transition.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::gamestate::{GameStates, NextGameState};

/// Event emitted when a timer expires.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TimerEvent {
    /// The entity whose timer expired.
    pub entity: Entity,
    /// The signal name configured on the timer.
    pub signal: String,
}

/// Observer: the `"next_level"` timer requests a return to `Playing`, which
/// tears down the old level and builds the new one via the state hooks.
pub fn observe_timer(trigger: On<TimerEvent>, mut next_state: ResMut<NextGameState>) {
    match trigger.event().signal.as_str() {
        "next_level" => {
            next_state.set(GameStates::Playing);
        }
        other => {
            debug!("Unhandled timer signal {:?}", other);
        }
    }
}
