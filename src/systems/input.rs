//! Keyboard shortcuts.
//!
//! The game is pointer-driven; the keyboard only carries two shortcuts:
//! Escape requests the `Quitting` state and F11 toggles the debug overlay.

use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;

use crate::resources::debugmode::DebugMode;
use crate::resources::gamestate::{GameStates, NextGameState};

pub fn keyboard_system(
    rl: NonSend<raylib::RaylibHandle>,
    mut next_state: ResMut<NextGameState>,
    debug: Option<Res<DebugMode>>,
    mut commands: Commands,
) {
    if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
        next_state.set(GameStates::Quitting);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_F11) {
        if debug.is_some() {
            commands.remove_resource::<DebugMode>();
        } else {
            commands.insert_resource(DebugMode {});
        }
    }
}
