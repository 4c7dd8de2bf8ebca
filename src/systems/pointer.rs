//! Mouse sampling into the pointer/gesture resource.
//!
//! The only system in the input path that talks to raylib. Everything
//! downstream (cutting, buttons, trail) reads
//! [`PointerState`](crate::resources::pointer::PointerState) and can run in a
//! headless world.

use bevy_ecs::prelude::*;
use raylib::prelude::MouseButton;

use crate::resources::pointer::PointerState;

pub fn update_pointer_state(
    mut pointer: ResMut<PointerState>,
    rl: NonSend<raylib::RaylibHandle>,
) {
    let position = rl.get_mouse_position();
    pointer.just_pressed = false;
    pointer.just_released = false;

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        pointer.begin(position);
    } else if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
        pointer.end();
        pointer.move_to(position);
    } else {
        pointer.move_to(position);
    }
}
