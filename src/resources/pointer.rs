//! Per-frame pointer/gesture state.
//!
//! Filled from the raylib mouse by
//! [`crate::systems::pointer::update_pointer_state`] and consumed by the vine
//! cutting, button, and trail systems. Keeping the state in a resource keeps
//! those consumers free of any windowing dependency.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

#[derive(Resource, Debug, Clone, Copy)]
pub struct PointerState {
    /// Pointer position this frame.
    pub position: Vector2,
    /// Pointer position the previous frame. The cut test sweeps the segment
    /// `previous` -> `position`.
    pub previous: Vector2,
    /// A drag gesture is in progress.
    pub dragging: bool,
    /// The gesture began this frame.
    pub just_pressed: bool,
    /// The gesture ended this frame.
    pub just_released: bool,
    /// A chain was already cut during the current gesture.
    pub chains_cut: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vector2::zero(),
            previous: Vector2::zero(),
            dragging: false,
            just_pressed: false,
            just_released: false,
            chains_cut: false,
        }
    }
}

impl PointerState {
    /// Begin a gesture; re-arms the per-gesture cut flag.
    pub fn begin(&mut self, at: Vector2) {
        self.position = at;
        self.previous = at;
        self.dragging = true;
        self.just_pressed = true;
        self.chains_cut = false;
    }

    /// Advance the pointer, keeping the previous sample for the sweep test.
    pub fn move_to(&mut self, at: Vector2) {
        self.previous = self.position;
        self.position = at;
    }

    /// End the gesture.
    pub fn end(&mut self) {
        self.dragging = false;
        self.just_released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_rearms_cut_flag() {
        let mut p = PointerState::default();
        p.chains_cut = true;
        p.begin(Vector2 { x: 5.0, y: 6.0 });
        assert!(!p.chains_cut);
        assert!(p.dragging);
        assert!(p.just_pressed);
        assert_eq!(p.previous.x, 5.0);
        assert_eq!(p.position.x, 5.0);
    }

    #[test]
    fn test_move_keeps_previous_sample() {
        let mut p = PointerState::default();
        p.begin(Vector2 { x: 0.0, y: 0.0 });
        p.move_to(Vector2 { x: 10.0, y: 0.0 });
        assert_eq!(p.previous.x, 0.0);
        assert_eq!(p.position.x, 10.0);
        p.move_to(Vector2 { x: 20.0, y: 0.0 });
        assert_eq!(p.previous.x, 10.0);
        assert_eq!(p.position.x, 20.0);
    }

    #[test]
    fn test_end_stops_dragging() {
        let mut p = PointerState::default();
        p.begin(Vector2::zero());
        p.end();
        assert!(!p.dragging);
        assert!(p.just_released);
    }
}
