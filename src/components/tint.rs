//! Color tint component for rendering sprites.
//!
//! When attached to an entity with a [`Sprite`](crate::components::sprite::Sprite),
//! the tint color replaces `Color::WHITE` in draw calls. The fade-out system
//! drives the alpha channel of this component.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Color modulation for rendering.
#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    /// Create a new Tint with the specified RGBA values.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::new(r, g, b, a),
        }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let t = Tint::new(100, 150, 200, 255);
        assert_eq!(t.color.r, 100);
        assert_eq!(t.color.g, 150);
        assert_eq!(t.color.b, 200);
        assert_eq!(t.color.a, 255);
    }

    #[test]
    fn test_default_is_opaque_white() {
        let t = Tint::default();
        assert_eq!(t.color.r, 255);
        assert_eq!(t.color.g, 255);
        assert_eq!(t.color.b, 255);
        assert_eq!(t.color.a, 255);
    }
}
