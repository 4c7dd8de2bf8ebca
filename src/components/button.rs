//! Screen-space UI buttons.
//!
//! Buttons live outside the camera transform: their rectangle is in window
//! coordinates and the renderer draws them after the world pass. A click
//! inside the rectangle performs the button's [`ButtonAction`].

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Rectangle, Vector2};

use crate::components::prize::PrizeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Restart with the currently selected prize.
    NewGame,
    /// Select a prize for the next level and restart.
    SelectPrize(PrizeKind),
}

#[derive(Component, Debug, Clone)]
pub struct UiButton {
    pub rect: Rectangle,
    pub label: String,
    pub font: String,
    pub font_size: f32,
    pub fill: Color,
    pub action: ButtonAction,
}

impl UiButton {
    pub fn new(rect: Rectangle, label: impl Into<String>, action: ButtonAction) -> Self {
        UiButton {
            rect,
            label: label.into(),
            font: "button".into(),
            font_size: 24.0,
            fill: Color::new(178, 34, 34, 220),
            action,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.rect.x
            && point.x <= self.rect.x + self.rect.width
            && point.y >= self.rect.y
            && point.y <= self.rect.y + self.rect.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> UiButton {
        UiButton::new(
            Rectangle {
                x: 10.0,
                y: 20.0,
                width: 100.0,
                height: 40.0,
            },
            "New game",
            ButtonAction::NewGame,
        )
    }

    #[test]
    fn test_contains_inside() {
        assert!(button().contains(Vector2 { x: 50.0, y: 40.0 }));
    }

    #[test]
    fn test_contains_edges() {
        let b = button();
        assert!(b.contains(Vector2 { x: 10.0, y: 20.0 }));
        assert!(b.contains(Vector2 { x: 110.0, y: 60.0 }));
    }

    #[test]
    fn test_contains_outside() {
        let b = button();
        assert!(!b.contains(Vector2 { x: 9.0, y: 40.0 }));
        assert!(!b.contains(Vector2 { x: 50.0, y: 61.0 }));
    }

    #[test]
    fn test_select_action_carries_kind() {
        let b = UiButton::new(
            Rectangle {
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height: 10.0,
            },
            "Candy",
            ButtonAction::SelectPrize(PrizeKind::Candy),
        );
        assert_eq!(b.action, ButtonAction::SelectPrize(PrizeKind::Candy));
    }
}
