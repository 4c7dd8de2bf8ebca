//! Prize marker and the selectable prize kinds.

use bevy_ecs::prelude::Component;

/// Marker for the single prize entity of the current level.
#[derive(Component, Debug, Clone, Copy)]
pub struct Prize;

/// Which sprite the prize uses. Selected by the UI buttons for the next level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrizeKind {
    #[default]
    Pineapple,
    Candy,
    Chocolate,
}

impl PrizeKind {
    pub fn tex_key(self) -> &'static str {
        match self {
            PrizeKind::Pineapple => "pineapple",
            PrizeKind::Candy => "candy",
            PrizeKind::Chocolate => "chocolate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PrizeKind::Pineapple => "Pineapple",
            PrizeKind::Candy => "Candy",
            PrizeKind::Chocolate => "Chocolate",
        }
    }
}
