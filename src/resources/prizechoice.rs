//! Which prize sprite the next level uses.
//!
//! Set by the prize-selection buttons, read by `game::enter_play` when the
//! level is built.

use bevy_ecs::prelude::Resource;

use crate::components::prize::PrizeKind;

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PrizeChoice {
    pub kind: PrizeKind,
}
