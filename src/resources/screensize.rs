//! Screen size resource.
//!
//! Stores the window dimensions in pixels. Level construction scales the
//! relative vine anchors and scenery to this size.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
