//! Vine chain tags.
//!
//! A chain is a [`VineAnchor`] plus an ordered run of [`VineSegment`] entities
//! joined by [`PinJoint`](super::pinjoint::PinJoint)s. All segments of one
//! chain share a `chain` id; cutting any of them removes the whole chain.

use bevy_ecs::prelude::Component;

/// One rigid segment of a vine chain.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VineSegment {
    /// Chain id shared by every segment of the same vine.
    pub chain: u32,
    /// Position along the chain, 0 at the anchor end.
    pub index: u32,
}

/// Static holder a chain hangs from.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VineAnchor {
    pub chain: u32,
}
