//! Time-to-live component for automatic entity despawning.
//!
//! The [`Ttl`] component counts down each frame; when the remaining time
//! reaches zero the entity is despawned. Fire and forget, no callback.

use bevy_ecs::prelude::Component;

/// Despawns the entity after a duration.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ttl {
    /// Remaining time in seconds before despawn.
    pub remaining: f32,
}

impl Ttl {
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }
}
