//! Fade-out component.
//!
//! Ramps the entity's [`Tint`](super::tint::Tint) alpha from opaque to fully
//! transparent over `duration` seconds. Purely visual: pair it with a
//! [`Ttl`](super::ttl::Ttl) of the same duration to also remove the entity.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy)]
pub struct FadeOut {
    pub duration: f32,
    pub remaining: f32,
}

impl FadeOut {
    pub fn new(seconds: f32) -> Self {
        FadeOut {
            duration: seconds,
            remaining: seconds,
        }
    }

    /// Alpha byte for the current remaining time.
    pub fn alpha(&self) -> u8 {
        if self.duration <= 0.0 {
            return 0;
        }
        let t = (self.remaining / self.duration).clamp(0.0, 1.0);
        (t * 255.0) as u8
    }
}
