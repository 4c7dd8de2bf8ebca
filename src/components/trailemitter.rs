//! Pointer trail emitter component.
//!
//! One entity per level follows the pointer and, while a drag gesture is in
//! progress, spawns short-lived droplet sprites scattered around the pointer.
//! See [`crate::systems::trail::trail_emitter_system`].

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone)]
pub struct TrailEmitter {
    /// Texture key of the spawned particles.
    pub tex_key: String,
    /// Emitting only while the pointer is dragging.
    pub active: bool,
    /// Particles spawned per emission event.
    pub particles_per_emission: u32,
    /// Emission frequency. If <= 0, no emissions occur.
    pub emissions_per_second: f32,
    /// Direction arc in degrees, 0 pointing up. Stored as (min, max).
    pub arc_degrees: (f32, f32),
    /// Speed range for particles. Stored as (min, max).
    pub speed_range: (f32, f32),
    /// Lifetime range for particles. Stored as (min, max).
    pub ttl_range: (f32, f32),
    /// Time accumulated since the last emission.
    pub time_since_emit: f32,
}

impl Default for TrailEmitter {
    fn default() -> Self {
        Self {
            tex_key: "droplet".into(),
            active: false,
            particles_per_emission: 2,
            emissions_per_second: 30.0,
            arc_degrees: (0.0, 360.0),
            speed_range: (20.0, 60.0),
            ttl_range: (0.2, 0.5),
            time_since_emit: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive() {
        let e = TrailEmitter::default();
        assert!(!e.active);
        assert_eq!(e.time_since_emit, 0.0);
        assert!(e.emissions_per_second > 0.0);
        assert!(e.ttl_range.0 <= e.ttl_range.1);
        assert!(e.speed_range.0 <= e.speed_range.1);
    }
}
