//! Kinematic body component with named acceleration forces.
//!
//! The [`RigidBody`] component stores velocity and named acceleration forces
//! for an entity. The movement system sums the forces, integrates velocity and
//! position, and applies damping. The `frozen` flag disables all movement for
//! an entity whose position is controlled elsewhere (e.g. the prize while it
//! is being eaten).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

/// Downward gravity, world units per second squared.
pub const GRAVITY: Vector2 = Vector2 { x: 0.0, y: 980.0 };

/// Kinematic body storing velocity and named acceleration forces.
///
/// Intended to be consumed by the movement system to update
/// [`MapPosition`](super::mapposition::MapPosition).
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
    /// Named acceleration forces. The total acceleration is their sum.
    pub forces: FxHashMap<String, Vector2>,
    /// Velocity damping factor. Applied as: velocity /= (1 + damping * delta).
    pub damping: f32,
    /// When true, the movement system skips this entity entirely.
    pub frozen: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity and no forces.
    pub fn new() -> Self {
        Self {
            velocity: Vector2::zero(),
            forces: FxHashMap::default(),
            damping: 0.0,
            frozen: false,
        }
    }

    /// Create a RigidBody already under gravity.
    pub fn with_gravity() -> Self {
        let mut body = Self::new();
        body.add_force("gravity", GRAVITY);
        body
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Add or update a named acceleration force.
    pub fn add_force(&mut self, name: impl Into<String>, value: Vector2) {
        self.forces.insert(name.into(), value);
    }

    /// Remove a named force entirely.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn remove_force(&mut self, name: &str) {
        self.forces.remove(name);
    }

    /// Total acceleration from all forces.
    pub fn total_acceleration(&self) -> Vector2 {
        let mut total = Vector2::zero();
        for force in self.forces.values() {
            total += *force;
        }
        total
    }

    /// Freeze the body, preventing the movement system from updating it.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }
}
