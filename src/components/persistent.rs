//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are not despawned when a level
//! is torn down. Use it for observers, registered systems, and anything else
//! that must outlive a level transition.

use bevy_ecs::prelude::Component;

/// Tag component for entities that survive level teardown.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
