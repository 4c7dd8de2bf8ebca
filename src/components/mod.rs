//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned collider with collision category bits
//! - [`button`] – screen-space UI buttons (new game / prize selection)
//! - [`crocodile`] – crocodile mouth state machine
//! - [`fadeout`] – ramps sprite alpha down over a duration
//! - [`group`] – tag component for grouping entities by name
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`persistent`] – marker for entities that survive level transitions
//! - [`pinjoint`] – rope-style attachment of a vine segment to its predecessor
//! - [`prize`] – prize marker and the selectable prize kinds
//! - [`rigidbody`] – kinematic body storing velocity and named forces
//! - [`sprite`] – 2D sprite rendering component
//! - [`tethers`] – prize-side attachment to the last segment of each chain
//! - [`timer`] – countdown that fires a named signal when finished
//! - [`tint`] – color modulation for rendering
//! - [`trailemitter`] – pointer trail particle emitter
//! - [`ttl`] – time-to-live for automatic despawn
//! - [`vine`] – vine chain segment and anchor tags
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod boxcollider;
pub mod button;
pub mod crocodile;
pub mod fadeout;
pub mod group;
pub mod mapposition;
pub mod persistent;
pub mod pinjoint;
pub mod prize;
pub mod rigidbody;
pub mod sprite;
pub mod tethers;
pub mod timer;
pub mod tint;
pub mod trailemitter;
pub mod ttl;
pub mod vine;
pub mod zindex;
