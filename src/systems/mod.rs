//! ECS systems.
//!
//! Submodules overview:
//! - [`audio`] – audio thread plus the bridge systems on the ECS side
//! - [`buttons`] – clicks on the UI buttons
//! - [`collision`] – AABB pair detection filtered by category masks
//! - [`crocodile`] – mouth open/close state machine
//! - [`fadeout`] – drives tint alpha for fading entities
//! - [`gamestate`] – pending state checks and run conditions
//! - [`input`] – keyboard shortcuts (quit, debug overlay)
//! - [`joints`] – rope constraints for vine chains and prize tethers
//! - [`movement`] – force/velocity integration into positions
//! - [`pointer`] – mouse sampling into the pointer/gesture resource
//! - [`render`] – sprite, UI, and debug drawing
//! - [`slicing`] – vine cut detection along the pointer sweep
//! - [`time`] – world time update
//! - [`timer`] – countdown timers firing [`TimerEvent`](crate::events::timer::TimerEvent)
//! - [`trail`] – pointer trail particles
//! - [`ttl`] – time-to-live despawning

pub mod audio;
pub mod buttons;
pub mod collision;
pub mod crocodile;
pub mod fadeout;
pub mod gamestate;
pub mod input;
pub mod joints;
pub mod movement;
pub mod pointer;
pub mod render;
pub mod slicing;
pub mod time;
pub mod timer;
pub mod trail;
pub mod ttl;
