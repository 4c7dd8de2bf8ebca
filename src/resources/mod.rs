//! ECS resources.
//!
//! Submodules overview:
//! - [`audio`] – bridge between the ECS world and the audio thread
//! - [`camera2d`] – shared 2D camera parameters
//! - [`debugmode`] – marker resource enabling debug overlays
//! - [`fontstore`] – loaded fonts keyed by name (main thread only)
//! - [`gameconfig`] – settings loaded from an INI file
//! - [`gamestate`] – high-level game state and pending transitions
//! - [`pointer`] – per-frame pointer/gesture state
//! - [`prizechoice`] – which prize sprite the next level uses
//! - [`screensize`] – screen dimensions in pixels
//! - [`systemsstore`] – registry of systems addressable by name
//! - [`texturestore`] – loaded textures keyed by name (main thread only)
//! - [`vinelayout`] – vine chain layout loaded from a JSON data file
//! - [`worldsignals`] – global signal map for cross-system communication
//! - [`worldtime`] – elapsed/delta time for the current frame

pub mod audio;
pub mod camera2d;
pub mod debugmode;
pub mod fontstore;
pub mod gameconfig;
pub mod gamestate;
pub mod pointer;
pub mod prizechoice;
pub mod screensize;
pub mod systemsstore;
pub mod texturestore;
pub mod vinelayout;
pub mod worldsignals;
pub mod worldtime;
