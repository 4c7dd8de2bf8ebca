//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup; missing files or keys are not an error.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//!
//! [game]
//! cut_multiple_chains = false
//! vines_file = ./assets/vines.json
//! transition_delay = 1.0
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_CUT_MULTIPLE_CHAINS: bool = false;
const DEFAULT_TRANSITION_DELAY: f32 = 1.0;
const DEFAULT_VINES_FILE: &str = "./assets/vines.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Whether one drag gesture may cut more than one chain.
    pub cut_multiple_chains: bool,
    /// Path to the vine layout JSON file.
    pub vines_file: PathBuf,
    /// Seconds between level end and the next level.
    pub transition_delay: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            cut_multiple_chains: DEFAULT_CUT_MULTIPLE_CHAINS,
            vines_file: PathBuf::from(DEFAULT_VINES_FILE),
            transition_delay: DEFAULT_TRANSITION_DELAY,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [game] section
        if let Some(multi) = config.getbool("game", "cut_multiple_chains").ok().flatten() {
            self.cut_multiple_chains = multi;
        }
        if let Some(path) = config.get("game", "vines_file") {
            self.vines_file = PathBuf::from(path);
        }
        if let Some(delay) = config.getfloat("game", "transition_delay").ok().flatten() {
            self.transition_delay = delay as f32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, cut_multiple_chains={}, vines={:?}, delay={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.cut_multiple_chains,
            self.vines_file,
            self.transition_delay
        );

        Ok(())
    }
}
