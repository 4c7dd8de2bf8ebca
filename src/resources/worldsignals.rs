//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource provides a world-wide signal map for
//! cross-system communication without entity queries. The game uses it for
//! the `quit_game` flag, the `level` counter, and the per-game `vine_damping`
//! scalar that stiffens vines a little every rebuilt level.

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Resource, Default)]
pub struct WorldSignals {
    /// Floating-point numeric signals addressed by string keys.
    scalars: FxHashMap<String, f32>,
    /// Integer numeric signals addressed by string keys.
    integers: FxHashMap<String, i32>,
    /// Presence-only boolean flags; a key being present means "true".
    flags: FxHashSet<String>,
}

impl WorldSignals {
    /// Set a floating-point signal value.
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f32) {
        self.scalars.insert(key.into(), value);
    }

    /// Get a floating-point signal by key.
    pub fn get_scalar(&self, key: &str) -> Option<f32> {
        self.scalars.get(key).copied()
    }

    /// Set an integer signal value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }

    /// Get an integer signal by key.
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }

    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }

    /// Remove a flag (make it false/absent).
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }

    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        let mut s = WorldSignals::default();
        assert_eq!(s.get_scalar("vine_damping"), None);
        s.set_scalar("vine_damping", 0.3);
        assert_eq!(s.get_scalar("vine_damping"), Some(0.3));
    }

    #[test]
    fn test_integers() {
        let mut s = WorldSignals::default();
        s.set_integer("level", 4);
        assert_eq!(s.get_integer("level"), Some(4));
        assert_eq!(s.get_integer("score"), None);
    }

    #[test]
    fn test_flags() {
        let mut s = WorldSignals::default();
        assert!(!s.has_flag("quit_game"));
        s.set_flag("quit_game");
        assert!(s.has_flag("quit_game"));
        s.clear_flag("quit_game");
        assert!(!s.has_flag("quit_game"));
    }
}
