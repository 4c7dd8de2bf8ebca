//! Font storage keyed by name.
//!
//! Non-send for the same reason as the texture store. Button rendering falls
//! back to raylib's built-in font when a key is missing.

use raylib::prelude::Font;
use rustc_hash::FxHashMap;

pub struct FontStore {
    map: FxHashMap<String, Font>,
}

impl FontStore {
    pub fn new() -> Self {
        FontStore {
            map: FxHashMap::default(),
        }
    }

    pub fn add(&mut self, key: impl Into<String>, font: Font) {
        self.map.insert(key.into(), font);
    }

    pub fn get(&self, key: &str) -> Option<&Font> {
        self.map.get(key)
    }
}

impl Default for FontStore {
    fn default() -> Self {
        Self::new()
    }
}
