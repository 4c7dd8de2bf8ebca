//! Texture storage keyed by asset name.
//!
//! Lives as a non-send resource: raylib textures are GPU handles owned by the
//! main thread. A sprite whose key is missing from the store is simply not
//! drawn, so a failed texture load degrades to an invisible entity.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        TextureStore {
            map: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
