//! Texture storage resource.
//!
//! Owns the textures generated at setup, keyed by string IDs. The render
//! system resolves [`Sprite`](crate::components::sprite::Sprite) texture
//! keys against this store.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Loaded textures keyed by string IDs.
#[derive(Resource)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Insert a texture under a key, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    /// Look up a texture by key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }

    /// Whether a texture exists under the given key.
    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.map.contains_key(key.as_ref())
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
